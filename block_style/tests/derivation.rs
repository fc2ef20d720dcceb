use bevy::math::DVec3;
use block_style::attributes::{shuffle_attributes, trajectory_flips, Rgb8};
use block_style::data::{BlockData, Seed, TxPayload};
use block_style::StyleError;

const GOLDEN_HASH: &str = "0xabcdef0123456789fedcba98765432100123456789abcdef0123456789abcdef";

fn block(hash: &str, txs: usize) -> BlockData {
    BlockData::new(hash, vec![TxPayload::default(); txs])
}

#[test]
fn golden_block_matches_recorded_vector() {
    let attrs = shuffle_attributes(&block(GOLDEN_HASH, 8)).unwrap();

    assert_eq!(attrs.seed, Seed(0xab_cdef_0123_4567));
    assert_eq!(attrs.seed.generator_key(), 19_088_744);
    assert_eq!(attrs.color, Rgb8 { r: 47, g: 51, b: 2 });
    assert_eq!(attrs.color.hex(), "#2F3302");
    assert_eq!(attrs.scale, 0.005266643024515361);

    let expected = [
        DVec3::new(0.7565718842670321, 0.874547574436292, 0.5262381591601297),
        DVec3::new(-0.12742009141948074, -1.3893002324039117, -0.8713758671656251),
        DVec3::new(0.9059247990371659, -1.0640644709346816, -0.32934456516522914),
        DVec3::new(-0.327032680506818, 1.4103315265383571, -1.112640754203312),
        DVec3::new(0.8536317371763289, -1.0663561146939173, 0.7013362452853471),
        DVec3::new(-0.8470462375553325, -0.6095699672587216, -0.059506990131922066),
        DVec3::new(0.909296375582926, 0.11230278003495187, -0.0575761457439512),
        DVec3::new(-1.3668148191645741, -0.9383516034577042, -0.7748234641039744),
    ];
    assert_eq!(attrs.trajectories, expected);
    assert_eq!(attrs.draws_consumed(), 4 + 3 * 8);
}

#[test]
fn same_block_derives_identically() {
    let a = shuffle_attributes(&block(GOLDEN_HASH, 12)).unwrap();
    let b = shuffle_attributes(&block(GOLDEN_HASH, 12)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn only_hash_prefix_and_tx_count_matter() {
    let mut a = block("00000000000000ff0000", 3);
    let mut b = block("00000000000000ffffff", 3);
    a.transactions[1].value_eth = 12.0;
    b.number = Some(99);
    assert_eq!(
        shuffle_attributes(&a).unwrap(),
        shuffle_attributes(&b).unwrap()
    );
}

#[test]
fn tx_count_changes_only_trajectories() {
    let few = shuffle_attributes(&block(GOLDEN_HASH, 2)).unwrap();
    let many = shuffle_attributes(&block(GOLDEN_HASH, 8)).unwrap();

    assert_eq!(few.color, many.color);
    assert_eq!(few.scale, many.scale);
    assert_eq!(few.trajectories.len(), 2);
    assert_eq!(many.trajectories.len(), 8);
    // The shared prefix of the stream yields the same leading trajectories.
    assert_eq!(few.trajectories[..], many.trajectories[..2]);
}

#[test]
fn every_derivation_starts_a_fresh_stream() {
    let first = shuffle_attributes(&block(GOLDEN_HASH, 5)).unwrap();
    let _other = shuffle_attributes(&block("3f1a8b2c9d4e5f60", 40)).unwrap();
    let again = shuffle_attributes(&block(GOLDEN_HASH, 5)).unwrap();
    assert_eq!(first, again);
}

#[test]
fn prefixed_and_bare_hashes_key_different_streams() {
    // "0x" takes two of the sixteen seed characters.
    let bare = shuffle_attributes(&block("abcdef0123456789fedcba98", 2)).unwrap();
    let prefixed = shuffle_attributes(&block("0xabcdef0123456789fedcba98", 2)).unwrap();
    let short = shuffle_attributes(&block("abcdef01234567", 2)).unwrap_err();

    assert_eq!(bare.seed, Seed(0xabcd_ef01_2345_6789));
    assert_eq!(prefixed.seed, Seed(0xab_cdef_0123_4567));
    assert_ne!(bare.color, prefixed.color);
    assert_eq!(bare.color.hex(), "#E35475");
    assert_eq!(prefixed.color.hex(), "#2F3302");
    assert!(matches!(short, StyleError::MalformedHash { .. }));
}

#[test]
fn seed_from_zero_padded_hash() {
    let hash = "00000000000000ff";
    assert_eq!(Seed::from_hash(&format!("{hash}0123")).unwrap(), Seed(255));
    assert_eq!(Seed::from_hash("0x000000000000ff0123").unwrap(), Seed(255));
    assert!(matches!(
        shuffle_attributes(&block("00000000000000f", 1)),
        Err(StyleError::MalformedHash { .. })
    ));
}

#[test]
fn trajectory_sign_truth_table() {
    // index: (x, y, z) sign
    let table: [(usize, [f64; 3]); 8] = [
        (0, [1.0, 1.0, 1.0]),
        (1, [-1.0, -1.0, -1.0]),
        (2, [1.0, -1.0, -1.0]),
        (3, [-1.0, 1.0, -1.0]),
        (4, [1.0, -1.0, 1.0]),
        (5, [-1.0, -1.0, -1.0]),
        (6, [1.0, 1.0, -1.0]),
        (7, [-1.0, -1.0, -1.0]),
    ];
    for (i, signs) in table {
        assert_eq!(trajectory_flips(i), DVec3::from_array(signs), "index {i}");
    }

    let attrs = shuffle_attributes(&block(GOLDEN_HASH, 8)).unwrap();
    for (i, t) in attrs.trajectories.iter().enumerate() {
        let flips = trajectory_flips(i);
        assert_eq!(t.x.signum(), flips.x, "x sign of trajectory {i}");
        assert_eq!(t.y.signum(), flips.y, "y sign of trajectory {i}");
        assert_eq!(t.z.signum(), flips.z, "z sign of trajectory {i}");
    }
}
