//! Skip-polygon topology: vertex count, skip triple, and the closed walk over them.

use std::f32::consts::TAU;

use bevy::math::Vec2;

use crate::error::{StyleError, StyleResult};
use crate::rng::ShuffleBag;

pub const MIN_VERTICES: usize = 5;
pub const MAX_VERTICES: usize = 20;
/// Radius of the circle the polygon vertices sit on.
pub const STAR_RADIUS: f32 = 800.0;

/// Vertex count, skip triple and the polygon vertices they index into.
/// `n % skip[2] != 0` always holds.
#[derive(Clone, Debug, PartialEq)]
pub struct StarTopology {
    n: usize,
    skip: [usize; 3],
    vertices: Vec<Vec2>,
}

impl StarTopology {
    /// Validate an explicit vertex count and skip triple.
    pub fn new(n: usize, skip: [usize; 3]) -> StyleResult<Self> {
        let invalid = |reason| StyleError::InvalidTopology { n, skip, reason };
        if !(MIN_VERTICES..=MAX_VERTICES).contains(&n) {
            return Err(invalid("vertex count outside 5..=20"));
        }
        if skip.iter().any(|&s| s == 0 || s >= n) {
            return Err(invalid("skips must lie in 1..n"));
        }
        if n % skip[2] == 0 {
            return Err(invalid("third skip divides the vertex count"));
        }
        Ok(Self::from_parts(n, skip))
    }

    /// Draw a topology: one draw for `n`, then three per skip attempt until
    /// the third skip does not divide `n`.
    pub fn generate(bag: &mut ShuffleBag) -> Self {
        let n = bag.next_index(MIN_VERTICES, MAX_VERTICES - MIN_VERTICES + 1);
        let skip = loop {
            let skip = [
                bag.next_index(1, n - 1),
                bag.next_index(1, n - 1),
                bag.next_index(1, n - 1),
            ];
            if n % skip[2] != 0 {
                break skip;
            }
        };
        Self::from_parts(n, skip)
    }

    fn from_parts(n: usize, skip: [usize; 3]) -> Self {
        let vertices = (0..n)
            .map(|i| {
                let ang = TAU * i as f32 / n as f32;
                Vec2::new(STAR_RADIUS * ang.cos(), STAR_RADIUS * ang.sin())
            })
            .collect();
        Self { n, skip, vertices }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn skip(&self) -> [usize; 3] {
        self.skip
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Index quadruples of the closed walk, starting and ending at vertex 0.
    pub fn walk(&self) -> StyleResult<Vec<[usize; 4]>> {
        skip_walk(self.n, self.skip, self.n)
    }
}

/// Walk from vertex 0: each step emits `[i, i+s0, i+s1, i+s2]` (mod n) and
/// moves to `i+s1`, stopping when it lands on 0 again. More than `max_steps`
/// steps is a degenerate topology.
pub fn skip_walk(n: usize, skip: [usize; 3], max_steps: usize) -> StyleResult<Vec<[usize; 4]>> {
    if n == 0 {
        return Err(StyleError::InvalidTopology {
            n,
            skip,
            reason: "no vertices to walk",
        });
    }
    let mut steps = Vec::new();
    let mut i1 = 0;
    loop {
        if steps.len() >= max_steps {
            return Err(StyleError::DegenerateTopology { n, skip });
        }
        let quad = [i1, (i1 + skip[0]) % n, (i1 + skip[1]) % n, (i1 + skip[2]) % n];
        steps.push(quad);
        i1 = quad[2];
        if i1 == 0 {
            return Ok(steps);
        }
    }
}
