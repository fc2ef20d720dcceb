//! NFT metadata attributes reported to the host at capture time.

use serde::{Deserialize, Serialize};

use crate::attributes::DerivedAttributes;
use crate::config::StyleOptions;
use crate::star::StarInstance;

/// A trait value: numbers and text serialize untagged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display_type: Option<String>,
    pub trait_type: String,
    pub value: AttributeValue,
}

impl MetadataAttribute {
    pub fn number(trait_type: impl Into<String>, value: f64) -> Self {
        Self {
            display_type: Some("number".to_string()),
            trait_type: trait_type.into(),
            value: AttributeValue::Number(value),
        }
    }

    pub fn text(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_type: None,
            trait_type: trait_type.into(),
            value: AttributeValue::Text(value.into()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub attributes: Vec<MetadataAttribute>,
}

impl NftMetadata {
    /// Attributes of one committed derivation pass.
    pub fn describe(attributes: &DerivedAttributes, stars: &[StarInstance]) -> Self {
        let mut list = vec![
            MetadataAttribute::text("Color", attributes.color.hex()),
            MetadataAttribute::number("Scale", attributes.scale),
            MetadataAttribute::number("Trajectories", attributes.trajectories.len() as f64),
            MetadataAttribute::text("Seed", attributes.seed.to_string()),
        ];
        list.extend(stars.iter().enumerate().map(|(i, star)| {
            MetadataAttribute::number(
                format!("Star {} Points", i + 1),
                star.network.topology.n() as f64,
            )
        }));
        Self { attributes: list }
    }

    pub fn get(&self, trait_type: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|a| a.trait_type == trait_type)
            .map(|a| &a.value)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Descriptive metadata a style ships with, plus its preset options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub creator_name: String,
    pub options: StyleOptions,
}

impl Default for StyleMetadata {
    fn default() -> Self {
        Self {
            name: "Stellate".to_string(),
            description: "Skip-polygon rosettes extruded into glowing tubes, \
                          colored and scattered by the block they are minted from."
                .to_string(),
            image: String::new(),
            creator_name: String::new(),
            options: StyleOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_type_is_omitted_for_text() {
        let json = serde_json::to_value(MetadataAttribute::text("Color", "#E35475")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "trait_type": "Color", "value": "#E35475" })
        );
    }

    #[test]
    fn numbers_carry_display_type() {
        let json = serde_json::to_value(MetadataAttribute::number("Scale", 0.5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "display_type": "number", "trait_type": "Scale", "value": 0.5 })
        );
    }

    #[test]
    fn style_metadata_exposes_preset_options() {
        let json = serde_json::to_value(StyleMetadata::default()).unwrap();
        assert_eq!(json["options"]["mod1"], serde_json::json!(0.4f32));
        assert_eq!(json["options"]["color1"], "#fff000");
        assert_eq!(json["options"]["topology"], "seeded");
    }
}
