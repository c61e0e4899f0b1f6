//! Synthesis settings.

use serde::{Deserialize, Serialize};

use crate::error::TextureError;

/// How a reconstructed `(dx, dy, 1)` gradient vector is written to the
/// normal map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalEncoding {
    /// Encode `dx` and `dy` directly and write a constant `B = 255`.
    /// The stored vectors are not unit length.
    #[default]
    Unnormalized,
    /// Normalize `(dx, dy, 1)` first and encode all three components.
    Normalized,
}

/// Tunables shared by every generation call.
///
/// Every field has a default, so a partial document such as
/// `{"normal_strength": 3.0}` deserializes cleanly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Gradient scale for the normal map of every archetype except fabric.
    pub normal_strength: f64,
    /// Gradient scale for fabric; kept lower so the weave does not read as
    /// exaggerated bumps.
    pub fabric_normal_strength: f64,
    pub normal_encoding: NormalEncoding,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            normal_strength: 2.0,
            fabric_normal_strength: 1.5,
            normal_encoding: NormalEncoding::Unnormalized,
        }
    }
}

impl SynthConfig {
    /// Reject non-finite or negative strengths.
    pub fn validate(&self) -> Result<(), TextureError> {
        check_strength("normal_strength", self.normal_strength)?;
        check_strength("fabric_normal_strength", self.fabric_normal_strength)
    }
}

fn check_strength(field: &'static str, value: f64) -> Result<(), TextureError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TextureError::InvalidConfig { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_fill_defaults() {
        let config: SynthConfig =
            serde_json::from_str(r#"{"normal_strength": 3.0, "normal_encoding": "normalized"}"#)
                .unwrap();
        assert_eq!(config.normal_strength, 3.0);
        assert_eq!(config.fabric_normal_strength, 1.5);
        assert_eq!(config.normal_encoding, NormalEncoding::Normalized);
        config.validate().unwrap();
    }

    #[test]
    fn json_round_trip() {
        let config = SynthConfig::default();
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<SynthConfig>(&text).unwrap(), config);
    }

    #[test]
    fn rejects_bad_strengths() {
        let config = SynthConfig {
            fabric_normal_strength: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TextureError::InvalidConfig {
                field: "fabric_normal_strength",
                ..
            })
        ));
        let config = SynthConfig {
            normal_strength: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
