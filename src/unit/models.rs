use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One literal suffix of a unit. A raw literal value converts to the unit's
/// base representation via `base_value = raw * multiplier + offset`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnitLiteral {
    pub name: String,

    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    #[serde(default)]
    pub offset: f64,
}

fn default_multiplier() -> f64 {
    1.0
}

impl UnitLiteral {
    /// Parse a literal from its command-line JSON form,
    /// e.g. `{"name": "km", "multiplier": 1000}`.
    /// Unknown keys are ignored; a missing name is an error.
    pub fn from_json(data: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let literal: UnitLiteral = serde_json::from_str(data)
            .map_err(|e| format!("invalid literal '{}': {}", data, e))?;
        Ok(literal)
    }
}

// Everything needed to render one unit. Built once from the CLI input and
// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Unit {
    pub name: String,
    pub namespace: String,
    pub unit_id: i64,
    pub literals: Vec<UnitLiteral>,

    // Token prepended to generated declarations, empty when unused
    pub export_macro: String,

    // Explicit flat output directory, overriding the base-dir layout
    pub out_dir: Option<PathBuf>,
}

impl Unit {
    pub fn has_literals(&self) -> bool {
        !self.literals.is_empty()
    }
}
