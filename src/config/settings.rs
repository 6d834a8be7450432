use serde::{Deserialize, Serialize};

/// Optional generator defaults, loaded from `unitgen.toml`.
/// Explicit CLI flags always win over values from here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_base_dir")]
    pub base_dir: String,

    #[serde(default)]
    pub template_dir: Option<String>,

    #[serde(default)]
    pub export_macro: bool,
}

fn default_base_dir() -> String {
    "generated".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            template_dir: None,
            export_macro: false,
        }
    }
}

impl GeneratorConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
