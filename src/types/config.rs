use crate::error::SongrateError;
use crate::render::OutputFormat;
use serde::Deserialize;

pub const DEFAULT_UNTITLED: &str = "歌曲";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongrateConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    pub untitled: Option<String>,
}

impl SongrateConfig {
    pub fn format(&self) -> OutputFormat {
        self.output.format.unwrap_or(OutputFormat::Md)
    }

    pub fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(true)
    }

    /// Title used when the song name is empty.
    pub fn untitled(&self) -> &str {
        self.display.untitled.as_deref().unwrap_or(DEFAULT_UNTITLED)
    }

    pub fn validate(&self) -> Result<(), SongrateError> {
        if let Some(untitled) = &self.display.untitled {
            if untitled.trim().is_empty() {
                return Err(SongrateError::ConfigParse(
                    "display.untitled must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: SongrateConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.format(), OutputFormat::Md);
        assert!(cfg.pretty());
        assert_eq!(cfg.untitled(), "歌曲");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[output]
format = "chart"
pretty = false

[display]
untitled = "Untitled"
"#;
        let cfg: SongrateConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.format(), OutputFormat::Chart);
        assert!(!cfg.pretty());
        assert_eq!(cfg.untitled(), "Untitled");
    }

    #[test]
    fn unknown_format_fails_to_parse() {
        let toml_str = r#"
[output]
format = "svg"
"#;
        assert!(toml::from_str::<SongrateConfig>(toml_str).is_err());
    }

    #[test]
    fn validate_rejects_blank_untitled() {
        let toml_str = r#"
[display]
untitled = "   "
"#;
        let cfg: SongrateConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("display.untitled"));
    }
}
