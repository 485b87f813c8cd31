use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Credentials and endpoints for the OpenRouter text provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_openrouter_priority")]
    pub priority: u8,
}

fn default_openrouter_priority() -> u8 {
    1
}

/// Credentials and endpoints for the Gemini multimodal provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_gemini_priority")]
    pub priority: u8,
}

fn default_gemini_priority() -> u8 {
    2
}

/// Image synthesis endpoint. Keyless; only the base URL is configurable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImageConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderConfigs {
    #[serde(default)]
    pub openrouter: Option<OpenRouterConfig>,
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Process-wide configuration, constructed once at startup and passed by
/// reference into the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShankhnaadConfig {
    #[serde(default)]
    pub providers: ProviderConfigs,
    #[serde(default)]
    pub image: ImageConfig,
    /// How many prior turns are replayed into each prompt.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

fn default_history_window() -> usize {
    20
}

impl Default for ShankhnaadConfig {
    fn default() -> Self {
        Self {
            providers: ProviderConfigs::default(),
            image: ImageConfig::default(),
            history_window: default_history_window(),
        }
    }
}

const CONFIG_FILE_PATH: &str = "shankhnaad.toml";

fn shankhnaad_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(".shankhnaad")
}

fn config_toml_path() -> PathBuf {
    shankhnaad_dir().join("config.toml")
}

impl ShankhnaadConfig {
    /// Load configuration: home config file, then a working-directory file,
    /// then environment variable overrides. Missing or malformed files are
    /// ignored; absence of credentials is a valid (unconfigured) state.
    pub fn load() -> Self {
        let mut config = Self::default();

        let mut loaded = false;
        let home_path = config_toml_path();
        if home_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&home_path) {
                if let Ok(file_config) = toml::from_str::<Self>(&content) {
                    config = file_config;
                    loaded = true;
                }
            }
        }

        if !loaded && std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Self>(&content) {
                    config = file_config;
                }
            }
        }

        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("OPENROUTER_API_KEY") {
            let entry = self.providers.openrouter.get_or_insert(OpenRouterConfig {
                api_key: String::new(),
                base_url: None,
                model: None,
                priority: default_openrouter_priority(),
            });
            entry.api_key = key;
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            let entry = self.providers.gemini.get_or_insert(GeminiConfig {
                api_key: String::new(),
                base_url: None,
                model: None,
                priority: default_gemini_priority(),
            });
            entry.api_key = key;
        }
        if let Ok(url) = std::env::var("SHANKHNAAD_IMAGE_ENDPOINT") {
            if !url.is_empty() {
                self.image.base_url = Some(url);
            }
        }
    }

    /// Whether at least one text provider carries a usable credential.
    pub fn has_text_provider(&self) -> bool {
        let openrouter = self
            .providers
            .openrouter
            .as_ref()
            .is_some_and(|c| !c.api_key.trim().is_empty());
        let gemini = self
            .providers
            .gemini
            .as_ref()
            .is_some_and(|c| !c.api_key.trim().is_empty());
        openrouter || gemini
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_providers() {
        let config = ShankhnaadConfig::default();
        assert!(!config.has_text_provider());
        assert_eq!(config.history_window, 20);
    }

    #[test]
    fn empty_api_key_does_not_count_as_configured() {
        let mut config = ShankhnaadConfig::default();
        config.providers.openrouter = Some(OpenRouterConfig {
            api_key: "   ".to_string(),
            base_url: None,
            model: None,
            priority: 1,
        });
        assert!(!config.has_text_provider());
    }

    #[test]
    fn parses_full_toml() {
        let toml = r#"
            history_window = 8

            [providers.openrouter]
            api_key = "or-key"
            model = "meta-llama/llama-3.1-405b-instruct"

            [providers.gemini]
            api_key = "g-key"
            priority = 5

            [image]
            base_url = "https://images.example.com"
        "#;
        let config: ShankhnaadConfig = toml::from_str(toml).unwrap();
        assert!(config.has_text_provider());
        assert_eq!(config.history_window, 8);
        assert_eq!(config.providers.openrouter.as_ref().unwrap().priority, 1);
        assert_eq!(config.providers.gemini.as_ref().unwrap().priority, 5);
        assert_eq!(
            config.image.base_url.as_deref(),
            Some("https://images.example.com")
        );
    }
}
