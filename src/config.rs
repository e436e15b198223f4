//! Chakadola configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::llm::LlmError;

/// Main Chakadola configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text-generation provider configuration
    pub llm: LlmConfig,

    /// Knowledge store and embedder configuration
    pub knowledge: KnowledgeConfig,

    /// Pipeline tuning
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks the API-key environment variable is set, but only when the run
    /// actually needs text generation; an explicit place list keeps the
    /// pipeline usable with no key at all. Call early so a doomed run fails
    /// with a clear message instead of degrading every stage.
    pub fn validate(&self, generation_required: bool) -> Result<()> {
        if generation_required && std::env::var(&self.llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "API key not found. Set the {} environment variable.",
                self.llm.api_key_env
            ));
        }
        Ok(())
    }

    /// Load configuration
    ///
    /// An explicit path must load or the whole call fails. Otherwise the
    /// candidate locations are tried in order, project-local before user
    /// config, and an unreadable candidate is skipped with a warning.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        let mut candidates = vec![PathBuf::from(".chakadola.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("chakadola").join("chakadola.yml"));
        }

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Text-generation provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "gemini" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// OpenAI-compatible API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Maximum attempts per call, first try included
    #[serde(rename = "max-attempts")]
    pub max_attempts: u32,

    /// Backoff before the first retry; doubles per attempt
    #[serde(rename = "initial-backoff-ms")]
    pub initial_backoff_ms: u64,
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String, LlmError> {
        std::env::var(&self.api_key_env).map_err(|_| LlmError::MissingApiKey(self.api_key_env.clone()))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            timeout_ms: 30_000,
            max_attempts: 3,
            initial_backoff_ms: 500,
        }
    }
}

/// Knowledge store and embedding-service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Vector store base URL
    #[serde(rename = "store-url")]
    pub store_url: String,

    /// Collection holding the tourism records
    pub collection: String,

    /// Embedding service base URL
    #[serde(rename = "embed-url")]
    pub embed_url: String,

    /// Expected embedding dimension; must match the batch loader's model
    #[serde(rename = "embed-dim")]
    pub embed_dim: usize,

    /// Results requested per similarity query
    #[serde(rename = "top-k")]
    pub top_k: usize,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            store_url: "http://localhost:8000".to_string(),
            collection: "odisha_tourism".to_string(),
            embed_url: "http://localhost:8080".to_string(),
            embed_dim: 768,
            top_k: 3,
            timeout_ms: 10_000,
        }
    }
}

/// Pipeline tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Hard cap on selected places
    #[serde(rename = "max-places")]
    pub max_places: usize,

    /// Fixed RNG seed for reproducible weather/cost synthesis
    #[serde(rename = "rng-seed")]
    pub rng_seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_places: 6,
            rng_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.knowledge.collection, "odisha_tourism");
        assert_eq!(config.knowledge.embed_dim, 768);
        assert_eq!(config.pipeline.max_places, 6);
        assert!(config.pipeline.rng_seed.is_none());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
llm:
  provider: gemini
  model: gemini-2.0-pro
  api-key-env: MY_API_KEY
  max-attempts: 5
  initial-backoff-ms: 250

knowledge:
  store-url: http://chroma:8000
  collection: test_tourism
  top-k: 1

pipeline:
  max-places: 4
  rng-seed: 42
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.llm.model, "gemini-2.0-pro");
        assert_eq!(config.llm.api_key_env, "MY_API_KEY");
        assert_eq!(config.llm.max_attempts, 5);
        assert_eq!(config.knowledge.store_url, "http://chroma:8000");
        assert_eq!(config.knowledge.top_k, 1);
        assert_eq!(config.pipeline.max_places, 4);
        assert_eq!(config.pipeline.rng_seed, Some(42));
    }

    #[test]
    fn test_validate_requires_key_only_for_generation() {
        let config = Config {
            llm: LlmConfig {
                api_key_env: "CHAKADOLA_TEST_UNSET_KEY".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.validate(true).is_err());
        assert!(config.validate(false).is_ok());
    }

    #[test]
    fn test_validate_passes_with_key_set() {
        // SAFETY: var name is unique to this test, no concurrent reader
        unsafe {
            std::env::set_var("CHAKADOLA_TEST_SET_KEY", "test-key");
        }

        let config = Config {
            llm: LlmConfig {
                api_key_env: "CHAKADOLA_TEST_SET_KEY".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = config.validate(true);

        // SAFETY: same as above
        unsafe {
            std::env::remove_var("CHAKADOLA_TEST_SET_KEY");
        }

        assert!(result.is_ok());
    }

    #[test]
    fn test_load_from_explicit_path() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chakadola.yml");
        fs::write(&path, "pipeline:\n  max-places: 3\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.pipeline.max_places, 3);

        let missing = temp_dir.path().join("absent.yml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
llm:
  model: gemini-experimental
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.llm.model, "gemini-experimental");

        // Defaults for unspecified
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.knowledge.embed_dim, 768);
    }
}
