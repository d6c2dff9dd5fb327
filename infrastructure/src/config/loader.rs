//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["ask-ai.toml", ".ask-ai.toml"];

/// Prefix for environment overrides, e.g. `ASK_AI_GEMINI__MODEL`
const ENV_PREFIX: &str = "ASK_AI_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ASK_AI_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./ask-ai.toml` or `./.ask-ai.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/ask-ai/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        Self::figment(config_path)
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/ask-ai/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ask-ai").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let marker = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", marker, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./ask-ai.toml or ./.ask-ai.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("ask-ai"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "ask-ai.toml",
                r#"
[gemini]
model = "gemini-1.5-pro"

[output]
color = false
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.gemini.model, "gemini-1.5-pro");
            assert!(!config.output.color);
            assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("ask-ai.toml", "[gemini]\nmodel = \"project-model\"\n")?;
            jail.create_file("custom.toml", "[gemini]\nmodel = \"explicit-model\"\n")?;

            let explicit = jail.directory().join("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| e.to_string())?;
            assert_eq!(config.gemini.model, "explicit-model");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("ask-ai.toml", "[gemini]\nmodel = \"file-model\"\n")?;
            jail.set_env("ASK_AI_GEMINI__MODEL", "env-model");
            jail.set_env("ASK_AI_GEMINI__API_KEY", "env-key");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.gemini.model, "env-model");
            assert_eq!(config.gemini.api_key.as_deref(), Some("env-key"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_toml_is_load_error() {
        Jail::expect_with(|jail| {
            jail.create_file("ask-ai.toml", "[gemini\nmodel = ")?;

            let result = ConfigLoader::load(None);
            assert!(matches!(result, Err(ConfigError::Load(_))));
            Ok(())
        });
    }
}
