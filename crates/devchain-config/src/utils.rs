use crate::loader::FileLoader;
use crate::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};

/// Default declaration file name, without extension
pub const DEFAULT_CONFIG_NAME: &str = "devchain";

/// Configuration utility functions
pub struct ConfigUtils;

impl ConfigUtils {
    /// Standard locations searched for a declaration, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("."),
            PathBuf::from("config"),
            default_config_dir(),
            PathBuf::from("/etc/devchain"),
        ]
    }

    /// Find a declaration file in the standard locations
    pub fn find_config_file(filename: &str) -> ConfigResult<PathBuf> {
        Self::find_config_file_in(&Self::search_paths(), filename)
    }

    /// Find `filename`, `filename.toml` or `filename.json` in `search_paths`
    pub fn find_config_file_in(search_paths: &[PathBuf], filename: &str) -> ConfigResult<PathBuf> {
        for search_path in search_paths {
            let config_path = search_path.join(filename);
            if config_path.is_file() {
                return Ok(config_path);
            }

            for ext in ConfigFormat::EXTENSIONS {
                let config_with_ext = search_path.join(format!("{}.{}", filename, ext));
                if config_with_ext.is_file() {
                    return Ok(config_with_ext);
                }
            }
        }

        Err(ConfigError::FileNotFound(format!(
            "Configuration file '{}' not found in standard locations",
            filename
        )))
    }

    /// Find `devchain.toml` or `devchain.json` in the standard locations
    pub fn find_default_config() -> ConfigResult<PathBuf> {
        Self::find_default_config_in(&Self::search_paths())
    }

    /// Only names carrying a known extension match, so an executable called
    /// `devchain` sitting next to the working directory is never picked up.
    pub fn find_default_config_in(search_paths: &[PathBuf]) -> ConfigResult<PathBuf> {
        for search_path in search_paths {
            for ext in ConfigFormat::EXTENSIONS {
                let candidate = search_path.join(format!("{}.{}", DEFAULT_CONFIG_NAME, ext));
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }

        Err(ConfigError::FileNotFound(format!(
            "No {}.toml or {}.json in standard locations",
            DEFAULT_CONFIG_NAME, DEFAULT_CONFIG_NAME
        )))
    }

    /// Rewrite a declaration in another format
    pub async fn convert_format<P: AsRef<Path>, Q: AsRef<Path>>(
        input_path: P,
        output_path: Q,
        output_format: ConfigFormat,
    ) -> ConfigResult<()> {
        let file = FileLoader::load_auto(input_path).await?;

        match output_format {
            ConfigFormat::Toml => FileLoader::save_toml(&file, output_path).await,
            ConfigFormat::Json => FileLoader::save_json(&file, output_path).await,
        }
    }
}

/// Configuration file format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub const EXTENSIONS: [&'static str; 2] = ["toml", "json"];
}

impl std::str::FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::InvalidFormat(format!("Unknown format: {}", s))),
        }
    }
}

pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("devchain"))
        .unwrap_or_else(|| PathBuf::from(".devchain"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_with_extension() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        std::fs::write(second.path().join("devchain.json"), "{}").unwrap();

        let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let found = ConfigUtils::find_config_file_in(&paths, DEFAULT_CONFIG_NAME).unwrap();
        assert_eq!(found, second.path().join("devchain.json"));
    }

    #[test]
    fn test_find_missing() {
        let dir = tempdir().unwrap();
        let result = ConfigUtils::find_config_file_in(&[dir.path().to_path_buf()], "nothing");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_default_ignores_bare_name() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), [0x7f, b'E', b'L', b'F', 0xff]).unwrap();
        let paths = vec![dir.path().to_path_buf()];

        assert!(matches!(
            ConfigUtils::find_default_config_in(&paths),
            Err(ConfigError::FileNotFound(_))
        ));

        std::fs::write(dir.path().join("devchain.toml"), "").unwrap();
        assert_eq!(
            ConfigUtils::find_default_config_in(&paths).unwrap(),
            dir.path().join("devchain.toml")
        );
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("TOML".parse::<ConfigFormat>().unwrap(), ConfigFormat::Toml);
        assert_eq!("json".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
        assert!("yaml".parse::<ConfigFormat>().is_err());
    }
}
