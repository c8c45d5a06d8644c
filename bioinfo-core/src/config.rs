//! Configuration handling for bioinfo
//!
//! Supports loading configuration from bioinfo.toml files. Every field has a
//! default, so partial files are accepted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "bioinfo.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL that accessions are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Suffix/prefix length used for overlap graphs
    #[serde(default = "default_overlap_length")]
    pub overlap_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Modulus applied when counting candidate RNA strings
    #[serde(default = "default_rna_count_modulus")]
    pub rna_count_modulus: u64,

    /// Report overlapping motif occurrences
    #[serde(default = "default_true")]
    pub motif_overlap: bool,
}

// Default value functions
fn default_base_url() -> String { "https://rest.uniprot.org/uniprotkb/".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_user_agent() -> String { format!("bioinfo/{}", crate::VERSION) }
fn default_overlap_length() -> usize { 3 }
fn default_rna_count_modulus() -> u64 { 1_000_000 }
fn default_true() -> bool { true }

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            overlap_length: default_overlap_length(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rna_count_modulus: default_rna_count_modulus(),
            motif_overlap: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::info!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.graph.overlap_length, 3);
        assert_eq!(config.analysis.rna_count_modulus, 1_000_000);
        assert!(config.analysis.motif_overlap);
        assert_eq!(config.remote.timeout_secs, 30);
        assert!(config.remote.user_agent.starts_with("bioinfo/"));
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let mut config = Config::default();
        config.graph.overlap_length = 5;
        let temp_file = NamedTempFile::new()?;

        config.save_to_file(temp_file.path())?;
        let loaded_config = Config::load_from_file(temp_file.path())?;

        assert_eq!(config, loaded_config);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "[graph]")?;
        writeln!(temp_file, "overlap_length = 4")?;

        let config = Config::load(Some(temp_file.path()))?;
        assert_eq!(config.graph.overlap_length, 4);
        assert_eq!(config.analysis, AnalysisConfig::default());
        assert_eq!(config.remote, RemoteConfig::default());
        Ok(())
    }

    #[test]
    fn test_motif_overlap_setting_drives_search() -> Result<()> {
        use crate::analysis::find_motif;
        use crate::sequence::DnaSequence;

        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "[analysis]")?;
        writeln!(temp_file, "motif_overlap = false")?;
        let config = Config::load(Some(temp_file.path()))?;
        assert!(!config.analysis.motif_overlap);

        let haystack = DnaSequence::new("h", "AAAA");
        let motif = DnaSequence::new("m", "AA");
        assert_eq!(find_motif(&haystack, &motif, config.analysis.motif_overlap)?, vec![0, 2]);
        assert_eq!(
            find_motif(&haystack, &motif, Config::default().analysis.motif_overlap)?,
            vec![0, 1, 2]
        );
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_reported() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "[graph")?;

        let err = Config::load_from_file(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration file"));
        Ok(())
    }

    #[test]
    fn test_example_toml_generation() -> Result<()> {
        let example = Config::example_toml()?;
        assert!(example.contains("[remote]"));
        assert!(example.contains("[graph]"));
        assert!(example.contains("[analysis]"));
        Ok(())
    }
}
