use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::rank::MissingKeyPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub evaluation: EvaluationConfig,
    pub output: OutputConfig,
}

/// Corpus location configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// Root directory holding one sub-directory per evaluated method.
    /// Each method reads `<data_dir>/<method>/txt/{publications,tags,titles}.txt`.
    pub data_dir: PathBuf,
}

/// Evaluation run configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    /// Methods evaluated by cosine similarity over pre-computed vectors
    /// (e.g. "LDA_200", "D2V").
    #[serde(default)]
    pub vector_methods: Vec<String>,
    /// Methods evaluated by raw word-overlap counts (e.g. "WF").
    #[serde(default)]
    pub word_frequency_methods: Vec<String>,
    /// What to do when a query-key has no entry in the query table.
    #[serde(default)]
    pub missing_key: MissingKeyPolicy,
    /// Also score word-frequency methods against titles, not just tags.
    #[serde(default)]
    pub word_frequency_titles: bool,
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub report_path: PathBuf,
}

impl Config {
    /// Load configuration from file
    ///
    /// Looks for the config file in this order:
    /// 1. Path specified in RANKEVAL_CONFIG environment variable
    /// 2. ./config.toml in current directory
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("RANKEVAL_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if !self.corpus.data_dir.exists() {
            anyhow::bail!(
                "data_dir path does not exist: {}. Set corpus.data_dir to the directory holding per-method input files.",
                self.corpus.data_dir.display()
            );
        }

        if !self.corpus.data_dir.is_dir() {
            anyhow::bail!(
                "data_dir must be a directory, not a file: {}",
                self.corpus.data_dir.display()
            );
        }

        if self.evaluation.vector_methods.is_empty()
            && self.evaluation.word_frequency_methods.is_empty()
        {
            anyhow::bail!("no methods configured: both evaluation.vector_methods and evaluation.word_frequency_methods are empty");
        }

        if self.output.report_path.as_os_str().is_empty() {
            anyhow::bail!("output.report_path must not be empty");
        }

        Ok(())
    }

    /// Directory holding one method's input resources
    pub fn method_dir(&self, method: &str) -> PathBuf {
        self.corpus.data_dir.join(method).join("txt")
    }

    /// Publications file for a method
    pub fn publications_path(&self, method: &str) -> PathBuf {
        self.method_dir(method).join("publications.txt")
    }

    /// Tag query file for a method
    pub fn tags_path(&self, method: &str) -> PathBuf {
        self.method_dir(method).join("tags.txt")
    }

    /// Title query file for a method
    pub fn titles_path(&self, method: &str) -> PathBuf {
        self.method_dir(method).join("titles.txt")
    }

    /// Get report output path
    pub fn report_path(&self) -> &Path {
        &self.output.report_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_config(temp_dir: &TempDir) -> String {
        let data_dir = temp_dir.path().canonicalize().unwrap();
        let data_dir_str = data_dir.to_str().unwrap().replace('\\', "\\\\");
        format!(
            r#"
[corpus]
data_dir = "{}"

[evaluation]
vector_methods = ["LDA_200", "D2V"]
word_frequency_methods = ["WF"]
missing_key = "skip-key"
word_frequency_titles = false

[output]
report_path = "./scores.txt"
"#,
            data_dir_str
        )
    }

    #[test]
    fn test_config_load_success() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, create_test_config(&temp_dir)).unwrap();

        let config = Config::load_from(&config_path);
        assert!(config.is_ok(), "Config::load_from failed: {:?}", config.err());
        let config = config.unwrap();
        assert_eq!(config.evaluation.vector_methods, vec!["LDA_200", "D2V"]);
        assert_eq!(config.evaluation.word_frequency_methods, vec!["WF"]);
        assert_eq!(config.evaluation.missing_key, MissingKeyPolicy::SkipKey);
        assert!(!config.evaluation.word_frequency_titles);
    }

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let data_dir = temp_dir.path().canonicalize().unwrap();
        let content = format!(
            r#"
[corpus]
data_dir = "{}"

[evaluation]
vector_methods = ["D2V"]

[output]
report_path = "./scores.txt"
"#,
            data_dir.to_str().unwrap().replace('\\', "\\\\")
        );
        fs::write(&config_path, content).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert!(config.evaluation.word_frequency_methods.is_empty());
        assert_eq!(config.evaluation.missing_key, MissingKeyPolicy::SkipKey);
    }

    #[test]
    fn test_config_rejects_missing_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let content = r#"
[corpus]
data_dir = "/nonexistent/rankeval-data"

[evaluation]
vector_methods = ["D2V"]

[output]
report_path = "./scores.txt"
"#;
        fs::write(&config_path, content).unwrap();

        let config = Config::load_from(&config_path);
        assert!(config.is_err());
        assert!(config.unwrap_err().to_string().contains("data_dir"));
    }

    #[test]
    fn test_config_rejects_no_methods() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let data_dir = temp_dir.path().canonicalize().unwrap();
        let content = format!(
            r#"
[corpus]
data_dir = "{}"

[evaluation]

[output]
report_path = "./scores.txt"
"#,
            data_dir.to_str().unwrap().replace('\\', "\\\\")
        );
        fs::write(&config_path, content).unwrap();

        let config = Config::load_from(&config_path);
        assert!(config.is_err());
        assert!(config.unwrap_err().to_string().contains("no methods"));
    }

    #[test]
    fn test_config_invalid_path() {
        let config = Config::load_from(Path::new("nonexistent.toml"));
        assert!(config.is_err());
    }

    #[test]
    fn test_method_paths() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, create_test_config(&temp_dir)).unwrap();
        let config = Config::load_from(&config_path).unwrap();

        let pubs = config.publications_path("LDA_200");
        assert!(pubs.ends_with("LDA_200/txt/publications.txt"));
        assert!(config.tags_path("WF").ends_with("WF/txt/tags.txt"));
        assert!(config.titles_path("WF").ends_with("WF/txt/titles.txt"));
    }
}
