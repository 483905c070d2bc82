use moviereview_models::{MAX_SCORE, MIN_SCORE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Inputs for the demonstration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_movie_title")]
    pub movie_title: String,
    #[serde(default = "default_movie_genre")]
    pub movie_genre: String,
    #[serde(default)]
    pub movie_classification: Option<String>,
    #[serde(default = "default_movie_year")]
    pub movie_year: u32,
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_review_text")]
    pub review_text: String,
    #[serde(default = "default_updated_text")]
    pub updated_text: String,
    #[serde(default)]
    pub score: Option<u8>, // Also rate the movie when set
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_json_logging")]
    pub json: bool,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_movie_title() -> String {
    "The Matrix".to_string()
}

fn default_movie_genre() -> String {
    "Sci-Fi".to_string()
}

fn default_movie_year() -> u32 {
    1999
}

fn default_user_name() -> String {
    "Alice".to_string()
}

fn default_review_text() -> String {
    "Great movie!".to_string()
}

fn default_updated_text() -> String {
    "Amazing film!".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_json_logging() -> bool {
    use std::io::IsTerminal;
    !std::io::stdout().is_terminal()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            movie_title: default_movie_title(),
            movie_genre: default_movie_genre(),
            movie_classification: None,
            movie_year: default_movie_year(),
            user_name: default_user_name(),
            review_text: default_review_text(),
            updated_text: default_updated_text(),
            score: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: default_json_logging(),
            file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let demo = &self.demo;
        if demo.user_name.trim().is_empty() {
            return Err(anyhow::anyhow!("demo.user_name cannot be empty"));
        }
        if demo.movie_title.trim().is_empty() {
            return Err(anyhow::anyhow!("demo.movie_title cannot be empty"));
        }
        if demo.movie_year == 0 {
            return Err(anyhow::anyhow!("demo.movie_year must be positive"));
        }
        if demo.review_text.trim().is_empty() {
            return Err(anyhow::anyhow!("demo.review_text cannot be empty"));
        }
        if demo.updated_text.trim().is_empty() {
            return Err(anyhow::anyhow!("demo.updated_text cannot be empty"));
        }
        if let Some(score) = demo.score {
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(anyhow::anyhow!(
                    "demo.score must be between {} and {}, got {}",
                    MIN_SCORE,
                    MAX_SCORE,
                    score
                ));
            }
        }
        Ok(())
    }
}
