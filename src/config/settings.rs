use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ATP_MATCHES_BASE_URL: &str =
    "https://raw.githubusercontent.com/JeffSackmann/tennis_atp/master";
pub const DEFAULT_BETTING_ODDS_BASE_URL: &str = "http://www.tennis-data.co.uk";

/// Runtime settings, passed explicitly into every command handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathsConfig,
    pub sources: SourcesConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub raw_data_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_data_dir: PathBuf::from("data/raw"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub atp_matches_base_url: String,
    pub betting_odds_base_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            atp_matches_base_url: DEFAULT_ATP_MATCHES_BASE_URL.to_string(),
            betting_odds_base_url: DEFAULT_BETTING_ODDS_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub request_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            request_delay_ms: 100,
        }
    }
}

impl Settings {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RAW_DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn raw_data_dir(&self) -> &Path {
        &self.paths.raw_data_dir
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.http.request_delay_ms)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("sources.atp_matches_base_url", &self.sources.atp_matches_base_url)?;
        validate_url("sources.betting_odds_base_url", &self.sources.betting_odds_base_url)?;
        validate_path(
            "paths.raw_data_dir",
            &self.paths.raw_data_dir.to_string_lossy(),
        )?;
        validate_range("http.timeout_seconds", self.http.timeout_seconds, 1, 3600)?;
        Ok(())
    }
}
