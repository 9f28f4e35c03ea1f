use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ModerationError, ModerationResult};

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 审核服务根地址
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 批量结果文件的下载目录
    pub download_dir: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5555".to_string(),
            request_timeout_secs: 120,
            download_dir: PathBuf::from("."),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 默认值 + 环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub fn from_toml_file(path: &Path) -> ModerationResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ModerationError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|reason| ModerationError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// 用环境变量覆盖当前配置
    pub fn with_env_overrides(self) -> Self {
        Self {
            api_base_url: std::env::var("MODERATION_API_BASE_URL").unwrap_or(self.api_base_url),
            request_timeout_secs: std::env::var("MODERATION_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.request_timeout_secs),
            download_dir: std::env::var("MODERATION_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(self.download_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
        }
    }
}
