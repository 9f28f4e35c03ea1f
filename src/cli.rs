//! 命令行参数

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::ModerationResult;

#[derive(Parser, Debug)]
#[command(
    name = "comment-moderator",
    version,
    about = "Клиент модерации комментариев: проверка одного текста или CSV-файла"
)]
pub struct Cli {
    /// TOML 配置文件
    #[arg(long, env = "MODERATION_CONFIG")]
    pub config: Option<PathBuf>,

    /// 审核服务根地址
    #[arg(long)]
    pub base_url: Option<String>,

    /// 结果文件下载目录
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 审核一条评论
    Text { text: String },
    /// 上传 CSV 文件进行批量审核
    Upload { file: PathBuf },
    /// 交互模式：逐行读取评论
    Interactive,
}

impl Cli {
    /// 合并配置：命令行 > 环境变量 > 配置文件 > 默认值
    pub fn resolve_config(&self) -> ModerationResult<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_toml_file(path)?.with_env_overrides(),
            None => Config::from_env(),
        };

        if let Some(url) = &self.base_url {
            config.api_base_url = url.clone();
        }
        if let Some(dir) = &self.download_dir {
            config.download_dir = dir.clone();
        }
        if self.verbose {
            config.verbose_logging = true;
        }
        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
