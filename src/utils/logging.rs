/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志
///
/// 日志写入 stderr，stdout 留给审核结果；`RUST_LOG` 优先于 `verbose`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 评论审核客户端启动");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 审核服务: {}", config.api_base_url);
    info!("📁 下载目录: {}", config.download_dir.display());
    info!("{}", "=".repeat(60));
}

/// 打印会话统计
///
/// # 参数
/// - `moderated`: 审核成功的评论数
/// - `failed`: 失败次数
pub fn log_session_summary(moderated: usize, failed: usize) {
    info!("\n{}", "─".repeat(60));
    info!("📊 会话结束");
    info!("✅ 已审核评论: {}", moderated);
    info!("❌ 失败: {}", failed);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_text("привет", 10), "привет");
        assert_eq!(truncate_text("привет мир", 6), "привет...");
    }
}
