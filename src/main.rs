use anyhow::Result;
use clap::Parser;
use comment_moderator::cli::Cli;
use comment_moderator::utils::logging;
use comment_moderator::App;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = cli.resolve_config()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run(cli.command()).await?;

    Ok(())
}
