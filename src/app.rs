use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::cli::Command;
use crate::clients::HttpModerationClient;
use crate::config::Config;
use crate::error::ModerationError;
use crate::infrastructure::{
    CommentForm, CommentHistory, DirectoryDownloads, RenderTarget, TerminalTarget, UploadForm,
};
use crate::models::{BatchDownload, ModerationVerdict};
use crate::services::StatusReporter;
use crate::utils::logging::{log_session_summary, log_startup};
use crate::workflow::{BatchModerator, SingleItemModerator, Submission};

/// 交互模式下的一行输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveCommand {
    Comment(String),
    Upload(PathBuf),
    History,
    Quit,
}

impl InteractiveCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "/quit" | "/exit" => InteractiveCommand::Quit,
            "/history" => InteractiveCommand::History,
            _ => match trimmed.strip_prefix("/upload") {
                Some(path) if path.is_empty() || path.starts_with(char::is_whitespace) => {
                    InteractiveCommand::Upload(PathBuf::from(path.trim()))
                }
                _ => InteractiveCommand::Comment(line.to_string()),
            },
        }
    }
}

/// 会话统计
#[derive(Debug, Default)]
struct SessionStats {
    moderated: usize,
    failed: usize,
    /// 本地校验拦下的提交，不计入失败
    rejected: usize,
}

impl SessionStats {
    fn record<T>(&mut self, outcome: &Submission<T>) {
        match outcome {
            Submission::Completed(_) => self.moderated += 1,
            Submission::Failed(err) if err.is_validation() => self.rejected += 1,
            Submission::Failed(_) => self.failed += 1,
            Submission::Skipped | Submission::Busy => {}
        }
    }
}

/// 应用主结构
pub struct App {
    comment_form: Arc<CommentForm>,
    history: Arc<CommentHistory>,
    upload_form: Arc<UploadForm>,
    csv_status: StatusReporter,
    single: SingleItemModerator<HttpModerationClient>,
    batch: BatchModerator<HttpModerationClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let api = Arc::new(HttpModerationClient::new(&config).context("无法创建 HTTP 客户端")?);

        let comment_form = Arc::new(CommentForm::new());
        let history = Arc::new(CommentHistory::new());
        let upload_form = Arc::new(UploadForm::new());
        let result_target: Arc<dyn RenderTarget> = Arc::new(TerminalTarget::new("модерация"));
        let csv_target: Arc<dyn RenderTarget> = Arc::new(TerminalTarget::new("csv"));
        let downloads = Arc::new(DirectoryDownloads::new(config.download_dir.clone()));

        let single = SingleItemModerator::new(
            api.clone(),
            comment_form.clone(),
            history.clone(),
            result_target,
        );
        let batch = BatchModerator::new(api, upload_form.clone(), downloads, csv_target.clone());

        Ok(Self {
            comment_form,
            history,
            upload_form,
            csv_status: StatusReporter::new(csv_target, "csv"),
            single,
            batch,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Text { text } => match self.moderate_text(&text).await {
                Submission::Failed(err) => bail!("审核失败: {}", err),
                Submission::Skipped => Err(ModerationError::EmptyText.into()),
                _ => Ok(()),
            },
            Command::Upload { file } => match self.upload_file(&file).await {
                Submission::Failed(err) => bail!("批量审核失败: {}", err),
                _ => Ok(()),
            },
            Command::Interactive => self.interactive().await,
        }
    }

    async fn moderate_text(&self, text: &str) -> Submission<ModerationVerdict> {
        self.comment_form.set_input(text);
        self.single.submit().await
    }

    async fn upload_file(&self, path: &Path) -> Submission<BatchDownload> {
        if path.as_os_str().is_empty() {
            self.upload_form.reset();
            return self.batch.submit().await;
        }
        if let Err(err) = self.upload_form.select_path(path).await {
            warn!("⚠️ 无法选择文件: {}", err);
            self.csv_status.error(format!("Ошибка: {}", err));
            return Submission::Failed(err);
        }
        self.batch.submit().await
    }

    /// 交互模式：逐行读取 stdin
    async fn interactive(&self) -> Result<()> {
        info!("💡 输入评论后回车提交；/upload <файл>、/history、/quit");

        let mut stats = SessionStats::default();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await.context("读取 stdin 失败")? {
            match InteractiveCommand::parse(&line) {
                InteractiveCommand::Quit => break,
                InteractiveCommand::History => self.print_history(),
                InteractiveCommand::Upload(path) => {
                    let outcome = self.upload_file(&path).await;
                    stats.record(&outcome);
                }
                InteractiveCommand::Comment(text) => {
                    let outcome = self.moderate_text(&text).await;
                    stats.record(&outcome);
                }
            }
        }

        if stats.rejected > 0 {
            info!("🚫 被拦下的无效提交: {}", stats.rejected);
        }
        log_session_summary(stats.moderated, stats.failed);
        Ok(())
    }

    fn print_history(&self) {
        let records = self.history.snapshot();
        if records.is_empty() {
            println!("(история пуста)");
            return;
        }
        for (i, record) in records.iter().enumerate() {
            println!("{:>3}. {}", i + 1, record.text);
        }
    }
}
