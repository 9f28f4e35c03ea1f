//! 单条评论审核流程 - 流程层
//!
//! 流程顺序：
//! 1. 读取并 trim 输入，空文本直接放弃
//! 2. 状态区显示"分析中"
//! 3. 调用 /predict
//! 4. 渲染结论；成功时写入历史并清空输入

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::clients::ModerationApi;
use crate::error::ModerationError;
use crate::infrastructure::{CommentForm, CommentHistory, RenderTarget};
use crate::models::ModerationVerdict;
use crate::services::{render_failure, render_verdict, StatusReporter};
use crate::utils::logging::truncate_text;
use crate::workflow::gate::PipelineGate;
use crate::workflow::Submission;

/// 单条评论审核器
///
/// - 所有界面资源通过构造函数注入
/// - 结果区域同时承担状态显示
pub struct SingleItemModerator<A> {
    api: Arc<A>,
    form: Arc<CommentForm>,
    history: Arc<CommentHistory>,
    result: Arc<dyn RenderTarget>,
    status: StatusReporter,
    gate: PipelineGate,
}

impl<A: ModerationApi> SingleItemModerator<A> {
    pub fn new(
        api: Arc<A>,
        form: Arc<CommentForm>,
        history: Arc<CommentHistory>,
        result: Arc<dyn RenderTarget>,
    ) -> Self {
        Self {
            api,
            form,
            history,
            status: StatusReporter::new(result.clone(), "comment"),
            result,
            gate: PipelineGate::new(),
        }
    }

    /// 提交当前输入框中的评论
    pub async fn submit(&self) -> Submission<ModerationVerdict> {
        let text = self.form.input().trim().to_string();
        if text.is_empty() {
            debug!("评论为空，忽略提交");
            return Submission::Skipped;
        }

        let Some(_in_flight) = self.gate.try_begin() else {
            warn!("⚠️ 上一条评论仍在审核中，忽略本次提交");
            return Submission::Busy;
        };

        info!("🔍 审核评论: {}", truncate_text(&text, 80));
        self.status.info("Анализируем...");

        match self.api.predict(&text).await {
            Ok(verdict @ ModerationVerdict::Scored { .. }) => {
                self.result.show(&render_verdict(&verdict));
                self.history.prepend(text);
                self.form.clear();
                info!("✓ 审核完成: {:?}", verdict);
                Submission::Completed(verdict)
            }
            Ok(ModerationVerdict::Error { message }) => {
                warn!("⚠️ 服务端报告错误: {}", message);
                self.result.show(&render_verdict(&ModerationVerdict::Error {
                    message: message.clone(),
                }));
                Submission::Failed(ModerationError::ServerReported { message })
            }
            Err(err) => {
                error!("❌ 评论审核请求失败: {:?}", err);
                self.result.show(&render_failure(&err));
                Submission::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryTarget;
    use crate::models::{Label, Tone};
    use crate::workflow::test_support::MockApi;
    use tokio::sync::Notify;

    struct Fixture {
        api: Arc<MockApi>,
        form: Arc<CommentForm>,
        history: Arc<CommentHistory>,
        target: Arc<MemoryTarget>,
        moderator: Arc<SingleItemModerator<MockApi>>,
    }

    fn fixture(api: MockApi) -> Fixture {
        let api = Arc::new(api);
        let form = Arc::new(CommentForm::new());
        let history = Arc::new(CommentHistory::new());
        let target = Arc::new(MemoryTarget::new());
        let moderator = Arc::new(SingleItemModerator::new(
            api.clone(),
            form.clone(),
            history.clone(),
            target.clone(),
        ));
        Fixture {
            api,
            form,
            history,
            target,
            moderator,
        }
    }

    #[tokio::test]
    async fn test_sends_trimmed_text_once() {
        let f = fixture(MockApi::new());
        f.form.set_input("   какой хороший день  \n");

        let outcome = f.moderator.submit().await;

        assert!(outcome.is_completed());
        assert_eq!(f.api.predict_calls(), vec!["какой хороший день".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let f = fixture(MockApi::new());
        f.form.set_input(" \t\n ");

        assert!(matches!(f.moderator.submit().await, Submission::Skipped));
        assert!(f.api.predict_calls().is_empty());
        assert_eq!(f.target.writes(), 0);
        assert_eq!(f.form.input(), " \t\n ");
    }

    #[tokio::test]
    async fn test_success_prepends_history_and_clears_input() {
        let f = fixture(MockApi::new().with_predict(|| {
            Ok(ModerationVerdict::scored(Label::Toxic, "LABEL_1", 0.873))
        }));

        f.form.set_input("первый");
        f.moderator.submit().await;
        f.form.set_input("второй");
        f.moderator.submit().await;

        let texts: Vec<String> = f.history.snapshot().into_iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["второй", "первый"]);
        assert_eq!(f.form.input(), "");

        let shown = f.target.latest().unwrap();
        assert_eq!(shown.tone, Tone::Alert);
        assert!(shown.to_string().contains("87.30%"));
    }

    #[tokio::test]
    async fn test_request_failure_keeps_input() {
        let f = fixture(MockApi::new().with_predict(|| {
            Err(ModerationError::RequestFailed {
                endpoint: "/predict".to_string(),
                status: 500,
                message: "Внутренняя ошибка сервера при обработке текста".to_string(),
            })
        }));
        f.form.set_input("текст");

        let outcome = f.moderator.submit().await;

        assert!(matches!(
            outcome,
            Submission::Failed(ModerationError::RequestFailed { status: 500, .. })
        ));
        assert!(f.history.is_empty());
        assert_eq!(f.form.input(), "текст");

        let shown = f.target.latest().unwrap();
        assert_eq!(shown.tone, Tone::Error);
        assert!(shown.to_string().contains("Внутренняя ошибка сервера"));
    }

    #[tokio::test]
    async fn test_server_reported_error_is_not_recorded() {
        let f = fixture(MockApi::new().with_predict(|| {
            Ok(ModerationVerdict::Error {
                message: "Модель не загружена.".to_string(),
            })
        }));
        f.form.set_input("текст");

        let outcome = f.moderator.submit().await;

        assert!(matches!(
            outcome,
            Submission::Failed(ModerationError::ServerReported { .. })
        ));
        assert!(f.history.is_empty());
        assert_eq!(f.form.input(), "текст");
        assert_eq!(
            f.target.latest().unwrap().heading,
            "Ошибка: Модель не загружена."
        );
    }

    #[tokio::test]
    async fn test_status_precedes_result() {
        let f = fixture(MockApi::new());
        f.form.set_input("текст");

        f.moderator.submit().await;

        // "Анализируем..." 然后是结论
        assert_eq!(f.target.writes(), 2);
        assert_eq!(f.target.latest().unwrap().tone, Tone::Success);
    }

    #[tokio::test]
    async fn test_second_submission_rejected_while_pending() {
        let hold = Arc::new(Notify::new());
        let f = fixture(MockApi::new().held(hold.clone()));
        f.form.set_input("первый");

        let first = {
            let moderator = f.moderator.clone();
            tokio::spawn(async move { moderator.submit().await })
        };
        while f.api.predict_calls().is_empty() {
            tokio::task::yield_now().await;
        }

        f.form.set_input("второй");
        assert!(matches!(f.moderator.submit().await, Submission::Busy));
        assert_eq!(f.api.predict_calls().len(), 1);

        hold.notify_one();
        assert!(first.await.unwrap().is_completed());
        assert_eq!(f.history.len(), 1);
    }
}
