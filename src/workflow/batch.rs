//! 批量审核流程 - 流程层
//!
//! 流程顺序：
//! 1. 校验是否选中文件
//! 2. 状态区显示"上传中"
//! 3. 以 multipart 调用 /upload_csv
//! 4. 成功：登记临时对象 → 触发下载 → 释放对象 → 清空选择
//! 5. 失败：状态区显示错误，不产生下载

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::clients::ModerationApi;
use crate::error::{ModerationError, ModerationResult};
use crate::infrastructure::{DownloadSink, RenderTarget, TransientObject, UploadForm};
use crate::models::{BatchDownload, UploadJob, RESULT_FILE_NAME};
use crate::services::StatusReporter;
use crate::workflow::gate::PipelineGate;
use crate::workflow::Submission;

/// 批量审核器
pub struct BatchModerator<A> {
    api: Arc<A>,
    form: Arc<UploadForm>,
    downloads: Arc<dyn DownloadSink>,
    status: StatusReporter,
    gate: PipelineGate,
}

impl<A: ModerationApi> BatchModerator<A> {
    pub fn new(
        api: Arc<A>,
        form: Arc<UploadForm>,
        downloads: Arc<dyn DownloadSink>,
        status: Arc<dyn RenderTarget>,
    ) -> Self {
        Self {
            api,
            form,
            downloads,
            status: StatusReporter::new(status, "csv"),
            gate: PipelineGate::new(),
        }
    }

    /// 提交当前选中的文件
    pub async fn submit(&self) -> Submission<BatchDownload> {
        let Some(file) = self.form.selected() else {
            self.status.error(ModerationError::NoFileSelected.to_string());
            return Submission::Failed(ModerationError::NoFileSelected);
        };

        let Some(_in_flight) = self.gate.try_begin() else {
            warn!("⚠️ 上一个文件仍在处理中，忽略本次提交");
            return Submission::Busy;
        };

        info!("📤 上传文件: {} ({} 字节)", file.name, file.contents.len());
        self.status
            .progress("Загрузка и обработка... Это может занять время.");

        let mut job = UploadJob::new(file);
        match self.api.upload_csv(&job.source).await {
            Ok(payload) => job.result = Some(payload),
            Err(err) => return self.fail(err),
        }

        match self.deliver(job) {
            Ok(download) => {
                self.status.success(format!(
                    "Обработка завершена! Файл {} скачан.",
                    RESULT_FILE_NAME
                ));
                self.form.reset();
                info!("✓ 结果已保存至: {}", download.saved_to.display());
                Submission::Completed(download)
            }
            Err(err) => self.fail(err),
        }
    }

    /// 把结果交给下载通道；对象引用在触发下载之后、函数返回之前释放
    fn deliver(&self, job: UploadJob) -> ModerationResult<BatchDownload> {
        let payload = job.result.unwrap_or_default();
        let size = payload.len();

        let saved = {
            let object = TransientObject::create(self.downloads.as_ref(), payload);
            self.downloads.trigger_download(object.url(), RESULT_FILE_NAME)
        };

        let saved_to = saved.map_err(|source| ModerationError::Download {
            path: self.downloads.destination(RESULT_FILE_NAME),
            source,
        })?;

        Ok(BatchDownload {
            source_name: job.source.name,
            saved_to,
            size,
        })
    }

    fn fail(&self, err: ModerationError) -> Submission<BatchDownload> {
        error!("❌ 批量审核失败: {:?}", err);
        self.status.error(format!("Ошибка: {}", err));
        Submission::Failed(err)
    }
}
