/// 审核服务 API 客户端
///
/// 封装 `/predict` 与 `/upload_csv` 两个接口的调用逻辑
use std::future::Future;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{ModerationError, ModerationResult};
use crate::models::{ModerationVerdict, PredictRequest, SelectedFile};

pub const PREDICT_PATH: &str = "/predict";
pub const UPLOAD_CSV_PATH: &str = "/upload_csv";
/// multipart 中文件字段的名称
pub const UPLOAD_FIELD: &str = "file";

/// 审核服务能力
pub trait ModerationApi: Send + Sync {
    /// 对单条文本评分
    fn predict(
        &self,
        text: &str,
    ) -> impl Future<Output = ModerationResult<ModerationVerdict>> + Send;

    /// 上传 CSV 文件，返回服务端生成的结果文件内容
    fn upload_csv(
        &self,
        file: &SelectedFile,
    ) -> impl Future<Output = ModerationResult<Vec<u8>>> + Send;
}

/// 基于 reqwest 的审核服务客户端
pub struct HttpModerationClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpModerationClient {
    /// 创建新的审核服务客户端
    pub fn new(config: &Config) -> ModerationResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ModerationError::transport(config.api_base_url.clone(), e))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ModerationApi for HttpModerationClient {
    async fn predict(&self, text: &str) -> ModerationResult<ModerationVerdict> {
        debug!("正在调用 {}，文本长度: {}", PREDICT_PATH, text.chars().count());

        let response = self
            .http
            .post(self.endpoint(PREDICT_PATH))
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| ModerationError::transport(PREDICT_PATH, e))?;

        let response = ensure_success(PREDICT_PATH, response).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ModerationError::transport(PREDICT_PATH, e))?;

        ModerationVerdict::from_json_slice(&body)
            .map_err(|reason| ModerationError::malformed(PREDICT_PATH, reason))
    }

    async fn upload_csv(&self, file: &SelectedFile) -> ModerationResult<Vec<u8>> {
        debug!(
            "正在上传 {} ({} 字节) 到 {}",
            file.name,
            file.contents.len(),
            UPLOAD_CSV_PATH
        );

        let part = Part::bytes(file.contents.clone())
            .file_name(file.name.clone())
            .mime_str("text/csv")
            .map_err(|e| ModerationError::transport(UPLOAD_CSV_PATH, e))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .http
            .post(self.endpoint(UPLOAD_CSV_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ModerationError::transport(UPLOAD_CSV_PATH, e))?;

        let response = ensure_success(UPLOAD_CSV_PATH, response).await?;
        let payload = response
            .bytes()
            .await
            .map_err(|e| ModerationError::transport(UPLOAD_CSV_PATH, e))?;

        debug!("{} 返回 {} 字节", UPLOAD_CSV_PATH, payload.len());
        Ok(payload.to_vec())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// 非 2xx 响应转换为 `RequestFailed`
async fn ensure_success(endpoint: &str, response: Response) -> ModerationResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let message = extract_error_message(&body)
        .unwrap_or_else(|| format!("Ошибка сервера: {}", status.as_u16()));

    Err(ModerationError::RequestFailed {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        message,
    })
}

/// 尽力从错误响应体中提取 `error` 字段
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}
