use std::path::PathBuf;

use thiserror::Error;

/// 审核流程错误类型
///
/// `Display` 的输出就是展示给用户的文本，调试细节通过 `source()` 链记录到日志
#[derive(Debug, Error)]
pub enum ModerationError {
    /// 评论内容为空（校验错误，不会发起网络请求）
    #[error("Текст комментария пуст")]
    EmptyText,

    /// 未选择文件（校验错误，不会发起网络请求）
    #[error("Пожалуйста, выберите файл.")]
    NoFileSelected,

    /// 服务端返回非 2xx 状态码
    #[error("{message}")]
    RequestFailed {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// 网络层失败：无法连接、超时、读取响应体失败
    #[error("{source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// 2xx 响应，但负载本身携带 error 字段
    #[error("{message}")]
    ServerReported { message: String },

    /// 响应结构不符合预期
    #[error("Некорректный ответ сервера: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// 写入下载文件失败
    #[error("Не удалось сохранить файл {}: {source}", .path.display())]
    Download {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 读取待上传文件失败
    #[error("Не удалось прочитать файл {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件无法读取或解析
    #[error("配置错误 ({}): {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

// ========== 便捷构造函数 ==========

impl ModerationError {
    /// 创建网络层错误
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ModerationError::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建响应结构错误
    pub fn malformed(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        ModerationError::MalformedResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// 是否属于本地校验错误
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ModerationError::EmptyText | ModerationError::NoFileSelected
        )
    }
}

/// 审核流程结果类型
pub type ModerationResult<T> = Result<T, ModerationError>;
