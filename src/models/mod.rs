pub mod fragment;
pub mod upload;
pub mod verdict;

pub use fragment::{Fragment, Severity, StatusMessage, Tone};
pub use upload::{BatchDownload, SelectedFile, UploadJob, RESULT_FILE_NAME};
pub use verdict::{Label, ModerationVerdict, PredictRequest};

/// 历史记录中的一条评论
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub text: String,
}
