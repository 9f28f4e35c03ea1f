use std::path::{Path, PathBuf};

use crate::error::{ModerationError, ModerationResult};

/// 批量结果的固定文件名
pub const RESULT_FILE_NAME: &str = "results.csv";

/// 用户选择的待上传文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub contents: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// 从磁盘读取文件
    pub async fn read(path: &Path) -> ModerationResult<Self> {
        let contents = tokio::fs::read(path)
            .await
            .map_err(|source| ModerationError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.csv".to_string());

        Ok(Self { name, contents })
    }
}

/// 一次批量上传：源文件 + 服务端返回的结果
#[derive(Debug)]
pub struct UploadJob {
    pub source: SelectedFile,
    pub result: Option<Vec<u8>>,
}

impl UploadJob {
    pub fn new(source: SelectedFile) -> Self {
        Self {
            source,
            result: None,
        }
    }
}

/// 批量审核完成后的产物
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDownload {
    pub source_name: String,
    pub saved_to: PathBuf,
    pub size: usize,
}
