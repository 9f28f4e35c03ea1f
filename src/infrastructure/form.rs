//! 表单状态 - 基础设施层
//!
//! 评论输入框、评论列表、文件选择框的内存实现

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use crate::error::ModerationResult;
use crate::models::{CommentRecord, SelectedFile};

/// 评论输入框
#[derive(Debug, Default)]
pub struct CommentForm {
    input: Mutex<String>,
}

impl CommentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        *self.input.lock().unwrap_or_else(|e| e.into_inner()) = text.into();
    }

    pub fn input(&self) -> String {
        self.input.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn clear(&self) {
        self.input.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

/// 已审核评论列表，最新的在最前面
///
/// 不去重，不限长度
#[derive(Debug, Default)]
pub struct CommentHistory {
    records: Mutex<VecDeque<CommentRecord>>,
}

impl CommentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(&self, text: impl Into<String>) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_front(CommentRecord { text: text.into() });
    }

    pub fn snapshot(&self) -> Vec<CommentRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 文件上传表单，最多持有一个选中的文件
#[derive(Debug, Default)]
pub struct UploadForm {
    selected: Mutex<Option<SelectedFile>>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, file: SelectedFile) {
        *self.selected.lock().unwrap_or_else(|e| e.into_inner()) = Some(file);
    }

    /// 从磁盘读取并选中文件
    pub async fn select_path(&self, path: &Path) -> ModerationResult<()> {
        let file = SelectedFile::read(path).await?;
        self.select(file);
        Ok(())
    }

    pub fn selected(&self) -> Option<SelectedFile> {
        self.selected
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// 清空选择
    pub fn reset(&self) {
        *self.selected.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
