//! 下载通道 - 基础设施层
//!
//! 服务端返回的文件先登记为一个临时对象引用，再以固定文件名"下载"，
//! 最后释放引用

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::debug;

/// 临时对象引用
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 下载通道
pub trait DownloadSink: Send + Sync {
    /// 为负载登记一个临时对象引用
    fn create_object_url(&self, payload: Vec<u8>) -> ObjectUrl;

    /// 以建议的文件名触发下载，返回落盘路径
    fn trigger_download(&self, url: &ObjectUrl, file_name: &str) -> io::Result<PathBuf>;

    /// 释放临时对象引用
    fn revoke_object_url(&self, url: &ObjectUrl);

    /// 以该文件名下载时的落盘位置
    fn destination(&self, file_name: &str) -> PathBuf {
        PathBuf::from(file_name)
    }
}

/// 临时对象引用的守卫，离开作用域时释放引用
pub struct TransientObject<'a> {
    sink: &'a dyn DownloadSink,
    url: ObjectUrl,
}

impl<'a> TransientObject<'a> {
    pub fn create(sink: &'a dyn DownloadSink, payload: Vec<u8>) -> Self {
        let url = sink.create_object_url(payload);
        Self { sink, url }
    }

    pub fn url(&self) -> &ObjectUrl {
        &self.url
    }
}

impl Drop for TransientObject<'_> {
    fn drop(&mut self) {
        self.sink.revoke_object_url(&self.url);
    }
}

/// 把下载写入本地目录的通道
#[derive(Debug)]
pub struct DirectoryDownloads {
    dir: PathBuf,
    objects: Mutex<HashMap<ObjectUrl, Vec<u8>>>,
    next_id: AtomicU64,
}

impl DirectoryDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            objects: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// 仍未释放的对象引用数量
    pub fn live_objects(&self) -> usize {
        self.objects.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl DownloadSink for DirectoryDownloads {
    fn create_object_url(&self, payload: Vec<u8>) -> ObjectUrl {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let url = ObjectUrl::new(format!("blob:comment-moderator/{}", id));
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(url.clone(), payload);
        debug!("登记临时对象: {}", url);
        url
    }

    fn trigger_download(&self, url: &ObjectUrl, file_name: &str) -> io::Result<PathBuf> {
        let objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        let payload = objects.get(url).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("对象引用已失效: {}", url))
        })?;

        std::fs::create_dir_all(&self.dir)?;
        let target = self.destination(file_name);
        std::fs::write(&target, payload)?;
        debug!("已写入下载文件: {} ({} 字节)", target.display(), payload.len());
        Ok(target)
    }

    fn revoke_object_url(&self, url: &ObjectUrl) {
        self.objects
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(url);
        debug!("释放临时对象: {}", url);
    }

    fn destination(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_revokes_after_download() {
        let dir = tempfile::tempdir().unwrap();
        let downloads = DirectoryDownloads::new(dir.path().join("out"));

        let saved = {
            let object = TransientObject::create(&downloads, b"ID,label\n1,0\n".to_vec());
            assert_eq!(downloads.live_objects(), 1);
            downloads.trigger_download(object.url(), "results.csv").unwrap()
        };

        assert_eq!(downloads.live_objects(), 0);
        assert_eq!(saved, dir.path().join("out").join("results.csv"));
        assert_eq!(std::fs::read(&saved).unwrap(), b"ID,label\n1,0\n");
    }

    #[test]
    fn test_revoked_url_cannot_be_downloaded() {
        let dir = tempfile::tempdir().unwrap();
        let downloads = DirectoryDownloads::new(dir.path());

        let url = downloads.create_object_url(vec![1, 2, 3]);
        downloads.revoke_object_url(&url);

        let err = downloads.trigger_download(&url, "results.csv").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_write_failure_still_revokes() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let downloads = DirectoryDownloads::new(&blocker);

        let result = {
            let object = TransientObject::create(&downloads, b"ID,label\n".to_vec());
            downloads.trigger_download(object.url(), "results.csv")
        };

        assert!(result.is_err());
        assert_eq!(downloads.live_objects(), 0);
        assert_eq!(downloads.destination("results.csv"), blocker.join("results.csv"));
    }
}
