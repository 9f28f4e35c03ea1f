//! 状态上报 - 业务能力层
//!
//! 只负责覆盖写入状态区域，不保留历史

use std::sync::Arc;

use tracing::{error, info};

use crate::infrastructure::RenderTarget;
use crate::models::{Fragment, Severity, StatusMessage};

/// 状态上报服务
pub struct StatusReporter {
    target: Arc<dyn RenderTarget>,
    /// 日志中区分来源的名称
    channel: &'static str,
}

impl StatusReporter {
    pub fn new(target: Arc<dyn RenderTarget>, channel: &'static str) -> Self {
        Self { target, channel }
    }

    pub fn report(&self, message: StatusMessage) {
        match message.severity {
            Severity::Error => error!("[{}] {}", self.channel, message.text),
            _ => info!("[{}] {}", self.channel, message.text),
        }
        self.target.show(&Fragment::from(&message));
    }

    pub fn info(&self, text: impl Into<String>) {
        self.report(StatusMessage::new(text, Severity::Info));
    }

    pub fn progress(&self, text: impl Into<String>) {
        self.report(StatusMessage::new(text, Severity::Progress));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.report(StatusMessage::new(text, Severity::Success));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.report(StatusMessage::new(text, Severity::Error));
    }
}
