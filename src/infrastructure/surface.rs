//! 渲染目标 - 基础设施层
//!
//! 代替页面上的结果区域 / 状态区域，只暴露"显示一个片段"的能力

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::{Fragment, Tone};

/// 渲染目标
///
/// 每次 `show` 都整体覆盖上一次的内容
pub trait RenderTarget: Send + Sync {
    fn show(&self, fragment: &Fragment);
}

/// 内存渲染目标，只保留最新的片段
#[derive(Debug, Default)]
pub struct MemoryTarget {
    latest: Mutex<Option<Fragment>>,
    writes: AtomicUsize,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前显示的片段
    pub fn latest(&self) -> Option<Fragment> {
        self.latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// 被覆盖写入的次数
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl RenderTarget for MemoryTarget {
    fn show(&self, fragment: &Fragment) {
        *self.latest.lock().unwrap_or_else(|e| e.into_inner()) = Some(fragment.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

/// 终端渲染目标，用 ANSI 颜色输出到 stdout
pub struct TerminalTarget {
    label: &'static str,
}

impl TerminalTarget {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    fn ansi(tone: Tone) -> &'static str {
        match tone {
            Tone::Info => "\x1b[90m",
            Tone::Progress => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Alert => "\x1b[35m",
            Tone::Error => "\x1b[31m",
        }
    }
}

impl RenderTarget for TerminalTarget {
    fn show(&self, fragment: &Fragment) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(
            out,
            "{}[{}] {}\x1b[0m",
            Self::ansi(fragment.tone),
            self.label,
            fragment.heading
        );
        for line in &fragment.details {
            let _ = writeln!(out, "    {}", line);
        }
        let _ = out.flush();
    }
}
