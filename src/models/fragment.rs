//! 渲染片段与状态消息

use std::fmt;

/// 片段的视觉基调
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    /// 耗时操作进行中
    Progress,
    Success,
    /// 检测到有毒内容
    Alert,
    Error,
}

impl Tone {
    /// 固定的颜色表
    pub fn color(self) -> &'static str {
        match self {
            Tone::Info => "#999999",
            Tone::Progress => "#5f27cd",
            Tone::Success => "#27cd88",
            Tone::Alert => "#c44569",
            Tone::Error => "#d9534f",
        }
    }
}

/// 一次渲染的输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub tone: Tone,
    pub heading: String,
    pub details: Vec<String>,
}

impl Fragment {
    pub fn new(tone: Tone, heading: impl Into<String>) -> Self {
        Self {
            tone,
            heading: heading.into(),
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    pub fn color(&self) -> &'static str {
        self.tone.color()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        for line in &self.details {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// 状态严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Progress,
    Success,
    Error,
}

impl Severity {
    pub fn tone(self) -> Tone {
        match self {
            Severity::Info => Tone::Info,
            Severity::Progress => Tone::Progress,
            Severity::Success => Tone::Success,
            Severity::Error => Tone::Error,
        }
    }
}

/// 状态消息，每次事件都会整体覆盖
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

impl From<&StatusMessage> for Fragment {
    fn from(message: &StatusMessage) -> Self {
        Fragment::new(message.severity.tone(), message.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_details() {
        let fragment = Fragment::new(Tone::Success, "Комментарий безопасен")
            .with_detail("a")
            .with_detail("b");
        assert_eq!(fragment.to_string(), "Комментарий безопасен\na\nb");
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Error.tone().color(), "#d9534f");
        assert_eq!(Severity::Success.tone().color(), "#27cd88");
        assert_ne!(Tone::Alert.color(), Tone::Error.color());
        assert_eq!(Severity::Progress.tone().color(), "#5f27cd");
        assert_ne!(Tone::Progress.color(), Tone::Info.color());
    }
}
