//! 结果渲染 - 业务能力层
//!
//! 纯函数：审核结论 / 失败 → 可展示的片段

use crate::error::ModerationError;
use crate::models::{Fragment, ModerationVerdict, Tone};

/// 把概率格式化为两位小数的百分比数值（不带 % 号）
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score * 100.0)
}

/// 渲染审核结论
pub fn render_verdict(verdict: &ModerationVerdict) -> Fragment {
    match verdict {
        ModerationVerdict::Error { message } => {
            Fragment::new(Tone::Error, format!("Ошибка: {}", message))
        }
        ModerationVerdict::Scored {
            label,
            raw_label,
            score,
        } => {
            let (tone, heading, label_text) = if label.is_toxic() {
                (Tone::Alert, "Обнаружен токсичный контент!", "Токсично")
            } else {
                (Tone::Success, "Комментарий безопасен", "Нетоксично")
            };

            Fragment::new(tone, heading)
                .with_detail(format!("Результат: {} ({})", label_text, raw_label))
                .with_detail(format!("Уверенность модели: {}%", format_score(*score)))
        }
    }
}

/// 渲染请求失败
pub fn render_failure(err: &ModerationError) -> Fragment {
    Fragment::new(Tone::Error, "⚠️ Произошла ошибка:").with_detail(err.to_string())
}
