pub mod batch;
pub mod gate;
pub mod single_item;

pub use batch::BatchModerator;
pub use gate::{PipelineGate, PipelineState};
pub use single_item::SingleItemModerator;

use crate::error::ModerationError;

/// 一次提交的结果
#[derive(Debug)]
pub enum Submission<T> {
    /// 输入为空，静默放弃
    Skipped,
    /// 同一流水线已有在途请求
    Busy,
    Completed(T),
    Failed(ModerationError),
}

impl<T> Submission<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Submission::Completed(_))
    }
}
