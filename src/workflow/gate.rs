//! 在途请求闸门
//!
//! 每条流水线同一时刻最多一个在途请求

use std::sync::Mutex;

/// 流水线状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Pending,
    Done,
}

#[derive(Debug)]
pub struct PipelineGate {
    state: Mutex<PipelineState>,
}

impl PipelineGate {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PipelineState::Idle),
        }
    }

    pub fn state(&self) -> PipelineState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 尝试进入 Pending；已有在途请求时返回 None
    pub fn try_begin(&self) -> Option<InFlight<'_>> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if *state == PipelineState::Pending {
            return None;
        }
        *state = PipelineState::Pending;
        Some(InFlight { gate: self })
    }
}

impl Default for PipelineGate {
    fn default() -> Self {
        Self::new()
    }
}

/// 在途请求凭证，drop 时流水线转为 Done
pub struct InFlight<'a> {
    gate: &'a PipelineGate,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.gate.state.lock().unwrap_or_else(|e| e.into_inner()) = PipelineState::Done;
    }
}
