//! # Comment Moderator
//!
//! 评论审核服务的客户端编排层：单条评论评分 + CSV 文件批量审核
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有界面资源，只暴露能力
//! - `RenderTarget` - 结果区 / 状态区，每次整体覆盖
//! - `CommentForm` / `CommentHistory` / `UploadForm` - 输入框、评论列表、文件选择
//! - `DownloadSink` - 临时对象引用 + 触发下载
//!
//! ### ② 客户端（Clients）
//! - `clients/` - `/predict` 与 `/upload_csv` 两个接口
//! - `ModerationApi` - 网络边界，测试时替换为脚本化实现
//!
//! ### ③ 业务能力层（Services）
//! - `result_renderer` - 审核结论 → 片段（纯函数）
//! - `StatusReporter` - 状态覆盖写入
//!
//! ### ④ 流程层（Workflow）
//! - `SingleItemModerator` - 校验 → 状态 → 评分 → 渲染 → 写历史
//! - `BatchModerator` - 校验 → 状态 → 上传 → 下载 → 释放
//! - `PipelineGate` - 每条流水线最多一个在途请求
//!
//! ## 模块结构

pub mod app;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{HttpModerationClient, ModerationApi};
pub use config::Config;
pub use error::{ModerationError, ModerationResult};
pub use models::{Fragment, Label, ModerationVerdict, Severity, StatusMessage, Tone};
pub use workflow::{BatchModerator, SingleItemModerator, Submission};
