pub mod result_renderer;
pub mod status_reporter;

pub use result_renderer::{format_score, render_failure, render_verdict};
pub use status_reporter::StatusReporter;
