pub mod download;
pub mod form;
pub mod surface;

pub use download::{DirectoryDownloads, DownloadSink, ObjectUrl, TransientObject};
pub use form::{CommentForm, CommentHistory, UploadForm};
pub use surface::{MemoryTarget, RenderTarget, TerminalTarget};
