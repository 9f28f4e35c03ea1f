pub mod moderation_client;

pub use moderation_client::{
    extract_error_message, HttpModerationClient, ModerationApi, PREDICT_PATH, UPLOAD_CSV_PATH,
    UPLOAD_FIELD,
};
