#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("All fetch attempts failed for {0}")]
    AllSourcesFailed(String),
}
