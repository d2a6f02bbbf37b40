pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("camera permission denied: {0}")]
    PermissionDenied(String),

    #[error("camera unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("failed to load pose model: {0}")]
    ModelLoad(String),

    #[error("pose estimation failed: {0}")]
    Inference(String),

    #[error("failed to draw frame: {0}")]
    Render(String),

    #[error("expected {expected} keypoints per person, got {got}")]
    InvalidPerson { expected: usize, got: usize },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// The camera could not be acquired, for whatever reason.
    pub fn is_device_acquisition(&self) -> bool {
        matches!(self, Self::PermissionDenied(_) | Self::DeviceUnavailable(_))
    }
}
