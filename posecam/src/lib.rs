mod config;
mod error;
pub mod platform;
mod schemas;
pub mod session;
pub mod skeleton;
pub mod stats;
mod status;
mod surface;

pub use config::{Config, DetectorConfig, ModelKind};
pub use error::{Error, Result};
pub use schemas::*;
pub use session::Session;
pub use status::{toggle_label, Status, START_LABEL, STOP_LABEL};
pub use surface::{Canvas, Color, Surface};

pub use image;
