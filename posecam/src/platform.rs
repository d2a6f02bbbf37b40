//! The outside world a [`Session`](crate::Session) drives: camera, pose model,
//! display refresh and the status widgets.
//!
//! Everything here runs on one cooperative event loop, so none of the futures
//! are required to be `Send`.

use crate::{Canvas, DetectorConfig, Dimensions, Person, Result, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateOptions {
    pub flip_horizontal: bool,
}

/// A live camera stream bound to a video source.
#[allow(async_fn_in_trait)]
pub trait Capture {
    /// Resolves once the source reports usable dimensions.
    async fn ready(&self) -> Result<Dimensions>;

    /// Stops every track of the stream.
    fn stop(&self);
}

/// Pose model handle; `F` is whatever it reads the current frame from.
#[allow(async_fn_in_trait)]
pub trait Detector<F: ?Sized> {
    async fn estimate(&self, frame: &F, options: EstimateOptions) -> Result<Vec<Person>>;
}

#[allow(async_fn_in_trait)]
pub trait Platform {
    type Capture: Capture;
    type Detector: Detector<Self::Capture>;
    type Canvas: Canvas<Self::Capture>;

    async fn open_camera(&self) -> Result<Self::Capture>;

    async fn load_detector(&self, config: &DetectorConfig) -> Result<Self::Detector>;

    /// Yields until the next display refresh.
    async fn next_paint(&self);

    fn show_status(&self, status: &Status);

    /// Reflects the run state on the toggle control.
    fn set_running(&self, running: bool);
}
