use crate::{
    camera::{self, WebCapture},
    canvas::CanvasSurface,
    detector::{self, MoveNet},
    hooks,
};
use leptos::prelude::*;
use posecam::{platform::Platform, DetectorConfig, Error, Result, Status};

type VideoRef = NodeRef<leptos::html::Video>;

/// Browser side of a [`posecam::Session`]: the `<video>` element the camera
/// plays into and the signals the view renders.
#[derive(Clone, Copy)]
pub struct WebPlatform {
    pub video: VideoRef,
    pub status: RwSignal<Status>,
    pub running: RwSignal<bool>,
}

impl Platform for WebPlatform {
    type Capture = WebCapture;
    type Detector = MoveNet;
    type Canvas = CanvasSurface;

    async fn open_camera(&self) -> Result<WebCapture> {
        let video = self
            .video
            .get_untracked()
            .ok_or_else(|| Error::DeviceUnavailable("ref has no video".to_string()))?;
        camera::open(video).await
    }

    async fn load_detector(&self, config: &DetectorConfig) -> Result<MoveNet> {
        detector::load(config).await
    }

    async fn next_paint(&self) {
        hooks::next_animation_frame().await
    }

    fn show_status(&self, status: &Status) {
        self.status.set(status.clone());
    }

    fn set_running(&self, running: bool) {
        self.running.set(running);
    }
}
