use crate::hooks;
use js_sys::Promise;
use posecam::{platform::Capture, Dimensions, Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    DomException, HtmlMediaElement, HtmlVideoElement, MediaStream, MediaStreamConstraints,
    MediaStreamTrack,
};

/// A camera stream playing into a `<video>` element.
pub struct WebCapture {
    stream: MediaStream,
    video: HtmlVideoElement,
}

impl WebCapture {
    pub fn video(&self) -> &HtmlVideoElement {
        &self.video
    }
}

pub async fn open(video: HtmlVideoElement) -> Result<WebCapture> {
    let promise = request_user_media().map_err(acquisition_error)?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(acquisition_error)?
        .dyn_into::<MediaStream>()
        .map_err(|v| Error::DeviceUnavailable(format!("getUserMedia resolved to {:?}", v)))?;

    video.set_src_object(Some(&stream));
    Ok(WebCapture { stream, video })
}

fn request_user_media() -> std::result::Result<Promise, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);
    devices.get_user_media_with_constraints(&constraints)
}

fn acquisition_error(err: JsValue) -> Error {
    match err.dyn_ref::<DomException>() {
        Some(e) => classify(&e.name(), e.message()),
        None => classify("", format!("{:?}", err)),
    }
}

/// Maps a `getUserMedia` DOMException name onto the error taxonomy.
pub(crate) fn classify(name: &str, message: String) -> Error {
    match name {
        "NotAllowedError" | "SecurityError" => Error::PermissionDenied(message),
        "" => Error::DeviceUnavailable(message),
        _ => Error::DeviceUnavailable(format!("{name}: {message}")),
    }
}

/// `loadeddata` means a frame is available; the rest end the wait without
/// one. `emptied`/`abort` fire when `stop` detaches the stream mid-wait.
const READY_EVENTS: [&str; 4] = ["loadeddata", "emptied", "abort", "error"];

/// Outcome of waiting for the first frame, given the event that ended the
/// wait and the element's media error, if any.
pub(crate) fn readiness(event: &str, media_error: Option<(u16, String)>) -> Result<()> {
    match (event, media_error) {
        ("loadeddata", _) => Ok(()),
        ("error", Some((code, message))) if message.is_empty() => {
            Err(Error::DeviceUnavailable(format!("media error {code}")))
        }
        ("error", Some((code, message))) => {
            Err(Error::DeviceUnavailable(format!("media error {code}: {message}")))
        }
        ("error", None) => Err(Error::DeviceUnavailable("media error".to_string())),
        (event, _) => Err(Error::DeviceUnavailable(format!(
            "stream detached before the first frame ({event})"
        ))),
    }
}

impl Capture for WebCapture {
    async fn ready(&self) -> Result<Dimensions> {
        if self.video.ready_state() < HtmlMediaElement::HAVE_CURRENT_DATA {
            let event = hooks::first_event(self.video.as_ref(), &READY_EVENTS)
                .await
                .map_err(|e| Error::DeviceUnavailable(e.to_string()))?;
            let media_error = self.video.error().map(|e| (e.code(), e.message()));
            readiness(&event, media_error)?;
        }
        Ok(Dimensions {
            width: self.video.video_width(),
            height: self.video.video_height(),
        })
    }

    fn stop(&self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
        self.video.set_src_object(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_dom_exceptions() {
        let err = classify("NotAllowedError", "Permission denied".into());
        assert!(matches!(err, Error::PermissionDenied(ref m) if m == "Permission denied"));

        let err = classify("NotFoundError", "Requested device not found".into());
        assert!(matches!(
            err,
            Error::DeviceUnavailable(ref m) if m == "NotFoundError: Requested device not found"
        ));

        let err = classify("", "no window".into());
        assert!(matches!(err, Error::DeviceUnavailable(ref m) if m == "no window"));
        assert!(err.is_device_acquisition());
    }

    #[test]
    fn readiness_events() {
        assert!(readiness("loadeddata", None).is_ok());

        let err = readiness("error", Some((4, "Format error".into()))).unwrap_err();
        assert!(matches!(err, Error::DeviceUnavailable(ref m) if m == "media error 4: Format error"));

        let err = readiness("error", Some((2, String::new()))).unwrap_err();
        assert!(matches!(err, Error::DeviceUnavailable(ref m) if m == "media error 2"));

        let err = readiness("emptied", None).unwrap_err();
        assert!(err.is_device_acquisition());
        assert!(err.to_string().contains("(emptied)"));

        assert!(READY_EVENTS.contains(&"loadeddata"));
        assert!(READY_EVENTS.contains(&"emptied"));
        assert!(READY_EVENTS.contains(&"error"));
    }
}
