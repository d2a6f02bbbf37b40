use crate::{canvas::CanvasSurface, config, platform::WebPlatform};
use leptos::{logging::*, prelude::*, task::spawn_local};
use posecam::{toggle_label, Session, Status};
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let status = RwSignal::new(Status::Idle);
    let running = RwSignal::new(false);

    let platform = WebPlatform {
        video: video_ref,
        status,
        running,
    };
    let config = config::load();
    log!("using {}", config.detector.model);
    let session = Rc::new(Session::new(platform, CanvasSurface::new(canvas_ref), config));
    let session = StoredValue::new_local(session);

    let on_toggle = move |_| {
        let session = session.get_value();
        spawn_local(async move {
            if let Err(e) = session.toggle().await {
                error!("toggle failed: {}", e);
            }
        });
    };

    view! {
      <div class="controls">
        <button on:click=on_toggle>{move || toggle_label(running.get())}</button>
        <p class="status">{move || status.get().to_string()}</p>
      </div>
      <div class="player">
        <video node_ref=video_ref controls=false autoplay=true muted=true hidden=true></video>
        <canvas class="frame" node_ref=canvas_ref></canvas>
      </div>
    }
}
