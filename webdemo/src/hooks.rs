use anyhow::{anyhow, Result as AnyhowResult};
use futures::channel::oneshot;
use leptos::{logging::*, prelude::*};
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, EventTarget};

/// Resolves on the next `requestAnimationFrame` callback.
pub async fn next_animation_frame() {
    let (tx, rx) = oneshot::channel();
    request_animation_frame(move || {
        let _ = tx.send(());
    });
    let _ = rx.await;
}

/// Resolves with the type of whichever of `events` `target` fires first.
pub async fn first_event(target: &EventTarget, events: &[&str]) -> AnyhowResult<String> {
    let (tx, rx) = oneshot::channel();
    let mut tx = Some(tx);
    let listener = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |event: Event| {
        if let Some(tx) = tx.take() {
            let _ = tx.send(event.type_());
        }
    }));
    let callback: &js_sys::Function = listener.as_ref().unchecked_ref();

    let attached = events
        .iter()
        .try_for_each(|event| target.add_event_listener_with_callback(event, callback))
        .map_err(|e| anyhow!("failed to attach {events:?} listener: {:?}", e));
    let fired = match attached {
        Ok(()) => rx.await.map_err(|_| anyhow!("{events:?} listener dropped")),
        Err(err) => Err(err),
    };
    for event in events {
        let _ = target
            .remove_event_listener_with_callback(event, callback)
            .inspect_err(|e| {
                error!("failed to detach {event} listener: {:?}", e);
            });
    }

    fired
}
