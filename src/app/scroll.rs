use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::parallax::scroll_progress;

/// Where the scroll events that move a tracked element come from.
#[derive(Clone, Copy)]
pub enum ScrollSource {
    Window,
    /// An overlay's own scrollable container.
    Container(NodeRef<html::Div>),
}

/// Tracks how far `tracked` has moved through the viewport.
///
/// Recomputed on every scroll event from `source` and once after mount.
pub fn use_scroll_progress(tracked: NodeRef<html::Div>, source: ScrollSource) -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);

    let update = move || {
        let Some(el) = tracked.get_untracked() else {
            return;
        };
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let rect = el.get_bounding_client_rect();
        set_progress.set(scroll_progress(viewport, rect.top(), rect.height()));
    };

    match source {
        ScrollSource::Window => {
            let _ = use_event_listener(use_window(), ev::scroll, move |_| update());
        }
        ScrollSource::Container(container) => {
            let _ = use_event_listener(container, ev::scroll, move |_| update());
        }
    }

    Effect::new(move |_| {
        if tracked.get().is_some() {
            update();
        }
    });

    progress
}
