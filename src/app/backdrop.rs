use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::icons::{Icon, CLOSE};
use crate::{
    overlay::CLOSE_TRANSITION,
    parallax::{glow_drift, grid_drift, Parallax},
};

/// Rotating ring, pulsing dots, grid and glow that move with scroll progress.
#[component]
pub fn ParallaxBackdrop(progress: ReadSignal<f64>, motion: Parallax) -> impl IntoView {
    view! {
        <div class="absolute inset-0 opacity-80 pointer-events-none">
            <div
                class="absolute -right-40 -top-40 w-96 h-96 border-2 border-white/20 rounded-full transition-transform duration-700"
                style=move || motion.ring(progress.get())
            />
            <div class="absolute top-1/4 left-1/4 w-2 h-2 bg-white rounded-full animate-pulse" />
            <div class="absolute bottom-1/3 right-1/3 w-2 h-2 bg-white rounded-full animate-pulse delay-150" />
            <div class="absolute top-2/3 left-1/3 w-2 h-2 bg-white rounded-full animate-pulse delay-300" />
            <div
                class="absolute inset-0 backdrop-grid"
                style=move || grid_drift(progress.get())
            />
            <div
                class="absolute -top-40 -right-40 w-96 h-96 bg-gradient-to-br from-blue-500/20 to-purple-500/20 blur-3xl rounded-full"
                style=move || glow_drift(progress.get())
            />
        </div>
    }
}

/// Full-viewport overlay with a close button.
///
/// Closing fades the overlay out for [`CLOSE_TRANSITION`] before `on_close` runs.
/// Escape closes it too. `on_close` may run after this frame has unmounted.
#[component]
pub fn ModalFrame<F>(
    on_close: F,
    #[prop(default = "bg-black text-white")] class: &'static str,
    children: Children,
) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let (closing, set_closing) = signal(false);

    let close = move || {
        if closing.get_untracked() {
            return;
        }
        set_closing.set(true);
        set_timeout(on_close, CLOSE_TRANSITION);
    };

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });

    view! {
        <div
            role="dialog"
            aria-modal="true"
            class=move || {
                format!(
                    "fixed inset-0 z-50 transition-opacity duration-300 {class} {}",
                    if closing.get() { "opacity-0" } else { "opacity-100 animate-fade-in" },
                )
            }
        >
            <button
                on:click=move |_| close()
                class="fixed top-8 right-8 z-[60] p-2 bg-white/10 hover:bg-white/20 rounded-full transition-colors"
                aria-label="Close"
            >
                <Icon path=CLOSE />
            </button>
            {children()}
        </div>
    }
}
