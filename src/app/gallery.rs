use leptos::{
    ev::{self, MouseEvent},
    prelude::*,
};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

use super::icons::{Icon, CHEVRON_LEFT, CHEVRON_RIGHT, CLOSE, IMAGE_OFF, ZOOM_IN};
use crate::{
    config::SiteConfig,
    gallery::Gallery,
    image::{ImageLadder, ImageState},
};

/// Image resolved through the fallback ladder, with loading and error placeholders.
#[component]
pub fn ProjectImage(
    #[prop(into)] image_name: Signal<String>,
    #[prop(into)] alt: Signal<String>,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let ladder = RwSignal::new(ImageLadder::new(&config, &image_name.get_untracked()));

    Effect::watch(
        move || image_name.get(),
        move |name, _, _| {
            if ladder.with_untracked(|l| l.name() != name.as_str()) {
                ladder.set(ImageLadder::new(&config, name));
            }
        },
        false,
    );

    let state = move || ladder.with(|l| l.state());

    view! {
        <div class=format!("relative overflow-hidden {class}")>
            <Show when=move || state() == ImageState::Loading>
                <div class="absolute inset-0 bg-gray-200 animate-pulse flex items-center justify-center">
                    <div class="w-10 h-10 border-4 border-black/20 border-t-black/60 rounded-full animate-spin" />
                </div>
            </Show>
            <img
                src=move || ladder.with(|l| l.current_src().to_string())
                alt=move || alt.get()
                on:load=move |_| ladder.update(|l| l.on_load())
                on:error=move |_| ladder.update(|l| l.on_error())
                class=move || {
                    format!(
                        "w-full h-full object-cover transition-opacity duration-500 {}",
                        if state() == ImageState::Loaded { "opacity-100" } else { "opacity-0" },
                    )
                }
            />
            <Show when=move || state() == ImageState::Error>
                <div class="absolute inset-0 bg-gray-200 flex flex-col items-center justify-center text-gray-500">
                    <Icon path=IMAGE_OFF class="h-12 w-12 mb-2" />
                    <p class="text-xs">"Image unavailable"</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ProjectGallery(images: Vec<String>, project_name: &'static str) -> impl IntoView {
    let gallery = RwSignal::new(Gallery::new(images));

    let current = Signal::derive(move || gallery.with(|g| g.current().to_string()));
    let alt = Signal::derive(move || {
        gallery.with(|g| format!("{project_name} - Image {}", g.index() + 1))
    });
    let counter = move || gallery.with(|g| g.counter());
    let has_many = move || gallery.with(|g| g.has_many());

    let next = move |ev: MouseEvent| {
        ev.stop_propagation();
        gallery.update(|g| g.next());
    };
    let previous = move |ev: MouseEvent| {
        ev.stop_propagation();
        gallery.update(|g| g.previous());
    };
    let toggle_fullscreen = move |_: MouseEvent| gallery.update(|g| g.toggle_fullscreen());

    // captured on the window so it runs before the overlay's Escape handler on the document
    let _ = use_event_listener_with_options(
        use_window(),
        ev::keydown,
        move |ev| {
            if ev.key() == "Escape" && gallery.try_update(|g| g.escape()).unwrap_or(false) {
                ev.stop_propagation();
            }
        },
        UseEventListenerOptions::default().capture(true),
    );

    view! {
        <div class="relative w-full rounded-lg overflow-hidden border border-white/20 shadow-2xl group">
            <ProjectImage image_name=current alt class="w-full aspect-video object-cover" />
            <div class="absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                <div class="absolute inset-0 bg-black/30" />
                <Show when=has_many>
                    <button
                        class="absolute left-2 top-1/2 -translate-y-1/2 p-2 bg-black/30 hover:bg-black/50 rounded-full text-white transition-colors"
                        on:click=previous
                        aria-label="Previous image"
                    >
                        <Icon path=CHEVRON_LEFT class="w-5 h-5" />
                    </button>
                    <button
                        class="absolute right-2 top-1/2 -translate-y-1/2 p-2 bg-black/30 hover:bg-black/50 rounded-full text-white transition-colors"
                        on:click=next
                        aria-label="Next image"
                    >
                        <Icon path=CHEVRON_RIGHT class="w-5 h-5" />
                    </button>
                    <div class="absolute bottom-2 left-2 bg-black/50 text-white/80 px-2 py-1 rounded-full text-xs">
                        {counter}
                    </div>
                </Show>
                <button
                    class="absolute bottom-2 right-2 p-2 bg-black/30 hover:bg-black/50 rounded-full text-white transition-colors"
                    on:click=toggle_fullscreen
                    aria-label="View fullscreen"
                >
                    <Icon path=ZOOM_IN class="w-5 h-5" />
                </button>
            </div>
            <Show when=move || gallery.with(|g| g.is_fullscreen())>
                <div
                    class="fixed inset-0 z-[70] bg-black/90 backdrop-blur-lg flex items-center justify-center"
                    on:click=toggle_fullscreen
                >
                    <button
                        class="absolute top-4 right-4 p-2 bg-white/10 hover:bg-white/20 rounded-full text-white z-50 transition-colors"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            gallery.update(|g| g.toggle_fullscreen());
                        }
                        aria-label="Exit fullscreen"
                    >
                        <Icon path=CLOSE />
                    </button>
                    <button
                        class="absolute left-4 top-1/2 -translate-y-1/2 p-2 bg-white/10 hover:bg-white/20 rounded-full text-white z-50 transition-colors"
                        on:click=previous
                        aria-label="Previous image"
                    >
                        <Icon path=CHEVRON_LEFT />
                    </button>
                    <button
                        class="absolute right-4 top-1/2 -translate-y-1/2 p-2 bg-white/10 hover:bg-white/20 rounded-full text-white z-50 transition-colors"
                        on:click=next
                        aria-label="Next image"
                    >
                        <Icon path=CHEVRON_RIGHT />
                    </button>
                    <div
                        class="max-w-4xl max-h-[80vh] w-full relative"
                        on:click=|ev: MouseEvent| ev.stop_propagation()
                    >
                        <ProjectImage image_name=current alt class="w-full h-full rounded-lg" />
                        <div class="absolute bottom-4 left-1/2 -translate-x-1/2 bg-black/50 text-white/80 px-3 py-1 rounded-full text-sm">
                            {counter}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
