use leptos::prelude::*;

use crate::{
    content::Profile,
    splash::{Splash, SPLASH_DURATION},
};

/// `true` until [`SPLASH_DURATION`] after mount.
///
/// Stays `true` in server-rendered HTML; the timer only starts once hydrated.
pub fn use_preloader() -> Signal<bool> {
    let splash = RwSignal::new(Splash::default());
    Effect::new(move |_| {
        set_timeout(
            move || splash.update(|s| s.elapse(SPLASH_DURATION)),
            SPLASH_DURATION,
        );
    });
    Signal::derive(move || splash.with(|s| s.is_visible()))
}

#[component]
pub fn Preloader(profile: &'static Profile) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black flex flex-col items-center justify-center z-50">
            <h1 class="text-6xl md:text-8xl text-white mb-4 animate-fade-in">
                {profile.splash_greeting.as_str()}
            </h1>
            <div class="text-4xl md:text-6xl animate-bounce">"🙏"</div>
            <p class="text-gray-400 mt-8 animate-fade-in">{profile.splash_subtitle.as_str()}</p>
        </div>
    }
}
