use leptos::prelude::*;

use crate::{config::SiteConfig, content::Profile};

#[component]
pub fn Avatar(profile: &'static Profile, on_click: Callback<()>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <button
            class="w-20 h-20 rounded-full overflow-hidden ring-2 ring-black/5 cursor-pointer"
            on:click=move |_| on_click.run(())
            aria-label="Show skills"
        >
            <img
                src=config.asset(&profile.photo)
                alt=profile.name.as_str()
                class="w-full h-full object-cover hover:scale-110 transition-transform duration-300"
            />
        </button>
    }
}
