use leptos::prelude::*;

use super::avatar::Avatar;
use crate::{content::Profile, overlay::ActiveOverlay};

#[component]
pub fn Header(profile: &'static Profile, on_open: Callback<ActiveOverlay>) -> impl IntoView {
    let link_class = "text-black hover:text-gray-600 transition-colors";
    view! {
        <nav class="flex flex-wrap gap-6 justify-between items-center mb-24">
            <div class="flex items-center space-x-3">
                <Avatar profile on_click=Callback::new(move |_: ()| on_open.run(ActiveOverlay::Skills)) />
                <span class="text-lg font-medium">{profile.name.as_str()}</span>
            </div>
            <div class="flex flex-wrap gap-x-12 gap-y-2">
                <a href="#about" class=link_class>
                    "About"
                </a>
                <a href="#works" class=link_class>
                    "Works"
                </a>
                <button class=link_class on:click=move |_| on_open.run(ActiveOverlay::Skills)>
                    "Skills"
                </button>
                <button class=link_class on:click=move |_| on_open.run(ActiveOverlay::Experience)>
                    "Experience"
                </button>
                <a href="#contact" class=link_class>
                    "Contact"
                </a>
            </div>
        </nav>
    }
}
