use leptos::prelude::*;

use super::{
    backdrop::ModalFrame,
    icons::{Icon, DOWNLOAD},
};
use crate::{config::SiteConfig, content::Profile};

#[component]
pub fn ResumeModal<F>(profile: &'static Profile, on_close: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let config = expect_context::<SiteConfig>();
    let href = config.asset(&profile.resume);
    let viewer_src = format!("{href}#toolbar=0");
    view! {
        <ModalFrame on_close class="bg-black/50 backdrop-blur-sm text-black">
            <div class="flex items-center justify-center h-full p-4 md:p-8">
                <div class="bg-white rounded-2xl shadow-2xl flex flex-col w-full max-w-3xl h-[95vh] overflow-hidden">
                    <div class="flex items-center justify-between p-4 pr-20 border-b bg-white">
                        <h2 class="text-2xl font-medium">"My Resume"</h2>
                        <a
                            href=href
                            download=profile.resume.as_str()
                            class="flex items-center space-x-2 text-gray-600 hover:text-black transition-colors"
                        >
                            <Icon path=DOWNLOAD class="w-5 h-5" />
                            <span>"Download PDF"</span>
                        </a>
                    </div>
                    <div class="flex-1 bg-gray-50 overflow-hidden">
                        <iframe
                            src=viewer_src
                            class="w-full h-full"
                            title="Resume PDF"
                            style="aspect-ratio: 1/1.4142"
                        />
                    </div>
                </div>
            </div>
        </ModalFrame>
    }
}
