use leptos::{html, prelude::*};

use super::{
    backdrop::{ModalFrame, ParallaxBackdrop},
    scroll::{use_scroll_progress, ScrollSource},
};
use crate::{
    content::ExperienceEntry,
    parallax::{content_drift, Parallax},
};

#[component]
pub fn ExperienceModal<F>(experience: &'static [ExperienceEntry], on_close: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let container = NodeRef::<html::Div>::new();
    let section = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(section, ScrollSource::Container(container));

    view! {
        <ModalFrame on_close>
            <div node_ref=container class="h-screen overflow-y-auto scroll-smooth">
                <div node_ref=section class="min-h-screen relative">
                    <ParallaxBackdrop progress motion=Parallax::OVERLAY />
                    <div class="relative z-10 container mx-auto px-8 py-24">
                        <h2
                            class="text-7xl md:text-8xl font-light mb-16"
                            style=move || content_drift(progress.get(), 40.0, 0.3)
                        >
                            "Experience"
                        </h2>
                        <div class="space-y-12 max-w-4xl">
                            {experience
                                .iter()
                                .enumerate()
                                .map(|(i, entry)| view! { <ExperienceItem index=i entry /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </ModalFrame>
    }
}

#[component]
fn ExperienceItem(index: usize, entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg border border-white/10 hover:border-white/30 transition-colors group">
            <div class="flex items-start space-x-6">
                <span class="text-5xl font-light text-white/30 group-hover:text-white/70 transition-colors">
                    {format!("{:02}", index + 1)}
                </span>
                <div class="flex-1">
                    <div class="flex flex-wrap items-baseline justify-between gap-2 mb-1">
                        <h3 class="text-2xl text-white/90 group-hover:text-white transition-colors">
                            {entry.title.as_str()}
                        </h3>
                        <span class="text-sm text-white/50">{entry.duration.as_str()}</span>
                    </div>
                    <p class="text-white/60 mb-4">
                        {entry.company.as_str()} " · " {entry.location.as_str()}
                    </p>
                    <ul class="space-y-2">
                        {entry
                            .bullets
                            .iter()
                            .map(|bullet| {
                                view! {
                                    <li class="flex items-start space-x-3 text-white/70">
                                        <span class="mt-3 h-0.5 w-4 shrink-0 bg-white/30" />
                                        <span>{bullet.as_str()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
