use leptos::{html, prelude::*};

use super::{
    backdrop::{ModalFrame, ParallaxBackdrop},
    scroll::{use_scroll_progress, ScrollSource},
};
use crate::{content::SkillSet, parallax::Parallax};

#[component]
pub fn SkillsModal<F>(skills: &'static SkillSet, on_close: F) -> impl IntoView
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
                        <h2 class="text-7xl md:text-8xl font-light mb-16">
                            "Skills &" <br /> "Achievements"
                        </h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-16">
                            <div class="space-y-16">
                                <div>
                                    <h3 class="text-2xl font-light mb-8">"Technical Skills"</h3>
                                    <div class="space-y-6">
                                        {skills
                                            .technical
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="group">
                                                        <div class="flex justify-between mb-2">
                                                            <span class="text-lg text-white/70 group-hover:text-white transition-colors">
                                                                {skill.name.as_str()}
                                                            </span>
                                                            <span class="text-white/50 group-hover:text-white/70 transition-colors">
                                                                {format!("{}%", skill.level)}
                                                            </span>
                                                        </div>
                                                        <div class="h-1 bg-white/10 rounded-full overflow-hidden">
                                                            <div
                                                                class="h-full bg-white/70 group-hover:bg-white transition-all duration-500 rounded-full"
                                                                style=format!("width: {}%", skill.level)
                                                            />
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                                <div>
                                    <h3 class="text-2xl font-light mb-8">"Certifications"</h3>
                                    <div class="space-y-4">
                                        {skills
                                            .certifications
                                            .iter()
                                            .map(|cert| {
                                                view! {
                                                    <div class="flex items-center space-x-4 group">
                                                        <div class="h-0.5 w-8 bg-white/30 group-hover:w-12 group-hover:bg-white transition-all duration-300" />
                                                        <span class="text-lg text-white/70 group-hover:text-white transition-colors">
                                                            {cert.as_str()}
                                                        </span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>
                            <div>
                                <h3 class="text-2xl font-light mb-8">"Notable Achievements"</h3>
                                <div class="space-y-8">
                                    {skills
                                        .achievements
                                        .iter()
                                        .enumerate()
                                        .map(|(i, achievement)| {
                                            view! {
                                                <div class="p-6 rounded-lg border border-white/10 hover:border-white/30 transition-colors group">
                                                    <div class="flex items-start space-x-4">
                                                        <span class="text-5xl font-light text-white/30 group-hover:text-white/70 transition-colors">
                                                            {format!("{:02}", i + 1)}
                                                        </span>
                                                        <div>
                                                            <h4 class="text-xl mb-2 text-white/90 group-hover:text-white transition-colors">
                                                                {achievement.title.as_str()}
                                                            </h4>
                                                            <p class="text-white/70 group-hover:text-white/90 transition-colors">
                                                                {achievement.description.as_str()}
                                                            </p>
                                                        </div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </ModalFrame>
    }
}
