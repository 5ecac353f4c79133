use leptos::{html, prelude::*};

use super::{
    backdrop::{ModalFrame, ParallaxBackdrop},
    gallery::ProjectGallery,
    icons::{Icon, ARROW_UP_RIGHT},
    scroll::{use_scroll_progress, ScrollSource},
};
use crate::{
    content::Project,
    parallax::{content_drift, position_label, Parallax},
};

/// Every project as its own full-height parallax section.
#[component]
pub fn ParallaxProjectsView<F>(projects: &'static [Project], on_close: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let container = NodeRef::<html::Div>::new();
    let total = projects.len();
    view! {
        <ModalFrame on_close>
            <div node_ref=container class="h-screen overflow-y-auto scroll-smooth">
                {projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! { <ParallaxProject project index total container /> }
                    })
                    .collect_view()}
            </div>
        </ModalFrame>
    }
}

#[component]
fn ParallaxProject(
    project: &'static Project,
    index: usize,
    total: usize,
    container: NodeRef<html::Div>,
) -> impl IntoView {
    let section = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(section, ScrollSource::Container(container));

    view! {
        <div node_ref=section class="min-h-screen bg-black text-white relative overflow-hidden">
            <ParallaxBackdrop progress motion=Parallax::OVERLAY />
            <div class="absolute top-8 left-8 text-sm opacity-50">
                {position_label(index, total)}
            </div>
            <div class="absolute top-8 right-24 flex flex-wrap justify-end gap-2">
                <Tags project />
            </div>
            <div
                class="min-h-screen flex items-center transition-all duration-1000"
                style=move || content_drift(progress.get(), 100.0, 0.5)
            >
                <div class="container mx-auto px-8 pt-24">
                    <h2 class="text-7xl md:text-8xl font-light mb-16">{project.title.as_str()}</h2>
                    <Facts project />
                    <div class="mt-16 max-w-2xl">
                        <p class="text-lg text-gray-400 leading-relaxed">
                            {project.description.as_str()}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One project's full detail with its gallery.
#[component]
pub fn ProjectDetailModal<F>(
    project: &'static Project,
    index: usize,
    total: usize,
    on_close: F,
) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let container = NodeRef::<html::Div>::new();
    let section = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(section, ScrollSource::Container(container));

    view! {
        <ModalFrame on_close>
            <div node_ref=container class="h-screen overflow-y-auto scroll-smooth">
                <div node_ref=section class="min-h-screen relative overflow-hidden">
                    <ParallaxBackdrop progress motion=Parallax::OVERLAY />
                    <div class="absolute top-8 left-8 text-sm opacity-50">
                        {position_label(index, total)}
                    </div>
                    <div class="relative z-10 container mx-auto px-8 py-24">
                        <div style=move || content_drift(progress.get(), 60.0, 0.3)>
                            <div class="flex flex-wrap gap-2 mb-8">
                                <Tags project />
                            </div>
                            <h2 class="text-6xl md:text-7xl font-light mb-12">
                                {project.title.as_str()}
                            </h2>
                            <Facts project />
                        </div>
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 mt-16">
                            <ProjectGallery
                                images=project.images.clone()
                                project_name=project.title.as_str()
                            />
                            <div class="space-y-8">
                                <p class="text-lg text-gray-400 leading-relaxed">
                                    {project.description.as_str()}
                                </p>
                                <Highlights project />
                                <Links project />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </ModalFrame>
    }
}

#[component]
fn Tags(project: &'static Project) -> impl IntoView {
    project
        .tags
        .iter()
        .map(|tag| {
            view! {
                <span class="px-4 py-2 rounded-full border border-white/20 text-sm">
                    {tag.as_str()}
                </span>
            }
        })
        .collect_view()
}

#[component]
fn Facts(project: &'static Project) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-8 text-sm">
            <div>
                <h3 class="font-medium mb-2">"Project"</h3>
                <p>{project.title.as_str()}</p>
            </div>
            <div>
                <h3 class="font-medium mb-2">"Role"</h3>
                <p>{project.role.as_str()}</p>
            </div>
            <div>
                <h3 class="font-medium mb-2">"Date"</h3>
                <p>{project.date.as_str()}</p>
            </div>
        </div>
    }
}

#[component]
fn Highlights(project: &'static Project) -> impl IntoView {
    (!project.highlights.is_empty()).then(|| {
        view! {
            <div>
                <h3 class="text-xl font-light mb-4">"Highlights"</h3>
                <ul class="space-y-3">
                    {project
                        .highlights
                        .iter()
                        .map(|h| {
                            view! {
                                <li class="flex items-start space-x-3 text-white/70">
                                    <span class="mt-3 h-0.5 w-6 shrink-0 bg-white/30" />
                                    <span>{h.as_str()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    })
}

#[component]
fn Links(project: &'static Project) -> impl IntoView {
    let links = [("Repository", &project.repository), ("Live demo", &project.demo)];
    view! {
        <div class="flex flex-wrap gap-4">
            {links
                .into_iter()
                .filter_map(|(label, href)| href.as_deref().map(|href| (label, href)))
                .map(|(label, href)| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center space-x-2 px-6 py-3 rounded-full border border-white/20 hover:border-white/50 hover:bg-white/10 transition-all"
                        >
                            <span>{label}</span>
                            <Icon path=ARROW_UP_RIGHT class="w-4 h-4" />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
