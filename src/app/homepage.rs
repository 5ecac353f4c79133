use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::{
    contact::ContactSection,
    experience::ExperienceModal,
    header::Header,
    icons::{Icon, ARROW_UP_RIGHT},
    preloader::{use_preloader, Preloader},
    projects::{ParallaxProjectsView, ProjectDetailModal},
    resume::ResumeModal,
    skills::SkillsModal,
};
use crate::{
    config::build_label,
    content::{portfolio, Portfolio, Profile, Project},
    overlay::ActiveOverlay,
};

#[component]
pub fn HomePage() -> impl IntoView {
    match portfolio() {
        Ok(portfolio) => Either::Left(view! { <Landing portfolio /> }),
        Err(e) => {
            log::error!("portfolio content unavailable: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <p class="p-8 text-center text-gray-500">"Portfolio content is unavailable."</p>
            })
        }
    }
}

#[component]
fn Landing(portfolio: &'static Portfolio) -> impl IntoView {
    let loading = use_preloader();
    let overlay = RwSignal::new(ActiveOverlay::None);

    let on_open = Callback::new(move |next: ActiveOverlay| {
        let prev = overlay.try_update(|o| o.open(next));
        log::debug!("overlay {prev:?} -> {next:?}");
    });
    // closes `kind` only if it is still the active overlay once its exit transition ends
    let close = move |kind: ActiveOverlay| {
        move || {
            overlay.update(|o| {
                o.dismiss(kind);
            });
        }
    };

    view! {
        <Title text=move || overlay.get().title().unwrap_or("Home") />
        <Show
            when=move || !loading.get()
            fallback=move || view! { <Preloader profile=&portfolio.profile /> }
        >
            <div class="min-h-screen bg-white px-8 md:px-16 py-8">
                <Header profile=&portfolio.profile on_open />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-24">
                    <Intro profile=&portfolio.profile on_open />
                    <ProjectList projects=&portfolio.projects on_open />
                </div>
            </div>
            <ContactSection profile=&portfolio.profile contact=&portfolio.contact />
            <Footer name=portfolio.profile.name.as_str() />
        </Show>
        {move || match overlay.get() {
            ActiveOverlay::None => ().into_any(),
            ActiveOverlay::Resume => {
                view! {
                    <ResumeModal
                        profile=&portfolio.profile
                        on_close=close(ActiveOverlay::Resume)
                    />
                }
                    .into_any()
            }
            ActiveOverlay::Skills => {
                view! {
                    <SkillsModal skills=&portfolio.skills on_close=close(ActiveOverlay::Skills) />
                }
                    .into_any()
            }
            ActiveOverlay::Experience => {
                view! {
                    <ExperienceModal
                        experience=&portfolio.experience
                        on_close=close(ActiveOverlay::Experience)
                    />
                }
                    .into_any()
            }
            ActiveOverlay::Projects => {
                view! {
                    <ParallaxProjectsView
                        projects=&portfolio.projects
                        on_close=close(ActiveOverlay::Projects)
                    />
                }
                    .into_any()
            }
            ActiveOverlay::ProjectDetail(i) => {
                match portfolio.projects.get(i) {
                    Some(project) => {
                        view! {
                            <ProjectDetailModal
                                project
                                index=i
                                total=portfolio.projects.len()
                                on_close=close(ActiveOverlay::ProjectDetail(i))
                            />
                        }
                            .into_any()
                    }
                    None => {
                        log::warn!("no project at index {i}");
                        ().into_any()
                    }
                }
            }
        }}
    }
}

#[component]
fn Intro(profile: &'static Profile, on_open: Callback<ActiveOverlay>) -> impl IntoView {
    view! {
        <div id="about" class="pr-4">
            <h1 class="text-7xl font-normal mb-12 leading-tight">
                {profile
                    .greeting
                    .iter()
                    .map(|line| view! { <span class="block">{line.as_str()}</span> })
                    .collect_view()}
            </h1>
            <p class="text-xl mb-12 leading-relaxed max-w-xl">{profile.bio.as_str()}</p>
            <button
                on:click=move |_| on_open.run(ActiveOverlay::Resume)
                class="border-2 border-black rounded-full px-12 py-4 text-lg hover:bg-black hover:text-white transition-all"
            >
                "View Resume"
            </button>
        </div>
    }
}

#[component]
fn ProjectList(projects: &'static [Project], on_open: Callback<ActiveOverlay>) -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<usize>);
    view! {
        <div id="works">
            <div class="flex items-center justify-between mb-12">
                <h2 class="text-gray-500">"MY PROJECTS"</h2>
                <button
                    class="text-sm text-gray-500 hover:text-black transition-colors"
                    on:click=move |_| on_open.run(ActiveOverlay::Projects)
                >
                    "View all →"
                </button>
            </div>
            <div class="space-y-8">
                {projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        let is_hovered = move || hovered.get() == Some(i);
                        view! {
                            <div
                                class="relative border-b border-gray-200 pb-8 last:border-b-0 cursor-pointer"
                                on:mouseenter=move |_| set_hovered.set(Some(i))
                                on:mouseleave=move |_| set_hovered.set(None)
                                on:click=move |_| on_open.run(ActiveOverlay::ProjectDetail(i))
                            >
                                <div class="group flex items-center justify-between">
                                    <span class="text-2xl group-hover:text-gray-600 transition-colors">
                                        {project.title.as_str()}
                                    </span>
                                    <span class=move || {
                                        if is_hovered() {
                                            "transition-all duration-300 opacity-100 translate-x-0"
                                        } else {
                                            "transition-all duration-300 opacity-0 -translate-x-4"
                                        }
                                    }>
                                        <Icon path=ARROW_UP_RIGHT />
                                    </span>
                                </div>
                                <div class=move || {
                                    format!(
                                        "absolute bottom-0 left-0 h-0.5 w-full bg-black origin-left transition-transform duration-500 ease-out {}",
                                        if is_hovered() { "scale-x-100" } else { "scale-x-0" },
                                    )
                                } />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Footer(name: &'static str) -> impl IntoView {
    view! {
        <footer class="bg-black text-white/50 text-sm px-8 py-6 flex justify-between">
            <span>{format!("© {name}")}</span>
            {build_label().map(|label| view! { <span>"Last updated " {label}</span> })}
        </footer>
    }
}
