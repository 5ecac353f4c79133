use leptos::{html, prelude::*};
use leptos_use::{use_clipboard, UseClipboardReturn};

use super::{
    backdrop::ParallaxBackdrop,
    icons::{Icon, ARROW_UP_RIGHT, CHECK, COPY, MAIL, MAP_PIN, PHONE},
    scroll::{use_scroll_progress, ScrollSource},
};
use crate::{
    clipboard::CopyIndicator,
    content::{ContactInfo, Profile},
    parallax::{content_drift, Parallax},
};

const CARD_CLASS: &str = "group flex items-center space-x-4 p-6 bg-white/5 backdrop-blur-sm rounded-xl hover:bg-white/10 transition-all duration-300 border border-white/10 hover:border-white/20";

#[component]
pub fn ContactSection(profile: &'static Profile, contact: &'static ContactInfo) -> impl IntoView {
    let section = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(section, ScrollSource::Window);

    let UseClipboardReturn {
        is_supported, copy, ..
    } = use_clipboard();
    let copied = RwSignal::new(CopyIndicator::default());

    let on_copy = Callback::new(move |(label, value): (&'static str, &'static str)| {
        if !is_supported.get_untracked() {
            log::warn!("clipboard unavailable, couldn't copy {label}");
            return;
        }
        copy(value);
        let Some(expiry) = copied.try_update(|c| c.copied(label)) else {
            return;
        };
        set_timeout(move || copied.update(|c| c.expire(expiry.token)), expiry.after);
    });

    view! {
        <div node_ref=section id="contact" class="relative min-h-screen bg-black overflow-hidden">
            <ParallaxBackdrop progress motion=Parallax::CONTACT />
            <div class="relative z-10 container mx-auto px-8 py-24">
                <div
                    class="max-w-4xl mx-auto text-center mb-24"
                    style=move || content_drift(progress.get(), 60.0, 0.5)
                >
                    <h2 class="text-7xl md:text-8xl font-light mb-8 text-white">"Let's Connect"</h2>
                    <p class="text-xl text-white/70">{profile.availability.as_str()}</p>
                </div>
                <div class="max-w-4xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="space-y-6">
                        <ContactItem
                            icon=MAIL
                            label="Email"
                            value=contact.email.as_str()
                            copyable=true
                            progress
                            copied
                            on_copy
                        />
                        <ContactItem
                            icon=PHONE
                            label="Phone"
                            value=contact.phone.as_str()
                            copyable=true
                            progress
                            copied
                            on_copy
                        />
                        <ContactItem
                            icon=MAP_PIN
                            label="Location"
                            value=contact.location.as_str()
                            progress
                            copied
                            on_copy
                        />
                    </div>
                    <div class="space-y-6">
                        <SocialLink
                            icon_class="devicon-github-plain"
                            label="GitHub"
                            href=contact.github.as_str()
                            progress
                        />
                        <SocialLink
                            icon_class="devicon-linkedin-plain"
                            label="LinkedIn"
                            href=contact.linkedin.as_str()
                            progress
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactItem(
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    #[prop(optional)] copyable: bool,
    progress: ReadSignal<f64>,
    copied: RwSignal<CopyIndicator>,
    on_copy: Callback<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div
            class=CARD_CLASS
            class:cursor-pointer=copyable
            style=move || content_drift(progress.get(), 20.0, 0.3)
            on:click=move |_| {
                if copyable {
                    on_copy.run((label, value));
                }
            }
        >
            <span class="text-white/70 group-hover:text-white transition-colors">
                <Icon path=icon />
            </span>
            <div class="flex-1">
                <p class="text-sm text-white/50 group-hover:text-white/70 transition-colors">
                    {label}
                </p>
                <p class="text-white/90 group-hover:text-white transition-colors">{value}</p>
            </div>
            {copyable
                .then(|| {
                    move || {
                        if copied.with(|c| c.is_copied(label)) {
                            view! {
                                <span class="text-green-400" aria-label="Copied">
                                    <Icon path=CHECK />
                                </span>
                            }
                                .into_any()
                        } else {
                            view! {
                                <span class="text-white/30 group-hover:text-white/50">
                                    <Icon path=COPY />
                                </span>
                            }
                                .into_any()
                        }
                    }
                })}
        </div>
    }
}

#[component]
fn SocialLink(
    icon_class: &'static str,
    label: &'static str,
    href: &'static str,
    progress: ReadSignal<f64>,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=CARD_CLASS
            style=move || content_drift(progress.get(), 20.0, 0.3)
        >
            <i class=format!("{icon_class} text-2xl text-white/70 group-hover:text-white transition-colors") />
            <div class="flex-1">
                <p class="text-sm text-white/50 group-hover:text-white/70 transition-colors">
                    {label}
                </p>
                <p class="text-white/90 group-hover:text-white transition-colors">"View Profile"</p>
            </div>
            <span class="text-white/30 group-hover:text-white/50">
                <Icon path=ARROW_UP_RIGHT />
            </span>
        </a>
    }
}
