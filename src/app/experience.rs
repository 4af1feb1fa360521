use leptos::{ev::MouseEvent, html, prelude::*};

use super::reveal::{RevealOnScroll, SectionHeader};
use crate::content::{ExperienceEntry, PortfolioContent};
use crate::motion::{stagger, Reveal, Transition};
use crate::selection::{Selection, Toggle};

/// Only the strongest few contributions are shown when a card opens.
const SHOWN_HIGHLIGHTS: usize = 3;

#[component]
pub fn Experience(content: &'static PortfolioContent) -> impl IntoView {
    let selection = RwSignal::new(Selection::new(content.experience_ids()));
    let expand = content.motion.expand_transition();

    view! {
        <section id="experience" class="relative px-6 py-24 scroll-mt-8">
            <SectionHeader
                icon="extra-briefcase"
                tag="Work Experience"
                title="My Journey So Far"
                subtitle="From building features to understanding users - every role shaped my product thinking"
            />
            <div class="flex flex-col gap-6 max-w-3xl mx-auto">
                {content
                    .experience
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! {
                            <RevealOnScroll reveal=Reveal::rise(30.0, 500)>
                                <ExperienceCard entry latest=index == 0 selection expand />
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(
    entry: &'static ExperienceEntry,
    latest: bool,
    selection: RwSignal<Selection>,
    expand: Transition,
) -> impl IntoView {
    let id = entry.id;
    let panel_id = format!("experience-panel-{id}");
    let button_id = format!("experience-toggle-{id}");
    let panel_ref = NodeRef::<html::Div>::new();
    let panel = Memo::new(move |_| selection.with(|s| s.panel(id)));
    let expanded = move || panel.get().is_expanded();

    let on_toggle = move |_: MouseEvent| {
        match selection.try_update(|s| s.toggle(id)).unwrap_or(Toggle::Ignored) {
            Toggle::Expanded { id, collapsed } => {
                log::debug!("expanded experience {id}, collapsed {collapsed:?}")
            }
            Toggle::Collapsed(id) => log::debug!("collapsed experience {id}"),
            Toggle::Ignored => log::warn!("toggle for unknown experience {id}"),
        }
    };

    let panel_style = move || {
        let height = panel_ref.get().map(|el| el.scroll_height()).unwrap_or(0);
        panel.get().style(height, &expand)
    };

    view! {
        <article
            class="experience-card relative rounded-3xl p-6 md:p-8 border border-black/10 shadow-sm"
            style=format!(
                "background-color: {}; --accent-color: {};",
                entry.color,
                entry.accent_color,
            )
        >
            <div class="flex flex-wrap items-start justify-between gap-4">
                <div class="flex items-center gap-4">
                    <div class="flex items-center justify-center w-12 h-12 rounded-2xl bg-white/70 text-accent">
                        <i class="extra-building text-xl"></i>
                    </div>
                    <div>
                        <h3 class="text-xl font-bold">{entry.role.as_str()}</h3>
                        <p class="text-black/60 font-medium">{entry.company.as_str()}</p>
                    </div>
                </div>
                <div class="flex items-center gap-2">
                    {latest
                        .then(|| {
                            view! {
                                <span class="px-3 py-1 rounded-full bg-ink text-white text-xs font-semibold">
                                    "Latest"
                                </span>
                            }
                        })}
                    <div class="px-3 py-1 rounded-full bg-white/70 text-sm font-medium text-accent">
                        {entry.impact.as_str()}
                    </div>
                </div>
            </div>

            <div class="flex flex-wrap gap-4 mt-4 text-sm text-black/60">
                <div class="flex items-center gap-1.5">
                    <i class="extra-calendar"></i>
                    <span>{entry.period.as_str()}</span>
                </div>
                <div class="flex items-center gap-1.5">
                    <i class="extra-location"></i>
                    <span>{entry.location.as_str()}</span>
                </div>
            </div>

            <p class="mt-4 leading-relaxed">{entry.description.as_str()}</p>

            <div
                id=panel_id.clone()
                node_ref=panel_ref
                role="region"
                aria-labelledby=button_id.clone()
                aria-hidden=move || (!expanded()).to_string()
                style=panel_style
            >
                <h4 class="mt-6 mb-3 font-semibold">"Key Contributions"</h4>
                <ul class="space-y-2">
                    {entry
                        .highlights
                        .iter()
                        .take(SHOWN_HIGHLIGHTS)
                        .enumerate()
                        .map(|(i, highlight)| {
                            let reveal = Reveal::rise(6.0, 250).with_delay(stagger(i, 0, 60));
                            view! {
                                <li
                                    class="flex items-start gap-2"
                                    style=move || reveal.style(expanded())
                                >
                                    <i class="extra-arrow-up-right mt-1 text-accent"></i>
                                    <span>{highlight.as_str()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2 mt-4">
                    {entry
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="px-3 py-1 rounded-full bg-white/70 text-sm">
                                    {skill.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <button
                id=button_id
                type="button"
                class="flex items-center justify-center w-10 h-10 mt-4 mx-auto rounded-full bg-white/70 hover:bg-white transition-colors"
                aria-expanded=move || expanded().to_string()
                aria-controls=panel_id
                aria-label=move || {
                    format!(
                        "{} key contributions for {}",
                        if expanded() { "Collapse" } else { "Expand" },
                        entry.role,
                    )
                }
                on:click=on_toggle
            >
                <svg
                    class=move || {
                        if expanded() {
                            "w-5 h-5 transition-transform duration-200 rotate-180"
                        } else {
                            "w-5 h-5 transition-transform duration-200"
                        }
                    }
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    aria-hidden="true"
                >
                    <path d="m6 9 6 6 6-6" />
                </svg>
            </button>
        </article>
    }
}
