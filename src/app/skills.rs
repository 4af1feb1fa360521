use leptos::{html, prelude::*};

use super::reveal::{use_revealed, RevealOnScroll, SectionHeader};
use crate::content::{PortfolioContent, TechSkill};
use crate::motion::{stagger, Easing, Reveal, Transition};

fn item(index: usize) -> Reveal {
    Reveal::rise(20.0, 500).with_delay(stagger(index, 200, 100))
}

#[component]
pub fn Skills(content: &'static PortfolioContent) -> impl IntoView {
    view! {
        <section class="relative px-6 py-24 bg-white/60">
            <SectionHeader
                icon="extra-sparkles"
                tag="Skills & Superpowers"
                title="What I Bring to the Table"
            />
            <div class="grid gap-12 lg:grid-cols-2 max-w-6xl mx-auto">
                <div>
                    <RevealOnScroll reveal=item(0)>
                        <GroupHeader
                            icon="extra-lightbulb"
                            title="Product Skills"
                            subtitle="Building product intuition"
                            tint="#E8E5FF"
                        />
                    </RevealOnScroll>
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">
                        {content
                            .product_skills
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                let tilt = if i % 2 == 0 { "hover:rotate-2" } else { "hover:-rotate-2" };
                                view! {
                                    <RevealOnScroll reveal=item(i + 1)>
                                        <div
                                            class=format!(
                                                "flex flex-col items-center gap-3 p-5 rounded-2xl text-center transition-transform duration-200 hover:scale-105 {tilt}",
                                            )
                                            style=format!("background-color: {};", skill.color)
                                        >
                                            <i class=format!("{} text-2xl", skill.icon)></i>
                                            <span class="text-sm font-medium">{skill.label.as_str()}</span>
                                        </div>
                                    </RevealOnScroll>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div>
                    <RevealOnScroll reveal=item(0)>
                        <GroupHeader
                            icon="extra-code"
                            title="Technical Foundation"
                            subtitle="My developer roots"
                            tint="#E5F5F0"
                        />
                    </RevealOnScroll>
                    <div class="flex flex-col gap-5">
                        {content
                            .tech_skills
                            .iter()
                            .enumerate()
                            .map(|(index, skill)| {
                                view! {
                                    <RevealOnScroll reveal=item(index + 1)>
                                        <SkillBar skill index />
                                    </RevealOnScroll>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn GroupHeader(
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    tint: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-6">
            <div
                class="flex items-center justify-center w-12 h-12 rounded-2xl"
                style=format!("background: {tint};")
            >
                <i class=format!("{icon} text-xl")></i>
            </div>
            <div>
                <h3 class="text-xl font-bold">{title}</h3>
                <p class="text-sm text-black/60">{subtitle}</p>
            </div>
        </div>
    }
}

/// Proficiency bar that fills to `skill.level` once scrolled into view.
#[component]
fn SkillBar(skill: &'static TechSkill, index: usize) -> impl IntoView {
    let bar_ref = NodeRef::<html::Div>::new();
    let visible = use_revealed(bar_ref);
    let level = skill.level.min(100);
    let fill = Transition::new(1000, Easing::SMOOTH).with_delay(stagger(index, 0, 100));

    view! {
        <div>
            <div class="flex justify-between mb-2 text-sm font-medium">
                <span>{skill.name.as_str()}</span>
                <span class="text-black/60">{format!("{level}%")}</span>
            </div>
            <div
                node_ref=bar_ref
                class="h-2.5 rounded-full bg-black/10 overflow-hidden"
                role="progressbar"
                aria-label=skill.name.as_str()
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=level.to_string()
            >
                <div
                    class="h-full rounded-full skill-fill"
                    style=move || {
                        let width = if visible.get() { level } else { 0 };
                        format!("width: {width}%; transition: {};", fill.css(&["width"]))
                    }
                ></div>
            </div>
        </div>
    }
}
