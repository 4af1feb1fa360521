use leptos::prelude::*;

use super::floating::FloatingElements;
use super::reveal::RevealOnScroll;
use crate::content::PortfolioContent;
use crate::motion::{stagger, Reveal};

const BASE_DELAY_MS: u32 = 300;
const STEP_MS: u32 = 150;

fn item(index: usize) -> Reveal {
    Reveal::rise(30.0, 600).with_delay(stagger(index, BASE_DELAY_MS, STEP_MS))
}

#[component]
pub fn Hero(content: &'static PortfolioContent) -> impl IntoView {
    let profile = &content.profile;
    view! {
        <section class="relative min-h-screen flex flex-col items-center justify-center overflow-hidden px-6 py-24">
            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                <div class="bg-shape shape-1 spin-slow"></div>
                <div class="bg-shape shape-2 spin-slower-reverse"></div>
                <div class="bg-shape shape-3 drift"></div>
            </div>

            <FloatingElements content />

            <div class="relative z-10 max-w-4xl text-center">
                <RevealOnScroll reveal=Reveal::pop().with_delay(BASE_DELAY_MS) class="mb-8">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-white border border-black/10 text-sm font-medium">
                        <span class="status-dot"></span>
                        <span>{profile.status.as_str()}</span>
                        <i class="extra-sparkles"></i>
                    </div>
                </RevealOnScroll>

                <RevealOnScroll reveal=item(1)>
                    <h1 class="text-5xl md:text-7xl font-bold tracking-tight leading-tight">
                        <span class="block">"From " <span class="highlight">"Code"</span></span>
                        <span class="block">"to " <span class="highlight-alt">"Products"</span></span>
                    </h1>
                </RevealOnScroll>

                <RevealOnScroll reveal=item(2)>
                    <p class="mt-6 text-lg md:text-xl text-black/70 max-w-2xl mx-auto">
                        "Hey, I'm " <span class="font-semibold text-ink">{profile.name.as_str()}</span>
                        " - " {profile.greeting.as_str()}
                    </p>
                </RevealOnScroll>

                <RevealOnScroll reveal=item(3) class="mt-8">
                    <div class="flex flex-wrap items-center justify-center gap-3">
                        {content
                            .journey
                            .iter()
                            .enumerate()
                            .map(|(i, step)| {
                                let tilt = if i % 2 == 0 { "hover:-rotate-2" } else { "hover:rotate-2" };
                                view! {
                                    {(i > 0)
                                        .then(|| {
                                            view! {
                                                <span
                                                    class="journey-arrow"
                                                    style=format!("animation-delay: {}ms;", stagger(i - 1, 0, 200))
                                                >
                                                    <i class="extra-arrow-right"></i>
                                                </span>
                                            }
                                        })}
                                    <div class=format!(
                                        "journey-tag tag-{} inline-flex items-center gap-2 px-4 py-2 rounded-xl font-medium transition-transform hover:scale-105 {tilt}",
                                        step.tone,
                                    )>
                                        <i class=step.icon.as_str()></i>
                                        <span>{step.label.as_str()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </RevealOnScroll>

                <RevealOnScroll reveal=item(4) class="mt-10">
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href="#experience"
                            class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-ink text-white font-medium transition-transform hover:-translate-y-0.5 active:scale-95"
                        >
                            <span>"View My Journey"</span>
                            <i class="extra-arrow-right"></i>
                        </a>
                        <a
                            href="#case-studies"
                            class="inline-flex items-center gap-2 px-6 py-3 rounded-xl border border-ink font-medium transition-transform hover:-translate-y-0.5 active:scale-95"
                        >
                            <span>"Product Case Studies"</span>
                        </a>
                    </div>
                </RevealOnScroll>

                <RevealOnScroll reveal=item(5) class="mt-12">
                    <div class="flex items-center justify-center gap-6">
                        {content
                            .stats
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! {
                                    {(i > 0).then(|| view! { <div class="w-px h-10 bg-black/15"></div> })}
                                    <div class="flex flex-col items-center">
                                        <span class="text-3xl font-bold">{stat.value.as_str()}</span>
                                        <span class="text-sm text-black/60">{stat.label.as_str()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </RevealOnScroll>
            </div>

            <RevealOnScroll
                reveal=Reveal::rise(0.0, 500).with_delay(1500)
                class="absolute bottom-8 left-1/2 -translate-x-1/2"
            >
                <div class="flex flex-col items-center gap-2 text-sm text-black/50">
                    <div class="scroll-mouse">
                        <div class="scroll-wheel"></div>
                    </div>
                    <span>"Scroll to explore"</span>
                </div>
            </RevealOnScroll>
        </section>
    }
}
