use leptos::{either::Either, prelude::*};

use super::reveal::{RevealOnScroll, SectionHeader};
use crate::content::{CaseStudy, PortfolioContent};
use crate::motion::{stagger, Reveal};

#[component]
pub fn CaseStudies(content: &'static PortfolioContent) -> impl IntoView {
    view! {
        <section id="case-studies" class="relative px-6 py-24 scroll-mt-8">
            <SectionHeader
                icon="extra-target"
                tag="Product Case Studies"
                title="Thinking Like a PM"
                subtitle="Solving product problems with structured thinking, user insight, and execution clarity"
            />
            <div class="grid gap-8 md:grid-cols-2 max-w-6xl mx-auto">
                {content
                    .case_studies
                    .iter()
                    .enumerate()
                    .map(|(i, study)| {
                        view! {
                            <RevealOnScroll reveal=Reveal::rise(50.0, 600).with_delay(stagger(i, 300, 200))>
                                <CaseStudyCard study />
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
            <RevealOnScroll reveal=Reveal::rise(30.0, 500) class="mt-16 text-center">
                <p class="mb-4 text-lg text-black/70">
                    "Want to see more detailed case studies with full PRDs?"
                </p>
                <a
                    href="#contact"
                    class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-ink text-white font-medium transition-transform hover:-translate-y-0.5 active:scale-95"
                >
                    <span>"Get in Touch"</span>
                    <i class="extra-trending-up"></i>
                </a>
            </RevealOnScroll>
        </section>
    }
}

#[component]
fn CaseStudyCard(study: &'static CaseStudy) -> impl IntoView {
    view! {
        <article
            class="case-study group relative h-full flex flex-col gap-4 p-6 md:p-8 rounded-3xl border border-black/10 bg-white shadow-sm transition-transform duration-300 hover:-translate-y-2"
            style=format!("--card-color: {}; --accent: {};", study.color, study.accent_color)
        >
            <div class="flex items-center justify-between">
                <div class="flex items-center justify-center w-14 h-14 rounded-2xl bg-[var(--card-color)] text-[var(--accent)]">
                    <i class=format!("{} text-2xl", study.icon)></i>
                </div>
                <span class="px-3 py-1 rounded-full bg-[var(--card-color)] text-xs font-semibold">
                    {study.category.as_str()}
                </span>
            </div>

            <h3 class="text-2xl font-bold">{study.title.as_str()}</h3>
            <p class="text-black/70 leading-relaxed">{study.description.as_str()}</p>

            <div class="inline-flex items-center gap-1.5 self-start px-3 py-1 rounded-full bg-[var(--card-color)] text-sm font-medium">
                <i class="extra-zap"></i>
                <span>{study.role.as_str()}</span>
            </div>

            <div class="grid grid-cols-3 gap-2">
                {study
                    .metrics
                    .iter()
                    .map(|metric| {
                        view! {
                            <div class="flex flex-col p-3 rounded-xl bg-black/[0.03]">
                                <span class="text-xs text-black/50">{metric.label.as_str()}</span>
                                <span class="text-sm font-semibold">{metric.value.as_str()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="flex flex-col gap-2">
                {study
                    .highlights
                    .iter()
                    .map(|highlight| {
                        view! {
                            <div class="flex items-start gap-2 text-sm">
                                <i class="extra-arrow-up-right mt-0.5 text-[var(--accent)]"></i>
                                <span>{highlight.as_str()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="flex items-start gap-2 mt-auto p-4 rounded-xl bg-[var(--card-color)]">
                <i class="extra-eye mt-0.5"></i>
                <p class="text-sm italic">{study.insight.as_str()}</p>
            </div>

            // no published write-up means no link, just the decorative corner arrow
            {match study.link.as_deref() {
                Some(url) => {
                    Either::Left(
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="absolute top-6 right-6 text-2xl text-black/40 transition-transform group-hover:translate-x-1 group-hover:-translate-y-1 hover:text-ink"
                                aria-label=format!("Read the full {} case study", study.title)
                            >
                                <i class="extra-arrow-up-right"></i>
                            </a>
                        },
                    )
                }
                None => {
                    Either::Right(
                        view! {
                            <div
                                class="absolute top-6 right-6 text-2xl text-black/20 transition-transform group-hover:translate-x-1 group-hover:-translate-y-1"
                                aria-hidden="true"
                            >
                                <i class="extra-arrow-up-right"></i>
                            </div>
                        },
                    )
                }
            }}
        </article>
    }
}
