use leptos::prelude::*;

use super::reveal::RevealOnScroll;
use crate::content::{copyright_year, PortfolioContent};
use crate::motion::{stagger, Reveal};

fn item(index: usize) -> Reveal {
    Reveal::rise(20.0, 500).with_delay(stagger(index, 200, 100))
}

#[component]
pub fn Contact(content: &'static PortfolioContent) -> impl IntoView {
    let profile = &content.profile;
    view! {
        <section id="contact" class="relative px-6 pt-24 pb-12 overflow-hidden scroll-mt-8">
            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                <div class="bg-shape shape-1"></div>
                <div class="bg-shape shape-2"></div>
                <div class="bg-shape shape-3"></div>
            </div>

            <div class="relative max-w-5xl mx-auto">
                <RevealOnScroll reveal=item(0) class="text-center mb-12">
                    <div class="inline-flex items-center gap-2 px-4 py-1.5 mb-4 rounded-full bg-white border border-black/10 text-sm font-medium">
                        <i class="extra-sparkles"></i>
                        <span>"Let's Connect"</span>
                    </div>
                    <h2 class="text-4xl md:text-6xl font-bold tracking-tight">
                        "Ready to Build" <br />
                        <span class="highlight">"Something Great?"</span>
                    </h2>
                    <p class="mt-6 max-w-2xl mx-auto text-lg text-black/70">
                        "I'm actively looking for Product Management opportunities where I can combine my technical background with product thinking. Let's chat!"
                    </p>
                </RevealOnScroll>

                <RevealOnScroll reveal=item(1)>
                    <div class="grid gap-8 md:grid-cols-[3fr_2fr] p-8 md:p-10 rounded-3xl bg-white border border-black/10 shadow-sm">
                        <div>
                            <div class="inline-flex items-center gap-2 px-3 py-1 mb-4 rounded-full bg-[#E5F5F0] text-sm font-medium">
                                <span class="status-dot"></span>
                                <span>{profile.availability.as_str()}</span>
                            </div>
                            <h3 class="text-2xl font-bold">{profile.name.as_str()}</h3>
                            <p class="text-black/60 font-medium">{profile.role_line.as_str()}</p>
                            <p class="mt-4 leading-relaxed text-black/70">
                                {profile.summary.as_str()}
                            </p>
                            <a
                                href=profile.email_url.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 mt-6 px-6 py-3 rounded-xl bg-ink text-white font-medium transition-transform hover:-translate-y-0.5 active:scale-95"
                            >
                                <i class="extra-email"></i>
                                <span>"Drop me an email"</span>
                                <i class="extra-arrow-up-right"></i>
                            </a>
                        </div>
                        <div>
                            <h4 class="mb-4 font-semibold">"Find me on"</h4>
                            <div class="flex flex-wrap gap-3">
                                {content
                                    .social_links
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.url.as_str()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center justify-center w-12 h-12 rounded-2xl text-xl transition-transform duration-200 hover:scale-110 hover:rotate-6 active:scale-95"
                                                style=format!("background-color: {};", link.color)
                                                aria-label=link.name.as_str()
                                            >
                                                <i class=link.icon.as_str()></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="mt-6 space-y-1 text-sm text-black/60">
                                <p>"📍 " {profile.location.as_str()}</p>
                                <p>"🕐 " {profile.remote_note.as_str()}</p>
                            </div>
                        </div>
                    </div>
                </RevealOnScroll>

                <RevealOnScroll reveal=item(2) class="mt-16 text-center text-sm text-black/50">
                    <footer>
                        <p>"Built with " <i class="extra-heart text-red-400"></i> " using Rust + Leptos"</p>
                        <p class="mt-1">
                            {format!("© {} {}. All rights reserved.", copyright_year(), profile.name)}
                        </p>
                    </footer>
                </RevealOnScroll>
            </div>
        </section>
    }
}
