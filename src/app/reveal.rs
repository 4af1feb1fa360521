use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

use crate::motion::{stagger, Reveal};

/// Flips to `true` the first time `target` intersects the viewport and stays there.
pub fn use_revealed(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    use_intersection_observer(target, move |entries, _| {
        if entries.iter().any(|e| e.is_intersecting()) {
            set_visible(true);
        }
    });
    visible
}

#[component]
pub fn RevealOnScroll(
    reveal: Reveal,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_revealed(target);
    view! {
        <div node_ref=target class=class style=move || reveal.style(visible.get())>
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeader(
    icon: &'static str,
    tag: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center max-w-2xl mx-auto mb-12">
            <RevealOnScroll reveal=Reveal::rise(20.0, 500)>
                <div class="inline-flex items-center gap-2 px-4 py-1.5 mb-4 rounded-full bg-white border border-black/10 text-sm font-medium">
                    <i class=icon></i>
                    <span>{tag}</span>
                </div>
            </RevealOnScroll>
            <RevealOnScroll reveal=Reveal::rise(30.0, 600).with_delay(stagger(1, 0, 100))>
                <h2 class="text-3xl md:text-5xl font-bold tracking-tight">{title}</h2>
            </RevealOnScroll>
            {subtitle
                .map(|s| {
                    view! {
                        <RevealOnScroll reveal=Reveal::rise(20.0, 500).with_delay(stagger(2, 0, 100))>
                            <p class="mt-4 text-lg text-black/60">{s}</p>
                        </RevealOnScroll>
                    }
                })}
        </div>
    }
}
