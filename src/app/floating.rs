use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{
    use_raf_fn_with_options, utils::Pausable, UseRafFnCallbackArgs, UseRafFnOptions,
};

use crate::content::{FloatingTag, PortfolioContent};
use crate::motion::{MotionSettings, Rect, Vec2};

const DOT_COLORS: [&str; 4] = ["#E8E5FF", "#FFE5E5", "#FFF9E6", "#E5F5F0"];

/// Decorative layer behind the hero: skill tags that dodge the pointer, plus dots.
#[component]
pub fn FloatingElements(content: &'static PortfolioContent) -> impl IntoView {
    view! {
        <div class="absolute inset-0 z-0 pointer-events-none hidden md:block" aria-hidden="true">
            {content
                .floating_tags
                .iter()
                .map(|tag| view! { <FloatingTagView tag motion=content.motion /> })
                .collect_view()}
            {content
                .dots
                .iter()
                .enumerate()
                .map(|(i, dot)| {
                    let style = format!(
                        "top: {}%; left: {}%; width: {}px; height: {}px; background-color: {}; animation-delay: {}s; --bob-duration: {}s;",
                        dot.top,
                        dot.left,
                        dot.size,
                        dot.size,
                        DOT_COLORS[i % DOT_COLORS.len()],
                        dot.delay,
                        dot.duration,
                    );
                    view! { <div class="floating-dot" style=style></div> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FloatingTagView(tag: &'static FloatingTag, motion: MotionSettings) -> impl IntoView {
    let tag_ref = NodeRef::<html::Div>::new();
    let follow = StoredValue::new(motion.follow());
    let (offset, set_offset) = signal(Vec2::ZERO);
    let (animating, set_animating) = signal(false);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let settled = follow
                .try_update_value(|f| f.tick(args.delta / 1000.0))
                .unwrap_or(true);
            set_offset(follow.with_value(|f| f.offset()));
            if settled {
                set_animating(false);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    // the frame loop only runs while the spring is moving
    Effect::new(move |_| {
        if animating.get() {
            resume();
        } else {
            pause();
        }
    });

    let on_move = move |ev: MouseEvent| {
        let el = if let Some(el) = tag_ref.get_untracked() {
            el
        } else {
            return;
        };
        let bounds = el.get_bounding_client_rect();
        let rect = Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        };
        let pointer = Vec2::new(ev.client_x() as f64, ev.client_y() as f64);
        follow.update_value(|f| {
            f.on_pointer_move(rect, pointer);
        });
        set_animating(true);
    };

    let on_leave = move |_: MouseEvent| {
        follow.update_value(|f| f.on_pointer_leave());
        set_animating(true);
    };

    let wrapper_style = format!(
        "{} animation-delay: {}s; --bob-duration: {}s;",
        tag.anchor.css(),
        tag.delay,
        tag.duration,
    );
    let color = tag.color.as_str();

    view! {
        <div class="floating-wrapper absolute pointer-events-auto" style=wrapper_style>
            <div
                node_ref=tag_ref
                class="floating-tag flex items-center gap-2 px-4 py-2 rounded-2xl border border-black/10 shadow-sm text-sm font-medium select-none"
                style=move || {
                    let o = offset.get();
                    format!(
                        "background-color: {color}; transform: translate({:.2}px, {:.2}px);",
                        o.x,
                        o.y,
                    )
                }
                on:mousemove=on_move
                on:mouseleave=on_leave
            >
                <i class=tag.icon.as_str()></i>
                <span>{tag.label.as_str()}</span>
            </div>
        </div>
    }
}
