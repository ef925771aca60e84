use leptos::{either::EitherOf3, prelude::*};
use leptos_use::{use_media_query, use_window_size, UseWindowSizeReturn};

use crate::skills::{generate_positions, static_subset, weight_to_style, PositionedLabel, ViewportConfig};

use super::REDUCED_MOTION_QUERY;

/// Skill labels drifting around the hero portrait.
///
/// Labels are laid out again only when the viewport changes device class; a
/// resize within the same class reuses the previous layout.
#[component]
pub fn FloatingSkills(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);

    let viewport = Memo::new(move |_| ViewportConfig::for_width(width.get()));
    let labels = Memo::new(move |_| {
        let vp = viewport.get();
        log::debug!("laying out skill labels for {:?}", vp.class);
        generate_positions(vp.count, vp.is_mobile(), &vp.zone)
    });

    move || {
        if !visible.get() {
            EitherOf3::A(())
        } else if reduced_motion.get() {
            EitherOf3::B(view! {
                <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                    <div class="grid grid-cols-2 gap-2 bg-background/90 border border-muted/30 rounded-2xl p-4 shadow-sm">
                        {labels.with(|labels| static_subset(labels).iter().map(static_label).collect_view())}
                    </div>
                </div>
            })
        } else {
            EitherOf3::C(view! {
                <div class="absolute inset-0 overflow-hidden pointer-events-none z-0">
                    {labels.with(|labels| labels.iter().map(floating_label).collect_view())}
                </div>
            })
        }
    }
}

fn static_label(label: &PositionedLabel) -> impl IntoView {
    let style = weight_to_style(label.weight);
    view! {
        <span
            class="inline-flex items-center justify-center px-2.5 py-1.5 rounded-xl bg-brightBlack/30"
            style=format!("font-size: {}px; font-weight: {};", style.font_size, style.font_weight)
        >
            {label.name.clone()}
        </span>
    }
}

fn floating_label(label: &PositionedLabel) -> impl IntoView {
    let style = weight_to_style(label.weight);
    view! {
        <div
            class="absolute select-none animate-float"
            style=format!(
                "left: {}%; top: {}%; animation-duration: {}s; animation-delay: {}s; opacity: {}; max-width: 38%;",
                label.x,
                label.y,
                label.animation_duration,
                label.delay,
                style.opacity,
            )
        >
            <span
                class="cursor-default transition-all duration-200 hover:scale-105 hover:opacity-100"
                style=format!("font-size: {}px; font-weight: {};", style.font_size, style.font_weight)
            >
                {label.name.clone()}
            </span>
        </div>
    }
}
