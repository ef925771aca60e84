use leptos::{html, prelude::*};
use leptos_use::use_media_query;

use crate::motion::{lamp::LAMP_SIZE, AnchorRect, LampPosition};

use super::REDUCED_MOTION_QUERY;

const CONE_WIDTH: f64 = 220.0;
const CONE_HEIGHT: f64 = 420.0;

/// Desk lamp hanging from the top of the viewport above `anchor`.
#[component]
pub fn HangingLamp(#[prop(into)] anchor: Signal<Option<AnchorRect>>) -> impl IntoView {
    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);
    let swing = move || {
        if reduced_motion.get() {
            "transform-origin: top center; animation: none;"
        } else {
            "transform-origin: top center; animation: lamp-swing 6s ease-in-out infinite alternate;"
        }
    };

    move || {
        anchor.get().map(|anchor| {
            let lamp = LampPosition::above(anchor);
            let shade_bottom = lamp.top + lamp.shade_height();
            view! {
                <div class="hidden md:block fixed top-0 left-0 z-30 pointer-events-none" style=swing>
                    <div
                        class="absolute"
                        style=format!(
                            "left: {}px; top: 0; width: 2px; height: {}px; transform: translateX(-1px); background: linear-gradient(180deg, rgba(0,0,0,0.4), rgba(0,0,0,0.1));",
                            lamp.left,
                            lamp.cord_height,
                        )
                    />
                    <div
                        class="absolute"
                        style=format!(
                            "left: {}px; top: {}px; width: {LAMP_SIZE}px; height: {}px; background: linear-gradient(180deg, #1f2937 0%, #111827 100%); clip-path: polygon(10% 0%, 90% 0%, 100% 100%, 0% 100%); box-shadow: 0 6px 12px rgba(0,0,0,0.2); border-radius: 6px;",
                            lamp.left - LAMP_SIZE / 2.0 + 1.0,
                            lamp.top,
                            lamp.shade_height(),
                        )
                    />
                    <div
                        class="absolute rounded-full blur-md"
                        style=format!(
                            "left: {}px; top: {}px; width: 18px; height: 18px; background: rgba(253,224,71,0.7);",
                            lamp.left - 10.0,
                            lamp.top - 4.0,
                        )
                    />
                    <div
                        class="absolute"
                        style=format!(
                            "left: {}px; top: {}px; width: {CONE_WIDTH}px; height: {CONE_HEIGHT}px; background: radial-gradient(ellipse at top, rgba(253,224,71,0.18), transparent 70%); clip-path: polygon(40% 0%, 60% 0%, 100% 100%, 0% 100%);",
                            lamp.left - CONE_WIDTH / 2.0,
                            shade_bottom,
                        )
                    />
                </div>
            }
        })
    }
}

/// Vertical strip of profile links; the lamp hangs above it.
#[component]
pub fn SocialLinks(container: NodeRef<html::Div>) -> impl IntoView {
    view! {
        <div
            node_ref=container
            class="hidden md:flex fixed left-4 lg:left-6 top-1/2 -translate-y-1/2 flex-col items-center gap-3 z-30"
        >
            <a
                href="https://linkedin.com"
                target="_blank"
                rel="noopener noreferrer"
                class="text-blue hover:text-brightBlue text-2xl"
                aria-label="LinkedIn"
            >
                <i class="devicon-linkedin-plain"></i>
            </a>
            <a
                href=format!("mailto:{}", crate::contact::CONTACT_EMAIL)
                class="text-yellow hover:text-brightYellow text-2xl"
                aria-label="Email"
            >
                <i class="extra-email"></i>
            </a>
            <a
                href="https://github.com"
                target="_blank"
                rel="noopener noreferrer"
                class="text-white hover:text-brightWhite text-2xl"
                aria-label="GitHub"
            >
                <i class="devicon-github-plain"></i>
            </a>
        </div>
    }
}
