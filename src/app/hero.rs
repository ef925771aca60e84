use leptos::prelude::*;

use crate::motion::Typewriter;

use super::floating_skills::FloatingSkills;

const PORTRAIT_SRC: &str = "/portrait.svg";

#[component]
pub fn Hero() -> impl IntoView {
    // labels depend on the real viewport, so they only appear once hydrated
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    view! {
        <section id="home" class="relative min-h-screen flex items-center overflow-hidden">
            <div class="relative z-10 mx-auto w-full max-w-6xl px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-[1.8fr_1fr] gap-12 lg:gap-10 items-center min-h-screen py-24 lg:py-0">
                    <div class="order-2 lg:order-1 relative lg:pr-8">
                        <p class="text-lg text-muted mb-2">"Hi, I'm"</p>
                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold mb-4">"Babji Kilaru"</h1>
                        <h2 class="text-2xl sm:text-3xl font-medium text-cyan mb-8 h-10">
                            <TypewriterText />
                        </h2>
                        <div class="flex flex-wrap gap-4">
                            <a
                                href="#contact"
                                class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                            >
                                "Get in touch"
                            </a>
                            <a
                                href="#projects"
                                class="px-6 py-3 rounded-md font-medium border border-muted/30 hover:bg-brightBlack/20 transition-all duration-200"
                            >
                                "View projects"
                            </a>
                        </div>
                    </div>
                    <div class="order-1 lg:order-2 relative lg:absolute lg:right-0 lg:top-0 lg:bottom-0 lg:w-1/2">
                        <PortraitFrame labels_visible=mounted />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// The portrait box. Label coordinates are percentages of this box, so the
/// face exclusion zone lines up with the picture drawn above them.
#[component]
fn PortraitFrame(#[prop(into)] labels_visible: Signal<bool>) -> impl IntoView {
    view! {
        <div class="relative h-[50vh] lg:h-full w-full overflow-hidden" data-portrait-frame="">
            <FloatingSkills visible=labels_visible />
            <PortraitAccent />
            <div class="absolute inset-0 flex items-center justify-center lg:items-end lg:justify-end z-20">
                <img
                    src=PORTRAIT_SRC
                    alt="Babji Kilaru"
                    class="h-full w-auto max-w-full object-contain object-bottom"
                />
            </div>
        </div>
    }
}

#[component]
fn PortraitAccent() -> impl IntoView {
    view! {
        <div class="absolute inset-0 pointer-events-none z-10">
            <div
                class="absolute inset-x-12 md:inset-x-14 lg:inset-x-16"
                style="top: 38%; bottom: 0%; border-radius: 9999px; background: rgba(148, 163, 184, 0.22); filter: blur(0.5px);"
                aria-hidden="true"
            />
        </div>
    }
}

#[component]
fn TypewriterText() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::default());

    Effect::new(move |_| {
        let delay = typewriter.with(Typewriter::next_delay);
        match set_timeout_with_handle(move || typewriter.update(Typewriter::advance), delay) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::error!("couldn't schedule typewriter: {e:?}"),
        }
    });

    view! {
        <span class="inline-flex items-center">
            <span>{move || typewriter.with(Typewriter::text)}</span>
            <span class="ml-1 w-0.5 h-6 bg-foreground animate-pulse" />
        </span>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_labels_share_the_portrait_frame() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <PortraitFrame labels_visible=true /> }.to_html());

        let frame = html.find("data-portrait-frame").expect("frame rendered");
        let accent = html.find("rgba(148, 163, 184").expect("accent rendered");
        let portrait = html.find("alt=\"Babji Kilaru\"").expect("portrait rendered");
        assert!(frame < accent && accent < portrait);

        // every label sits inside the frame, painted below the accent and portrait
        let labels: Vec<_> = html.match_indices("animate-float").map(|(i, _)| i).collect();
        assert!(!labels.is_empty());
        assert!(labels.iter().all(|&i| frame < i && i < accent));
    }

    #[test]
    fn test_hidden_labels_keep_the_portrait() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <PortraitFrame labels_visible=false /> }.to_html());

        assert!(!html.contains("animate-float"));
        assert!(html.contains(PORTRAIT_SRC));
    }
}
