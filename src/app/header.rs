use leptos::prelude::*;
use leptos_router::hooks::use_location;

static NAV_ITEMS: &[(&str, &str)] = &[
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("projects", "Projects"),
    ("resume", "Resume"),
    ("contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let hash = use_location().hash;
    let active = move || hash.get().trim_start_matches('#').to_string();

    view! {
        <header class="sticky top-0 z-40 bg-background/90 backdrop-blur border-b border-muted/30">
            <nav class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold">
                    "BK"
                </a>
                <ul class="hidden md:flex gap-6 text-sm">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <li>
                                    <a
                                        href=format!("#{id}")
                                        class=move || {
                                            if active() == id {
                                                "text-cyan font-medium"
                                            } else {
                                                "hover:text-cyan transition-colors duration-200"
                                            }
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
