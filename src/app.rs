mod contact;
mod floating_skills;
mod header;
mod hero;
mod homepage;
mod lamp;
mod road_car;
mod sections;

use chrono::{DateTime, Datelike};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use header::Header;
use homepage::HomePage;

/// Media query the decorative components consult before animating.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Babji Kilaru - {title}") />
        <Meta
            name="description"
            content="Software engineer building Java/Spring Boot services, React front ends and AWS infrastructure."
        />

        <Router>
            <div class="min-h-screen md:pl-20 lg:pl-24">
                <Header />
                <main id="main-content" role="main" tabindex="-1">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year().to_string())
        .unwrap_or_default();
    view! {
        <footer role="contentinfo" class="py-8 text-center text-sm text-muted">
            "© " {year} " Babji Kilaru"
        </footer>
    }
}
