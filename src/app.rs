mod decorations;
mod footer;
mod hero;
mod nav_dots;
mod navigation;
mod skill_cards;
mod stats;

pub use navigation::{use_section_navigator, SectionNav};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    motion::track_style,
    navigator::{NavConfig, Section},
};
use decorations::FloatingDecorations;
use footer::FooterSection;
use hero::HeroSection;
use nav_dots::NavDots;
use skill_cards::SkillsSection;
use stats::StatsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans overflow-hidden">
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
        <Title formatter=|title| format!("ReWest - {title}") />

        <Router>
            <main class="h-screen w-screen overflow-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Portfolio />
                </Routes>
            </main>
        </Router>
    }
}

/// The four sections laid out side by side on a track that slides one
/// viewport per navigation step.
#[component]
fn Portfolio() -> impl IntoView {
    let nav = use_section_navigator(NavConfig::default());
    let sections = Section::ALL.len();

    view! {
        <Title text="Portfolio" />
        <div class="h-full overflow-hidden">
            <FloatingDecorations />
            <NavDots nav />
            <div
                class="flex h-full transition-transform duration-700 ease-in-out"
                style=move || track_style(nav.current.get(), sections)
                data-locked=move || nav.locked.get().to_string()
            >
                <HeroSection active=nav.is_active(Section::Hero) />
                <SkillsSection active=nav.is_active(Section::Skills) />
                <StatsSection active=nav.is_active(Section::Stats) />
                <FooterSection active=nav.is_active(Section::Footer) />
            </div>
        </div>
    }
}
