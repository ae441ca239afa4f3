use leptos::prelude::*;

struct Decoration {
    glyph: &'static str,
    class: &'static str,
}

// Animations are the keyframes declared in input.css.
const DECORATIONS: [Decoration; 6] = [
    Decoration {
        glyph: "🌸",
        class: "top-4 left-4 md:top-10 md:left-10 text-lg md:text-2xl hidden sm:block animate-float",
    },
    Decoration {
        glyph: "⭐",
        class: "top-8 right-8 md:top-20 md:right-20 text-base md:text-xl hidden sm:block animate-sparkle",
    },
    Decoration {
        glyph: "🎨",
        class: "bottom-8 left-8 md:bottom-20 md:left-20 text-xl md:text-3xl hidden sm:block animate-bounce",
    },
    Decoration {
        glyph: "💖",
        class: "bottom-4 right-4 md:bottom-10 md:right-10 text-lg md:text-2xl hidden sm:block animate-wiggle",
    },
    Decoration {
        glyph: "🚀",
        class: "top-1/2 left-2 md:left-5 text-sm md:text-lg hidden md:block animate-orbit",
    },
    Decoration {
        glyph: "💡",
        class: "top-1/3 right-2 md:right-5 text-sm md:text-lg hidden md:block animate-drift",
    },
];

/// Fixed emoji floating above every section.
#[component]
pub fn FloatingDecorations() -> impl IntoView {
    DECORATIONS
        .iter()
        .map(|d| {
            view! {
                <div class=format!("fixed z-10 pointer-events-none {}", d.class) aria-hidden="true">
                    {d.glyph}
                </div>
            }
        })
        .collect_view()
}
