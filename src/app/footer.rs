use leptos::prelude::*;

use crate::motion::{delay_style, Reveal};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn FooterSection(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <section class="w-screen h-full flex-shrink-0 bg-gradient-to-br from-pink-50 via-purple-50 to-orange-50 relative overflow-hidden">
            <div class="max-w-2xl mx-auto h-full flex items-center px-4 md:px-6">
                <div class=move || format!("text-center w-full {}", Reveal::FadeUp.class(active.get()))>
                    <h3 class="text-xl md:text-2xl font-bold text-gray-800 mb-3 md:mb-4 hover:scale-105 hover:text-pink-500 transition">
                        "Goex"
                    </h3>
                    <p class="text-gray-600 mb-4 md:mb-6 text-sm md:text-base">
                        "Contact me to discuss your next project or collaboration."
                    </p>
                    <div
                        class=move || format!("flex justify-center gap-3 md:gap-4 {}", Reveal::Pop.class(active.get()))
                        style=delay_style(0.3)
                    >
                        <a
                            href="https://github.com/Goexz"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub Profile"
                            class="inline-flex items-center justify-center rounded-full border border-pink-200 hover:bg-pink-50 hover:scale-125 hover:rotate-[360deg] active:scale-75 transition duration-500 w-12 h-12 md:w-14 md:h-14 text-xl md:text-2xl"
                        >
                            <i class="devicon-github-original" />
                        </a>
                    </div>
                    <div
                        class=move || {
                            format!(
                                "mt-6 md:mt-8 pt-6 md:pt-8 border-t border-gray-200 {}",
                                Reveal::Fade.class(active.get()),
                            )
                        }
                        style=delay_style(0.5)
                    >
                        <div class="text-gray-500 text-xs md:text-sm flex items-center justify-center gap-1">
                            <span>{format!("© {BUILD_YEAR} ReWest. All rights reserved.")}</span>
                            <span class="hidden md:inline">"|"</span>
                            <span class="hidden md:inline">"Goex"</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
