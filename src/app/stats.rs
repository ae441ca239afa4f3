use leptos::prelude::*;

use crate::{
    motion::{delay_style, stagger, Reveal},
    skills::{stats, SKILL_CATEGORIES},
};

#[component]
pub fn StatsSection(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    let tiles = stats(&SKILL_CATEGORIES)
        .into_iter()
        .enumerate()
        .map(|(i, stat)| {
            view! {
                <div
                    class=move || format!("group hover:scale-110 active:scale-95 {}", Reveal::FadeUp.class(active.get()))
                    style=delay_style(stagger(0.3, 0.15, i))
                >
                    <div class="text-2xl md:text-4xl mb-1 md:mb-2 animate-bounce">{stat.emoji}</div>
                    <div
                        class=move || {
                            format!(
                                "text-xl md:text-3xl font-bold {} mb-1 md:mb-2 {}",
                                stat.color,
                                Reveal::Pop.class(active.get()),
                            )
                        }
                        style=delay_style(stagger(0.0, 0.2, i))
                    >
                        {stat.value}
                    </div>
                    <div class="text-gray-600 text-xs md:text-sm">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="w-screen h-full flex-shrink-0 bg-gradient-to-br from-orange-50 via-pink-50 to-purple-50 relative overflow-hidden">
            <div class="max-w-4xl mx-auto h-full flex items-center px-4 md:px-6">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 md:gap-8 text-center w-full">
                    {tiles}
                </div>
            </div>
        </section>
    }
}
