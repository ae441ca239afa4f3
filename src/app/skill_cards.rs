use leptos::prelude::*;

use crate::{
    motion::{delay_style, progress_style, skill_badge_delay, skill_row_delay, stagger, Reveal},
    skills::{Skill, SkillCategory, SKILL_CATEGORIES},
};

#[component]
pub fn SkillsSection(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    let cards = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| view! { <SkillCard index category active /> })
        .collect_view();

    view! {
        <section class="w-screen h-full flex-shrink-0 bg-gradient-to-br from-purple-50 via-orange-50 to-pink-50 relative overflow-hidden">
            <div class="w-full h-full flex flex-col justify-center px-4 md:px-6 py-4 md:py-6">
                <div class=move || format!("text-center mb-4 md:mb-8 {}", Reveal::FadeUp.class(active.get()))>
                    <h2 class="text-2xl md:text-3xl font-bold text-gray-800 mb-2 md:mb-3 hover:scale-105 hover:text-pink-500 transition">
                        "My Skills & Expertise"
                    </h2>
                    <p class="text-gray-600 text-sm md:text-base">"Here's what I bring to the table"</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-3 md:gap-4 max-w-4xl mx-auto w-full px-2 md:px-0">
                    {cards}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    index: usize,
    category: &'static SkillCategory,
    active: Signal<bool>,
) -> impl IntoView {
    let rows = category
        .skills
        .iter()
        .enumerate()
        .map(|(skill_index, skill)| {
            view! { <SkillRow category_index=index skill_index skill active /> }
        })
        .collect_view();

    view! {
        <div
            class=move || format!("hover:scale-[1.02] hover:shadow-2xl {}", Reveal::Pop.class(active.get()))
            style=delay_style(stagger(0.3, 0.15, index))
        >
            <div class="rounded-xl border-0 bg-white/80 backdrop-blur-sm shadow-sm">
                <div class="pb-1 md:pb-2 px-3 md:px-4 pt-2 md:pt-4">
                    <div class="flex items-center justify-between">
                        <h3 class="flex items-center gap-1.5 md:gap-2 text-sm md:text-lg">
                            <span class="p-1 rounded-lg bg-gradient-to-r from-pink-100 to-purple-100 hover:rotate-[360deg] hover:scale-125 transition duration-500">
                                {category.icon.glyph()}
                            </span>
                            <span class="text-sm md:text-base font-medium hover:text-violet-500">
                                {category.title}
                            </span>
                        </h3>
                        {(category.certifications > 0)
                            .then(move || {
                                view! {
                                    <span
                                        class=move || {
                                            format!(
                                                "inline-flex items-center rounded-full bg-gradient-to-r from-yellow-100 to-orange-100 text-orange-800 border border-orange-200 text-xs px-1.5 py-0.5 {}",
                                                Reveal::Spin.class(active.get()),
                                            )
                                        }
                                        style=delay_style(0.5 + 0.1 * index as f64)
                                        title="Certifications"
                                    >
                                        <span class="mr-1 animate-spin-slow">"🏅"</span>
                                        {category.certifications}
                                    </span>
                                }
                            })}
                    </div>
                    <div class="mt-2 md:mt-4">
                        <div class="flex justify-between items-center mb-1">
                            <span class="text-xs font-medium text-gray-600">"Overall"</span>
                            <span
                                class=move || format!("text-xs font-bold text-gray-800 {}", Reveal::Pop.class(active.get()))
                                style=delay_style(1.0 + 0.1 * index as f64)
                            >
                                {category.average}
                                "%"
                            </span>
                        </div>
                        <div class="w-full bg-gray-200 rounded-full h-1.5">
                            <div
                                class="h-1.5 rounded-full bg-gradient-to-r from-pink-500 to-purple-500"
                                style=move || progress_style(category.average, active.get())
                            />
                        </div>
                    </div>
                </div>
                <div class="space-y-1 md:space-y-2 px-3 md:px-4 pb-2 md:pb-4">{rows}</div>
            </div>
        </div>
    }
}

#[component]
fn SkillRow(
    category_index: usize,
    skill_index: usize,
    skill: &'static Skill,
    active: Signal<bool>,
) -> impl IntoView {
    let level = skill.level;

    view! {
        <div
            class=move || format!("group/skill hover:translate-x-1 {}", Reveal::SlideFromLeft.class(active.get()))
            style=delay_style(skill_row_delay(category_index, skill_index))
        >
            <div class="flex justify-between items-center mb-0.5">
                <div class="flex items-center gap-1 flex-1 min-w-0">
                    <span class="font-medium text-gray-800 text-xs md:text-sm truncate hover:text-violet-500">
                        {skill.name}
                    </span>
                    <span
                        class=move || {
                            format!(
                                "text-xs px-1 rounded-full border {} {}",
                                level.badge_class(),
                                Reveal::Spin.class(active.get()),
                            )
                        }
                        style=delay_style(skill_badge_delay(category_index, skill_index))
                    >
                        {level.to_string()}
                    </span>
                </div>
                <span
                    class=move || format!("text-xs font-semibold text-gray-600 ml-1 {}", Reveal::Pop.class(active.get()))
                    style=delay_style(skill_badge_delay(category_index, skill_index) + 0.2)
                >
                    {skill.percentage}
                    "%"
                </span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-1">
                <div
                    class=format!("h-1 rounded-full {}", level.bar_class())
                    style=move || progress_style(skill.percentage, active.get())
                />
            </div>
        </div>
    }
}
