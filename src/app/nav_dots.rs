use leptos::prelude::*;

use super::SectionNav;
use crate::navigator::Section;

#[component]
pub fn NavDots(nav: SectionNav) -> impl IntoView {
    let dots = Section::ALL
        .into_iter()
        .map(|section| {
            let active = nav.is_active(section);
            view! {
                <button
                    title=section.title()
                    aria-label=format!("Go to the {} section", section.name())
                    aria-current=move || if active.get() { "true" } else { "false" }
                    class=move || {
                        let state = if active.get() {
                            "bg-gradient-to-r from-pink-500 to-purple-500 scale-125"
                        } else {
                            "bg-gray-300 hover:bg-gray-400"
                        };
                        let cursor = if nav.locked.get() { "cursor-default" } else { "cursor-pointer" };
                        format!(
                            "w-2 h-2 md:w-3 md:h-3 rounded-full transition-all duration-300 {state} {cursor}",
                        )
                    }
                    on:click=move |_| nav.go_to.run(section.index())
                />
            }
        })
        .collect_view();

    view! {
        <nav class="fixed right-4 md:right-8 top-1/2 -translate-y-1/2 z-20 flex flex-col gap-2 md:gap-3">
            {dots}
        </nav>
    }
}
