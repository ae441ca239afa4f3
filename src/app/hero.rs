use leptos::prelude::*;

use crate::motion::{delay_style, orbit_position, stagger, Reveal};

const GITHUB_URL: &str = "https://github.com/Goexz";
const PARTICLES: usize = 6;

#[component]
pub fn HeroSection(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    // children of the text column come in one after the other
    let item = move |i: usize| {
        (
            move || Reveal::FadeUp.class(active.get()),
            delay_style(stagger(0.3, 0.15, i)),
        )
    };
    let (title_class, title_delay) = item(0);
    let (blurb_class, blurb_delay) = item(1);
    let (button_class, button_delay) = item(2);

    view! {
        <section class="w-screen h-full flex-shrink-0 bg-gradient-to-br from-pink-50 via-purple-50 to-orange-50 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-r from-pink-100/50 to-purple-100/50" />
            <div class="absolute top-32 left-1/4 w-8 h-8 md:w-12 md:h-12 bg-gradient-to-r from-pink-200 to-purple-200 rounded-full opacity-40 hidden sm:block animate-float" />
            <div class="absolute bottom-32 right-1/4 w-6 h-6 md:w-8 md:h-8 bg-gradient-to-r from-orange-200 to-pink-200 rounded-full opacity-50 hidden sm:block animate-orbit" />

            <div class="relative max-w-6xl mx-auto h-full flex items-center px-4 md:px-6">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 md:gap-12 items-center w-full">
                    <div class=move || {
                        format!(
                            "text-center lg:text-left order-2 lg:order-1 {}",
                            Reveal::SlideFromLeft.class(active.get()),
                        )
                    }>
                        <h1
                            class=move || {
                                format!(
                                    "text-3xl md:text-4xl lg:text-6xl xl:text-7xl font-bold bg-gradient-to-r from-pink-600 via-purple-600 to-orange-600 bg-clip-text text-transparent mb-4 md:mb-6 hover:scale-105 {}",
                                    title_class(),
                                )
                            }
                            style=title_delay
                        >
                            "Hi, I'm ReWest! 👋"
                        </h1>
                        <div
                            class=move || format!("space-y-3 md:space-y-4 mb-6 md:mb-8 {}", blurb_class())
                            style=blurb_delay
                        >
                            <p class="text-lg md:text-xl text-gray-700 font-medium">
                                "Full-Stack Developer & Blockchain Enthusiast"
                            </p>
                            <p class="text-xs md:text-md text-gray-600 leading-relaxed">
                                "Driven by a passion for innovation, I expanded my skillset beyond web development and began focusing on blockchain technology. I have studied platforms like Ethereum and Hathor, as well as smart contract development and related decentralized technologies. This shift represents my commitment to evolving as a developer and embracing cutting-edge solutions in the tech landscape."
                            </p>
                            <p class="text-sm md:text-lg text-gray-600 leading-relaxed">
                                "🚀 Currently exploring Web3 technologies and smart contract development"
                                <br />
                                "💡 Building secure and decentralized experiences"
                                <br />
                                "🎨 smart contracts, blockchain protocols"
                                <br />
                                "✨ Web3 technologies. Passionate about transparency, clean architecture, and pushing the boundaries of innovation."
                            </p>
                        </div>
                        <div
                            class=move || format!("flex justify-center lg:justify-start {}", button_class())
                            style=button_delay
                        >
                            <a
                                href=GITHUB_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center border border-purple-200 text-purple-700 hover:bg-purple-50 hover:scale-110 active:scale-90 transition-transform px-6 md:px-8 py-3 md:py-4 rounded-full bg-transparent text-base md:text-lg font-medium"
                            >
                                <i class="devicon-github-original mr-2" />
                                "View My Work"
                            </a>
                        </div>
                    </div>

                    <div class=move || {
                        format!(
                            "relative flex justify-center lg:justify-end order-1 lg:order-2 {}",
                            Reveal::SlideFromRight.class(active.get()),
                        )
                    }>
                        <ProfilePhoto />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfilePhoto() -> impl IntoView {
    let particles = (0..PARTICLES)
        .map(|i| {
            let (top, left) = orbit_position(i, PARTICLES, 140.0);
            let style = format!(
                "top: {top:.1}px; left: {left:.1}px; animation-delay: {:.1}s;",
                i as f64 * 0.5
            );
            view! {
                <div
                    class="absolute w-2 h-2 md:w-3 md:h-3 bg-gradient-to-r from-pink-400 to-purple-400 rounded-full hidden md:block animate-twinkle"
                    style=style
                />
            }
        })
        .collect_view();

    view! {
        <div class="relative">
            <div class="absolute -inset-1 bg-gradient-to-r from-pink-400 via-purple-400 to-orange-400 rounded-3xl blur-sm opacity-75 animate-spin-slow" />
            <div class="absolute -inset-2 bg-gradient-to-r from-orange-300 via-pink-300 to-purple-300 rounded-3xl blur-md opacity-50 animate-spin-reverse" />
            <div class="absolute -inset-4 bg-gradient-to-r from-pink-200 via-purple-200 to-orange-200 rounded-3xl blur-xl opacity-30 animate-glow" />
            <div class="relative w-60 h-72 md:w-80 md:h-96 rounded-3xl bg-gradient-to-br from-pink-100 to-purple-100 border-4 border-white shadow-2xl overflow-hidden z-10 hover:scale-105 animate-hover">
                <img
                    src="/placeholder.svg"
                    alt="ReWest - Full Stack Developer"
                    class="w-full h-full object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-transparent via-transparent to-white/10 pointer-events-none" />
            </div>
            {particles}
        </div>
    }
}
