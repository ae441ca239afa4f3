//! CSS class and inline style helpers for the page animations.
//!
//! Every animated element has two visual states: entering, while its section
//! is the active one, and resting otherwise. Tailwind transition utilities do
//! the tweening between the two class sets.

use std::f64::consts::PI;

/// How an element comes into view when its section becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    FadeUp,
    SlideFromLeft,
    SlideFromRight,
    Pop,
    Spin,
    Fade,
}

const TRANSITION: &str = "transition-all duration-700 ease-out";

impl Reveal {
    fn entering(self) -> &'static str {
        match self {
            Self::FadeUp => "opacity-100 translate-y-0 scale-100",
            Self::SlideFromLeft | Self::SlideFromRight => "opacity-100 translate-x-0",
            Self::Pop | Self::Spin => "opacity-100 scale-100 rotate-0",
            Self::Fade => "opacity-100",
        }
    }

    fn resting(self) -> &'static str {
        match self {
            Self::FadeUp => "opacity-0 translate-y-12 scale-90",
            Self::SlideFromLeft => "opacity-0 -translate-x-24",
            Self::SlideFromRight => "opacity-0 translate-x-24",
            Self::Pop => "opacity-0 scale-0 -rotate-6",
            Self::Spin => "opacity-0 scale-0 -rotate-180",
            Self::Fade => "opacity-0",
        }
    }

    pub fn class(self, active: bool) -> String {
        let state = if active {
            self.entering()
        } else {
            self.resting()
        };
        format!("{} {}", TRANSITION, state)
    }
}

pub fn delay_style(seconds: f64) -> String {
    format!("transition-delay: {:.2}s;", seconds)
}

/// Delay for the n-th child of a staggered container.
pub fn stagger(base: f64, step: f64, index: usize) -> f64 {
    base + step * index as f64
}

/// Skill rows follow their card in, one after the other.
pub fn skill_row_delay(category: usize, skill: usize) -> f64 {
    0.8 + 0.1 * category as f64 + 0.1 * skill as f64
}

/// Level badges pop in slightly after their row.
pub fn skill_badge_delay(category: usize, skill: usize) -> f64 {
    1.0 + 0.1 * category as f64 + 0.05 * skill as f64
}

/// Width of a progress bar. Bars empty out while their section rests so
/// they fill again on the next visit.
pub fn progress_style(percentage: u8, active: bool) -> String {
    let width = if active { percentage.min(100) } else { 0 };
    format!(
        "width: {}%; transition: width 1.5s ease-in-out 0.5s, opacity 1.5s ease-in-out 0.5s;",
        width
    )
}

/// Horizontal offset of the section track.
pub fn track_style(index: usize, sections: usize) -> String {
    format!(
        "width: {}vw; transform: translateX(-{}vw);",
        sections * 100,
        index * 100
    )
}

/// Position of the `i`-th of `count` particles on a circle around the
/// profile photo, as `(top, left)` in pixels.
pub fn orbit_position(i: usize, count: usize, radius: f64) -> (f64, f64) {
    let angle = 2.0 * PI * i as f64 / count.max(1) as f64;
    (30.0 + angle.sin() * radius, 30.0 + angle.cos() * radius)
}
