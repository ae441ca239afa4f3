use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use leptos::{ev, prelude::*};
use leptos_use::{
    use_document, use_event_listener, use_event_listener_with_options, use_timeout_fn,
    UseEventListenerOptions, UseTimeoutFnReturn,
};
use web_sys::{TouchEvent, TouchList, WheelEvent};

use crate::navigator::{
    gesture::{classify_key_press, classify_wheel},
    Intent, NavConfig, Navigator, Point, Section, SwipeTracker, Transition,
};

/// Read side of the section navigator, handed to the rendering layer.
#[derive(Clone, Copy)]
pub struct SectionNav {
    pub current: Signal<usize>,
    pub locked: Signal<bool>,
    pub go_to: Callback<usize>,
}

impl SectionNav {
    pub fn is_active(&self, section: Section) -> Signal<bool> {
        let current = self.current;
        Signal::derive(move || current.get() == section.index())
    }
}

/// Milliseconds since page load, from `performance.now()`.
fn now() -> Duration {
    let ms = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default();
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

fn first_touch(list: TouchList) -> Option<Point> {
    list.get(0)
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
}

/// Drives a [`Navigator`] from document wheel, key and touch events.
///
/// Every accepted gesture is stamped with a deadline and starts the cooldown
/// timer. Gestures past the deadline are accepted even if the timer has not
/// fired yet (timers are throttled in background tabs).
pub fn use_section_navigator(config: NavConfig) -> SectionNav {
    let navigator = StoredValue::new(Arc::new(Mutex::new(
        Navigator::new(Section::ALL.len()).with_cooldown(config.cooldown),
    )));
    let swipe = StoredValue::new(Arc::new(Mutex::new(SwipeTracker::default())));
    let (current, set_current) = signal(0usize);
    let (locked, set_locked) = signal(false);

    let UseTimeoutFnReturn {
        start: schedule_release,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            navigator.with_value(|n| {
                n.lock()
                    .expect("should be able to unlock navigator")
                    .release()
            });
            set_locked.set(false);
        },
        config.cooldown.as_millis() as f64,
    );

    let apply = move |intent: Intent| {
        let res = navigator.with_value(|n| {
            n.lock()
                .expect("should be able to unlock navigator")
                .apply_at(intent, now())
        });
        match res {
            Ok(Transition::Ignored) => {
                log::trace!("ignoring {:?} during transition", intent);
            }
            Ok(transition) => {
                log::debug!("{:?} -> {:?}", intent, transition);
                if let Some(index) = transition.target() {
                    set_current.set(index);
                }
                set_locked.set(true);
                schedule_release(());
            }
            Err(e) => {
                log::warn!("rejected {:?}: {}", intent, e);
            }
        }
    };

    let _ = use_event_listener_with_options(
        use_document(),
        ev::wheel,
        {
            let apply = apply.clone();
            move |e: WheelEvent| {
                // the page itself never scrolls
                e.prevent_default();
                if let Some(direction) = classify_wheel(e.delta_y()) {
                    apply(Intent::Step(direction));
                }
            }
        },
        UseEventListenerOptions::default().passive(false),
    );

    let _ = use_event_listener(use_document(), ev::keydown, {
        let apply = apply.clone();
        move |e: ev::KeyboardEvent| {
            let modified = e.meta_key() || e.alt_key() || e.ctrl_key() || e.shift_key();
            if let Some(direction) = classify_key_press(&e.key(), modified) {
                e.prevent_default();
                apply(Intent::Step(direction));
            }
        }
    });

    let _ = use_event_listener_with_options(
        use_document(),
        ev::touchstart,
        move |e: TouchEvent| {
            if let Some(start) = first_touch(e.touches()) {
                swipe.with_value(|s| {
                    s.lock()
                        .expect("should be able to unlock swipe tracker")
                        .begin(start)
                });
            }
        },
        UseEventListenerOptions::default().passive(true),
    );

    let _ = use_event_listener_with_options(
        use_document(),
        ev::touchend,
        {
            let apply = apply.clone();
            move |e: TouchEvent| {
                let Some(end) = first_touch(e.changed_touches()) else {
                    return;
                };
                let direction = swipe.with_value(|s| {
                    s.lock()
                        .expect("should be able to unlock swipe tracker")
                        .finish(end, config.swipe_threshold)
                });
                if let Some(direction) = direction {
                    apply(Intent::Step(direction));
                }
            }
        },
        UseEventListenerOptions::default().passive(true),
    );

    let go_to = Callback::new(move |index: usize| apply(Intent::GoTo(index)));

    SectionNav {
        current: current.into(),
        locked: locked.into(),
        go_to,
    }
}
