pub mod gesture;

use std::{fmt, time::Duration};

use thiserror::Error;

pub use gesture::{Direction, Point, SwipeTracker};

pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(800);
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// The full-viewport panels of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Skills,
    Stats,
    Footer,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::Hero, Self::Skills, Self::Stats, Self::Footer];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Skills => "skills",
            Self::Stats => "stats",
            Self::Footer => "footer",
        }
    }

    /// Capitalised name, used as the navigation dot tooltip.
    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Skills => "Skills",
            Self::Stats => "Stats",
            Self::Footer => "Footer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    pub cooldown: Duration,
    /// Minimum swipe displacement in CSS pixels.
    pub swipe_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl NavConfig {
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("section index {index} out of range (have {len} sections)")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Step(Direction),
    GoTo(usize),
}

/// Result of feeding one gesture to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Arrived while a transition was in flight.
    Ignored,
    Moved { from: usize, to: usize },
    /// Accepted, but the index was already where the gesture pointed.
    Stayed { at: usize },
}

impl Transition {
    pub fn accepted(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub fn target(&self) -> Option<usize> {
        match *self {
            Self::Ignored => None,
            Self::Moved { to, .. } => Some(to),
            Self::Stayed { at } => Some(at),
        }
    }
}

/// Owns the current section index and the transition lock.
///
/// Gestures fed through [`Navigator::apply_at`] carry a timestamp; an
/// accepted one holds the lock until `now + cooldown`, and the first gesture
/// at or past that deadline releases it. The untimed methods hold the lock
/// until [`Navigator::release`] is called.
///
/// Timestamps are offsets from any fixed origin (a page load, a test start).
#[derive(Debug, Clone)]
pub struct Navigator {
    current: usize,
    len: usize,
    locked: bool,
    cooldown: Duration,
    deadline: Option<Duration>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Section::ALL.len())
    }
}

impl Navigator {
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
            locked: false,
            cooldown: DEFAULT_COOLDOWN,
            deadline: None,
        }
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn section(&self) -> Option<Section> {
        Section::from_index(self.current)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether a gesture arriving at `now` would be ignored.
    pub fn is_locked_at(&self, now: Duration) -> bool {
        self.locked && !self.deadline.is_some_and(|d| now >= d)
    }

    pub fn advance(&mut self) -> Transition {
        let to = (self.current + 1).min(self.len - 1);
        self.accept(to)
    }

    pub fn retreat(&mut self) -> Transition {
        let to = self.current.saturating_sub(1);
        self.accept(to)
    }

    pub fn step(&mut self, direction: Direction) -> Transition {
        match direction {
            Direction::Forward => self.advance(),
            Direction::Backward => self.retreat(),
        }
    }

    pub fn go_to(&mut self, index: usize) -> Result<Transition, NavError> {
        if index >= self.len {
            return Err(NavError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.accept(index))
    }

    pub fn apply(&mut self, intent: Intent) -> Result<Transition, NavError> {
        match intent {
            Intent::Step(direction) => Ok(self.step(direction)),
            Intent::GoTo(index) => self.go_to(index),
        }
    }

    /// Like [`Navigator::apply`], but releases an expired lock first and
    /// stamps an accepted transition with `now + cooldown`.
    pub fn apply_at(&mut self, intent: Intent, now: Duration) -> Result<Transition, NavError> {
        self.release_if_elapsed(now);
        let transition = self.apply(intent)?;
        if transition.accepted() {
            self.deadline = Some(now + self.cooldown);
        }
        Ok(transition)
    }

    /// Releases the lock if its deadline has passed. Returns whether it did.
    pub fn release_if_elapsed(&mut self, now: Duration) -> bool {
        if self.locked && !self.is_locked_at(now) {
            self.release();
            true
        } else {
            false
        }
    }

    /// Ends the cooldown, returning to idle.
    pub fn release(&mut self) {
        self.locked = false;
        self.deadline = None;
    }

    fn accept(&mut self, to: usize) -> Transition {
        if self.locked {
            return Transition::Ignored;
        }
        self.locked = true;
        let from = self.current;
        self.current = to;
        if from == to {
            Transition::Stayed { at: to }
        } else {
            Transition::Moved { from, to }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.len(), 4);
        assert!(!nav.is_locked());
        assert_eq!(nav.section(), Some(Section::Hero));
    }

    #[test]
    fn test_advance_moves_and_locks() {
        let mut nav = Navigator::default();
        let t = nav.advance();
        assert_eq!(t, Transition::Moved { from: 0, to: 1 });
        assert_eq!(nav.current(), 1);
        assert!(nav.is_locked());
    }

    #[test]
    fn test_advance_while_locked_is_ignored() {
        let mut nav = Navigator::default();
        nav.advance();
        assert_eq!(nav.advance(), Transition::Ignored);
        assert_eq!(nav.retreat(), Transition::Ignored);
        assert_eq!(nav.current(), 1);
        assert!(nav.is_locked());
    }

    #[test]
    fn test_release_accepts_next_gesture() {
        let mut nav = Navigator::default();
        nav.advance();
        nav.release();
        assert!(!nav.is_locked());
        assert_eq!(nav.advance(), Transition::Moved { from: 1, to: 2 });
        assert_eq!(nav.section(), Some(Section::Stats));
    }

    #[test]
    fn test_cooldown_holds_until_deadline() {
        let start = Duration::from_secs(10);
        let mut nav = Navigator::default().with_cooldown(Duration::from_millis(800));
        let forward = Intent::Step(Direction::Forward);

        assert_eq!(
            nav.apply_at(forward, start),
            Ok(Transition::Moved { from: 0, to: 1 })
        );

        let almost = start + Duration::from_millis(799);
        assert!(nav.is_locked_at(almost));
        assert!(!nav.release_if_elapsed(almost));
        assert_eq!(nav.apply_at(forward, almost), Ok(Transition::Ignored));
        assert_eq!(nav.current(), 1);

        let deadline = start + Duration::from_millis(800);
        assert!(!nav.is_locked_at(deadline));
        assert_eq!(
            nav.apply_at(forward, deadline),
            Ok(Transition::Moved { from: 1, to: 2 })
        );
        // the new transition restarts the cooldown from the deadline
        assert!(nav.is_locked_at(deadline + Duration::from_millis(799)));
    }

    #[test]
    fn test_release_if_elapsed() {
        let mut nav = Navigator::default().with_cooldown(Duration::from_millis(300));
        assert!(!nav.release_if_elapsed(Duration::ZERO));

        nav.apply_at(Intent::GoTo(2), Duration::ZERO).unwrap();
        assert!(!nav.release_if_elapsed(Duration::from_millis(299)));
        assert!(nav.is_locked());
        assert!(nav.release_if_elapsed(Duration::from_millis(300)));
        assert!(!nav.is_locked());
    }

    #[test]
    fn test_untimed_lock_waits_for_release() {
        let mut nav = Navigator::default();
        nav.advance();
        // no deadline, so no amount of time frees it
        assert!(nav.is_locked_at(Duration::from_secs(3600)));
        assert_eq!(
            nav.apply_at(Intent::Step(Direction::Forward), Duration::from_secs(3600)),
            Ok(Transition::Ignored)
        );
        nav.release();
        assert!(!nav.is_locked_at(Duration::ZERO));
    }

    #[test]
    fn test_rejected_go_to_keeps_deadline() {
        let mut nav = Navigator::default();
        nav.apply_at(Intent::GoTo(1), Duration::ZERO).unwrap();
        let later = DEFAULT_COOLDOWN / 2;
        assert!(nav.apply_at(Intent::GoTo(7), later).is_err());
        assert!(nav.is_locked_at(later));
        assert!(!nav.is_locked_at(DEFAULT_COOLDOWN));
    }

    #[test]
    fn test_retreat_at_start_does_not_underflow() {
        let mut nav = Navigator::default();
        let t = nav.retreat();
        assert_eq!(t, Transition::Stayed { at: 0 });
        assert_eq!(nav.current(), 0);
        // a clamped gesture still takes the lock
        assert!(nav.is_locked());
    }

    #[test]
    fn test_advance_clamps_at_last_section() {
        let mut nav = Navigator::default();
        for _ in 0..10 {
            nav.advance();
            nav.release();
        }
        assert_eq!(nav.current(), 3);
        assert_eq!(nav.section(), Some(Section::Footer));
        assert_eq!(nav.advance(), Transition::Stayed { at: 3 });
    }

    #[test]
    fn test_index_stays_in_bounds_for_mixed_sequences() {
        let mut nav = Navigator::new(4);
        // deterministic pseudo random walk
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 2 == 0 {
                nav.advance();
            } else {
                nav.retreat();
            }
            assert!(nav.current() < nav.len());
            if seed % 3 != 0 {
                nav.release();
            }
        }
    }

    #[test]
    fn test_go_to() {
        let mut nav = Navigator::default();
        assert_eq!(nav.go_to(2), Ok(Transition::Moved { from: 0, to: 2 }));
        assert!(nav.is_locked());
        assert_eq!(nav.go_to(0), Ok(Transition::Ignored));
        assert_eq!(nav.current(), 2);

        nav.release();
        assert_eq!(nav.go_to(2), Ok(Transition::Stayed { at: 2 }));
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut nav = Navigator::default();
        let err = nav.go_to(4).unwrap_err();
        assert_eq!(err, NavError::OutOfRange { index: 4, len: 4 });
        assert_eq!(
            err.to_string(),
            "section index 4 out of range (have 4 sections)"
        );
        assert!(!nav.is_locked());
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_apply_dispatches_intents() {
        let mut nav = Navigator::default();
        assert_eq!(
            nav.apply(Intent::Step(Direction::Forward)),
            Ok(Transition::Moved { from: 0, to: 1 })
        );
        nav.release();
        assert_eq!(
            nav.apply(Intent::Step(Direction::Backward)),
            Ok(Transition::Moved { from: 1, to: 0 })
        );
        nav.release();
        assert_eq!(
            nav.apply(Intent::GoTo(3)),
            Ok(Transition::Moved { from: 0, to: 3 })
        );
        nav.release();
        assert!(nav.apply(Intent::GoTo(9)).is_err());
    }

    #[test]
    fn test_transition_target() {
        assert_eq!(Transition::Ignored.target(), None);
        assert!(!Transition::Ignored.accepted());
        assert_eq!(Transition::Moved { from: 1, to: 2 }.target(), Some(2));
        assert_eq!(Transition::Stayed { at: 0 }.target(), Some(0));
        assert!(Transition::Stayed { at: 0 }.accepted());
    }

    #[test]
    fn test_single_section_navigator() {
        let mut nav = Navigator::new(0);
        assert_eq!(nav.len(), 1);
        assert_eq!(nav.advance(), Transition::Stayed { at: 0 });
        nav.release();
        assert_eq!(nav.retreat(), Transition::Stayed { at: 0 });
    }

    #[test]
    fn test_sections() {
        let names = Section::ALL.iter().map(|s| s.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["hero", "skills", "stats", "footer"]);
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(4), None);
        assert_eq!(Section::Skills.title(), "Skills");
        assert_eq!(Section::Stats.to_string(), "stats");
    }

    #[test]
    fn test_config_defaults() {
        let config = NavConfig::default();
        assert_eq!(config.cooldown, Duration::from_millis(800));
        assert_eq!(config.swipe_threshold, 50.0);

        let config = config
            .with_cooldown(Duration::from_millis(300))
            .with_swipe_threshold(20.0);
        assert_eq!(config.cooldown.as_millis(), 300);
        assert_eq!(config.swipe_threshold, 20.0);
    }
}
