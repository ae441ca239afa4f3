//! Maps raw input values onto navigation directions.
//!
//! Everything here works on plain numbers and key names so it can be tested
//! without a browser. The event listeners in the app layer pull the values
//! out of `WheelEvent`/`KeyboardEvent`/`TouchEvent` and hand them over.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scrolling down moves forward. A zero delta (pure horizontal wheel) is not
/// a gesture.
pub fn classify_wheel(delta_y: f64) -> Option<Direction> {
    if delta_y > 0.0 {
        Some(Direction::Forward)
    } else if delta_y < 0.0 {
        Some(Direction::Backward)
    } else {
        None
    }
}

pub fn classify_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowRight" | "ArrowDown" => Some(Direction::Forward),
        "ArrowLeft" | "ArrowUp" => Some(Direction::Backward),
        _ => None,
    }
}

/// Arrow keys held with any modifier (Shift, Ctrl, Alt, Meta) belong to the
/// browser or the OS, not to the page.
pub fn classify_key_press(key: &str, modified: bool) -> Option<Direction> {
    if modified {
        return None;
    }
    classify_key(key)
}

/// Classifies a swipe from `start` to `end`.
///
/// The dominant axis wins; ties go to the vertical axis. Swiping right or
/// down goes back, swiping left or up goes forward.
pub fn classify_swipe(start: Point, end: Point, threshold: f64) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let delta = if dx.abs() > dy.abs() { dx } else { dy };
    if delta.abs() < threshold {
        return None;
    }
    if delta > 0.0 {
        Some(Direction::Backward)
    } else {
        Some(Direction::Forward)
    }
}

/// Remembers where the current touch began.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn begin(&mut self, at: Point) {
        self.start = Some(at);
    }

    pub fn finish(&mut self, at: Point, threshold: f64) -> Option<Direction> {
        let start = self.start.take()?;
        classify_swipe(start, at, threshold)
    }
}
