/// Default duration of a snap animation.
pub const DEFAULT_TRANSITION_DURATION_MILLIS: u64 = 350;

/// Construction options.
///
/// Unset `distance` and `max_point` are derived from layout on every
/// refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselOptions {
    /// Fixed pixel step between points.
    pub distance: Option<f32>,
    /// Fixed highest point index.
    pub max_point: Option<i32>,
    /// Ignore all pointer input.
    pub disable_touch: bool,
    /// Loop infinitely using cloned boundary items.
    pub marquee: bool,
    /// Use `translate` even where `translate3d` is available.
    pub disable_3d: bool,
    pub transition_duration_millis: u64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            distance: None,
            max_point: None,
            disable_touch: false,
            marquee: false,
            disable_3d: false,
            transition_duration_millis: DEFAULT_TRANSITION_DURATION_MILLIS,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn max_point(mut self, max_point: i32) -> Self {
        self.max_point = Some(max_point);
        self
    }

    pub fn disable_touch(mut self, disable: bool) -> Self {
        self.disable_touch = disable;
        self
    }

    pub fn marquee(mut self, marquee: bool) -> Self {
        self.marquee = marquee;
        self
    }

    pub fn disable_3d(mut self, disable: bool) -> Self {
        self.disable_3d = disable;
        self
    }

    pub fn transition_duration(mut self, millis: u64) -> Self {
        self.transition_duration_millis = millis;
        self
    }
}
