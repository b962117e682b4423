//! Unit types: Px and its CSS rendering

use std::fmt;

/// Raw CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Px(pub f32);

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value)
    }
}

impl fmt::Display for Px {
    /// Formats as a CSS length, e.g. `-120px`. Negative zero prints as `0px`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{value}px")
    }
}
