//! Capability shims.
//!
//! A [`Capabilities`] descriptor is resolved once from a host
//! [`FeatureProbe`] and handed to every carousel, replacing ad-hoc feature
//! checks at the point of use. Style output goes through [`StyleSink`];
//! mapping declarations onto vendor-prefixed properties is the host's job.

mod style;

pub use style::{StyleDeclaration, StyleSink, Translate};

use std::sync::OnceLock;

/// Style features the carousel cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleFeature {
    /// `perspective`, present wherever `translate3d` is accelerated.
    Transform3d,
    Transform,
    Transition,
}

/// Host-side feature detection.
pub trait FeatureProbe {
    fn supports(&self, feature: StyleFeature) -> bool;

    /// Whether the platform routes input through MS pointer events, which
    /// need `touch-action: pan-y` to keep vertical panning native.
    fn pointer_events_enabled(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
    pub transform3d: bool,
    pub transform: bool,
    pub transition: bool,
    pub pointer_events: bool,
}

static DETECTED: OnceLock<Capabilities> = OnceLock::new();

impl Capabilities {
    /// Hardware transforms and transitions available.
    pub const ACCELERATED: Capabilities = Capabilities {
        transform3d: true,
        transform: true,
        transition: true,
        pointer_events: false,
    };

    /// No transforms or transitions; motion falls back to the manual
    /// animator writing `left`.
    pub const LEGACY: Capabilities = Capabilities {
        transform3d: false,
        transform: false,
        transition: false,
        pointer_events: false,
    };

    pub fn detect(probe: &impl FeatureProbe) -> Self {
        let capabilities = Self {
            transform3d: probe.supports(StyleFeature::Transform3d),
            transform: probe.supports(StyleFeature::Transform),
            transition: probe.supports(StyleFeature::Transition),
            pointer_events: probe.pointer_events_enabled(),
        };
        log::debug!("detected capabilities: {capabilities:?}");
        capabilities
    }

    /// Detect on first call and reuse the result for the rest of the
    /// process. Later probes are ignored.
    pub fn detect_once(probe: &impl FeatureProbe) -> Self {
        *DETECTED.get_or_init(|| Self::detect(probe))
    }

    /// Motion can be expressed as a declarative transform transition.
    pub fn css_animation(&self) -> bool {
        (self.transform3d || self.transform) && self.transition
    }

    pub fn with_pointer_events(mut self, enabled: bool) -> Self {
        self.pointer_events = enabled;
        self
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ACCELERATED
    }
}
