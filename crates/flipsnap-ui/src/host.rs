//! Traits a host element implements so a carousel can drive it.

use crate::error::CarouselError;
use crate::events::CarouselEvent;
use flipsnap_foundation::{PointerSource, StyleSink};
use flipsnap_ui_graphics::EdgeInsets;

/// Read-only layout queries against the container.
pub trait LayoutMetrics {
    /// Element children, clones included.
    fn child_element_count(&self) -> usize;

    fn scroll_width(&self) -> f32;

    fn offset_width(&self) -> f32;

    /// Width of the visible viewport, the container's parent.
    fn viewport_width(&self) -> f32;

    /// Border-box width of the `index`th original item.
    fn item_offset_width(&self, index: usize) -> Option<f32>;

    fn item_margin(&self, _index: usize) -> EdgeInsets {
        EdgeInsets::default()
    }

    /// Width including horizontal margins.
    fn item_outer_width(&self, index: usize) -> Option<f32> {
        self.item_offset_width(index)
            .map(|width| width + self.item_margin(index).horizontal_sum())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClonePlacement {
    Front,
    Back,
}

/// Structural edits needed by marquee mode.
///
/// Item indexes always refer to original items; clones are skipped.
pub trait ItemTree {
    /// Deep-clone an original item and insert it at one end.
    fn clone_item(&self, index: usize, placement: ClonePlacement);

    /// Remove every clone inserted by `clone_item`.
    fn remove_clones(&self);
}

/// Listener slots the carousel attaches and detaches over its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Press on the container.
    Start(PointerSource),
    /// Moves during a session. Mouse moves are usually observed on the
    /// document.
    Move(PointerSource),
    End(PointerSource),
    /// Capture-phase click interception after a swipe.
    ClickCapture,
    TransitionEnd,
}

pub trait EventTarget {
    fn listen(&self, kind: ListenerKind);

    fn unlisten(&self, kind: ListenerKind);

    /// Dispatch a bubbling notification. Returns `false` when a listener
    /// cancelled it.
    fn dispatch_event(&self, event: &CarouselEvent) -> bool;
}

/// Everything a carousel needs from its container.
pub trait CarouselElement:
    StyleSink + LayoutMetrics + EventTarget + ItemTree + Clone + 'static
{
}

impl<T> CarouselElement for T where
    T: StyleSink + LayoutMetrics + EventTarget + ItemTree + Clone + 'static
{
}

pub trait ElementResolver<E> {
    fn query_selector(&self, selector: &str) -> Option<E>;
}

/// Container given either directly or by selector.
#[derive(Clone, Debug)]
pub enum Target<'a, E> {
    Selector(&'a str),
    Element(E),
}

impl<E> Target<'_, E> {
    pub fn resolve(self, resolver: &impl ElementResolver<E>) -> Result<E, CarouselError> {
        match self {
            Target::Element(element) => Ok(element),
            Target::Selector(selector) => {
                resolver
                    .query_selector(selector)
                    .ok_or_else(|| CarouselError::TargetNotFound {
                        selector: selector.to_string(),
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneElement;

    impl ElementResolver<u32> for OneElement {
        fn query_selector(&self, selector: &str) -> Option<u32> {
            (selector == ".flipsnap").then_some(7)
        }
    }

    #[test]
    fn resolve_by_selector() {
        assert_eq!(Target::Selector(".flipsnap").resolve(&OneElement), Ok(7));
        assert_eq!(
            Target::Selector(".missing").resolve(&OneElement),
            Err(CarouselError::TargetNotFound {
                selector: ".missing".to_string()
            })
        );
        assert_eq!(Target::Element(3).resolve(&OneElement), Ok(3));
    }
}
