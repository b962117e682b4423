use crate::host::{ClonePlacement, ItemTree, LayoutMetrics};
use flipsnap_foundation::{StyleDeclaration, StyleSink};
use flipsnap_ui_graphics::Px;

/// Geometry of the cloned ring used for infinite looping.
///
/// `addition_count` clones of trailing items are prepended and as many
/// leading items appended, and the container is shifted left by the
/// prepended width. Points then range over `[-move_right, move_left]`;
/// reaching either end re-homes the carousel onto the equivalent original
/// item without animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeRing {
    pub item_count: usize,
    pub slider_width: f32,
    pub addition_count: usize,
    pub view_width: f32,
    pub move_left: f32,
    pub move_right: f32,
}

impl MarqueeRing {
    /// Measure the ring. `None` when there is nothing to loop over.
    pub fn measure(metrics: &impl LayoutMetrics, item_count: usize, distance: f32) -> Option<Self> {
        if item_count == 0 {
            log::warn!("marquee disabled: container has no items");
            return None;
        }
        if distance <= 0.0 {
            log::warn!("marquee disabled: distance is {distance}");
            return None;
        }
        let slider_width = match metrics.item_outer_width(0) {
            Some(width) if width > 0.0 => width,
            other => {
                log::warn!("marquee disabled: item width is {other:?}");
                return None;
            }
        };
        let view_width = metrics.viewport_width().max(0.0);
        let addition_count = ((view_width / slider_width).ceil() as usize).max(1);
        let ring = Self {
            item_count,
            slider_width,
            addition_count,
            view_width,
            move_left: item_count as f32 * slider_width / distance,
            move_right: (view_width / distance).floor().max(1.0),
        };
        log::debug!("marquee ring: {ring:?}");
        Some(ring)
    }

    /// Left offset that hides the prepended clones.
    pub fn origin(&self) -> f32 {
        -(self.addition_count as f32) * self.slider_width
    }

    /// Widen the container and insert the clones.
    pub fn install<E: StyleSink + LayoutMetrics + ItemTree>(&self, element: &E) {
        let extra = 2.0 * self.addition_count as f32 * self.slider_width;
        element.apply_style(&StyleDeclaration::Width(Px(element.offset_width() + extra)));
        for i in 0..self.addition_count {
            let index = i % self.item_count;
            element.clone_item(self.item_count - 1 - index, ClonePlacement::Front);
            element.clone_item(index, ClonePlacement::Back);
        }
    }

    /// Point at which a forward move wraps back to point 0.
    pub fn forward_edge(&self) -> i32 {
        self.move_left.round() as i32
    }

    /// Point at which a backward move wraps to the tail.
    pub fn backward_edge(&self) -> i32 {
        -(self.move_right as i32)
    }

    pub fn clamp_point(&self, point: i32) -> i32 {
        point.clamp(self.backward_edge(), self.forward_edge())
    }

    /// Drag range in pixels as `(min_x, max_x)`.
    pub fn drag_range(&self, distance: f32) -> (f32, f32) {
        (-self.move_left * distance, self.move_right * distance)
    }

    /// Where to jump once a motion has settled on `point`. Anything on or
    /// past either edge sits on a clone and maps back onto the original
    /// showing the same content, whichever way the pointer last moved.
    pub fn rehome_target(&self, point: i32) -> Option<i32> {
        let forward_edge = self.forward_edge();
        let target = if point >= forward_edge {
            point - forward_edge
        } else if point <= self.backward_edge() {
            point + forward_edge
        } else {
            return None;
        };
        (target != point).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Strip {
        items: usize,
        item: f32,
        view: f32,
    }

    impl LayoutMetrics for Strip {
        fn child_element_count(&self) -> usize {
            self.items
        }
        fn scroll_width(&self) -> f32 {
            self.items as f32 * self.item
        }
        fn offset_width(&self) -> f32 {
            self.scroll_width()
        }
        fn viewport_width(&self) -> f32 {
            self.view
        }
        fn item_offset_width(&self, index: usize) -> Option<f32> {
            (index < self.items).then_some(self.item)
        }
    }

    #[test]
    fn five_items_single_viewport() {
        let strip = Strip {
            items: 5,
            item: 100.0,
            view: 100.0,
        };
        let ring = MarqueeRing::measure(&strip, 5, 100.0).unwrap();
        assert_eq!(ring.addition_count, 1);
        assert_eq!(ring.move_left, 5.0);
        assert_eq!(ring.move_right, 1.0);
        assert_eq!(ring.origin(), -100.0);
        assert_eq!(ring.drag_range(100.0), (-500.0, 100.0));
        assert_eq!(ring.rehome_target(5), Some(0));
        assert_eq!(ring.rehome_target(-1), Some(4));
        assert_eq!(ring.rehome_target(3), None);
        assert_eq!(ring.rehome_target(0), None);
        assert_eq!(ring.clamp_point(9), 5);
        assert_eq!(ring.clamp_point(-4), -1);
    }

    #[test]
    fn wide_viewport_needs_more_clones() {
        let strip = Strip {
            items: 4,
            item: 100.0,
            view: 250.0,
        };
        let ring = MarqueeRing::measure(&strip, 4, 100.0).unwrap();
        assert_eq!(ring.addition_count, 3);
        assert_eq!(ring.move_right, 2.0);
        assert_eq!(ring.rehome_target(-2), Some(2));
    }

    #[test]
    fn empty_container_has_no_ring() {
        let strip = Strip {
            items: 0,
            item: 100.0,
            view: 100.0,
        };
        assert_eq!(MarqueeRing::measure(&strip, 0, 100.0), None);
        let strip = Strip {
            items: 3,
            item: 0.0,
            view: 100.0,
        };
        assert_eq!(MarqueeRing::measure(&strip, 3, 100.0), None);
    }
}
