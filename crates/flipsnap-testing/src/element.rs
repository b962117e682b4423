//! In-memory stand-in for a container element.
//!
//! Records style writes, listener registrations and dispatched
//! notifications, and answers layout queries from a list of fixed-width
//! items. Listeners run without any internal borrow held, so they may call
//! back into the carousel.

use flipsnap_foundation::{StyleDeclaration, StyleSink};
use flipsnap_ui::{CarouselEvent, ClonePlacement, EventTarget, ItemTree, LayoutMetrics, ListenerKind};
use flipsnap_ui_graphics::{EdgeInsets, Px};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

type Listener = Rc<dyn Fn(&CarouselEvent) -> bool>;

#[derive(Clone, Debug, PartialEq)]
pub struct FakeItem {
    pub label: String,
    pub width: f32,
    pub margin: EdgeInsets,
    pub is_clone: bool,
}

impl FakeItem {
    pub fn new(label: impl Into<String>, width: f32) -> Self {
        Self {
            label: label.into(),
            width,
            margin: EdgeInsets::default(),
            is_clone: false,
        }
    }

    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin;
        self
    }

    fn outer_width(&self) -> f32 {
        self.width + self.margin.horizontal_sum()
    }
}

#[derive(Default)]
struct ElementState {
    items: Vec<FakeItem>,
    viewport_width: f32,
    natural_width: Option<f32>,
    styles: Vec<StyleDeclaration>,
    listening: HashSet<ListenerKind>,
    events: Vec<CarouselEvent>,
    listeners: Vec<Listener>,
}

impl ElementState {
    fn originals(&self) -> impl Iterator<Item = &FakeItem> {
        self.items.iter().filter(|item| !item.is_clone)
    }

    fn explicit_width(&self) -> Option<f32> {
        self.styles.iter().rev().find_map(|declaration| match declaration {
            StyleDeclaration::Width(Px(width)) => Some(Some(*width)),
            StyleDeclaration::WidthAuto => Some(None),
            _ => None,
        })?
    }
}

/// Cloning shares the same element.
#[derive(Clone, Default)]
pub struct FakeElement {
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` items of `width` pixels in a viewport one item wide.
    pub fn with_items(count: usize, width: f32) -> Self {
        let element = Self::new();
        {
            let mut state = element.state.borrow_mut();
            state.items = (0..count)
                .map(|index| FakeItem::new(format!("item-{index}"), width))
                .collect();
            state.viewport_width = width;
        }
        element
    }

    pub fn push_item(&self, item: FakeItem) {
        self.state.borrow_mut().items.push(item);
    }

    pub fn remove_last_item(&self) -> Option<FakeItem> {
        let mut state = self.state.borrow_mut();
        let index = state.items.iter().rposition(|item| !item.is_clone)?;
        Some(state.items.remove(index))
    }

    pub fn set_viewport_width(&self, width: f32) {
        self.state.borrow_mut().viewport_width = width;
    }

    /// Width the container has without an explicit `width` style.
    pub fn set_natural_width(&self, width: f32) {
        self.state.borrow_mut().natural_width = Some(width);
    }

    pub fn items(&self) -> Vec<FakeItem> {
        self.state.borrow().items.clone()
    }

    pub fn labels(&self) -> Vec<String> {
        self.state
            .borrow()
            .items
            .iter()
            .map(|item| item.label.clone())
            .collect()
    }

    pub fn clone_count(&self) -> usize {
        self.state.borrow().items.iter().filter(|item| item.is_clone).count()
    }

    /// Every style write so far, oldest first.
    pub fn style_history(&self) -> Vec<StyleDeclaration> {
        self.state.borrow().styles.clone()
    }

    pub fn clear_style_history(&self) {
        self.state.borrow_mut().styles.clear();
    }

    /// Latest value written for a CSS property.
    pub fn style(&self, property: &str) -> Option<String> {
        self.state
            .borrow()
            .styles
            .iter()
            .rev()
            .find(|declaration| declaration.property() == property)
            .map(StyleDeclaration::value)
    }

    /// Latest `left` in pixels.
    pub fn left(&self) -> Option<f32> {
        self.state
            .borrow()
            .styles
            .iter()
            .rev()
            .find_map(|declaration| match declaration {
                StyleDeclaration::Left(Px(left)) => Some(*left),
                _ => None,
            })
    }

    /// Latest transform offset in pixels.
    pub fn translate_x(&self) -> Option<f32> {
        self.state
            .borrow()
            .styles
            .iter()
            .rev()
            .find_map(|declaration| match declaration {
                StyleDeclaration::Transform(translate) => Some(translate.x),
                _ => None,
            })
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.state.borrow().listening.contains(&kind)
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listening.len()
    }

    /// Notification listener. Returning `false` cancels cancelable events.
    pub fn add_listener(&self, listener: impl Fn(&CarouselEvent) -> bool + 'static) {
        self.state.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// Cancel every `fstouchmove`.
    pub fn veto_touch_moves(&self) {
        self.add_listener(|event| !matches!(event, CarouselEvent::TouchMove { .. }));
    }

    pub fn events(&self) -> Vec<CarouselEvent> {
        self.state.borrow().events.clone()
    }

    pub fn take_events(&self) -> Vec<CarouselEvent> {
        std::mem::take(&mut self.state.borrow_mut().events)
    }
}

impl StyleSink for FakeElement {
    fn apply_style(&self, declaration: &StyleDeclaration) {
        self.state.borrow_mut().styles.push(*declaration);
    }
}

impl LayoutMetrics for FakeElement {
    fn child_element_count(&self) -> usize {
        self.state.borrow().items.len()
    }

    fn scroll_width(&self) -> f32 {
        let content: f32 = self.state.borrow().items.iter().map(FakeItem::outer_width).sum();
        content.max(self.offset_width())
    }

    fn offset_width(&self) -> f32 {
        let state = self.state.borrow();
        state
            .explicit_width()
            .or(state.natural_width)
            .unwrap_or_else(|| state.items.iter().map(FakeItem::outer_width).sum())
    }

    fn viewport_width(&self) -> f32 {
        self.state.borrow().viewport_width
    }

    fn item_offset_width(&self, index: usize) -> Option<f32> {
        self.state.borrow().originals().nth(index).map(|item| item.width)
    }

    fn item_margin(&self, index: usize) -> EdgeInsets {
        self.state
            .borrow()
            .originals()
            .nth(index)
            .map(|item| item.margin)
            .unwrap_or_default()
    }
}

impl ItemTree for FakeElement {
    fn clone_item(&self, index: usize, placement: ClonePlacement) {
        let mut state = self.state.borrow_mut();
        let Some(original) = state.originals().nth(index).cloned() else {
            log::warn!("clone_item: no item at {index}");
            return;
        };
        let copy = FakeItem {
            is_clone: true,
            ..original
        };
        match placement {
            ClonePlacement::Front => state.items.insert(0, copy),
            ClonePlacement::Back => state.items.push(copy),
        }
    }

    fn remove_clones(&self) {
        self.state.borrow_mut().items.retain(|item| !item.is_clone);
    }
}

impl EventTarget for FakeElement {
    fn listen(&self, kind: ListenerKind) {
        self.state.borrow_mut().listening.insert(kind);
    }

    fn unlisten(&self, kind: ListenerKind) {
        self.state.borrow_mut().listening.remove(&kind);
    }

    fn dispatch_event(&self, event: &CarouselEvent) -> bool {
        let listeners = {
            let mut state = self.state.borrow_mut();
            state.events.push(*event);
            state.listeners.clone()
        };
        let mut allowed = true;
        for listener in listeners {
            if !listener(event) && event.cancelable() {
                allowed = false;
            }
        }
        allowed
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("FakeElement")
            .field("items", &state.items.len())
            .field("viewport_width", &state.viewport_width)
            .field("listening", &state.listening)
            .finish_non_exhaustive()
    }
}
