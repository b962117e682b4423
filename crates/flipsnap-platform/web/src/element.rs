use crate::error::warn_on_error;
use crate::WebPlatform;
use flipsnap_foundation::{ClickEvent, PointerEvent, PointerEventKind, StyleDeclaration, StyleSink};
use flipsnap_ui::{
    CarouselEvent, ClonePlacement, EventTarget, ItemTree, LayoutMetrics, ListenerKind,
    PointMoveDetail, PointerSource, TouchEndDetail,
};
use flipsnap_ui_graphics::EdgeInsets;
use js_sys::{Object, Reflect};
use smallvec::{smallvec, SmallVec};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, CustomEvent, CustomEventInit, Document, Element, Event, HtmlElement,
    MouseEvent, TouchEvent, Window,
};

const CLONE_ATTRIBUTE: &str = "data-flipsnap-clone";
const VENDOR_PREFIXES: [&str; 4] = ["webkit", "moz", "o", "ms"];

/// Input forwarded from DOM listeners to whatever drives the element.
pub enum HostInput<'a> {
    Pointer(&'a PointerEvent),
    Click(&'a ClickEvent),
    TransitionEnd,
}

type InputHandler = Rc<dyn Fn(HostInput<'_>)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Element,
    Document,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DomInput {
    Touch(PointerEventKind),
    Mouse(PointerEventKind),
    Click,
    TransitionEnd,
}

struct DomListener {
    scope: Scope,
    event_type: &'static str,
    capture: bool,
    input: DomInput,
}

const fn on(scope: Scope, event_type: &'static str, input: DomInput) -> DomListener {
    DomListener {
        scope,
        event_type,
        capture: false,
        input,
    }
}

fn dom_listeners(kind: ListenerKind) -> SmallVec<[DomListener; 2]> {
    use PointerEventKind::{Cancel, Down, Move, Up};
    match kind {
        ListenerKind::Start(PointerSource::Touch) => {
            smallvec![on(Scope::Element, "touchstart", DomInput::Touch(Down))]
        }
        ListenerKind::Start(PointerSource::Mouse) => {
            smallvec![on(Scope::Element, "mousedown", DomInput::Mouse(Down))]
        }
        ListenerKind::Move(PointerSource::Touch) => {
            smallvec![on(Scope::Element, "touchmove", DomInput::Touch(Move))]
        }
        ListenerKind::Move(PointerSource::Mouse) => {
            smallvec![on(Scope::Document, "mousemove", DomInput::Mouse(Move))]
        }
        ListenerKind::End(PointerSource::Touch) => smallvec![
            on(Scope::Element, "touchend", DomInput::Touch(Up)),
            on(Scope::Element, "touchcancel", DomInput::Touch(Cancel)),
        ],
        ListenerKind::End(PointerSource::Mouse) => {
            smallvec![on(Scope::Document, "mouseup", DomInput::Mouse(Up))]
        }
        ListenerKind::ClickCapture => smallvec![DomListener {
            capture: true,
            ..on(Scope::Element, "click", DomInput::Click)
        }],
        ListenerKind::TransitionEnd => {
            smallvec![on(Scope::Element, "transitionend", DomInput::TransitionEnd)]
        }
    }
}

struct Attached {
    target: web_sys::EventTarget,
    event_type: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(Event)>,
}

#[derive(Default)]
struct Shared {
    handler: RefCell<Option<InputHandler>>,
    attached: RefCell<HashMap<ListenerKind, SmallVec<[Attached; 2]>>>,
    /// CSS property name -> name accepted by this browser.
    resolved: RefCell<HashMap<&'static str, String>>,
}

/// A carousel container backed by a DOM element.
#[derive(Clone)]
pub struct WebElement {
    element: HtmlElement,
    document: Document,
    window: Window,
    shared: Rc<Shared>,
}

impl WebElement {
    pub fn new(element: HtmlElement, document: Document, window: Window) -> Self {
        Self {
            element,
            document,
            window,
            shared: Rc::new(Shared::default()),
        }
    }

    pub fn html_element(&self) -> &HtmlElement {
        &self.element
    }

    /// Route DOM input to `handler`. Listeners attached earlier pick it up.
    pub fn set_input_handler(&self, handler: impl Fn(HostInput<'_>) + 'static) {
        *self.shared.handler.borrow_mut() = Some(Rc::new(handler));
    }

    pub fn clear_input_handler(&self) {
        self.shared.handler.borrow_mut().take();
    }

    fn on_dom_event(shared: &Shared, input: DomInput, event: &Event) {
        let Some(handler) = shared.handler.borrow().clone() else {
            return;
        };
        match input {
            DomInput::Touch(kind) => {
                let pointer = event
                    .dyn_ref::<TouchEvent>()
                    .and_then(|touch| WebPlatform::pointer_from_touch(kind, touch));
                if let Some(pointer) = pointer {
                    handler(HostInput::Pointer(&pointer));
                    if pointer.is_consumed() {
                        event.prevent_default();
                    }
                }
            }
            DomInput::Mouse(kind) => {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    let pointer = WebPlatform::pointer_from_mouse(kind, mouse);
                    handler(HostInput::Pointer(&pointer));
                    if pointer.is_consumed() {
                        event.prevent_default();
                    }
                }
            }
            DomInput::Click => {
                let click = ClickEvent::new();
                handler(HostInput::Click(&click));
                if click.is_default_prevented() {
                    event.prevent_default();
                }
                if click.is_propagation_stopped() {
                    event.stop_propagation();
                }
            }
            DomInput::TransitionEnd => handler(HostInput::TransitionEnd),
        }
    }

    fn scope_target(&self, scope: Scope) -> web_sys::EventTarget {
        match scope {
            Scope::Element => self.element.clone().into(),
            Scope::Document => self.document.clone().into(),
        }
    }

    fn style(&self) -> CssStyleDeclaration {
        self.element.style()
    }

    /// Property name this browser understands, prefixed if needed.
    fn resolve_property(&self, style: &CssStyleDeclaration, property: &'static str) -> String {
        if let Some(name) = self.shared.resolved.borrow().get(property) {
            return name.clone();
        }
        let camel = camel_case(property);
        let name = if has_property(style, &camel) {
            property.to_string()
        } else {
            VENDOR_PREFIXES
                .iter()
                .find(|prefix| has_property(style, &format!("{}{}", upper_first(prefix), upper_first(&camel))))
                .map(|prefix| format!("-{prefix}-{property}"))
                .unwrap_or_else(|| property.to_string())
        };
        log::trace!("style property {property} resolved to {name}");
        self.shared
            .resolved
            .borrow_mut()
            .insert(property, name.clone());
        name
    }

    fn originals(&self) -> Vec<Element> {
        let children = self.element.children();
        (0..children.length())
            .filter_map(|index| children.item(index))
            .filter(|child| !child.has_attribute(CLONE_ATTRIBUTE))
            .collect()
    }

    fn margin(&self, element: &Element) -> EdgeInsets {
        let Some(Some(computed)) = warn_on_error(
            "getComputedStyle",
            self.window.get_computed_style(element),
        ) else {
            return EdgeInsets::default();
        };
        let read = |property: &str| {
            computed
                .get_property_value(property)
                .ok()
                .map(|value| parse_px(&value))
                .unwrap_or(0.0)
        };
        EdgeInsets::from_components(
            read("margin-left"),
            read("margin-top"),
            read("margin-right"),
            read("margin-bottom"),
        )
    }
}

impl StyleSink for WebElement {
    fn apply_style(&self, declaration: &StyleDeclaration) {
        let style = self.style();
        let property = self.resolve_property(&style, declaration.property());
        let mut value = declaration.value();
        if matches!(declaration, StyleDeclaration::TransitionProperty) {
            // the transitioned property may itself need a prefix
            value = self.resolve_property(&style, "transform");
        }
        warn_on_error(
            "set style property",
            style.set_property(&property, &value),
        );
    }
}

impl LayoutMetrics for WebElement {
    fn child_element_count(&self) -> usize {
        self.element.child_element_count() as usize
    }

    fn scroll_width(&self) -> f32 {
        self.element.scroll_width() as f32
    }

    fn offset_width(&self) -> f32 {
        self.element.offset_width() as f32
    }

    fn viewport_width(&self) -> f32 {
        self.element
            .parent_element()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
            .map_or(0.0, |parent| parent.offset_width() as f32)
    }

    fn item_offset_width(&self, index: usize) -> Option<f32> {
        let item = self.originals().into_iter().nth(index)?;
        let item = item.dyn_into::<HtmlElement>().ok()?;
        Some(item.offset_width() as f32)
    }

    fn item_margin(&self, index: usize) -> EdgeInsets {
        self.originals()
            .get(index)
            .map(|item| self.margin(item))
            .unwrap_or_default()
    }
}

impl ItemTree for WebElement {
    fn clone_item(&self, index: usize, placement: ClonePlacement) {
        let Some(original) = self.originals().into_iter().nth(index) else {
            log::warn!("clone_item: no item at {index}");
            return;
        };
        let Some(copy) = warn_on_error("cloneNode", original.clone_node_with_deep(true)) else {
            return;
        };
        if let Some(copy) = copy.dyn_ref::<Element>() {
            warn_on_error("mark clone", copy.set_attribute(CLONE_ATTRIBUTE, ""));
        }
        let inserted = match placement {
            ClonePlacement::Front => {
                let first = self.element.first_child();
                self.element.insert_before(&copy, first.as_ref())
            }
            ClonePlacement::Back => self.element.append_child(&copy),
        };
        warn_on_error("insert clone", inserted);
    }

    fn remove_clones(&self) {
        let selector = format!("[{CLONE_ATTRIBUTE}]");
        let Some(clones) = warn_on_error("find clones", self.element.query_selector_all(&selector))
        else {
            return;
        };
        for index in 0..clones.length() {
            if let Some(clone) = clones.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                clone.remove();
            }
        }
    }
}

impl EventTarget for WebElement {
    fn listen(&self, kind: ListenerKind) {
        if self.shared.attached.borrow().contains_key(&kind) {
            return;
        }
        let mut attached = SmallVec::new();
        for listener in dom_listeners(kind) {
            let target = self.scope_target(listener.scope);
            let shared: Weak<Shared> = Rc::downgrade(&self.shared);
            let input = listener.input;
            let closure = Closure::wrap(Box::new(move |event: Event| {
                if let Some(shared) = shared.upgrade() {
                    WebElement::on_dom_event(&shared, input, &event);
                }
            }) as Box<dyn FnMut(Event)>);
            let added = target.add_event_listener_with_callback_and_bool(
                listener.event_type,
                closure.as_ref().unchecked_ref(),
                listener.capture,
            );
            if warn_on_error(listener.event_type, added).is_some() {
                attached.push(Attached {
                    target,
                    event_type: listener.event_type,
                    capture: listener.capture,
                    closure,
                });
            }
        }
        self.shared.attached.borrow_mut().insert(kind, attached);
    }

    fn unlisten(&self, kind: ListenerKind) {
        let Some(attached) = self.shared.attached.borrow_mut().remove(&kind) else {
            return;
        };
        for listener in attached {
            let removed = listener.target.remove_event_listener_with_callback_and_bool(
                listener.event_type,
                listener.closure.as_ref().unchecked_ref(),
                listener.capture,
            );
            warn_on_error(listener.event_type, removed);
        }
    }

    fn dispatch_event(&self, event: &CarouselEvent) -> bool {
        let init = CustomEventInit::new();
        init.set_bubbles(event.bubbles());
        init.set_cancelable(event.cancelable());
        let Some(custom) = warn_on_error(
            "create event",
            CustomEvent::new_with_event_init_dict(event.event_type(), &init),
        ) else {
            return true;
        };
        if let Some(detail) = warn_on_error("event detail", event_detail(event)) {
            // flipsnap listeners read fields off the event itself
            warn_on_error("event fields", copy_fields(&detail, &custom));
        }
        warn_on_error("dispatch", self.element.dispatch_event(&custom)).unwrap_or(true)
    }
}

fn event_detail(event: &CarouselEvent) -> Result<Object, JsValue> {
    let detail = Object::new();
    let set = |key: &str, value: JsValue| Reflect::set(&detail, &JsValue::from_str(key), &value);
    match event {
        CarouselEvent::TouchStart => {}
        CarouselEvent::TouchMove { delta, direction } => {
            set("delta", JsValue::from_f64(*delta as f64))?;
            set("direction", JsValue::from_f64(direction.signum() as f64))?;
        }
        CarouselEvent::TouchEnd(TouchEndDetail {
            moved,
            original_point,
            new_point,
            cancelled,
        }) => {
            set("moved", JsValue::from_bool(*moved))?;
            set("originalPoint", JsValue::from_f64(*original_point as f64))?;
            set("newPoint", JsValue::from_f64(*new_point as f64))?;
            set("cancelled", JsValue::from_bool(*cancelled))?;
        }
        CarouselEvent::PointMove(PointMoveDetail {
            original_point,
            new_point,
        })
        | CarouselEvent::MoveEnd(PointMoveDetail {
            original_point,
            new_point,
        }) => {
            set("originalPoint", JsValue::from_f64(*original_point as f64))?;
            set("newPoint", JsValue::from_f64(*new_point as f64))?;
        }
    }
    Ok(detail)
}

fn copy_fields(detail: &Object, event: &CustomEvent) -> Result<(), JsValue> {
    for key in Object::keys(detail).iter() {
        let value = Reflect::get(detail, &key)?;
        Reflect::set(event, &key, &value)?;
    }
    Ok(())
}

fn has_property(style: &CssStyleDeclaration, name: &str) -> bool {
    Reflect::has(style, &JsValue::from_str(name)).unwrap_or(false)
}

fn camel_case(property: &str) -> String {
    let mut parts = property.split('-');
    let mut camel = parts.next().unwrap_or_default().to_string();
    for part in parts {
        camel.push_str(&upper_first(part));
    }
    camel
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn parse_px(value: &str) -> f32 {
    value.trim().trim_end_matches("px").parse().unwrap_or(0.0)
}
