use crate::document::WebDocument;
use crate::element::{HostInput, WebElement};
use crate::error::WebError;
use crate::timers::WebTimers;
use flipsnap_core::SystemClock;
use flipsnap_foundation::{Capabilities, InputRouter, PlatformGestureFlag};
use flipsnap_ui::{Carousel, CarouselEnv, CarouselOptions, Target};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

/// A carousel attached to a page element, with DOM listeners wired up.
///
/// The element keeps the carousel alive through its input handler until
/// [`WebCarousel::destroy`] is called.
#[derive(Clone)]
pub struct WebCarousel {
    carousel: Carousel<WebElement>,
}

impl WebCarousel {
    /// Attach to the first element matching `selector` in the global document.
    pub fn attach(selector: &str, options: CarouselOptions) -> Result<Self, WebError> {
        let document = WebDocument::global()?;
        Self::attach_to(&document, Target::Selector(selector), options, PlatformGestureFlag::default())
    }

    pub fn attach_to(
        document: &WebDocument,
        target: Target<'_, WebElement>,
        options: CarouselOptions,
        gestures: PlatformGestureFlag,
    ) -> Result<Self, WebError> {
        let probe = document.feature_probe()?;
        let env = CarouselEnv::new(
            Rc::new(SystemClock::new()),
            Rc::new(WebTimers::new(document.window().clone())),
        )
        .with_capabilities(Capabilities::detect_once(&probe))
        .with_gestures(gestures);
        let carousel = Carousel::with_target(target, document, options, env)?;
        let element = carousel.element();
        let handle = carousel.clone();
        element.set_input_handler(move |input| match input {
            HostInput::Pointer(event) => handle.handle_pointer(event),
            HostInput::Click(click) => {
                handle.handle_click(click);
            }
            HostInput::TransitionEnd => handle.handle_transition_end(),
        });
        Ok(Self { carousel })
    }

    pub fn carousel(&self) -> &Carousel<WebElement> {
        &self.carousel
    }

    /// Detach every listener and release the element.
    pub fn destroy(&self) {
        self.carousel.destroy();
        self.carousel.element().clear_input_handler();
    }
}

/// Mirror `gesturestart`/`gestureend` on the document into `router`.
///
/// The listeners live as long as the page.
pub fn install_gesture_listeners(document: &WebDocument, router: Rc<InputRouter>) -> Result<(), WebError> {
    let target = document.document();
    {
        let router = router.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            router.gesture_started();
        }) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback("gesturestart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            router.gesture_ended();
        }) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback("gestureend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}
