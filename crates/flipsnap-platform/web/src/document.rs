use crate::element::WebElement;
use crate::error::WebError;
use flipsnap_foundation::{FeatureProbe, StyleFeature};
use flipsnap_ui::ElementResolver;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, HtmlElement, Window};

/// Resolves selectors against the page document.
#[derive(Clone)]
pub struct WebDocument {
    document: Document,
    window: Window,
}

impl WebDocument {
    pub fn new(document: Document, window: Window) -> Self {
        Self { document, window }
    }

    /// The global `window.document`.
    pub fn global() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoGlobal("window"))?;
        let document = window.document().ok_or(WebError::NoGlobal("document"))?;
        Ok(Self::new(document, window))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn wrap(&self, element: HtmlElement) -> WebElement {
        WebElement::new(element, self.document.clone(), self.window.clone())
    }

    pub fn feature_probe(&self) -> Result<WebFeatureProbe, WebError> {
        let div = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WebError::Js("created div is not an HtmlElement".to_string()))?;
        Ok(WebFeatureProbe {
            style: div.style(),
            navigator: self.window.navigator().into(),
        })
    }
}

impl ElementResolver<WebElement> for WebDocument {
    fn query_selector(&self, selector: &str) -> Option<WebElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                .map(|element| self.wrap(element)),
            Err(error) => {
                log::warn!(
                    "invalid selector `{selector}`: {}",
                    crate::error::describe(&error)
                );
                None
            }
        }
    }
}

/// Feature detection against a scratch element's style object.
pub struct WebFeatureProbe {
    style: CssStyleDeclaration,
    navigator: JsValue,
}

impl WebFeatureProbe {
    fn candidates(feature: StyleFeature) -> [&'static str; 5] {
        match feature {
            StyleFeature::Transform3d => [
                "perspectiveProperty",
                "WebkitPerspective",
                "MozPerspective",
                "OPerspective",
                "msPerspective",
            ],
            StyleFeature::Transform => [
                "transformProperty",
                "WebkitTransform",
                "MozTransform",
                "OTransform",
                "msTransform",
            ],
            StyleFeature::Transition => [
                "transitionProperty",
                "WebkitTransitionProperty",
                "MozTransitionProperty",
                "OTransitionProperty",
                "msTransitionProperty",
            ],
        }
    }
}

impl FeatureProbe for WebFeatureProbe {
    fn supports(&self, feature: StyleFeature) -> bool {
        Self::candidates(feature).iter().any(|name| {
            Reflect::get(&self.style, &JsValue::from_str(name))
                .map(|value| !value.is_undefined())
                .unwrap_or(false)
        })
    }

    fn pointer_events_enabled(&self) -> bool {
        Reflect::get(&self.navigator, &JsValue::from_str("msPointerEnabled"))
            .map(|value| value.is_truthy())
            .unwrap_or(false)
    }
}
