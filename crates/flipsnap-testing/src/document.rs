use crate::element::FakeElement;
use flipsnap_ui::ElementResolver;
use std::collections::HashMap;

/// Selector lookup over a fixed set of fake elements.
#[derive(Clone, Default)]
pub struct FakeDocument {
    elements: HashMap<String, FakeElement>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, selector: &str, element: FakeElement) -> Self {
        self.elements.insert(selector.to_string(), element);
        self
    }
}

impl ElementResolver<FakeElement> for FakeDocument {
    fn query_selector(&self, selector: &str) -> Option<FakeElement> {
        self.elements.get(selector).cloned()
    }
}
