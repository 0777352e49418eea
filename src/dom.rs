use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement};

use crate::error::ShowcaseError;

/// The slice of the document the controllers are allowed to touch directly.
/// Everything else goes through rendering.
pub trait ElementHost {
    fn contains(&self, id: &str) -> bool;
    fn set_style(&self, id: &str, property: &str, value: &str) -> Result<(), ShowcaseError>;
}

pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn current() -> Result<Self, ShowcaseError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(ShowcaseError::NoDocument)?;
        Ok(Self { document })
    }

    fn element(&self, id: &str) -> Result<HtmlElement, ShowcaseError> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| ShowcaseError::ElementNotFound(id.to_string()))
    }
}

impl ElementHost for WebDocument {
    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_style(&self, id: &str, property: &str, value: &str) -> Result<(), ShowcaseError> {
        let element = self.element(id)?;
        element
            .style()
            .set_property(property, value)
            .map_err(|_| ShowcaseError::ElementNotFound(id.to_string()))
    }
}

/// Shows (with a fade) or hides an element by id. Returns false when there is
/// no such element.
pub fn toggle_element_visibility(host: &impl ElementHost, id: &str, visible: bool) -> bool {
    if !host.contains(id) {
        return false;
    }

    let applied = if visible {
        host.set_style(id, "display", "block")
            .and_then(|_| host.set_style(id, "animation", "fadeIn 0.5s"))
    } else {
        host.set_style(id, "display", "none")
    };

    match applied {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Could not toggle {}: {}", id, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeHost {
        styles: RefCell<HashMap<String, HashMap<String, String>>>,
    }

    impl FakeHost {
        fn with(ids: &[&str]) -> Self {
            let host = Self::default();
            for id in ids {
                host.styles.borrow_mut().insert(id.to_string(), HashMap::new());
            }
            host
        }

        fn style(&self, id: &str, property: &str) -> Option<String> {
            self.styles.borrow().get(id)?.get(property).cloned()
        }
    }

    impl ElementHost for FakeHost {
        fn contains(&self, id: &str) -> bool {
            self.styles.borrow().contains_key(id)
        }

        fn set_style(&self, id: &str, property: &str, value: &str) -> Result<(), ShowcaseError> {
            self.styles
                .borrow_mut()
                .get_mut(id)
                .ok_or_else(|| ShowcaseError::ElementNotFound(id.to_string()))?
                .insert(property.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn missing_element_reports_false() {
        let host = FakeHost::with(&["details"]);
        assert!(!toggle_element_visibility(&host, "nope", true));
        assert!(!toggle_element_visibility(&host, "nope", false));
    }

    #[test]
    fn showing_fades_in() {
        let host = FakeHost::with(&["details"]);
        assert!(toggle_element_visibility(&host, "details", true));
        assert_eq!(host.style("details", "display").as_deref(), Some("block"));
        assert_eq!(host.style("details", "animation").as_deref(), Some("fadeIn 0.5s"));
    }

    #[test]
    fn hiding_sets_display_none() {
        let host = FakeHost::with(&["details"]);
        toggle_element_visibility(&host, "details", true);
        assert!(toggle_element_visibility(&host, "details", false));
        assert_eq!(host.style("details", "display").as_deref(), Some("none"));
    }
}
