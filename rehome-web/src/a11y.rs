// Accessibility helpers

const FOCUSABLE: &str =
    "button:not([disabled]), [href], input:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// Update the live region status for screen readers
///
/// Writes into the `#grid-status` element if present so claim results are
/// announced to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id("grid-status")) {
        node.set_text_content(Some(msg));
    }
}

/// Move focus to the first focusable element inside the container with `id`.
pub fn trap_focus_in(id: &str) {
    let Some(container) = crate::dom::document().and_then(|doc| doc.get_element_by_id(id)) else {
        return;
    };
    if let Ok(Some(first)) = container.query_selector(FOCUSABLE) {
        if let Ok(el) = wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlElement>(first) {
            let _ = el.focus();
        }
    }
}

/// Return focus to the element that opened a dialog.
pub fn restore_focus(id: &str) {
    if let Some(el) = crate::dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlElement>(el).ok())
    {
        let _ = el.focus();
    }
}
