use web_sys as web;

pub const STYLE_ELEMENT_ID: &str = "zyxen-animation-styles";

/// Append the shared animation stylesheet to `<head>`, once per document.
pub fn ensure_injected(document: &web::Document) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(site_core::ANIMATION_CSS));
    if let Some(head) = document.head() {
        _ = head.append_child(&style);
    }
}
