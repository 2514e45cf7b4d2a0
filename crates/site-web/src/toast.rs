use crate::constants::TOAST_DISMISS_MS;
use site_core::ToastKind;
use std::cell::{Cell, RefCell};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static ACTIVE_TOAST: RefCell<Option<web::Element>> = const { RefCell::new(None) };
    static TOAST_GENERATION: Cell<u64> = const { Cell::new(0) };
}

/// Show a transient notice in the corner, replacing any toast already on
/// screen. It dismisses itself after a fixed delay; a superseded toast's
/// timer is generation-checked so it can never take down its successor.
pub fn show(document: &web::Document, kind: ToastKind, message: &str) {
    dismiss();

    let generation = TOAST_GENERATION.with(|g| {
        g.set(g.get() + 1);
        g.get()
    });

    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(match kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    });
    el.set_text_content(Some(message));
    if let Some(body) = document.body() {
        _ = body.append_child(&el);
    }
    ACTIVE_TOAST.with(|active| *active.borrow_mut() = Some(el));

    let timeout = Closure::once_into_js(move || {
        let current = TOAST_GENERATION.with(|g| g.get());
        if current == generation {
            dismiss();
        }
    });
    if let Some(window) = web::window() {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            timeout.unchecked_ref(),
            TOAST_DISMISS_MS,
        );
    }
}

pub fn dismiss() {
    ACTIVE_TOAST.with(|active| {
        if let Some(el) = active.borrow_mut().take() {
            el.remove();
        }
    });
}
