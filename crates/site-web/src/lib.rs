#![cfg(target_arch = "wasm32")]

use crate::constants::*;
use crate::dom::ListenerGuard;
use crate::frame::{FrameContext, RafLoop};
use crate::starfield::{StarfieldLayer, SurfaceSizing};
use site_core::{GalleryConfig, NavigationIntent, StarfieldConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod dom;
mod frame;
mod gallery;
mod intro;
mod nav;
mod reveal;
mod starfield;
mod styles;
mod toast;

/// Everything the mounted page holds on to. Dropping this cancels the
/// frame callback, disconnects the reveal observer, detaches every
/// listener and stops pending timers, so nothing mutates the DOM after
/// unmount.
struct SiteHandles {
    raf: Option<RafLoop>,
    _resize: Option<ListenerGuard>,
    _reveal: reveal::RevealController,
    _gallery: Option<gallery::GalleryWiring>,
    _contact: Option<contact::ContactWiring>,
    _intro: Option<intro::IntroSequence>,
}

impl Drop for SiteHandles {
    fn drop(&mut self) {
        if let Some(raf) = &self.raf {
            raf.stop();
        }
        toast::dismiss();
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<SiteHandles>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear the page down. Exposed so host navigation code can unmount before
/// swapping content; also handy from the console.
#[wasm_bindgen]
pub fn unmount() {
    let was_mounted = MOUNTED.with(|m| m.borrow_mut().take()).is_some();
    if was_mounted {
        log::info!("site-web unmounted");
    }
}

/// Called by page links right before they trigger a navigation:
/// "show-intro" forces the intro on the next mount, "skip-intro"
/// suppresses the first-visit intro. Returns false for unknown intents.
#[wasm_bindgen]
pub fn post_navigation_intent(intent: &str) -> bool {
    match NavigationIntent::parse(intent) {
        Some(intent) => {
            nav::post_intent(intent);
            true
        }
        None => false,
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    styles::ensure_injected(&document);

    // Navigation intent is consumed exactly once per mount.
    let decision = nav::resolve_intro();
    let intro = if decision.run_intro {
        intro::IntroSequence::begin(&document)
    } else {
        intro::suppress(&document);
        None
    };

    // Starfield layers; a page missing a canvas just runs without that
    // layer.
    let mut layers = Vec::new();
    if let Some(layer) = StarfieldLayer::mount(
        &document,
        FULL_PAGE_CANVAS_ID,
        StarfieldConfig::full_page(FULL_PAGE_STAR_COUNT),
        SurfaceSizing::Window,
        rand::random(),
    ) {
        layers.push(layer);
    }
    if let Some(layer) = StarfieldLayer::mount(
        &document,
        HERO_CANVAS_ID,
        StarfieldConfig::hero(HERO_STAR_COUNT),
        SurfaceSizing::Parent,
        rand::random(),
    ) {
        layers.push(layer);
    }

    let (raf, resize) = if layers.is_empty() {
        (None, None)
    } else {
        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(layers)));
        let resize_ctx = frame_ctx.clone();
        let resize = ListenerGuard::new(&window, "resize", move |_| {
            resize_ctx.borrow_mut().handle_resize();
        });
        (Some(frame::start_loop(frame_ctx)), Some(resize))
    };

    let reveal = reveal::arm(&document);
    let gallery = gallery::wire(
        &document,
        GalleryConfig {
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
        },
    );
    let contact = contact::wire(&document);

    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(SiteHandles {
            raf,
            _resize: resize,
            _reveal: reveal,
            _gallery: gallery,
            _contact: contact,
            _intro: intro,
        })
    });
    log::info!("site-web mounted");

    Ok(())
}
