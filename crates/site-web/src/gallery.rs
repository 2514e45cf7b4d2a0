use crate::constants::{GALLERY_OVERLAY_ID, GALLERY_OVERLAY_VIDEO_ID};
use crate::dom::{self, ListenerGuard};
use fnv::FnvHashMap;
use site_core::{
    Commands, DeviceProfile, GalleryConfig, GalleryPlayer, InteractionMode, PlayerCommand, TileKey,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const TILE_SELECTOR: &str = ".work-tile";
const PLAYING_CLASS: &str = "playing";
const OVERLAY_OPEN_CLASS: &str = "open";

/// Gallery strip bound to the DOM. Dropping the handle detaches every
/// tile listener.
pub struct GalleryWiring {
    pub player: Rc<RefCell<GalleryPlayer>>,
    _listeners: Vec<ListenerGuard>,
}

/// DOM side of the player: looks up tiles/videos by key and applies the
/// state machine's commands.
struct GalleryDom {
    document: web::Document,
    tiles: FnvHashMap<TileKey, web::Element>,
    videos: FnvHashMap<TileKey, web::HtmlVideoElement>,
    overlay: Option<web::Element>,
    overlay_video: Option<web::HtmlVideoElement>,
    // Shared rejection handler: autoplay refusals are expected and silent.
    play_rejection_sink: Closure<dyn FnMut(JsValue)>,
}

impl GalleryDom {
    fn apply(&self, commands: &Commands) {
        for command in commands {
            match *command {
                PlayerCommand::Play(key) => {
                    if let Some(tile) = self.tiles.get(&key) {
                        _ = tile.class_list().add_1(PLAYING_CLASS);
                    }
                    if let Some(video) = self.videos.get(&key) {
                        self.start_inline(video);
                    }
                }
                PlayerCommand::Stop(key) => {
                    if let Some(tile) = self.tiles.get(&key) {
                        _ = tile.class_list().remove_1(PLAYING_CLASS);
                    }
                    if let Some(video) = self.videos.get(&key) {
                        _ = video.pause();
                        video.set_current_time(0.0);
                    }
                }
                PlayerCommand::OpenOverlay { project } => self.open_overlay(project),
                PlayerCommand::CloseOverlay => self.close_overlay(),
            }
        }
    }

    fn start_inline(&self, video: &web::HtmlVideoElement) {
        video.set_muted(true);
        video.set_loop(true);
        _ = video.set_attribute("playsinline", "");
        video.set_current_time(0.0);
        self.play_silently(video);
    }

    fn play_silently(&self, video: &web::HtmlVideoElement) {
        if let Ok(promise) = video.play() {
            _ = promise.catch(&self.play_rejection_sink);
        }
    }

    fn open_overlay(&self, project: usize) {
        let (Some(overlay), Some(overlay_video)) = (&self.overlay, &self.overlay_video) else {
            return;
        };
        // Either lane of the project carries the same preview clip.
        let source = self
            .videos
            .get(&TileKey::new(project, 0))
            .or_else(|| self.videos.get(&TileKey::new(project, 1)));
        if let Some(source) = source {
            overlay_video.set_src(&source.src());
        }
        overlay_video.set_muted(true);
        overlay_video.set_loop(true);
        _ = overlay.class_list().add_1(OVERLAY_OPEN_CLASS);
        self.play_silently(overlay_video);
        self.set_scroll_locked(true);
    }

    fn close_overlay(&self) {
        let (Some(overlay), Some(overlay_video)) = (&self.overlay, &self.overlay_video) else {
            return;
        };
        _ = overlay_video.pause();
        _ = overlay.class_list().remove_1(OVERLAY_OPEN_CLASS);
        self.set_scroll_locked(false);
    }

    fn set_scroll_locked(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            if locked {
                _ = body.style().set_property("overflow", "hidden");
            } else {
                _ = body.style().remove_property("overflow");
            }
        }
    }
}

/// Bind every `.work-tile` on the page. Returns None when the page has no
/// gallery.
pub fn wire(document: &web::Document, config: GalleryConfig) -> Option<GalleryWiring> {
    let tile_elements = dom::query_all(document, TILE_SELECTOR);
    if tile_elements.is_empty() {
        return None;
    }

    let profile = DeviceProfile {
        touch: detect_touch(),
        viewport_width: dom::window_size().0,
    };
    let mode = InteractionMode::from_profile(profile, &config);
    log::info!("[gallery] {} tiles, mode {:?}", tile_elements.len(), mode);

    let mut tiles = FnvHashMap::default();
    let mut videos = FnvHashMap::default();
    for el in tile_elements {
        let Some(key) = tile_key(&el) else {
            log::warn!("[gallery] tile without data-project/data-lane skipped");
            continue;
        };
        if let Some(video) = el
            .query_selector("video")
            .ok()
            .flatten()
            .and_then(|v| v.dyn_into::<web::HtmlVideoElement>().ok())
        {
            videos.insert(key, video);
        }
        tiles.insert(key, el);
    }

    let overlay = document.get_element_by_id(GALLERY_OVERLAY_ID);
    let overlay_video = document
        .get_element_by_id(GALLERY_OVERLAY_VIDEO_ID)
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok());

    let gallery_dom = Rc::new(GalleryDom {
        document: document.clone(),
        tiles,
        videos,
        overlay,
        overlay_video,
        play_rejection_sink: Closure::wrap(Box::new(|_: JsValue| {}) as Box<dyn FnMut(JsValue)>),
    });
    let player = Rc::new(RefCell::new(GalleryPlayer::new(mode)));

    let mut listeners = Vec::new();
    for (&key, tile) in &gallery_dom.tiles {
        let target: &web::EventTarget = tile;

        let p = player.clone();
        let d = gallery_dom.clone();
        listeners.push(ListenerGuard::new(target, "pointerenter", move |_| {
            d.apply(&p.borrow_mut().pointer_enter(key));
        }));

        let p = player.clone();
        let d = gallery_dom.clone();
        listeners.push(ListenerGuard::new(target, "pointerleave", move |_| {
            d.apply(&p.borrow_mut().pointer_leave(key));
        }));

        let p = player.clone();
        let d = gallery_dom.clone();
        listeners.push(ListenerGuard::new(target, "click", move |_| {
            d.apply(&p.borrow_mut().activate(key));
        }));

        let p = player.clone();
        let d = gallery_dom.clone();
        listeners.push(ListenerGuard::new(target, "keydown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            if ev.key() == "Enter" || ev.key() == " " {
                ev.prevent_default();
                d.apply(&p.borrow_mut().activate(key));
            }
        }));
    }

    if let Some(overlay) = &gallery_dom.overlay {
        let p = player.clone();
        let d = gallery_dom.clone();
        listeners.push(ListenerGuard::new(overlay, "click", move |ev| {
            // Taps on the video itself are playback interaction, not close.
            if ev
                .target()
                .is_some_and(|t| t.dyn_ref::<web::HtmlVideoElement>().is_some())
            {
                return;
            }
            d.apply(&p.borrow_mut().close_overlay());
        }));
    }

    Some(GalleryWiring {
        player,
        _listeners: listeners,
    })
}

fn tile_key(el: &web::Element) -> Option<TileKey> {
    let project = el.get_attribute("data-project")?.parse::<usize>().ok()?;
    let lane = el.get_attribute("data-lane")?.parse::<usize>().ok()?;
    Some(TileKey::new(project, lane))
}

fn detect_touch() -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let has_touch_event =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_touch_event || window.navigator().max_touch_points() > 0
}
