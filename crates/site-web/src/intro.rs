use crate::constants::{INTRO_DONE_MS, INTRO_MOVE_MS, INTRO_OVERLAY_ID, INTRO_ZOOM_MS};
use crate::dom::TimerGuard;
use web_sys as web;

const HIDDEN_CLASS: &str = "hidden";
const MOVING_CLASS: &str = "intro-moving";
const ZOOMING_CLASS: &str = "intro-zooming";
const DONE_CLASS: &str = "intro-done";

/// The staged logo intro: the halves slide together, the aura swells,
/// then the whole overlay zooms out and fades. Stages are plain one-shot
/// timers toggling classes; the CSS owns the easing. Dropping the handle
/// cancels whatever stages have not fired and hides the overlay.
pub struct IntroSequence {
    overlay: web::Element,
    _stages: Vec<TimerGuard>,
}

impl IntroSequence {
    pub fn begin(document: &web::Document) -> Option<Self> {
        let overlay = document.get_element_by_id(INTRO_OVERLAY_ID)?;
        _ = overlay.class_list().remove_1(HIDDEN_CLASS);

        let mut stages = Vec::new();

        let el = overlay.clone();
        stages.extend(TimerGuard::new(INTRO_MOVE_MS, move || {
            _ = el.class_list().add_1(MOVING_CLASS);
        }));

        let el = overlay.clone();
        stages.extend(TimerGuard::new(INTRO_ZOOM_MS, move || {
            _ = el.class_list().add_1(ZOOMING_CLASS);
        }));

        let el = overlay.clone();
        stages.extend(TimerGuard::new(INTRO_DONE_MS, move || {
            _ = el.class_list().add_1(DONE_CLASS);
            _ = el.class_list().add_1(HIDDEN_CLASS);
        }));

        log::info!("[intro] sequence started");
        Some(Self {
            overlay,
            _stages: stages,
        })
    }
}

impl Drop for IntroSequence {
    fn drop(&mut self) {
        _ = self.overlay.class_list().add_1(HIDDEN_CLASS);
    }
}

/// The mount decided against the intro: make sure the overlay never shows.
pub fn suppress(document: &web::Document) {
    if let Some(overlay) = document.get_element_by_id(INTRO_OVERLAY_ID) {
        _ = overlay.class_list().add_1(HIDDEN_CLASS);
    }
}
