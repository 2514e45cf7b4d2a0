/// Page-level tuning for the front-end. Simulation-shape constants live in
/// `site_core::StarfieldConfig`; these are the per-page choices.
// Particle pool sizes (dense field, sharp white dots)
pub const FULL_PAGE_STAR_COUNT: usize = 800;
pub const HERO_STAR_COUNT: usize = 800;

// Reveal trigger: 10% of the element visible, armed slightly before the
// element reaches the viewport's bottom edge
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

// Viewport width below which touch devices get the overlay player
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Toast lifetime
pub const TOAST_DISMISS_MS: i32 = 3000;

// Intro sequence stage boundaries, from mount
pub const INTRO_MOVE_MS: i32 = 1000;
pub const INTRO_ZOOM_MS: i32 = 2500;
pub const INTRO_DONE_MS: i32 = 4000;

// Email delivery endpoint and template coordinates
pub const DELIVERY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DELIVERY_SERVICE_ID: &str = "service_p5gb8wg";
pub const DELIVERY_TEMPLATE_ID: &str = "template_osddfod";
pub const DELIVERY_PUBLIC_KEY: &str = "m1xChN43puPbSRCtJ";

// Element hook points the host page provides
pub const FULL_PAGE_CANVAS_ID: &str = "starfield-canvas";
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const INTRO_OVERLAY_ID: &str = "intro-overlay";
pub const GALLERY_STRIP_ID: &str = "work-gallery";
pub const GALLERY_OVERLAY_ID: &str = "gallery-overlay";
pub const GALLERY_OVERLAY_VIDEO_ID: &str = "gallery-overlay-video";
