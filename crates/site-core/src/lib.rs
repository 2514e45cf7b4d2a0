pub mod contact;
pub mod gallery;
pub mod nav;
pub mod reveal;
pub mod starfield;

/// Shared keyframe/transition rules; the front-end injects this once per
/// document.
pub static ANIMATION_CSS: &str = include_str!("styles/animations.css");

/// Class applied to an element when it has scrolled into view.
pub const REVEALED_CLASS: &str = "revealed";

/// Marker classes the reveal controller watches for.
pub const REVEAL_MARKERS: &[&str] = &[
    "fade-in",
    "fade-in-up",
    "fade-in-up-delay-1",
    "fade-in-up-delay-2",
    "fade-in-up-delay-3",
    "slide-in-left",
    "slide-in-right",
    "scale-in",
];

pub use contact::*;
pub use gallery::*;
pub use nav::*;
pub use reveal::*;
pub use starfield::*;
