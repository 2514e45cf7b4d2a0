use crate::dom;
use site_core::{decide_intro, IntroDecision, NavigationIntent};

const INTENT_KEY: &str = "zyxen.nav-intent";
const VISITED_KEY: &str = "zyxen.visited";

/// Post an intent for the next page mount to consume. Called by page code
/// right before it triggers a navigation.
pub fn post_intent(intent: NavigationIntent) {
    if let Some(storage) = dom::session_storage() {
        _ = storage.set_item(INTENT_KEY, intent.as_str());
    }
}

/// Read and clear the posted intent. Consuming is unconditional so a
/// stale intent can never leak into a later navigation.
pub fn take_intent() -> Option<NavigationIntent> {
    let storage = dom::session_storage()?;
    let raw = storage.get_item(INTENT_KEY).ok().flatten()?;
    _ = storage.remove_item(INTENT_KEY);
    NavigationIntent::parse(&raw)
}

pub fn has_visited() -> bool {
    dom::session_storage()
        .and_then(|s| s.get_item(VISITED_KEY).ok().flatten())
        .is_some()
}

fn mark_visited() {
    if let Some(storage) = dom::session_storage() {
        _ = storage.set_item(VISITED_KEY, "true");
    }
}

/// Consume the navigation intent and decide whether this mount runs the
/// intro sequence, recording the visit when the decision asks for it.
pub fn resolve_intro() -> IntroDecision {
    let decision = decide_intro(take_intent(), has_visited());
    if decision.mark_visited {
        mark_visited();
    }
    decision
}
