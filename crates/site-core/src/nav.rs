/// Cross-navigation intent posted by the page that initiated a navigation
/// and consumed exactly once by the next mount. Replaces a pile of ad-hoc
/// session flags with one explicit value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationIntent {
    /// The next mount should run the intro sequence even for a repeat
    /// visitor (e.g. the logo was clicked).
    ShowIntro,
    /// The next mount should skip the intro a first-time visitor would
    /// otherwise get (e.g. arriving via an in-site link).
    SkipIntro,
}

impl NavigationIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationIntent::ShowIntro => "show-intro",
            NavigationIntent::SkipIntro => "skip-intro",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "show-intro" => Some(NavigationIntent::ShowIntro),
            "skip-intro" => Some(NavigationIntent::SkipIntro),
            _ => None,
        }
    }
}

/// What the mounting page should do. The intent, if any, is consumed by
/// the decision; `mark_visited` tells the caller to record the visit so
/// later mounts in the same session stay intro-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroDecision {
    pub run_intro: bool,
    pub mark_visited: bool,
}

/// An explicit ShowIntro always wins; otherwise the intro runs once per
/// session on first visit unless a SkipIntro was posted.
pub fn decide_intro(intent: Option<NavigationIntent>, has_visited: bool) -> IntroDecision {
    match intent {
        Some(NavigationIntent::ShowIntro) => IntroDecision {
            run_intro: true,
            mark_visited: true,
        },
        Some(NavigationIntent::SkipIntro) => IntroDecision {
            run_intro: false,
            mark_visited: !has_visited,
        },
        None => IntroDecision {
            run_intro: !has_visited,
            mark_visited: !has_visited,
        },
    }
}
