use smallvec::SmallVec;

/// A tile in the gallery strip. The visual list is the project list
/// duplicated once for a seamless loop, so a project appears in two lanes
/// and each copy plays independently of the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub project: usize,
    pub lane: usize,
}

impl TileKey {
    pub fn new(project: usize, lane: usize) -> Self {
        Self { project, lane }
    }
}

/// What the host page knows about the pointing hardware at mount.
#[derive(Clone, Copy, Debug)]
pub struct DeviceProfile {
    pub touch: bool,
    pub viewport_width: f32,
}

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    /// Viewport width below which a touch device gets the overlay player
    /// instead of inline toggling.
    pub mobile_breakpoint: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
        }
    }
}

/// How tiles respond to input, fixed for the player's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Pointer devices: enter plays inline, leave stops.
    HoverInline,
    /// Touch on a narrow viewport: tap opens a centered overlay.
    TapOverlay,
    /// Touch on a wide viewport: tap toggles inline playback.
    TapToggle,
}

impl InteractionMode {
    pub fn from_profile(profile: DeviceProfile, config: &GalleryConfig) -> Self {
        if !profile.touch {
            InteractionMode::HoverInline
        } else if profile.viewport_width < config.mobile_breakpoint {
            InteractionMode::TapOverlay
        } else {
            InteractionMode::TapToggle
        }
    }
}

/// Instruction for the DOM layer. Stop always precedes Play in a single
/// transition's output, so two tiles are never playing at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Stop(TileKey),
    Play(TileKey),
    OpenOverlay { project: usize },
    CloseOverlay,
}

pub type Commands = SmallVec<[PlayerCommand; 2]>;

/// Playback state for the whole strip: at most one inline-playing tile,
/// and an overlay that is mutually exclusive with inline playback.
#[derive(Debug)]
pub struct GalleryPlayer {
    mode: InteractionMode,
    playing: Option<TileKey>,
    overlay: Option<usize>,
}

impl GalleryPlayer {
    pub fn new(mode: InteractionMode) -> Self {
        Self {
            mode,
            playing: None,
            overlay: None,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn playing(&self) -> Option<TileKey> {
        self.playing
    }

    pub fn overlay(&self) -> Option<usize> {
        self.overlay
    }

    /// Pointer entered a tile. Only meaningful in hover mode.
    pub fn pointer_enter(&mut self, key: TileKey) -> Commands {
        if self.mode != InteractionMode::HoverInline {
            return Commands::new();
        }
        self.start_inline(key)
    }

    /// Pointer left a tile; stops it if it was the one playing.
    pub fn pointer_leave(&mut self, key: TileKey) -> Commands {
        let mut out = Commands::new();
        if self.mode == InteractionMode::HoverInline && self.playing == Some(key) {
            self.playing = None;
            out.push(PlayerCommand::Stop(key));
        }
        out
    }

    /// Tap / click / keyboard activation of a tile.
    pub fn activate(&mut self, key: TileKey) -> Commands {
        match self.mode {
            // Hover devices play on enter; activation does nothing extra.
            InteractionMode::HoverInline => Commands::new(),
            InteractionMode::TapOverlay => {
                let mut out = Commands::new();
                if let Some(prev) = self.playing.take() {
                    out.push(PlayerCommand::Stop(prev));
                }
                self.overlay = Some(key.project);
                out.push(PlayerCommand::OpenOverlay {
                    project: key.project,
                });
                out
            }
            InteractionMode::TapToggle => {
                if self.playing == Some(key) {
                    self.playing = None;
                    let mut out = Commands::new();
                    out.push(PlayerCommand::Stop(key));
                    out
                } else {
                    self.start_inline(key)
                }
            }
        }
    }

    pub fn close_overlay(&mut self) -> Commands {
        let mut out = Commands::new();
        if self.overlay.take().is_some() {
            out.push(PlayerCommand::CloseOverlay);
        }
        out
    }

    fn start_inline(&mut self, key: TileKey) -> Commands {
        let mut out = Commands::new();
        if self.playing == Some(key) {
            return out;
        }
        if let Some(prev) = self.playing.take() {
            out.push(PlayerCommand::Stop(prev));
        }
        self.playing = Some(key);
        out.push(PlayerCommand::Play(key));
        out
    }
}
