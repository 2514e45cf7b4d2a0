use site_core::gallery::{
    DeviceProfile, GalleryConfig, GalleryPlayer, InteractionMode, PlayerCommand, TileKey,
};

fn hover_player() -> GalleryPlayer {
    GalleryPlayer::new(InteractionMode::HoverInline)
}

#[test]
fn pointer_devices_hover_regardless_of_width() {
    let config = GalleryConfig::default();
    for width in [320.0, 768.0, 1920.0] {
        let mode = InteractionMode::from_profile(
            DeviceProfile {
                touch: false,
                viewport_width: width,
            },
            &config,
        );
        assert_eq!(mode, InteractionMode::HoverInline);
    }
}

#[test]
fn touch_splits_on_the_breakpoint() {
    let config = GalleryConfig::default();
    let narrow = DeviceProfile {
        touch: true,
        viewport_width: 500.0,
    };
    let wide = DeviceProfile {
        touch: true,
        viewport_width: 1024.0,
    };
    assert_eq!(
        InteractionMode::from_profile(narrow, &config),
        InteractionMode::TapOverlay
    );
    assert_eq!(
        InteractionMode::from_profile(wide, &config),
        InteractionMode::TapToggle
    );
}

#[test]
fn breakpoint_is_configurable() {
    let config = GalleryConfig {
        mobile_breakpoint: 400.0,
    };
    let profile = DeviceProfile {
        touch: true,
        viewport_width: 500.0,
    };
    assert_eq!(
        InteractionMode::from_profile(profile, &config),
        InteractionMode::TapToggle
    );
}

#[test]
fn hover_enter_plays_and_leave_stops() {
    let mut player = hover_player();
    let a = TileKey::new(0, 0);

    let commands = player.pointer_enter(a);
    assert_eq!(commands.as_slice(), [PlayerCommand::Play(a)].as_slice());
    assert_eq!(player.playing(), Some(a));

    let commands = player.pointer_leave(a);
    assert_eq!(commands.as_slice(), [PlayerCommand::Stop(a)].as_slice());
    assert_eq!(player.playing(), None);
}

#[test]
fn switching_tiles_stops_the_previous_one_first() {
    let mut player = hover_player();
    let a = TileKey::new(0, 0);
    let b = TileKey::new(1, 0);

    player.pointer_enter(a);
    let commands = player.pointer_enter(b);
    assert_eq!(
        commands.as_slice(),
        [PlayerCommand::Stop(a), PlayerCommand::Play(b)].as_slice()
    );
    assert_eq!(player.playing(), Some(b));
}

#[test]
fn reentering_the_playing_tile_is_a_no_op() {
    let mut player = hover_player();
    let a = TileKey::new(2, 1);
    player.pointer_enter(a);
    assert!(player.pointer_enter(a).is_empty());
    assert_eq!(player.playing(), Some(a));
}

#[test]
fn leave_of_a_non_playing_tile_changes_nothing() {
    let mut player = hover_player();
    let a = TileKey::new(0, 0);
    let b = TileKey::new(1, 0);
    player.pointer_enter(a);
    assert!(player.pointer_leave(b).is_empty());
    assert_eq!(player.playing(), Some(a));
}

#[test]
fn duplicated_lanes_are_independent_tiles() {
    let mut player = hover_player();
    let first_lane = TileKey::new(3, 0);
    let second_lane = TileKey::new(3, 1);

    player.pointer_enter(first_lane);
    let commands = player.pointer_enter(second_lane);
    assert_eq!(
        commands.as_slice(),
        [
            PlayerCommand::Stop(first_lane),
            PlayerCommand::Play(second_lane)
        ]
        .as_slice()
    );
}

#[test]
fn activation_is_ignored_on_hover_devices() {
    let mut player = hover_player();
    assert!(player.activate(TileKey::new(0, 0)).is_empty());
}

#[test]
fn tap_toggle_plays_then_stops_on_the_second_tap() {
    let mut player = GalleryPlayer::new(InteractionMode::TapToggle);
    let a = TileKey::new(0, 0);
    let b = TileKey::new(1, 1);

    assert_eq!(
        player.activate(a).as_slice(),
        [PlayerCommand::Play(a)].as_slice()
    );
    assert_eq!(
        player.activate(b).as_slice(),
        [PlayerCommand::Stop(a), PlayerCommand::Play(b)].as_slice()
    );
    assert_eq!(
        player.activate(b).as_slice(),
        [PlayerCommand::Stop(b)].as_slice()
    );
    assert_eq!(player.playing(), None);
}

#[test]
fn tap_overlay_opens_the_focused_player() {
    let mut player = GalleryPlayer::new(InteractionMode::TapOverlay);
    let a = TileKey::new(4, 0);

    let commands = player.activate(a);
    assert_eq!(
        commands.as_slice(),
        [PlayerCommand::OpenOverlay { project: 4 }].as_slice()
    );
    assert_eq!(player.overlay(), Some(4));
    assert_eq!(player.playing(), None);

    let commands = player.close_overlay();
    assert_eq!(commands.as_slice(), [PlayerCommand::CloseOverlay].as_slice());
    assert_eq!(player.overlay(), None);
}

#[test]
fn closing_an_absent_overlay_is_a_no_op() {
    let mut player = GalleryPlayer::new(InteractionMode::TapOverlay);
    assert!(player.close_overlay().is_empty());
}

#[test]
fn at_most_one_tile_plays_under_any_interleaving() {
    let mut player = hover_player();
    let keys: Vec<TileKey> = (0..4).map(|p| TileKey::new(p, p % 2)).collect();

    for round in 0..20 {
        let key = keys[round % keys.len()];
        let commands = player.pointer_enter(key);
        // Every Play is preceded by the Stop of whatever was playing.
        let play_count = commands
            .iter()
            .filter(|c| matches!(c, PlayerCommand::Play(_)))
            .count();
        assert!(play_count <= 1);
        assert_eq!(player.playing(), Some(key));
    }
}
