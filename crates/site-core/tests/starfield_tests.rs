use site_core::starfield::{Starfield, StarfieldConfig};

fn make_full_page(count: usize) -> Starfield {
    Starfield::new(StarfieldConfig::full_page(count), 800.0, 600.0, 42)
}

#[test]
fn depth_stays_positive_and_bounded_across_frames() {
    let mut field = make_full_page(64);
    let mut out = Vec::new();
    for _ in 0..500 {
        field.advance(&mut out);
        let max = field.max_depth();
        for star in &field.stars {
            assert!(
                star.pos.z > 0.0 && star.pos.z <= max,
                "depth {} escaped (0, {}]",
                star.pos.z,
                max
            );
        }
    }
}

#[test]
fn pool_size_is_fixed_for_the_field_lifetime() {
    let mut field = make_full_page(80);
    let mut out = Vec::new();
    assert_eq!(field.stars.len(), 80);
    for _ in 0..100 {
        field.advance(&mut out);
    }
    assert_eq!(field.stars.len(), 80);
    field.resize(1024.0, 768.0);
    assert_eq!(field.stars.len(), 80);
}

#[test]
fn recycled_particles_draw_no_trail_that_frame() {
    let mut field = make_full_page(32);
    let mut out = Vec::new();
    // One frame so every particle has a trail anchor.
    field.advance(&mut out);
    for star in &field.stars {
        assert!(star.prev.is_some());
    }
    // Force every particle past the viewer on the next step (speed is 3).
    for star in &mut field.stars {
        star.pos.z = 0.5;
    }
    field.advance(&mut out);
    for sprite in &out {
        assert!(
            sprite.trail.is_none(),
            "recycled particle drew a trail from a stale anchor"
        );
    }
    // All of them restart at the far plane.
    for star in &field.stars {
        assert_eq!(star.pos.z, field.max_depth());
    }
}

#[test]
fn projection_matches_the_perspective_contract() {
    let mut field = make_full_page(1);
    // After the decrement z is exactly 1000, giving scale 1000/1000 = 1.
    field.stars[0].pos = glam::Vec3::new(10.0, -20.0, 1003.0);
    field.stars[0].prev = None;
    field.stars[0].size = 1.0;

    let mut out = Vec::new();
    field.advance(&mut out);
    assert_eq!(out.len(), 1);
    let sprite = &out[0];
    assert!((sprite.pos.x - 410.0).abs() < 1e-3); // x * 1 + 800/2
    assert!((sprite.pos.y - 280.0).abs() < 1e-3); // y * 1 + 600/2
    // proximity 0.5: radius = 0.5 * size * 3, opacity = 0.8 + 0.2 * 0.5
    assert!((sprite.radius - 1.5).abs() < 1e-3);
    assert!((sprite.opacity - 0.9).abs() < 1e-3);
    assert!(sprite.trail.is_none());

    // Second frame: nearer, larger, and trailing from the stored anchor.
    let anchor = field.stars[0].prev.expect("anchor stored after projection");
    field.advance(&mut out);
    assert_eq!(out.len(), 1);
    let sprite = &out[0];
    let trail = sprite.trail.expect("trail once an anchor exists");
    assert_eq!(trail.from, anchor);
    assert!(sprite.radius > 1.5);
}

#[test]
fn off_screen_particles_still_update_their_anchor() {
    let mut field = make_full_page(1);
    // Far off to the side: projects outside the 800x600 surface.
    field.stars[0].pos = glam::Vec3::new(900.0, 0.0, 1003.0);
    field.stars[0].prev = None;

    let mut out = Vec::new();
    field.advance(&mut out);
    assert!(out.is_empty(), "off-screen particle must not be drawn");
    let anchor = field.stars[0].prev.expect("anchor tracks off-screen motion");
    assert!(anchor.x > 800.0);
}

#[test]
fn fixed_seed_reproduces_identical_sprite_streams() {
    let mut a = Starfield::new(StarfieldConfig::hero(128), 640.0, 480.0, 7);
    let mut b = Starfield::new(StarfieldConfig::hero(128), 640.0, 480.0, 7);
    let mut out_a = Vec::new();
    let mut out_b = Vec::new();
    for frame in 0..100 {
        a.advance(&mut out_a);
        b.advance(&mut out_b);
        assert_eq!(out_a, out_b, "streams diverged at frame {frame}");
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = Starfield::new(StarfieldConfig::hero(128), 640.0, 480.0, 1);
    let mut b = Starfield::new(StarfieldConfig::hero(128), 640.0, 480.0, 2);
    let mut out_a = Vec::new();
    let mut out_b = Vec::new();
    a.advance(&mut out_a);
    b.advance(&mut out_b);
    assert_ne!(out_a, out_b);
}

#[test]
fn resize_rebuilds_every_particle_for_the_new_surface() {
    let mut field = Starfield::new(StarfieldConfig::hero(64), 800.0, 600.0, 3);
    let mut out = Vec::new();
    for _ in 0..10 {
        field.advance(&mut out);
    }

    field.resize(333.0, 222.0);
    // The hero far plane tracks the surface width.
    assert_eq!(field.max_depth(), 333.0);
    for star in &field.stars {
        assert!(star.prev.is_none(), "trail anchor survived the resize");
        assert!(star.pos.z >= 0.0 && star.pos.z <= 333.0);
        // Extent factor 2 centers the volume: |x| <= width, |y| <= height.
        assert!(star.pos.x.abs() <= 333.0);
        assert!(star.pos.y.abs() <= 222.0);
    }
}

#[test]
fn full_page_extent_is_independent_of_the_surface() {
    let field = make_full_page(256);
    for star in &field.stars {
        assert!(star.pos.x.abs() <= 1000.0);
        assert!(star.pos.y.abs() <= 1000.0);
        assert!(star.pos.z <= 2000.0);
    }
}

#[test]
fn hero_speeds_vary_per_particle_and_full_page_speeds_do_not() {
    let hero = Starfield::new(StarfieldConfig::hero(256), 640.0, 480.0, 11);
    let speeds: Vec<f32> = hero.stars.iter().map(|s| s.speed).collect();
    assert!(speeds.iter().any(|&s| (s - speeds[0]).abs() > 1e-6));
    assert!(speeds.iter().all(|&s| (2.0..5.0).contains(&s)));

    let full = make_full_page(256);
    assert!(full.stars.iter().all(|s| s.speed == 3.0));
}
