use glam::{Vec2, Vec3};
use rand::prelude::*;

// Per-particle base radius is drawn from [SIZE_MIN, SIZE_MIN + SIZE_SPAN).
const SIZE_MIN: f32 = 0.5;
const SIZE_SPAN: f32 = 2.0;

// Smallest dot radius ever rasterized; below this the point disappears.
const DOT_RADIUS_FLOOR: f32 = 0.5;

/// How the simulation volume's x/y extent derives from the drawing surface.
#[derive(Clone, Copy, Debug)]
pub enum Extent {
    /// Fixed world-unit extent, independent of surface size.
    Fixed { width: f32, height: f32 },
    /// Extent proportional to the surface (`factor` 2.0 doubles it).
    SurfaceRelative { factor: f32 },
}

impl Extent {
    fn dimensions(&self, surface_w: f32, surface_h: f32) -> (f32, f32) {
        match *self {
            Extent::Fixed { width, height } => (width, height),
            Extent::SurfaceRelative { factor } => (surface_w * factor, surface_h * factor),
        }
    }
}

/// Where the far plane sits.
#[derive(Clone, Copy, Debug)]
pub enum DepthRange {
    Fixed(f32),
    /// Far plane tracks the surface width, so wider surfaces get a deeper field.
    SurfaceWidth,
}

impl DepthRange {
    fn max_depth(&self, surface_w: f32) -> f32 {
        match *self {
            DepthRange::Fixed(d) => d,
            DepthRange::SurfaceWidth => surface_w.max(1.0),
        }
    }
}

/// Per-frame depth decrement, sampled per particle at creation.
/// `min == max` gives every particle the same speed.
#[derive(Clone, Copy, Debug)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub fn uniform(v: f32) -> Self {
        Self { min: v, max: v }
    }

    fn sample(&self, rng: &mut StdRng) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

/// Tuning record for one starfield instance. The two page backgrounds share
/// the algorithm and differ only in these numbers.
#[derive(Clone, Debug)]
pub struct StarfieldConfig {
    pub particle_count: usize,
    pub extent: Extent,
    pub depth: DepthRange,
    /// Perspective scale is `projection_constant / z`.
    pub projection_constant: f32,
    pub speed: SpeedRange,
    /// Trails are drawn only while `z < max_depth * trail_depth_fraction`.
    pub trail_depth_fraction: f32,
    /// Dot radius is `proximity * base_size * size_gain`.
    pub size_gain: f32,
    /// Dot opacity is `opacity_base + opacity_span * proximity`.
    pub opacity_base: f32,
    pub opacity_span: f32,
}

impl StarfieldConfig {
    /// Full-page background: a deep fixed volume, steady speed, trails at
    /// any depth.
    pub fn full_page(particle_count: usize) -> Self {
        Self {
            particle_count,
            extent: Extent::Fixed {
                width: 2000.0,
                height: 2000.0,
            },
            depth: DepthRange::Fixed(2000.0),
            projection_constant: 1000.0,
            speed: SpeedRange::uniform(3.0),
            trail_depth_fraction: 1.0,
            size_gain: 3.0,
            opacity_base: 0.8,
            opacity_span: 0.2,
        }
    }

    /// Hero background: volume sized off the surface, varied speeds, trails
    /// only in the nearest 30% of the depth range.
    pub fn hero(particle_count: usize) -> Self {
        Self {
            particle_count,
            extent: Extent::SurfaceRelative { factor: 2.0 },
            depth: DepthRange::SurfaceWidth,
            projection_constant: 128.0,
            speed: SpeedRange { min: 2.0, max: 5.0 },
            trail_depth_fraction: 0.3,
            size_gain: 2.0,
            opacity_base: 0.2,
            opacity_span: 0.8,
        }
    }
}

/// One point in the simulated volume. `pos.z` is depth from the viewer;
/// `prev` is the projected position from the prior frame, `None` until a
/// particle has been projected once after creation or recycling.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec3,
    pub prev: Option<Vec2>,
    pub size: f32,
    pub speed: f32,
}

/// Motion-trail segment from the previous projected position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub from: Vec2,
    pub width: f32,
    pub opacity: f32,
}

/// Everything needed to rasterize one particle this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarSprite {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub trail: Option<TrailSegment>,
}

/// Fixed-size pool of particles flying toward the viewer. The pool is
/// rebuilt wholesale on every surface resize; the particle count never
/// changes between resizes.
pub struct Starfield {
    pub stars: Vec<Particle>,
    pub config: StarfieldConfig,
    surface_w: f32,
    surface_h: f32,
    max_depth: f32,
    rng: StdRng,
}

impl Starfield {
    pub fn new(config: StarfieldConfig, surface_w: f32, surface_h: f32, seed: u64) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            max_depth: config.depth.max_depth(surface_w),
            config,
            surface_w,
            surface_h,
            rng: StdRng::seed_from_u64(seed),
        };
        field.init_pool();
        field
    }

    pub fn max_depth(&self) -> f32 {
        self.max_depth
    }

    pub fn surface_size(&self) -> (f32, f32) {
        (self.surface_w, self.surface_h)
    }

    /// Adopt new surface dimensions and rebuild every particle. Nothing of
    /// the old pool survives, including trail anchors.
    pub fn resize(&mut self, surface_w: f32, surface_h: f32) {
        self.surface_w = surface_w;
        self.surface_h = surface_h;
        self.max_depth = self.config.depth.max_depth(surface_w);
        self.init_pool();
    }

    fn init_pool(&mut self) {
        self.stars.clear();
        for _ in 0..self.config.particle_count {
            let (x, y) = self.roll_xy();
            let z = self.rng.gen::<f32>() * self.max_depth;
            let size = SIZE_MIN + self.rng.gen::<f32>() * SIZE_SPAN;
            let speed = self.config.speed.sample(&mut self.rng);
            self.stars.push(Particle {
                pos: Vec3::new(x, y, z),
                prev: None,
                size,
                speed,
            });
        }
    }

    fn roll_xy(&mut self) -> (f32, f32) {
        let (ew, eh) = self
            .config
            .extent
            .dimensions(self.surface_w, self.surface_h);
        let x = (self.rng.gen::<f32>() - 0.5) * ew;
        let y = (self.rng.gen::<f32>() - 0.5) * eh;
        (x, y)
    }

    /// Advance the simulation one frame and fill `out` with the sprites to
    /// draw. Particles whose depth ran out are recycled to the far plane
    /// before projection, so depth is strictly positive wherever the
    /// perspective divide happens. Off-screen particles emit no sprite but
    /// still update their trail anchor.
    pub fn advance(&mut self, out: &mut Vec<StarSprite>) {
        out.clear();
        let center_x = self.surface_w / 2.0;
        let center_y = self.surface_h / 2.0;
        let max_depth = self.max_depth;
        let trail_ceiling = max_depth * self.config.trail_depth_fraction;
        let (ew, eh) = self
            .config
            .extent
            .dimensions(self.surface_w, self.surface_h);

        for star in &mut self.stars {
            star.pos.z -= star.speed;

            if star.pos.z <= 0.0 {
                star.pos.x = (self.rng.gen::<f32>() - 0.5) * ew;
                star.pos.y = (self.rng.gen::<f32>() - 0.5) * eh;
                star.pos.z = max_depth;
                star.prev = None;
            }

            let scale = self.config.projection_constant / star.pos.z;
            let screen = Vec2::new(
                star.pos.x * scale + center_x,
                star.pos.y * scale + center_y,
            );

            let proximity = 1.0 - star.pos.z / max_depth;
            let raw_size = proximity * star.size * self.config.size_gain;
            let opacity = self.config.opacity_base + self.config.opacity_span * proximity;

            let on_screen = screen.x >= 0.0
                && screen.x <= self.surface_w
                && screen.y >= 0.0
                && screen.y <= self.surface_h;

            if on_screen {
                let trail = star
                    .prev
                    .filter(|_| star.pos.z < trail_ceiling)
                    .map(|from| TrailSegment {
                        from,
                        width: raw_size * 0.5,
                        opacity: opacity * 0.5,
                    });
                out.push(StarSprite {
                    pos: screen,
                    radius: raw_size.max(DOT_RADIUS_FLOOR),
                    opacity,
                    trail,
                });
            }

            star.prev = Some(screen);
        }
    }
}
