//! Particle-network simulation behind the hero section.
//!
//! The field is a set of points drifting at constant speed inside the
//! canvas, bouncing elastically off its walls. Every unordered pair closer
//! than [`ParticleParams::link_distance`] is joined by a line whose strength
//! fades linearly to zero at that distance.
//!
//! This module never touches the DOM. The landing app owns the canvas and
//! the frame loop; it calls [`ParticleField::step`] once per frame and
//! draws [`ParticleField::particles`] and [`ParticleField::links`].
//!
//! # Example
//!
//! ```rust
//! use rand::{SeedableRng, rngs::SmallRng};
//! use tchapbx_site::particles::{ParticleField, ParticleParams, particle_count};
//!
//! let params = ParticleParams::default();
//! assert_eq!(particle_count(1200, 800, &params), 64);
//!
//! let mut field = ParticleField::seed(1200, 800, params, &mut SmallRng::seed_from_u64(1));
//! field.step();
//! assert!(field.particles().iter().all(|p| p.x >= 0.0 && p.x <= 1200.0));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fill colour for particle dots.
pub const PARTICLE_FILL: &str = "rgba(0, 245, 255, 0.6)";

/// Alpha of a link at full strength (distance 0).
pub const LINK_MAX_ALPHA: f64 = 0.3;

/// Tuning knobs for the particle field, loaded from `[particles]` in `site.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleParams {
    /// Upper bound on the number of particles, whatever the canvas size.
    pub max_particles: usize,
    /// Canvas area (px²) per particle; smaller means denser.
    pub area_per_particle: u32,
    /// Pairs closer than this are linked.
    pub link_distance: f64,
    /// Full width of the velocity range; each axis is drawn from `±max_speed / 2`.
    pub max_speed: f64,
    /// Smallest particle radius.
    pub min_radius: f64,
    /// Largest particle radius (exclusive).
    pub max_radius: f64,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            max_particles: 100,
            area_per_particle: 15_000,
            link_distance: 150.0,
            max_speed: 0.5,
            min_radius: 1.0,
            max_radius: 3.0,
        }
    }
}

/// Number of particles seeded for a canvas of the given size:
/// `min(max_particles, floor(width * height / area_per_particle))`.
pub fn particle_count(width: u32, height: u32, params: &ParticleParams) -> usize {
    if params.area_per_particle == 0 {
        return 0;
    }
    let area = u64::from(width) * u64::from(height);
    let by_area = area / u64::from(params.area_per_particle);
    usize::try_from(by_area)
        .unwrap_or(usize::MAX)
        .min(params.max_particles)
}

/// Strength of a link between two particles `distance` apart.
///
/// 1.0 at distance 0, falling linearly to exactly 0.0 at `link_distance`
/// and staying there beyond it.
pub fn link_strength(distance: f64, link_distance: f64) -> f64 {
    if link_distance <= 0.0 || distance >= link_distance {
        return 0.0;
    }
    1.0 - distance.max(0.0) / link_distance
}

/// A single point in the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position in canvas pixels.
    pub x: f64,
    /// Vertical position in canvas pixels.
    pub y: f64,
    /// Horizontal velocity, pixels per frame.
    pub vx: f64,
    /// Vertical velocity, pixels per frame.
    pub vy: f64,
    /// Dot radius in pixels. Fixed for the particle's lifetime.
    pub radius: f64,
}

impl Particle {
    /// Euclidean distance to another particle.
    pub fn distance_to(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Speed (velocity magnitude). Bounces never change it.
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

/// A line to draw between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle (always lower than `to`).
    pub from: usize,
    /// Index of the second particle.
    pub to: usize,
    /// Distance between the two particles.
    pub distance: f64,
    /// Opacity factor in `(0, 1]`, see [`link_strength`].
    pub strength: f64,
}

impl Link {
    /// Canvas stroke style for this link.
    pub fn stroke_style(&self) -> String {
        format!("rgba(0, 245, 255, {:.3})", self.strength * LINK_MAX_ALPHA)
    }
}

/// The simulated field: particles plus the bounds they live in.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    params: ParticleParams,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seed a field for a `width × height` canvas.
    ///
    /// Positions are uniform over the canvas, each velocity component is
    /// uniform in `[-max_speed / 2, max_speed / 2)` and radii are uniform in
    /// `[min_radius, max_radius)`.
    pub fn seed<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        params: ParticleParams,
        rng: &mut R,
    ) -> Self {
        let count = particle_count(width, height, &params);
        let (w, h) = (f64::from(width), f64::from(height));
        let radius_span = (params.max_radius - params.min_radius).max(0.0);

        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random::<f64>() * w,
                y: rng.random::<f64>() * h,
                vx: (rng.random::<f64>() - 0.5) * params.max_speed,
                vy: (rng.random::<f64>() - 0.5) * params.max_speed,
                radius: params.min_radius + rng.random::<f64>() * radius_span,
            })
            .collect();

        tracing::debug!(width, height, count, "seeded particle field");

        Self {
            width: w,
            height: h,
            params,
            particles,
        }
    }

    /// Build a field from explicit particles.
    pub fn from_particles(
        width: u32,
        height: u32,
        params: ParticleParams,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
            params,
            particles,
        }
    }

    /// Advance every particle by one frame.
    ///
    /// A coordinate that leaves `[0, dimension]` is mirrored back inside and
    /// the velocity on that axis flips sign, so after the call every
    /// particle lies within the bounds and keeps its speed.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            bounce(&mut p.x, &mut p.vx, w);
            bounce(&mut p.y, &mut p.vy, h);
        }
    }

    /// Track a new canvas size. Existing particles are kept as they are;
    /// any now outside the bounds are brought back on the next [`step`](Self::step).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = f64::from(width);
        self.height = f64::from(height);
    }

    /// All linked pairs, `from < to`, with distance strictly below
    /// [`ParticleParams::link_distance`].
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let n = self.particles.len();
        let limit = self.params.link_distance;
        (0..n).flat_map(move |i| {
            (i + 1..n).filter_map(move |j| {
                let distance = self.particles[i].distance_to(&self.particles[j]);
                (distance < limit).then(|| Link {
                    from: i,
                    to: j,
                    distance,
                    strength: link_strength(distance, limit),
                })
            })
        })
    }

    /// Particles in seeding order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when the canvas was too small to hold a single particle.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current bounds as `(width, height)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Parameters the field was seeded with.
    pub fn params(&self) -> &ParticleParams {
        &self.params
    }
}

fn bounce(pos: &mut f64, vel: &mut f64, max: f64) {
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = vel.abs();
    } else if *pos > max {
        *pos = 2.0 * max - *pos;
        *vel = -vel.abs();
    }
    // A shrunken canvas or a velocity wider than the canvas can still leave
    // the mirrored point outside.
    *pos = pos.clamp(0.0, max);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            radius: 2.0,
        }
    }

    fn in_bounds(field: &ParticleField) -> bool {
        let (w, h) = field.bounds();
        field
            .particles()
            .iter()
            .all(|p| (0.0..=w).contains(&p.x) && (0.0..=h).contains(&p.y))
    }

    #[test]
    fn count_for_1200_by_800_is_64() {
        assert_eq!(particle_count(1200, 800, &ParticleParams::default()), 64);
    }

    #[test]
    fn count_matches_formula_across_sizes() {
        let params = ParticleParams::default();
        let sizes = [0u32, 1, 120, 375, 768, 1200, 1920, 2560, 3840, 10_000];
        for &w in &sizes {
            for &h in &sizes {
                let expected = ((u64::from(w) * u64::from(h)) / 15_000).min(100) as usize;
                assert_eq!(particle_count(w, h, &params), expected, "{w}x{h}");
            }
        }
    }

    #[test]
    fn count_is_capped() {
        assert_eq!(particle_count(3840, 2160, &ParticleParams::default()), 100);
        assert_eq!(particle_count(u32::MAX, u32::MAX, &ParticleParams::default()), 100);
    }

    #[test]
    fn count_is_zero_for_tiny_or_degenerate_canvas() {
        let params = ParticleParams::default();
        assert_eq!(particle_count(0, 800, &params), 0);
        assert_eq!(particle_count(100, 100, &params), 0);

        let no_area = ParticleParams {
            area_per_particle: 0,
            ..ParticleParams::default()
        };
        assert_eq!(particle_count(1200, 800, &no_area), 0);
    }

    #[test]
    fn seeded_particles_respect_params() {
        let params = ParticleParams::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let field = ParticleField::seed(1200, 800, params, &mut rng);

        assert_eq!(field.len(), 64);
        assert!(in_bounds(&field));
        for p in field.particles() {
            assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let params = ParticleParams::default();
        let a = ParticleField::seed(800, 600, params, &mut SmallRng::seed_from_u64(9));
        let b = ParticleField::seed(800, 600, params, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn step_keeps_particles_in_bounds() {
        // Fast particles on a small canvas hit the walls constantly.
        let params = ParticleParams {
            area_per_particle: 10,
            max_speed: 40.0,
            ..ParticleParams::default()
        };
        for seed in 0..8 {
            let mut field =
                ParticleField::seed(60, 45, params, &mut SmallRng::seed_from_u64(seed));
            assert!(!field.is_empty());
            for _ in 0..500 {
                field.step();
                assert!(in_bounds(&field), "seed {seed} escaped");
            }
        }
    }

    #[test]
    fn bounce_flips_velocity_and_keeps_speed() {
        let mut field = ParticleField::from_particles(
            100,
            100,
            ParticleParams::default(),
            vec![
                particle(0.1, 50.0, -0.25, 0.0),
                particle(99.9, 50.0, 0.25, 0.0),
                particle(50.0, 0.05, 0.1, -0.2),
                particle(50.0, 99.95, -0.1, 0.2),
            ],
        );
        let speeds: Vec<f64> = field.particles().iter().map(Particle::speed).collect();

        field.step();
        let p = field.particles();

        assert!((p[0].x - 0.15).abs() < 1e-9);
        assert_eq!(p[0].vx, 0.25);
        assert!((p[1].x - 99.85).abs() < 1e-9);
        assert_eq!(p[1].vx, -0.25);
        assert_eq!(p[2].vy, 0.2);
        assert_eq!(p[2].vx, 0.1);
        assert_eq!(p[3].vy, -0.2);
        for (particle, speed) in p.iter().zip(speeds) {
            assert!((particle.speed() - speed).abs() < 1e-12);
        }
    }

    #[test]
    fn resize_does_not_reseed() {
        let params = ParticleParams::default();
        let mut field = ParticleField::seed(1200, 800, params, &mut SmallRng::seed_from_u64(3));
        let before = field.particles().to_vec();

        field.resize(1920, 1080);

        assert_eq!(field.particles(), before.as_slice());
        assert_eq!(field.bounds(), (1920.0, 1080.0));
    }

    #[test]
    fn shrinking_canvas_pulls_particles_back_in() {
        let mut field = ParticleField::from_particles(
            1000,
            1000,
            ParticleParams::default(),
            vec![particle(900.0, 900.0, 0.2, 0.2), particle(10.0, 10.0, 0.0, 0.0)],
        );
        field.resize(300, 200);
        field.step();
        assert!(in_bounds(&field));
    }

    #[test]
    fn zero_sized_canvas_is_inert() {
        let mut field = ParticleField::seed(
            0,
            0,
            ParticleParams::default(),
            &mut SmallRng::seed_from_u64(0),
        );
        assert!(field.is_empty());
        field.step();
        assert_eq!(field.links().count(), 0);
    }

    #[test]
    fn link_drawn_only_below_link_distance() {
        let params = ParticleParams::default();
        let at = |dx: f64| {
            ParticleField::from_particles(
                1000,
                1000,
                params,
                vec![particle(100.0, 100.0, 0.0, 0.0), particle(100.0 + dx, 100.0, 0.0, 0.0)],
            )
        };

        assert_eq!(at(149.9).links().count(), 1);
        assert_eq!(at(150.0).links().count(), 0);
        assert_eq!(at(150.1).links().count(), 0);
        assert_eq!(at(0.0).links().count(), 1);
    }

    #[test]
    fn links_cover_each_unordered_pair_once() {
        let field = ParticleField::from_particles(
            1000,
            1000,
            ParticleParams::default(),
            vec![
                particle(0.0, 0.0, 0.0, 0.0),
                particle(60.0, 0.0, 0.0, 0.0),
                particle(120.0, 0.0, 0.0, 0.0),
                particle(600.0, 600.0, 0.0, 0.0),
            ],
        );
        let pairs: Vec<(usize, usize)> = field.links().map(|l| (l.from, l.to)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn strength_fades_linearly_to_zero() {
        assert_eq!(link_strength(0.0, 150.0), 1.0);
        assert!((link_strength(75.0, 150.0) - 0.5).abs() < 1e-12);
        assert_eq!(link_strength(150.0, 150.0), 0.0);
        assert_eq!(link_strength(400.0, 150.0), 0.0);

        let samples: Vec<f64> = (0..150).map(|d| link_strength(f64::from(d), 150.0)).collect();
        assert!(samples.windows(2).all(|w| w[1] < w[0]));
        assert!(samples.iter().all(|s| *s > 0.0));
    }

    #[test]
    fn stroke_style_scales_alpha() {
        let link = Link {
            from: 0,
            to: 1,
            distance: 75.0,
            strength: 0.5,
        };
        assert_eq!(link.stroke_style(), "rgba(0, 245, 255, 0.150)");
    }
}
