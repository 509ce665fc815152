use nalgebra::{Rotation3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

const SPIN_X: f32 = 0.1; // rad/s
const SPIN_Y: f32 = 0.05;

pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;
const STAR_FACTOR: f32 = 4.0;
const TWINKLE_SPEED: f32 = 1.0;

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Points scattered uniformly through a cube of side `radius` centred on the
/// origin. The whole cloud spins slowly; positions never change.
#[derive(Debug, Clone)]
pub struct ParticleField {
    points: Vec<Vector3<f32>>,
    radius: f32,
}

impl ParticleField {
    pub fn new(count: usize, radius: f32, seed: Option<u64>) -> Self {
        let mut rng = seeded_rng(seed);
        let points = (0..count)
            .map(|_| {
                Vector3::new(
                    (rng.gen::<f32>() - 0.5) * radius,
                    (rng.gen::<f32>() - 0.5) * radius,
                    (rng.gen::<f32>() - 0.5) * radius,
                )
            })
            .collect();
        log::debug!("Built particle field: {} points, radius {}", count, radius);
        Self { points, radius }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn points(&self) -> &[Vector3<f32>] {
        &self.points
    }

    /// (x, y) rotation of the cloud after `elapsed` seconds.
    pub fn rotation(elapsed: f32) -> (f32, f32) {
        (elapsed * SPIN_X, elapsed * SPIN_Y)
    }

    /// World positions at `elapsed` seconds.
    pub fn positions_at(&self, elapsed: f32) -> impl Iterator<Item = Vector3<f32>> + '_ {
        let (rx, ry) = Self::rotation(elapsed);
        // x first, then y
        let rotation = Rotation3::from_euler_angles(rx, ry, 0.0);
        self.points.iter().map(move |p| rotation * p)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vector3<f32>,
    pub size: f32,  // pixels
    pub phase: f32, // twinkle offset, radians
}

/// Static backdrop of stars on a spherical shell between `STAR_RADIUS` and
/// `STAR_RADIUS + STAR_DEPTH` around the origin.
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn new(count: usize, seed: Option<u64>) -> Self {
        let mut rng = seeded_rng(seed);
        // Shell is filled from the outside in
        let mut r = STAR_RADIUS + STAR_DEPTH;
        let step = if count > 0 { STAR_DEPTH / count as f32 } else { 0.0 };
        let stars = (0..count)
            .map(|_| {
                r -= step * rng.gen::<f32>();
                let z = 2.0 * rng.gen::<f32>() - 1.0;
                let phi = TAU * rng.gen::<f32>();
                let ring = (1.0 - z * z).max(0.0).sqrt();
                Star {
                    position: Vector3::new(ring * phi.cos(), z, ring * phi.sin()) * r,
                    size: (0.5 + 0.5 * rng.gen::<f32>()) * STAR_FACTOR,
                    phase: TAU * rng.gen::<f32>(),
                }
            })
            .collect();
        log::debug!("Built star field: {} stars", count);
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Brightness of `star` in [0.5, 1] at `elapsed` seconds.
    pub fn twinkle(star: &Star, elapsed: f32) -> f32 {
        0.75 + 0.25 * (elapsed * TWINKLE_SPEED + star.phase).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_stay_inside_the_cube() {
        let field = ParticleField::new(500, 30.0, Some(7));
        assert_eq!(field.len(), 500);
        let half = field.radius() / 2.0;
        for p in field.points() {
            assert!(p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::new(50, 10.0, Some(42));
        let b = ParticleField::new(50, 10.0, Some(42));
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn rotation_is_a_function_of_time() {
        assert_eq!(ParticleField::rotation(0.0), (0.0, 0.0));
        let (rx, ry) = ParticleField::rotation(10.0);
        assert!((rx - 1.0).abs() < 1e-6);
        assert!((ry - 0.5).abs() < 1e-6);
    }

    #[test]
    fn spinning_preserves_distance_from_origin() {
        let field = ParticleField::new(20, 10.0, Some(3));
        for (before, after) in field.points().iter().zip(field.positions_at(12.5)) {
            assert!((before.norm() - after.norm()).abs() < 1e-3);
        }
    }

    #[test]
    fn stars_lie_on_the_shell() {
        let field = StarField::new(3000, Some(11));
        assert_eq!(field.len(), 3000);
        for star in field.stars() {
            let r = star.position.norm();
            assert!(r >= STAR_RADIUS - 1e-2 && r <= STAR_RADIUS + STAR_DEPTH + 1e-2);
            assert!(star.size >= 0.5 * STAR_FACTOR && star.size <= STAR_FACTOR);
        }
    }

    #[test]
    fn star_field_is_seedable() {
        let a = StarField::new(100, Some(5));
        let b = StarField::new(100, Some(5));
        assert_eq!(a.stars(), b.stars());
        assert_eq!(StarField::new(0, Some(5)).len(), 0);
    }

    #[test]
    fn twinkle_stays_in_range() {
        let field = StarField::new(10, Some(1));
        for star in field.stars() {
            for i in 0..100 {
                let b = StarField::twinkle(star, i as f32 * 0.3);
                assert!((0.5 - 1e-6..=1.0 + 1e-6).contains(&b));
            }
        }
    }
}
