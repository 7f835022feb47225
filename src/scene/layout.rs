use std::f64::consts::PI;

use glam::Vec3;
use rand::Rng;

use crate::social::EntityRecord;

pub const CUBE_HALF_EXTENT: f32 = 25.0;
pub const DEFAULT_SPHERE_RADIUS: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutStrategy {
    RandomCube,
    FibonacciSphere { radius: f32 },
}

impl LayoutStrategy {
    /// Maps the layout switch value: `"0"` is the random cube, every other
    /// value selects the sphere.
    pub fn from_selector_value(value: &str, radius: f32) -> Self {
        if value == "0" {
            Self::RandomCube
        } else {
            Self::FibonacciSphere { radius }
        }
    }

    pub fn selector_value(self) -> &'static str {
        match self {
            Self::RandomCube => "0",
            Self::FibonacciSphere { .. } => "1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RandomCube => "Random",
            Self::FibonacciSphere { .. } => "Spherical",
        }
    }
}

pub fn random_cube_layout<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-CUBE_HALF_EXTENT..=CUBE_HALF_EXTENT),
                rng.gen_range(-CUBE_HALF_EXTENT..=CUBE_HALF_EXTENT),
                rng.gen_range(-CUBE_HALF_EXTENT..=CUBE_HALF_EXTENT),
            )
        })
        .collect()
}

/// Slot `index` of a Fibonacci lattice with `total_count` points.
///
/// The azimuth grows by the golden angle and is deliberately left unwrapped.
fn sphere_slot(index: usize, total_count: usize, radius: f64) -> Vec3 {
    let i = index as f64;
    let theta = (1.0 - 2.0 * (i + 0.5) / total_count as f64).acos();
    let phi = PI * (1.0 + 5.0_f64.sqrt()) * i;

    Vec3::new(
        (radius * theta.sin() * phi.cos()) as f32,
        (radius * theta.sin() * phi.sin()) as f32,
        (radius * theta.cos()) as f32,
    )
}

/// First `produced` slots of a `total_count`-point lattice.
pub fn fibonacci_sphere_layout(radius: f32, total_count: usize, produced: usize) -> Vec<Vec3> {
    if total_count == 0 {
        return Vec::new();
    }

    (0..produced.min(total_count))
        .map(|index| sphere_slot(index, total_count, radius as f64))
        .collect()
}

/// Positions for the first `count` records, one per record.
pub fn compute_layout<R: Rng + ?Sized>(
    strategy: LayoutStrategy,
    records: &[EntityRecord],
    count: usize,
    rng: &mut R,
) -> Vec<Vec3> {
    let produced = records.len().min(count);

    match strategy {
        LayoutStrategy::RandomCube => random_cube_layout(produced, rng),
        LayoutStrategy::FibonacciSphere { radius } => {
            fibonacci_sphere_layout(radius, count, produced)
        }
    }
}
