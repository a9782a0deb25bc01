//! Synthetic dataset generation.
//!
//! Produces the four preset point clouds used for exploration: a tiny
//! Gaussian blob, a small set of three shuffled Gaussian clusters, and
//! medium/large uniform squares. The random source is always an explicit
//! seeded generator passed in by the caller; the same seed yields the same
//! dataset.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::instance::{City, TspInstance};

/// Sample `n` points from independent normal distributions per axis.
pub fn normal_points(
    rng: &mut ChaCha8Rng,
    n: usize,
    x_mean: f64,
    y_mean: f64,
    x_stddev: f64,
    y_stddev: f64,
) -> Vec<City> {
    (0..n)
        .map(|_| {
            let zx: f64 = rng.sample(StandardNormal);
            let zy: f64 = rng.sample(StandardNormal);
            City::new(x_mean + x_stddev * zx, y_mean + y_stddev * zy)
        })
        .collect()
}

/// Sample `n` points uniformly from an axis-aligned rectangle.
pub fn uniform_points(
    rng: &mut ChaCha8Rng,
    n: usize,
    x_low: f64,
    y_low: f64,
    x_high: f64,
    y_high: f64,
) -> Vec<City> {
    (0..n)
        .map(|_| {
            City::new(
                rng.gen_range(x_low..x_high),
                rng.gen_range(y_low..y_high),
            )
        })
        .collect()
}

/// Dataset presets matching the flat coordinate files this crate loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 10 points in one Gaussian blob; brute-force territory
    Tiny,
    /// 30 points in three shuffled Gaussian clusters
    Small,
    /// 100 points uniform in the unit square
    Medium,
    /// 1000 points uniform in the unit square
    Large,
}

impl Preset {
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Tiny => "tiny",
            Preset::Small => "small",
            Preset::Medium => "medium",
            Preset::Large => "large",
        }
    }
}

/// Generate a preset point cloud as a named instance.
pub fn make_preset(preset: Preset, rng: &mut ChaCha8Rng) -> TspInstance {
    let cities = match preset {
        Preset::Tiny => normal_points(rng, 10, 0.0, 0.0, 1.0, 1.0),
        Preset::Small => {
            let mut cities = normal_points(rng, 10, 0.0, 0.0, 1.0, 1.0);
            cities.extend(normal_points(rng, 10, 5.0, 5.0, 1.0, 1.0));
            cities.extend(normal_points(rng, 10, -8.0, 15.0, 1.0, 1.0));
            cities.shuffle(rng);
            cities
        }
        Preset::Medium => uniform_points(rng, 100, 0.0, 0.0, 1.0, 1.0),
        Preset::Large => uniform_points(rng, 1000, 0.0, 0.0, 1.0, 1.0),
    };

    TspInstance::new(preset.name(), cities)
}
