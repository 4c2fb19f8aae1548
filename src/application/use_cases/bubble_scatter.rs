//! Decorative bubble-scatter generator.
//!
//! Purely cosmetic filler for the bubble chart; it never feeds the
//! analytical views. Randomness comes in through `RandomSource` so the
//! rest of the engine stays deterministic and the generator itself is
//! testable with a seeded source.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Uniform values in [0, 1).
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Ranges the bubbles are scattered over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterConfig {
    pub points: usize,
    pub x_max: f64,
    pub y_max: f64,
    pub radius_max: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            points: 7,
            x_max: 100.0,
            y_max: 100.0,
            radius_max: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

pub fn bubble_points(config: &ScatterConfig, source: &mut dyn RandomSource) -> Vec<BubblePoint> {
    (0..config.points)
        .map(|_| BubblePoint {
            x: source.next_f64() * config.x_max,
            y: source.next_f64() * config.y_max,
            r: source.next_f64() * config.radius_max,
        })
        .collect()
}
