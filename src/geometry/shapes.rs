//! Discretizable analytic shapes for building bubble topologies.
//!
//! Each shape produces an open [`Ring`] (no repeated closing coordinate)
//! traversed counter-clockwise. Randomized shapes draw from a `SmallRng`
//! seeded explicitly so runs are reproducible.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Coord, Ring};

/// Axis-aligned rectangle described by midpoint and extents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub midpoint: Coord,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(midpoint: impl Into<Coord>, width: f64, height: f64) -> Self {
        Self {
            midpoint: midpoint.into(),
            width,
            height,
        }
    }

    /// Ring with `refs` points per side (`refs >= 1`), starting at the
    /// lower-left corner.
    pub fn discretize(&self, refs: usize) -> Ring {
        let refs = refs.max(1);
        let x0 = self.midpoint.x - self.width / 2.0;
        let y0 = self.midpoint.y - self.height / 2.0;
        let x1 = self.midpoint.x + self.width / 2.0;
        let y1 = self.midpoint.y + self.height / 2.0;
        let corners = [
            Coord::new(x0, y0),
            Coord::new(x1, y0),
            Coord::new(x1, y1),
            Coord::new(x0, y1),
        ];
        let mut coords = Vec::with_capacity(4 * refs);
        for side in 0..4 {
            let a = corners[side];
            let b = corners[(side + 1) % 4];
            for j in 0..refs {
                let f = j as f64 / refs as f64;
                coords.push(Coord::new(a.x + f * (b.x - a.x), a.y + f * (b.y - a.y)));
            }
        }
        Ring::new(coords)
    }
}

/// Circle discretized as a regular polygon.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub midpoint: Coord,
    pub radius: f64,
}

impl Circle {
    pub fn new(midpoint: impl Into<Coord>, radius: f64) -> Self {
        Self {
            midpoint: midpoint.into(),
            radius,
        }
    }

    /// Regular `refs`-gon ring (`refs >= 3`).
    pub fn discretize(&self, refs: usize) -> Ring {
        let refs = refs.max(3);
        let coords = (0..refs)
            .map(|k| {
                let theta = TAU * k as f64 / refs as f64;
                Coord::new(
                    self.midpoint.x + self.radius * theta.cos(),
                    self.midpoint.y + self.radius * theta.sin(),
                )
            })
            .collect();
        Ring::new(coords)
    }
}

/// Star with `n` spikes alternating between an inner and an outer radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NStar {
    pub midpoint: Coord,
    pub radius_in: f64,
    pub radius_out: f64,
    pub n: usize,
    /// Rotation of the first spike, in radians.
    pub alpha: f64,
}

impl NStar {
    pub fn new(
        midpoint: impl Into<Coord>,
        radius_in: f64,
        radius_out: f64,
        n: usize,
        alpha: f64,
    ) -> Self {
        Self {
            midpoint: midpoint.into(),
            radius_in,
            radius_out,
            n,
            alpha,
        }
    }

    /// Ring with `2 * n` points alternating outer/inner radius.
    pub fn discretize(&self) -> Ring {
        let n = self.n.max(2);
        let coords = (0..2 * n)
            .map(|k| {
                let theta = self.alpha + TAU * k as f64 / (2 * n) as f64;
                let r = if k % 2 == 0 {
                    self.radius_out
                } else {
                    self.radius_in
                };
                Coord::new(
                    self.midpoint.x + r * theta.cos(),
                    self.midpoint.y + r * theta.sin(),
                )
            })
            .collect();
        Ring::new(coords)
    }
}

/// Star-like blob whose radius is modulated by a random trigonometric
/// polynomial.
///
/// The harmonic coefficients are drawn from a `SmallRng` seeded with
/// `seed`, so the same seed always yields the same shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stellar {
    pub midpoint: Coord,
    pub radius: f64,
    pub seed: u64,
}

/// Number of harmonics modulating a [`Stellar`] radius.
const STELLAR_HARMONICS: usize = 5;

impl Stellar {
    pub fn new(midpoint: impl Into<Coord>, radius: f64, seed: u64) -> Self {
        Self {
            midpoint: midpoint.into(),
            radius,
            seed,
        }
    }

    /// Ring with `refs` points (`refs >= 3`).
    pub fn discretize(&self, refs: usize) -> Ring {
        let refs = refs.max(3);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let harmonics: Vec<(f64, f64)> = (0..STELLAR_HARMONICS)
            .map(|_| (rng.gen_range(-0.2..0.2), rng.gen_range(0.0..TAU)))
            .collect();
        let coords = (0..refs)
            .map(|j| {
                let theta = TAU * j as f64 / refs as f64;
                let modulation: f64 = harmonics
                    .iter()
                    .enumerate()
                    .map(|(k, (a, phase))| a * ((k + 1) as f64 * theta + phase).sin())
                    .sum();
                // Keep the boundary away from the midpoint even for extreme draws.
                let r = (self.radius * (1.0 + modulation)).max(0.1 * self.radius);
                Coord::new(
                    self.midpoint.x + r * theta.cos(),
                    self.midpoint.y + r * theta.sin(),
                )
            })
            .collect();
        Ring::new(coords)
    }
}
