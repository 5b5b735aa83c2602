//! Core state types for the gravity toy.
//!
//! Defines the 2D vector alias and the particle struct:
//! - `Vec2`      – nalgebra `Vector2<f64>` plus displacement/unit helpers
//! - `Particle`  – position/velocity/force state with mass derived from radius
//! - `RunState`  – engine run state (running or paused)

use nalgebra::Vector2;
pub type Vec2 = Vector2<f64>;

pub const DEFAULT_RADIUS: f64 = 5.0;
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Displacement and unit-vector helpers on top of nalgebra's `Vector2`.
pub trait VectorExt {
    /// Vector pointing from `self` to `other`.
    fn displacement_to(&self, other: &Vec2) -> Vec2;

    /// `self` scaled to unit length.
    ///
    /// Undefined on the zero vector; force code floors the squared
    /// separation to `min_displacement` before calling this.
    fn unit(&self) -> Vec2;
}

impl VectorExt for Vec2 {
    fn displacement_to(&self, other: &Vec2) -> Vec2 {
        other - self
    }

    fn unit(&self) -> Vec2 {
        let magnitude = self.norm();
        Vec2::new(self.x / magnitude, self.y / magnitude)
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub id: u64, // unique, assigned by the engine's allocator, never reused
    pub position: Vec2,
    pub velocity: Vec2,
    pub resultant_force: Vec2, // recomputed every tick, not an accumulator
    pub radius: f64, // > 0, determines mass
    pub color: String, // cosmetic, irrelevant to physics
}

impl Particle {
    pub fn new(id: u64, position: Vec2, velocity: Vec2, radius: f64, color: String) -> Self {
        Self {
            id,
            position,
            velocity,
            resultant_force: Vec2::zeros(),
            radius,
            color,
        }
    }

    /// Volumetric mass proxy. Not configurable independently of radius.
    pub fn mass(&self) -> f64 {
        self.radius.powi(3)
    }

    /// Displacement from this particle to `other`.
    pub fn displacement_to(&self, other: &Particle) -> Vec2 {
        self.position.displacement_to(&other.position)
    }

    /// Strict interior test, exclusive on all four sides.
    ///
    /// Tests the position only (radius excluded); the same inset is used
    /// by the bounce logic. Gates both pairwise force contribution and
    /// eviction in bordered mode.
    pub fn is_within_bounds(&self, height: f64, width: f64, inset: f64) -> bool {
        self.position.x > inset
            && self.position.x < width - inset
            && self.position.y > inset
            && self.position.y < height - inset
    }
}

/// Engine run state. No terminal state; the engine runs until torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}
