//! Particle kinds, kinematic state, and per-particle motion

use glam::Vec2;

use crate::constants::{WORLD_HALF_HEIGHT, WORLD_HALF_WIDTH};

/// The closed set of particle kinds.
///
/// A particle's kind selects its display color and, together with the kind
/// of every other particle, which rule row/column governs the force between
/// them.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
}

impl ParticleKind {
    /// Number of kinds; also the rule-table dimension
    pub const COUNT: usize = 4;

    pub const ALL: [ParticleKind; Self::COUNT] = [
        ParticleKind::Red,
        ParticleKind::Green,
        ParticleKind::Blue,
        ParticleKind::Yellow,
    ];

    /// Rule-table row/column index for this kind
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display color (RGBA in [0, 1]), from the catppuccin mocha accents
    pub fn color(self) -> [f32; 4] {
        let accents = &catppuccin::PALETTE.mocha.colors;
        let rgb = match self {
            ParticleKind::Red => accents.red.rgb,
            ParticleKind::Green => accents.green.rgb,
            ParticleKind::Blue => accents.blue.rgb,
            ParticleKind::Yellow => accents.yellow.rgb,
        };
        [
            rgb.r as f32 / 255.0,
            rgb.g as f32 / 255.0,
            rgb.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Axis-aligned world rectangle that contains every particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        (self.max.x - self.min.x) * 0.5
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x < self.max.x
            && self.min.y < self.max.y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(
            Vec2::new(-WORLD_HALF_WIDTH, -WORLD_HALF_HEIGHT),
            Vec2::new(WORLD_HALF_WIDTH, WORLD_HALF_HEIGHT),
        )
    }
}

/// Per-particle kinematic state.
///
/// `net_force` is transient: it is recomputed from scratch during every force
/// pass and never carries over between steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub net_force: Vec2,
}

impl Particle {
    pub fn new(kind: ParticleKind, position: Vec2, velocity: Vec2) -> Self {
        Self {
            kind,
            position,
            velocity,
            net_force: Vec2::ZERO,
        }
    }

    /// Advance velocity and position by one step.
    ///
    /// Order matters: friction decay, then acceleration from the accumulated
    /// net force (unit mass, so force equals acceleration), then the speed
    /// clamp, then translation. `friction >= 1/dt` fully zeroes the velocity
    /// and never reverses it.
    pub fn integrate(&mut self, dt: f32, friction: f32, max_speed: f32) {
        self.velocity *= (1.0 - friction * dt).clamp(0.0, 1.0);
        self.velocity += self.net_force * dt;
        self.velocity = self.velocity.clamp_length_max(max_speed);
        self.position += self.velocity * dt;
    }

    /// Clamp the particle back inside `bounds`, reflecting its velocity on
    /// each violated axis toward an outward speed of `bounce_velocity`.
    ///
    /// The reflection is inelastic: the post-bounce axis speed is biased
    /// toward `bounce_velocity` rather than mirroring the incoming speed.
    pub fn bounce_off_walls(&mut self, bounds: &Bounds, bounce_velocity: f32) {
        if self.position.x < bounds.min.x {
            self.position.x = bounds.min.x;
            self.velocity.x = bounce_velocity - self.velocity.x;
        }
        if self.position.x > bounds.max.x {
            self.position.x = bounds.max.x;
            self.velocity.x = -bounce_velocity - self.velocity.x;
        }
        if self.position.y < bounds.min.y {
            self.position.y = bounds.min.y;
            self.velocity.y = bounce_velocity - self.velocity.y;
        }
        if self.position.y > bounds.max.y {
            self.position.y = bounds.max.y;
            self.velocity.y = -bounce_velocity - self.velocity.y;
        }
    }
}
