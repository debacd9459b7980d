//! The directional rule table and its randomization

use rand::Rng;

use crate::particle::{Bounds, ParticleKind};

/// One directional interaction rule.
///
/// The rule at (row, col) governs the force that particles of the column
/// kind exert on particles of the row kind. Rules are not symmetric:
/// (Red, Green) is independent of (Green, Red).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rule {
    /// Interaction cutoff: only neighbors closer than this exert the force
    pub radius: f32,
    /// Signed strength: positive attracts, negative repels
    pub force: f32,
}

const TABLE_LEN: usize = ParticleKind::COUNT * ParticleKind::COUNT;

/// Globals drawn alongside a randomized table, returned for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomizeSummary {
    pub max_speed: f32,
    pub friction: f32,
}

/// Square matrix of rules indexed by (row kind, column kind).
///
/// Always fully populated; a freshly created table holds the zero rule in
/// every cell, which is valid (no interaction).
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: [Rule; TABLE_LEN],
}

impl RuleTable {
    pub fn new() -> Self {
        Self {
            rules: [Rule::default(); TABLE_LEN],
        }
    }

    #[inline]
    fn cell(row: usize, col: usize) -> usize {
        assert!(
            row < ParticleKind::COUNT && col < ParticleKind::COUNT,
            "rule index ({row},{col}) outside the {n}x{n} table",
            n = ParticleKind::COUNT
        );
        row * ParticleKind::COUNT + col
    }

    pub fn get(&self, row: usize, col: usize) -> Rule {
        self.rules[Self::cell(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, rule: Rule) {
        self.rules[Self::cell(row, col)] = rule;
    }

    /// Rule governing the force `other`-kind particles exert on `this`-kind
    /// particles. Typed lookup for the hot loop; cannot fail.
    #[inline]
    pub fn for_pair(&self, this: ParticleKind, other: ParticleKind) -> Rule {
        self.rules[this.index() * ParticleKind::COUNT + other.index()]
    }

    /// Replace every rule with freshly drawn values and draw new global
    /// tunables, returning those for the caller to apply.
    ///
    /// Draw order is fixed (globals first, then cells in row-major order,
    /// radius before force) so a given RNG seed always reproduces the same
    /// table. Radii are drawn as a squared uniform over
    /// `[0, half_width/kinds)`, biasing large radii to be rare and scaling
    /// with world size; forces are a difference of two squared uniforms,
    /// zero-mean with most mass near zero. Every value is rounded to three
    /// decimals for stable display and diffing.
    pub fn randomize(&mut self, rng: &mut impl Rng, bounds: &Bounds) -> RandomizeSummary {
        let max_speed = round3(rng.random_range(0.0..8.0) + 2.0);
        let friction = round3(rng.random_range(0.0..1.0));

        let radius_limit = bounds.half_width() / ParticleKind::COUNT as f32;
        for row in 0..ParticleKind::COUNT {
            for col in 0..ParticleKind::COUNT {
                let radius = round3(rng.random_range(0.0..radius_limit).powi(2));
                let force = round3(
                    rng.random_range(0.0..5.0f32).powi(2) - rng.random_range(0.0..5.0f32).powi(2),
                );
                self.rules[row * ParticleKind::COUNT + col] = Rule { radius, force };
            }
        }

        RandomizeSummary { max_speed, friction }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to three decimal places
fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
