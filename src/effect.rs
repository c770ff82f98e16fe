// The four effect families that can be placed in a scene, and the spawn
// tables for their particles.

use crate::canvas::DrawCommand;
use crate::collision::{self, MARBLE_MAX_SPEED};
use crate::color::Color;
use crate::container::{Emitter, EmitterFamily, ParticleContainer};
use crate::particle::{Particle, ParticleKind};
use crate::vector::Vector2;
use rand::Rng;
use std::f64::consts::PI;

pub const FIREWORK_PARTICLES: usize = 500;
pub const FIREWORK_LIFETIME: u32 = 50;
pub const MARBLE_COUNT: usize = 10;
pub const MARBLE_LIFETIME: u32 = 500;
pub const FIRE_LIFETIME: u32 = 50;
pub const SPARK_LIFETIME: u32 = 5;

const SPARKLER_HANDLE_LENGTH: f64 = 0.25;
const SPARKLER_HANDLE_WIDTH: f64 = 0.005;

// Random direction, random speed below 0.04
fn burst_velocity<R: Rng>(rng: &mut R) -> Vector2 {
    let radius = rng.gen::<f64>() * 0.04;
    let angle = rng.gen::<f64>() * 2.0 * PI;
    Vector2::from_polar(radius, angle)
}

pub fn firework_particle<R: Rng>(rng: &mut R, anchor: Vector2) -> Particle {
    let vel = burst_velocity(rng);
    let acceleration = Vector2::new(0.0, rng.gen::<f64>() * -0.004 - 0.008);
    Particle::new(
        anchor,
        vel,
        0.004,
        Color::random(rng),
        FIREWORK_LIFETIME,
        ParticleKind::Firework { acceleration },
    )
}

// Marbles ignore the anchor and land anywhere in [0.05, 0.95]^2
pub fn marble_particle<R: Rng>(rng: &mut R) -> Particle {
    let pos = Vector2::new(
        rng.gen::<f64>() * 0.9 + 0.05,
        rng.gen::<f64>() * 0.9 + 0.05,
    );
    let vel = Vector2::new(
        rng.gen::<f64>() * 0.08 - 0.04,
        rng.gen::<f64>() * 0.08 - 0.04,
    );
    let acceleration = Vector2::new(0.0, rng.gen::<f64>() * 0.001 - 0.002);
    Particle::new(
        pos,
        vel,
        0.05,
        Color::random(rng),
        MARBLE_LIFETIME,
        ParticleKind::Marble { acceleration },
    )
}

pub fn fire_particle<R: Rng>(rng: &mut R, anchor: Vector2) -> Particle {
    let vel = Vector2::new(
        rng.gen::<f64>() * 0.004 - 0.002,
        rng.gen::<f64>() * 0.003 + 0.002,
    );
    let size = rng.gen::<f64>() * 0.02 + 0.01;
    Particle::new(
        anchor,
        vel,
        size,
        Color::YELLOW,
        FIRE_LIFETIME,
        ParticleKind::Fire,
    )
}

pub fn spark_particle<R: Rng>(rng: &mut R, anchor: Vector2) -> Particle {
    Particle::new(
        anchor,
        burst_velocity(rng),
        0.04,
        Color::GOLD,
        SPARK_LIFETIME,
        ParticleKind::Spark,
    )
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Firework,
    Marbles,
    Fire,
    Sparkler,
}

#[derive(Clone, Debug)]
pub enum Effect {
    Firework(ParticleContainer),
    Marbles(ParticleContainer),
    Fire(Emitter),
    Sparkler(Emitter),
}

impl Effect {
    pub fn firework<R: Rng>(rng: &mut R, anchor: Vector2) -> Effect {
        let mut container = ParticleContainer::new(anchor);
        container.particles = (0..FIREWORK_PARTICLES)
            .map(|_| firework_particle(rng, anchor))
            .collect();
        Effect::Firework(container)
    }

    pub fn marbles<R: Rng>(rng: &mut R, anchor: Vector2) -> Effect {
        let mut container = ParticleContainer::new(anchor);
        container.particles = (0..MARBLE_COUNT).map(|_| marble_particle(rng)).collect();
        Effect::Marbles(container)
    }

    pub fn fire(anchor: Vector2, fire_rate: u32) -> Effect {
        Effect::Fire(Emitter::new(anchor, fire_rate, EmitterFamily::Fire))
    }

    pub fn sparkler(anchor: Vector2, fire_rate: u32) -> Effect {
        Effect::Sparkler(Emitter::new(anchor, fire_rate, EmitterFamily::Spark))
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Firework(_) => EffectKind::Firework,
            Effect::Marbles(_) => EffectKind::Marbles,
            Effect::Fire(_) => EffectKind::Fire,
            Effect::Sparkler(_) => EffectKind::Sparkler,
        }
    }

    pub fn container(&self) -> &ParticleContainer {
        match self {
            Effect::Firework(container) | Effect::Marbles(container) => container,
            Effect::Fire(emitter) | Effect::Sparkler(emitter) => &emitter.container,
        }
    }

    pub fn emitter_mut(&mut self) -> Option<&mut Emitter> {
        match self {
            Effect::Fire(emitter) | Effect::Sparkler(emitter) => Some(emitter),
            Effect::Firework(_) | Effect::Marbles(_) => None,
        }
    }

    pub fn anchor(&self) -> Vector2 {
        self.container().anchor
    }

    pub fn particle_count(&self) -> usize {
        self.container().len()
    }

    /// A finished effect has nothing left to draw and never will again.
    pub fn is_finished(&self) -> bool {
        match self {
            Effect::Firework(container) | Effect::Marbles(container) => container.is_empty(),
            Effect::Fire(emitter) | Effect::Sparkler(emitter) => emitter.is_finished(),
        }
    }

    pub fn animate<R: Rng>(&mut self, rng: &mut R) {
        match self {
            Effect::Firework(container) => container.animate(),
            Effect::Marbles(container) => {
                collision::resolve(&mut container.particles, MARBLE_MAX_SPEED);
                container.animate();
            }
            Effect::Fire(emitter) | Effect::Sparkler(emitter) => emitter.animate(rng),
        }
    }

    pub fn draw_into(&self, commands: &mut Vec<DrawCommand>) {
        if let Effect::Sparkler(emitter) = self {
            let anchor = emitter.container.anchor;
            commands.push(DrawCommand::Line {
                x1: anchor.x,
                y1: anchor.y,
                x2: anchor.x,
                y2: anchor.y - SPARKLER_HANDLE_LENGTH,
                color: Color::WHITE,
                width: SPARKLER_HANDLE_WIDTH,
            });
        }
        self.container().draw_into(commands);
    }
}
