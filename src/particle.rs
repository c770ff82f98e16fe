// Particle struct and its per-family behavior. A particle keeps track of its
// position, velocity, size, color and how many ticks it has left to live.

use crate::canvas::{DrawCommand, DEFAULT_PEN_WIDTH};
use crate::color::Color;
use crate::vector::Vector2;

/// Fire particles shrink by this much every tick.
pub const FIRE_SHRINK: f64 = 0.0001;
/// Fire particles lose this much green every tick, fading yellow to red.
pub const FIRE_COOLING: i32 = 4;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParticleKind {
    Basic,
    Accelerating { acceleration: Vector2 },
    Spark,
    Fire,
    Firework { acceleration: Vector2 },
    Marble { acceleration: Vector2 },
}

impl ParticleKind {
    pub fn acceleration(&self) -> Option<Vector2> {
        match *self {
            ParticleKind::Accelerating { acceleration }
            | ParticleKind::Firework { acceleration }
            | ParticleKind::Marble { acceleration } => Some(acceleration),
            ParticleKind::Basic | ParticleKind::Spark | ParticleKind::Fire => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2,
    pub vel: Vector2,
    pub size: f64,
    pub color: Color,
    pub lifetime: u32,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn new(
        pos: Vector2,
        vel: Vector2,
        size: f64,
        color: Color,
        lifetime: u32,
        kind: ParticleKind,
    ) -> Particle {
        Particle {
            pos,
            vel,
            size: size.max(0.0),
            color,
            lifetime,
            kind,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime == 0
    }

    /// Advances the particle by one frame. Does nothing once expired.
    ///
    /// Position moves before velocity picks up acceleration.
    pub fn tick(&mut self) {
        if self.is_expired() {
            return;
        }
        integrate(self);
        if let Some(acceleration) = self.kind.acceleration() {
            self.vel += acceleration;
        }
        if let ParticleKind::Fire = self.kind {
            cool(self);
        }
    }

    /// What this particle looks like right now, or `None` once expired.
    pub fn draw(&self) -> Option<DrawCommand> {
        if self.is_expired() {
            return None;
        }
        let command = match self.kind {
            ParticleKind::Firework { .. } => DrawCommand::FilledSquare {
                x: self.pos.x,
                y: self.pos.y,
                half_side: self.size,
                color: self.color,
            },
            ParticleKind::Spark => {
                let tip = self.pos + self.vel;
                DrawCommand::Line {
                    x1: self.pos.x,
                    y1: self.pos.y,
                    x2: tip.x,
                    y2: tip.y,
                    color: self.color,
                    width: DEFAULT_PEN_WIDTH,
                }
            }
            ParticleKind::Basic
            | ParticleKind::Accelerating { .. }
            | ParticleKind::Fire
            | ParticleKind::Marble { .. } => DrawCommand::FilledCircle {
                x: self.pos.x,
                y: self.pos.y,
                radius: self.size,
                color: self.color,
            },
        };
        Some(command)
    }
}

fn integrate(particle: &mut Particle) {
    particle.pos += particle.vel;
    particle.lifetime -= 1;
}

fn cool(particle: &mut Particle) {
    particle.size = (particle.size - FIRE_SHRINK).max(0.0);
    particle.color = particle
        .color
        .with_green(particle.color.g as i32 - FIRE_COOLING);
}
