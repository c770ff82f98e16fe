// Particle containers. A container owns its particles, advances them every
// frame and drops the ones whose lifetime has run out. An emitter is a
// container that also spawns a fixed number of new particles per frame.

use crate::canvas::DrawCommand;
use crate::effect;
use crate::particle::Particle;
use crate::vector::Vector2;
use rand::Rng;

#[derive(Clone, Debug, Default)]
pub struct ParticleContainer {
    pub anchor: Vector2,
    pub particles: Vec<Particle>,
}

impl ParticleContainer {
    pub fn new(anchor: Vector2) -> ParticleContainer {
        ParticleContainer {
            anchor,
            particles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Ticks every live particle, then compacts out everything that is
    /// expired, including particles that expired during this pass.
    pub fn animate(&mut self) {
        for particle in self.particles.iter_mut() {
            if !particle.is_expired() {
                particle.tick();
            }
        }
        self.particles.retain(|particle| !particle.is_expired());
    }

    pub fn draw_into(&self, commands: &mut Vec<DrawCommand>) {
        commands.extend(self.particles.iter().filter_map(Particle::draw));
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EmitterFamily {
    Fire,
    Spark,
}

impl EmitterFamily {
    pub fn spawn<R: Rng>(self, rng: &mut R, anchor: Vector2) -> Particle {
        match self {
            EmitterFamily::Fire => effect::fire_particle(rng, anchor),
            EmitterFamily::Spark => effect::spark_particle(rng, anchor),
        }
    }
}

/// How long an emitter keeps spawning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EmitterPolicy {
    /// Spawns until removed from the scene.
    Persistent,
    /// Spawns for this many frames, then lets its particles drain.
    Frames(u32),
}

#[derive(Clone, Debug)]
pub struct Emitter {
    pub container: ParticleContainer,
    pub spawn_rate: u32,
    pub family: EmitterFamily,
    pub policy: EmitterPolicy,
    frames_emitted: u32,
}

impl Emitter {
    pub fn new(anchor: Vector2, spawn_rate: u32, family: EmitterFamily) -> Emitter {
        Emitter {
            container: ParticleContainer::new(anchor),
            spawn_rate,
            family,
            policy: EmitterPolicy::Persistent,
            frames_emitted: 0,
        }
    }

    pub fn with_policy(mut self, policy: EmitterPolicy) -> Emitter {
        self.policy = policy;
        self
    }

    pub fn is_emitting(&self) -> bool {
        match self.policy {
            EmitterPolicy::Persistent => true,
            EmitterPolicy::Frames(frames) => self.frames_emitted < frames,
        }
    }

    /// Stops spawning; the particles already out keep living.
    pub fn stop(&mut self) {
        self.policy = EmitterPolicy::Frames(self.frames_emitted);
    }

    pub fn is_finished(&self) -> bool {
        !self.is_emitting() && self.container.is_empty()
    }

    pub fn animate<R: Rng>(&mut self, rng: &mut R) {
        self.container.animate();
        if !self.is_emitting() {
            return;
        }
        let anchor = self.container.anchor;
        let family = self.family;
        self.container.particles.reserve(self.spawn_rate as usize);
        for _ in 0..self.spawn_rate {
            self.container.particles.push(family.spawn(rng, anchor));
        }
        self.frames_emitted = self.frames_emitted.saturating_add(1);
    }
}
