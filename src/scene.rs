// The scene owns every active effect and advances them one frame at a time.
// It never touches a real canvas: `step` takes the frame's input and hands
// back what to draw, so it runs the same in the browser and in tests.

use crate::canvas::{DrawCommand, FrameInput};
use crate::container::EmitterPolicy;
use crate::effect::{Effect, EffectKind};
use crate::vector::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

pub const FIREWORK_KEY: char = 'f';
pub const QUIT_KEY: char = 'q';

pub const FIRE_ANCHOR: Vector2 = Vector2 { x: 0.5, y: 0.15 };
pub const SPARKLER_ANCHORS: [Vector2; 2] = [
    Vector2 { x: 0.75, y: 0.75 },
    Vector2 { x: 0.25, y: 0.75 },
];

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Fire particles emitted per frame.
    pub fire_rate: u32,
    /// Spark particles emitted per frame, per sparkler.
    pub sparkler_rate: u32,
    pub frame_delay_ms: u32,
    /// Effects beyond this count are not spawned.
    pub max_effects: u32,
    /// Frames an emitter keeps spawning for; 0 keeps it going forever.
    pub emitter_frames: u32,
}

#[wasm_bindgen]
impl SceneConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SceneConfig {
        SceneConfig::default()
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            fire_rate: 30,
            sparkler_rate: 200,
            frame_delay_ms: 20,
            max_effects: 64,
            emitter_frames: 0,
        }
    }
}

impl SceneConfig {
    fn emitter_policy(&self) -> EmitterPolicy {
        match self.emitter_frames {
            0 => EmitterPolicy::Persistent,
            frames => EmitterPolicy::Frames(frames),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SceneEvent {
    Spawned { kind: EffectKind, anchor: Vector2 },
    Rejected { kind: EffectKind, anchor: Vector2 },
    Retired { kind: EffectKind },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    pub commands: Vec<DrawCommand>,
    pub events: Vec<SceneEvent>,
    pub quit: bool,
}

pub struct Scene {
    config: SceneConfig,
    effects: Vec<Effect>,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Scene {
        Scene {
            config,
            effects: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(config: SceneConfig, seed: u64) -> Scene {
        Scene {
            config,
            effects: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A fire near the bottom and two sparklers near the top.
    pub fn with_default_layout(config: SceneConfig, seed: u64) -> Scene {
        let mut scene = Scene::with_seed(config, seed);
        scene.populate_default_layout();
        scene
    }

    /// Adds the opening fire and sparklers, built with the configured emitter
    /// policy. Returns one event per effect, `Rejected` for any that did not
    /// fit under `max_effects`.
    pub fn populate_default_layout(&mut self) -> Vec<SceneEvent> {
        let mut layout = vec![Effect::fire(FIRE_ANCHOR, self.config.fire_rate)];
        for anchor in SPARKLER_ANCHORS.iter() {
            layout.push(Effect::sparkler(*anchor, self.config.sparkler_rate));
        }
        let policy = self.config.emitter_policy();
        layout
            .into_iter()
            .map(|mut effect| {
                if let Some(emitter) = effect.emitter_mut() {
                    emitter.policy = policy;
                }
                self.spawn(effect)
            })
            .collect()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn particle_count(&self) -> usize {
        self.effects.iter().map(Effect::particle_count).sum()
    }

    /// Adds an effect as is, keeping whatever emitter policy it carries.
    /// Returns false if the scene is already at capacity.
    pub fn push(&mut self, effect: Effect) -> bool {
        if self.effects.len() >= self.config.max_effects as usize {
            return false;
        }
        self.effects.push(effect);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<Effect> {
        if index < self.effects.len() {
            Some(self.effects.remove(index))
        } else {
            None
        }
    }

    /// Draws every effect in insertion order. Does not change any state.
    pub fn draw(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.particle_count() + self.effects.len());
        for effect in &self.effects {
            effect.draw_into(&mut commands);
        }
        commands
    }

    pub fn animate(&mut self) {
        let rng = &mut self.rng;
        for effect in self.effects.iter_mut() {
            effect.animate(rng);
        }
    }

    /// Runs one frame: draw what is there, advance it, react to input and
    /// drop effects that have burnt out.
    pub fn step(&mut self, input: &FrameInput) -> FrameOutput {
        let commands = self.draw();
        self.animate();

        let mut events = Vec::new();
        let mut quit = false;
        let pointer = Vector2::new(input.pointer.0, input.pointer.1);
        match input.key {
            Some(FIREWORK_KEY) => {
                let firework = Effect::firework(&mut self.rng, pointer);
                events.push(self.spawn(firework));
            }
            Some(QUIT_KEY) => quit = true,
            _ => {}
        }
        if input.clicked {
            let marbles = Effect::marbles(&mut self.rng, pointer);
            events.push(self.spawn(marbles));
        }
        self.retire_finished(&mut events);

        FrameOutput {
            commands,
            events,
            quit,
        }
    }

    fn spawn(&mut self, effect: Effect) -> SceneEvent {
        let (kind, anchor) = (effect.kind(), effect.anchor());
        if self.push(effect) {
            SceneEvent::Spawned { kind, anchor }
        } else {
            SceneEvent::Rejected { kind, anchor }
        }
    }

    fn retire_finished(&mut self, events: &mut Vec<SceneEvent>) {
        for effect in self.effects.iter().filter(|effect| effect.is_finished()) {
            events.push(SceneEvent::Retired {
                kind: effect.kind(),
            });
        }
        self.effects.retain(|effect| !effect.is_finished());
    }
}
