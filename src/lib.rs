#[macro_use]
mod utils;

pub mod canvas;
pub mod collision;
pub mod color;
pub mod container;
pub mod effect;
pub mod particle;
pub mod renderer;
pub mod scene;
pub mod vector;

use canvas::Canvas;
use color::Color;
use renderer::Renderer;
use scene::{Scene, SceneConfig, SceneEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement};

// Use `wee_alloc` as the global allocator when the feature is enabled.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

#[wasm_bindgen]
pub struct ParticleApp {
    scene: Scene,
    renderer: Renderer,
    running: bool,
    profiling: bool,
}

#[wasm_bindgen]
impl ParticleApp {
    pub fn new(canvas_id: &str) -> Result<ParticleApp, JsValue> {
        ParticleApp::with_config(canvas_id, SceneConfig::default())
    }

    pub fn with_config(canvas_id: &str, config: SceneConfig) -> Result<ParticleApp, JsValue> {
        let document = web_sys::window()
            .ok_or("no global window")?
            .document()
            .ok_or("window has no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", canvas_id)))?;
        let renderer = Renderer::new(&canvas)?;

        let mut scene = Scene::new(config);
        for event in scene.populate_default_layout() {
            if let SceneEvent::Rejected { kind, .. } = event {
                warn!(
                    "max_effects is {}, opening {:?} left out",
                    config.max_effects, kind
                );
            }
        }
        log!(
            "particle scene ready on {}x{} canvas with {} effects",
            canvas.width(),
            canvas.height(),
            scene.len()
        );

        Ok(ParticleApp {
            scene,
            renderer,
            running: true,
            profiling: false,
        })
    }

    /// Forwards a `KeyboardEvent.key`. Named keys like "Shift" are ignored.
    pub fn key_down(&mut self, key: &str) {
        if !self.running {
            return;
        }
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            self.renderer.key_down(c);
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.renderer.pointer_move(x, y);
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.renderer.pointer_down(x, y);
    }

    /// Runs one frame. Returns false once the app has been quit, after which
    /// JS should stop scheduling frames.
    pub fn frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let started = js_sys::Date::now();
        let output = {
            let _timer = if self.profiling {
                Some(Timer::new("ParticleApp::frame()"))
            } else {
                None
            };
            self.renderer.clear_screen(Color::DARK_GRAY);
            let delay = self.scene.config().frame_delay_ms;
            canvas::run_frame(&mut self.scene, &mut self.renderer, delay)
        };
        if self.profiling {
            log!(
                "frame: {} effects, {} particles, {} draw calls, {:.1}ms",
                self.scene.len(),
                self.scene.particle_count(),
                output.commands.len(),
                js_sys::Date::now() - started
            );
        }

        for event in &output.events {
            match event {
                SceneEvent::Spawned { kind, anchor } => {
                    log!("spawned {:?} at ({:.2}, {:.2})", kind, anchor.x, anchor.y)
                }
                SceneEvent::Rejected { kind, .. } => warn!(
                    "scene is full ({} effects), dropped {:?}",
                    self.scene.len(),
                    kind
                ),
                SceneEvent::Retired { kind } => log!("retired {:?}", kind),
            }
        }
        if output.quit {
            log!("quit requested, stopping");
            self.running = false;
        }
        self.running
    }

    /// Milliseconds JS should wait before calling `frame` again.
    pub fn frame_delay_ms(&self) -> u32 {
        self.renderer.frame_delay_ms
    }

    pub fn set_profiling(&mut self, enabled: bool) {
        self.profiling = enabled;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn effect_count(&self) -> usize {
        self.scene.len()
    }

    pub fn particle_count(&self) -> usize {
        self.scene.particle_count()
    }

    pub fn remove_effect(&mut self, index: usize) -> bool {
        match self.scene.remove(index) {
            Some(effect) => {
                log!("removed {:?}", effect.kind());
                true
            }
            None => false,
        }
    }

    pub fn pointer_position(&self) -> Vec<f64> {
        let (x, y) = self.renderer.pointer_position();
        vec![x, y]
    }
}
