//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use rust_canvas_particles_backend::{ParticleApp, scene::SceneConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(400);
    canvas.set_height(400);
    document.body().unwrap().append_child(&canvas).unwrap();
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    assert!(ParticleApp::new("does-not-exist").is_err());
}

#[wasm_bindgen_test]
fn frames_run_and_fireworks_spawn() {
    mount_canvas("particles-frames");
    let mut app = ParticleApp::new("particles-frames").unwrap();
    assert_eq!(app.effect_count(), 3);

    app.pointer_move(200.0, 100.0);
    app.key_down("f");
    assert!(app.frame());
    assert_eq!(app.effect_count(), 4);
    assert_eq!(app.frame_delay_ms(), 20);

    // pointer (200, 100) on a 400x400 canvas is (0.5, 0.75) in scene space
    let pointer = app.pointer_position();
    assert!((pointer[0] - 0.5).abs() < 1e-9);
    assert!((pointer[1] - 0.75).abs() < 1e-9);
}

#[wasm_bindgen_test]
fn click_spawns_marbles_and_q_quits() {
    mount_canvas("particles-quit");
    let mut config = SceneConfig::new();
    config.frame_delay_ms = 33;
    let mut app = ParticleApp::with_config("particles-quit", config).unwrap();

    app.pointer_down(10.0, 10.0);
    app.key_down("Shift");
    assert!(app.frame());
    assert_eq!(app.effect_count(), 4);
    assert_eq!(app.frame_delay_ms(), 33);

    app.key_down("q");
    assert!(!app.frame());
    assert!(!app.is_running());
    assert!(!app.frame());
}
