// Renderer struct that draws onto a 2D canvas context and collects the DOM
// input the front end forwards to it. The viewport holds the matrices that map
// the normalized [0, 1] scene coordinates (y up) to canvas pixels (y down).

use crate::canvas::Canvas;
use crate::color::Color;
use std::collections::VecDeque;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
extern crate nalgebra_glm as glm;
use glm::TMat3;

/// Keys typed faster than frames consume them beyond this are dropped.
pub const MAX_PENDING_KEYS: usize = 16;

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub viewport_mat: TMat3<f64>,
    pub inverse_viewport_mat: TMat3<f64>,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Viewport {
        // flip y, then stretch the unit square over the canvas
        let viewport_mat = glm::translation2d(&glm::vec2(0.0, height))
            * glm::scaling2d(&glm::vec2(width, -height));
        let inverse_viewport_mat = glm::inverse(&viewport_mat);
        Viewport {
            width,
            height,
            viewport_mat,
            inverse_viewport_mat,
        }
    }

    pub fn to_pixels(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.viewport_mat * glm::vec3(x, y, 1.0);
        (p.x, p.y)
    }

    pub fn from_pixels(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.inverse_viewport_mat * glm::vec3(x, y, 1.0);
        (p.x, p.y)
    }

    /// Pixel size of a scene length along each axis. Each axis is stretched
    /// on its own, same as positions, so on a non-square canvas a marble is
    /// drawn as the ellipse it collides as.
    pub fn extent(&self, length: f64) -> (f64, f64) {
        (length * self.width, length * self.height)
    }

    // Pen widths are not geometry; keep them even on both axes
    pub fn stroke_width(&self, width: f64) -> f64 {
        (width * self.width.min(self.height)).max(1.0)
    }
}

/// DOM input waiting to be polled by the next frame.
#[derive(Clone, Debug)]
pub struct InputQueue {
    keys: VecDeque<char>,
    pointer: (f64, f64),
    clicked: bool,
}

impl Default for InputQueue {
    fn default() -> Self {
        InputQueue {
            keys: VecDeque::new(),
            pointer: (0.5, 0.5),
            clicked: false,
        }
    }
}

impl InputQueue {
    pub fn push_key(&mut self, key: char) {
        if self.keys.len() < MAX_PENDING_KEYS {
            self.keys.push_back(key);
        }
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn next_key(&mut self) -> Option<char> {
        self.keys.pop_front()
    }

    pub fn move_pointer(&mut self, pointer: (f64, f64)) {
        self.pointer = pointer;
    }

    pub fn click(&mut self, pointer: (f64, f64)) {
        self.pointer = pointer;
        self.clicked = true;
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    pub fn take_click(&mut self) -> bool {
        std::mem::replace(&mut self.clicked, false)
    }
}

pub struct Renderer {
    pub context: CanvasRenderingContext2d,
    pub viewport: Viewport,
    pub frame_delay_ms: u32,
    input: InputQueue,
}

impl Renderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has an unexpected type"))?;

        Ok(Renderer {
            context,
            viewport: Viewport::new(canvas.width() as f64, canvas.height() as f64),
            frame_delay_ms: 0,
            input: InputQueue::default(),
        })
    }

    pub fn clear_screen(&self, color: Color) {
        self.context.set_fill_style_str(&color.to_css());
        self.context
            .fill_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
    }

    pub fn key_down(&mut self, key: char) {
        self.input.push_key(key);
    }

    pub fn pointer_move(&mut self, pixel_x: f64, pixel_y: f64) {
        let pointer = self.viewport.from_pixels(pixel_x, pixel_y);
        self.input.move_pointer(pointer);
    }

    pub fn pointer_down(&mut self, pixel_x: f64, pixel_y: f64) {
        let pointer = self.viewport.from_pixels(pixel_x, pixel_y);
        self.input.click(pointer);
    }
}

impl Canvas for Renderer {
    fn draw_filled_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        let (px, py) = self.viewport.to_pixels(x, y);
        let (radius_x, radius_y) = self.viewport.extent(radius);
        self.context.begin_path();
        if self
            .context
            .ellipse(px, py, radius_x, radius_y, 0.0, 0.0, 2.0 * PI)
            .is_ok()
        {
            self.context.set_fill_style_str(&color.to_css());
            self.context.fill();
        }
    }

    fn draw_filled_square(&mut self, x: f64, y: f64, half_side: f64, color: Color) {
        let (px, py) = self.viewport.to_pixels(x, y);
        let (half_x, half_y) = self.viewport.extent(half_side);
        self.context.set_fill_style_str(&color.to_css());
        self.context
            .fill_rect(px - half_x, py - half_y, 2.0 * half_x, 2.0 * half_y);
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
        let (from_x, from_y) = self.viewport.to_pixels(x1, y1);
        let (to_x, to_y) = self.viewport.to_pixels(x2, y2);
        self.context.set_stroke_style_str(&color.to_css());
        self.context.set_line_width(self.viewport.stroke_width(width));
        self.context.begin_path();
        self.context.move_to(from_x, from_y);
        self.context.line_to(to_x, to_y);
        self.context.stroke();
    }

    fn poll_key(&mut self) -> Option<char> {
        self.input.next_key()
    }

    fn pointer_position(&self) -> (f64, f64) {
        self.input.pointer()
    }

    fn pointer_clicked(&mut self) -> bool {
        self.input.take_click()
    }

    // The browser presents on its own; remember how long JS should wait
    // before asking for the next frame.
    fn present(&mut self, target_frame_delay_ms: u32) {
        self.frame_delay_ms = target_frame_delay_ms;
    }
}
