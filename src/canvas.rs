// The drawing/input capability the simulation talks to. Coordinates are in the
// normalized [0, 1] x [0, 1] domain with y pointing up.

use crate::color::Color;
use crate::scene::{FrameOutput, Scene};

pub const DEFAULT_PEN_WIDTH: f64 = 0.002;

pub trait Canvas {
    fn draw_filled_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
    fn draw_filled_square(&mut self, x: f64, y: f64, half_side: f64, color: Color);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64);

    fn poll_key(&mut self) -> Option<char>;
    fn pointer_position(&self) -> (f64, f64);
    /// Edge triggered: true once per click.
    fn pointer_clicked(&mut self) -> bool;

    fn present(&mut self, target_frame_delay_ms: u32);
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FilledCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },
    FilledSquare {
        x: f64,
        y: f64,
        half_side: f64,
        color: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
}

impl DrawCommand {
    pub fn apply<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match *self {
            DrawCommand::FilledCircle { x, y, radius, color } => {
                canvas.draw_filled_circle(x, y, radius, color)
            }
            DrawCommand::FilledSquare {
                x,
                y,
                half_side,
                color,
            } => canvas.draw_filled_square(x, y, half_side, color),
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => canvas.draw_line(x1, y1, x2, y2, color, width),
        }
    }
}

/// Input gathered from the canvas for a single frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub key: Option<char>,
    pub pointer: (f64, f64),
    pub clicked: bool,
}

impl FrameInput {
    pub fn poll<C: Canvas + ?Sized>(canvas: &mut C) -> FrameInput {
        FrameInput {
            key: canvas.poll_key(),
            pointer: canvas.pointer_position(),
            clicked: canvas.pointer_clicked(),
        }
    }
}

// One iteration of the frame loop: poll, step, draw, present
pub fn run_frame<C: Canvas + ?Sized>(
    scene: &mut Scene,
    canvas: &mut C,
    target_frame_delay_ms: u32,
) -> FrameOutput {
    let input = FrameInput::poll(canvas);
    let output = scene.step(&input);
    for command in &output.commands {
        command.apply(canvas);
    }
    canvas.present(target_frame_delay_ms);
    output
}


#[cfg(test)]
mod tests {
    use super::recording::RecordingCanvas;
    use super::*;
    use crate::scene::{SceneConfig, SceneEvent};

    #[test]
    fn apply_replays_each_primitive() {
        let mut canvas = RecordingCanvas::default();
        let commands = [
            DrawCommand::FilledCircle {
                x: 0.1,
                y: 0.2,
                radius: 0.3,
                color: Color::GOLD,
            },
            DrawCommand::Line {
                x1: 0.0,
                y1: 0.0,
                x2: 1.0,
                y2: 1.0,
                color: Color::WHITE,
                width: 0.005,
            },
        ];
        for command in &commands {
            command.apply(&mut canvas);
        }
        assert_eq!(canvas.drawn, commands.to_vec());
    }

    #[test]
    fn poll_consumes_click_once() {
        let mut canvas = RecordingCanvas::default();
        canvas.clicks = 1;
        canvas.pointer = (0.4, 0.6);
        canvas.keys.push_back('f');
        let first = FrameInput::poll(&mut canvas);
        assert_eq!(first.key, Some('f'));
        assert!(first.clicked);
        assert_eq!(first.pointer, (0.4, 0.6));
        let second = FrameInput::poll(&mut canvas);
        assert_eq!(second.key, None);
        assert!(!second.clicked);
    }

    #[test]
    fn run_frame_draws_and_presents() {
        let mut scene = Scene::with_default_layout(SceneConfig::default(), 7);
        let mut canvas = RecordingCanvas::default();
        canvas.keys.push_back('f');
        canvas.pointer = (0.5, 0.5);

        let output = run_frame(&mut scene, &mut canvas, 20);

        assert_eq!(canvas.presented, vec![20]);
        assert_eq!(canvas.drawn, output.commands);
        assert!(output
            .events
            .iter()
            .any(|e| matches!(e, SceneEvent::Spawned { .. })));
        assert!(!output.quit);
    }
}
