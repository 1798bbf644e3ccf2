use macroquad::prelude::*;
use tracing::info;

use crate::settings::SketchConfig;
use crate::sketch::{PointSketch, SketchHandler};
use crate::surface::{Stroke, Surface};

// Function to configure the macroquad window
pub fn window_conf(config: &SketchConfig) -> Conf {
    Conf {
        window_title: config.canvas.title.clone(),
        window_width: config.canvas.width,
        window_height: config.canvas.height,
        high_dpi: true,
        window_resizable: false,
        ..Default::default()
    }
}

/// Draws straight to the macroquad window.
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke: Stroke) {
        macroquad::shapes::draw_line(x0, y0, x1, y1, stroke.weight, stroke.color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }
}

/// Drives `sketch` until the window closes or Escape is pressed.
///
/// A click is delivered on release of the left button, like a browser `click` event.
pub async fn run_sketch_loop(mut sketch: PointSketch) {
    let mut surface = MacroquadSurface;
    sketch.initialize();

    info!("Sketch loop starting...");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Escape pressed, closing sketch.");
            break;
        }

        if is_mouse_button_released(MouseButton::Left) {
            let (mx, my) = mouse_position();
            sketch.on_pointer_click(mx.floor() as i32, my.floor() as i32);
        }

        sketch.render_frame(&mut surface);

        next_frame().await
    }
}
