use macroquad::color::Color;

/// Line stroke: color plus thickness in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub weight: f32,
}

impl Stroke {
    pub const fn new(color: Color, weight: f32) -> Self {
        Self { color, weight }
    }
}

/// Drawing target for one frame of the sketch.
///
/// Coordinates are canvas pixels with the origin at the top-left corner.
/// Every call paints over whatever was drawn before it in the same frame.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke: Stroke);

    /// Axis-aligned filled rectangle with its top-left corner at `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

#[cfg(test)]
pub mod recording {
    use super::*;

    /// A single captured draw call.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear(Color),
        Line { x0: f32, y0: f32, x1: f32, y1: f32, stroke: Stroke },
        Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    }

    /// Surface that records calls in order instead of drawing them.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn lines(&self) -> impl Iterator<Item = &DrawCall> {
            self.calls.iter().filter(|c| matches!(c, DrawCall::Line { .. }))
        }

        pub fn rects(&self) -> impl Iterator<Item = &DrawCall> {
            self.calls.iter().filter(|c| matches!(c, DrawCall::Rect { .. }))
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Color) {
            self.calls.push(DrawCall::Clear(color));
        }

        fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke: Stroke) {
            self.calls.push(DrawCall::Line { x0, y0, x1, y1, stroke });
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.calls.push(DrawCall::Rect { x, y, w, h, color });
        }
    }
}
