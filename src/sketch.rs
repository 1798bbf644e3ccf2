use macroquad::color::Color;
use serde::Deserialize;
use sketch_grid::{Grid, GridError, GridLine, Point, PointPair};
use tracing::{debug, info, trace};

use crate::settings::SketchConfig;
use crate::surface::{Stroke, Surface};

/// How the connecting line is placed and when it is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SketchVariant {
    /// Clear, grid, points, then a line between the snapped cell centers.
    #[default]
    CellCentered,
    /// Clear, line between the raw coordinates, grid, then points.
    Raw,
}

impl SketchVariant {
    pub fn default_line_weight(self) -> f32 {
        match self {
            SketchVariant::CellCentered => 1.0,
            SketchVariant::Raw => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub point: Color,
    pub line: Color,
    pub line_weight: f32,
}

/// Callbacks the host event loop drives.
///
/// The host calls `initialize` once, then `render_frame` every display
/// refresh, and `on_pointer_click` between frames. Calls never overlap.
pub trait SketchHandler {
    fn initialize(&mut self);
    fn render_frame<S: Surface>(&mut self, surface: &mut S);
    fn on_pointer_click(&mut self, x: i32, y: i32);
}

/// Two points on a grid, joined by a line, moved by clicking.
pub struct PointSketch {
    grid: Grid,
    initial: PointPair,
    points: PointPair,
    variant: SketchVariant,
    palette: Palette,
    frames: u64,
}

impl PointSketch {
    pub fn new(grid: Grid, initial: PointPair, variant: SketchVariant, palette: Palette) -> Self {
        PointSketch {
            grid,
            initial,
            points: initial,
            variant,
            palette,
            frames: 0,
        }
    }

    pub fn from_config(config: &SketchConfig) -> Result<Self, GridError> {
        Ok(PointSketch::new(
            config.grid()?,
            config.initial_points(),
            config.style.variant,
            config.palette(),
        ))
    }

    pub fn points(&self) -> PointPair {
        self.points
    }

    fn draw_grid<S: Surface>(&self, surface: &mut S) {
        let stroke = Stroke::new(self.palette.grid, 1.0);
        for GridLine { from, to } in self.grid.vertical_lines().chain(self.grid.horizontal_lines()) {
            surface.draw_line(from.x as f32, from.y as f32, to.x as f32, to.y as f32, stroke);
        }
    }

    fn draw_points<S: Surface>(&self, surface: &mut S) {
        let size = self.grid.cell_size() as f32;
        for p in self.points.endpoints() {
            let corner = self.grid.snap_point(p);
            surface.fill_rect(corner.x as f32, corner.y as f32, size, size, self.palette.point);
        }
    }

    fn line_endpoints(&self) -> (Point, Point) {
        let PointPair { p1, p2 } = self.points;
        match self.variant {
            SketchVariant::CellCentered => (self.grid.snapped_center(p1), self.grid.snapped_center(p2)),
            SketchVariant::Raw => (p1, p2),
        }
    }

    fn draw_line<S: Surface>(&self, surface: &mut S) {
        let (a, b) = self.line_endpoints();
        let stroke = Stroke::new(self.palette.line, self.palette.line_weight);
        surface.draw_line(a.x as f32, a.y as f32, b.x as f32, b.y as f32, stroke);
    }
}

impl SketchHandler for PointSketch {
    fn initialize(&mut self) {
        self.points = self.initial;
        self.frames = 0;
        info!(grid = %self.grid, points = %self.points, variant = ?self.variant, "Sketch initialized");
    }

    fn render_frame<S: Surface>(&mut self, surface: &mut S) {
        surface.clear(self.palette.background);
        match self.variant {
            SketchVariant::CellCentered => {
                self.draw_grid(surface);
                self.draw_points(surface);
                self.draw_line(surface);
            }
            SketchVariant::Raw => {
                self.draw_line(surface);
                self.draw_grid(surface);
                self.draw_points(surface);
            }
        }
        self.frames += 1;
        trace!(frame = self.frames, points = %self.points, "Frame rendered");
    }

    fn on_pointer_click(&mut self, x: i32, y: i32) {
        let dropped = self.points.shift_in(Point::new(x, y));
        debug!(%dropped, p1 = %self.points.p1, p2 = %self.points.p2, "Pointer click");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{DrawCall, RecordingSurface};

    const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

    fn palette(variant: SketchVariant) -> Palette {
        Palette {
            background: Color::from_rgba(33, 33, 33, 255),
            grid: Color::from_rgba(63, 63, 63, 255),
            point: GREEN,
            line: GREEN,
            line_weight: variant.default_line_weight(),
        }
    }

    fn sketch(variant: SketchVariant) -> PointSketch {
        let initial = PointPair::new(Point::new(10, 10), Point::new(700, 700));
        let mut sketch = PointSketch::new(Grid::default(), initial, variant, palette(variant));
        sketch.initialize();
        sketch
    }

    fn render(sketch: &mut PointSketch) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        sketch.render_frame(&mut surface);
        surface
    }

    #[test]
    fn test_initial_state() {
        let sketch = sketch(SketchVariant::CellCentered);
        assert_eq!(sketch.points().p1, Point::new(10, 10));
        assert_eq!(sketch.points().p2, Point::new(700, 700));
    }

    #[test]
    fn test_single_click() {
        let mut sketch = sketch(SketchVariant::CellCentered);
        sketch.on_pointer_click(50, 60);
        assert_eq!(sketch.points().p1, Point::new(700, 700));
        assert_eq!(sketch.points().p2, Point::new(50, 60));
    }

    #[test]
    fn test_two_clicks() {
        let mut sketch = sketch(SketchVariant::CellCentered);
        sketch.on_pointer_click(0, 0);
        sketch.on_pointer_click(760, 760);
        assert_eq!(sketch.points().p1, Point::new(0, 0));
        assert_eq!(sketch.points().p2, Point::new(760, 760));
    }

    #[test]
    fn test_initialize_resets_points() {
        let mut sketch = sketch(SketchVariant::CellCentered);
        sketch.on_pointer_click(1, 2);
        sketch.on_pointer_click(3, 4);
        sketch.initialize();
        assert_eq!(sketch.points(), PointPair::new(Point::new(10, 10), Point::new(700, 700)));
    }

    #[test]
    fn test_cell_centered_frame_order() {
        let mut sketch = sketch(SketchVariant::CellCentered);
        let surface = render(&mut sketch);

        // clear, 76 vertical + 76 horizontal grid lines, 2 points, 1 line
        assert_eq!(surface.calls.len(), 1 + 152 + 2 + 1);
        assert_eq!(surface.calls[0], DrawCall::Clear(Color::from_rgba(33, 33, 33, 255)));
        for call in &surface.calls[1..153] {
            assert!(matches!(call, DrawCall::Line { stroke, .. } if stroke.weight == 1.0));
        }
        assert!(matches!(surface.calls[153], DrawCall::Rect { .. }));
        assert!(matches!(surface.calls[154], DrawCall::Rect { .. }));
        assert_eq!(
            surface.calls[155],
            DrawCall::Line {
                x0: 15.0,
                y0: 15.0,
                x1: 705.0,
                y1: 705.0,
                stroke: Stroke::new(GREEN, 1.0),
            }
        );
    }

    #[test]
    fn test_raw_frame_order() {
        let mut sketch = sketch(SketchVariant::Raw);
        sketch.on_pointer_click(17, 29);
        let surface = render(&mut sketch);

        assert!(matches!(surface.calls[0], DrawCall::Clear(_)));
        assert_eq!(
            surface.calls[1],
            DrawCall::Line {
                x0: 700.0,
                y0: 700.0,
                x1: 17.0,
                y1: 29.0,
                stroke: Stroke::new(GREEN, 3.0),
            }
        );
        let n = surface.calls.len();
        assert!(matches!(surface.calls[n - 2], DrawCall::Rect { .. }));
        assert!(matches!(surface.calls[n - 1], DrawCall::Rect { .. }));
        assert_eq!(surface.lines().count(), 1 + 152);
    }

    #[test]
    fn test_points_drawn_snapped() {
        let mut sketch = sketch(SketchVariant::CellCentered);
        sketch.on_pointer_click(17, 29);
        let surface = render(&mut sketch);

        let rects: Vec<&DrawCall> = surface.rects().collect();
        assert_eq!(
            rects,
            vec![
                &DrawCall::Rect { x: 700.0, y: 700.0, w: 10.0, h: 10.0, color: GREEN },
                &DrawCall::Rect { x: 10.0, y: 20.0, w: 10.0, h: 10.0, color: GREEN },
            ]
        );
        assert!(matches!(
            surface.calls.last(),
            Some(DrawCall::Line { x0, y0, x1, y1, .. })
                if (*x0, *y0, *x1, *y1) == (705.0, 705.0, 15.0, 25.0)
        ));
    }

    #[test]
    fn test_frames_are_deterministic() {
        let mut sketch = sketch(SketchVariant::CellCentered);
        let first = render(&mut sketch);
        let second = render(&mut sketch);
        assert_eq!(first.calls, second.calls);
    }
}
