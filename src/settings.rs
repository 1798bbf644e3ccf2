use std::path::Path;

use anyhow::Context;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use macroquad::color::Color;
use serde::Deserialize;
use sketch_grid::{DEFAULT_CELL_SIZE, Grid, GridError, Point, PointPair};
use tracing::{error, info, warn};

use crate::sketch::{Palette, SketchVariant};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "SKETCH";

#[derive(Debug, Clone, Deserialize)]
pub struct SketchConfig {
    pub canvas: CanvasConfig,
    pub grid: GridConfig,
    pub points: PointsConfig,
    pub style: StyleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    pub cell_size: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsConfig {
    pub p1: Point,
    pub p2: Point,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    pub variant: SketchVariant,
    /// Gray level of the background.
    pub background: u8,
    /// Gray level of the grid lines.
    pub grid_gray: u8,
    pub point_color: [u8; 3],
    pub line_color: [u8; 3],
    /// Overrides the variant's stroke weight when set.
    pub line_weight: Option<f32>,
}

impl SketchConfig {
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.canvas.width, self.canvas.height, self.grid.cell_size)
    }

    pub fn initial_points(&self) -> PointPair {
        PointPair::new(self.points.p1, self.points.p2)
    }

    pub fn palette(&self) -> Palette {
        let style = &self.style;
        Palette {
            background: gray(style.background),
            grid: gray(style.grid_gray),
            point: rgb(style.point_color),
            line: rgb(style.line_color),
            line_weight: style
                .line_weight
                .unwrap_or_else(|| style.variant.default_line_weight()),
        }
    }
}

fn gray(level: u8) -> Color {
    Color::from_rgba(level, level, level, 255)
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Built-in defaults, overridden by any later source.
fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("canvas.width", 760)?
        .set_default("canvas.height", 760)?
        .set_default("canvas.title", "Bresenham Sketch")?
        .set_default("grid.cell_size", DEFAULT_CELL_SIZE)?
        .set_default("points.p1.x", 10)?
        .set_default("points.p1.y", 10)?
        .set_default("points.p2.x", 700)?
        .set_default("points.p2.y", 700)?
        .set_default("style.variant", "cell_centered")?
        .set_default("style.background", 33)?
        .set_default("style.grid_gray", 63)?
        .set_default("style.point_color", vec![0, 255, 0])?
        .set_default("style.line_color", vec![0, 255, 0])
}

pub fn load_config() -> anyhow::Result<SketchConfig> {
    load_config_from(DEFAULT_CONFIG_PATH)
}

/// Layers defaults, the TOML file at `path` (if present) and `SKETCH_*`
/// environment variables, in that order, then checks the canvas geometry.
pub fn load_config_from(path: &str) -> anyhow::Result<SketchConfig> {
    if Path::new(path).exists() {
        info!("Loading configuration from {}", path);
    } else {
        warn!("No configuration file at {}, using defaults", path);
    }

    let settings = defaults()?
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|c| c.try_deserialize::<SketchConfig>());

    let config = match settings {
        Ok(config) => {
            info!("Successfully loaded configuration: {:?}", config);
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let grid = config.grid().context("invalid canvas geometry")?;
    if !grid.is_aligned() {
        warn!(
            width = grid.width(),
            height = grid.height(),
            cell_size = grid.cell_size(),
            "Canvas is not a multiple of the cell size; edge cells will be partial"
        );
    }

    Ok(config)
}
