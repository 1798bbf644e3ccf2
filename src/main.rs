mod graphics;     // brings `graphics.rs` in as `crate::graphics`
mod settings;     // brings `settings.rs` in as `crate::settings`
mod sketch;       // brings `sketch.rs` in as `crate::sketch`
mod surface;      // brings `surface.rs` in as `crate::surface`

use anyhow::Context;
use sketch::PointSketch;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Bresenham Sketch started. Loading configuration...");

    let config = settings::load_config().context("failed to load sketch configuration")?;
    let sketch = PointSketch::from_config(&config).context("invalid canvas geometry")?;

    info!(
        width = config.canvas.width,
        height = config.canvas.height,
        cell_size = config.grid.cell_size,
        "Opening sketch window"
    );

    macroquad::Window::from_config(
        graphics::window_conf(&config),
        graphics::run_sketch_loop(sketch),
    );

    Ok(())
}
