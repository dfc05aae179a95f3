//! Render one loading cycle to numbered PNG frames.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example render_frames -- /tmp/frames
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use pill_progress::prelude::*;

const WIDTH: u32 = 360;
const HEIGHT: u32 = 96;
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("frames"));
    std::fs::create_dir_all(&out_dir)?;

    let config = ButtonConfig::default()
        .border_width(10.0)
        .colors(Color::from_hex(0x3C3C46), Color::from_hex(0xFFD600), Color::WHITE);
    let mut button = LoadingButton::new(config);
    let mut surface = PixmapSurface::new(WIDTH, HEIGHT).ok_or("cannot allocate surface")?;

    let t0 = Instant::now();
    button.start(t0);

    let cycle = Duration::from_secs_f32(button.config().timeline.duration_ms / 1000.0);
    let frames = (cycle.as_millis() / FRAME_INTERVAL.as_millis()) as u32;
    for frame in 0..frames {
        let now = t0 + FRAME_INTERVAL * frame;
        if !button.on_frame(now, WIDTH as f32, HEIGHT as f32) {
            continue;
        }
        surface.clear(Color::rgb(0.1, 0.1, 0.15));
        button.draw(&mut surface);

        let path = out_dir.join(format!("frame_{:03}.png", frame));
        surface.save_png(&path)?;
        log::info!(
            "Frame {} progress {:.3} lit {:?}",
            frame,
            button.progress().unwrap_or_default(),
            button.paths().lit_segments()
        );
    }

    log::info!("Wrote {} frames to {}", frames, out_dir.display());
    Ok(())
}
