use std::time::{Duration, Instant};

use pill_progress::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
struct CallLog {
    calls: Vec<(Vec<PathElement>, Color)>,
}

impl DrawSurface for CallLog {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.calls.push((path.elements().to_vec(), paint.color));
    }
}

#[test]
fn one_cycle_at_sixty_hz() {
    init_logger();
    let mut button = LoadingButton::default();
    let t0 = Instant::now();
    button.start(t0);

    let mut last = None;
    for frame in 0..180u64 {
        let now = t0 + Duration::from_micros(frame * 16_667);
        assert!(button.on_frame(now, 300.0, 100.0));
        let progress = button.progress().unwrap();
        assert!((0.0..1.0).contains(&progress));
        if let Some(prev) = last {
            assert!(progress > prev, "frame {} went backwards", frame);
        }
        last = Some(progress);
    }

    // Next cycle starts over.
    assert!(button.on_frame(t0 + Duration::from_millis(3010), 300.0, 100.0));
    assert!(button.progress().unwrap() < 0.01);
}

#[test]
fn draws_three_layers_in_order() {
    init_logger();
    let palette = Palette::new(Color::from_hex(0x444444), Color::from_hex(0x00C853), Color::WHITE);
    let mut button = LoadingButton::new(ButtonConfig::default().palette(palette));
    let t0 = Instant::now();
    button.start(t0);
    button.on_frame(t0 + Duration::from_millis(700), 300.0, 100.0);

    let mut log = CallLog::default();
    button.draw(&mut log);
    let colors: Vec<Color> = log.calls.iter().map(|(_, c)| *c).collect();
    assert_eq!(colors, vec![palette.border.color, palette.progress.color, Color::WHITE]);
    assert_eq!(log.calls[1].0, button.paths().progress.elements());
}

#[test]
fn resize_between_frames() {
    init_logger();
    let mut button = LoadingButton::default();
    let t0 = Instant::now();
    button.start(t0);

    button.on_frame(t0, 0.0, 0.0);
    assert!(button.paths().is_empty());

    button.on_frame(t0 + Duration::from_millis(16), 200.0, 60.0);
    let small = button.paths().clone();
    button.on_frame(t0 + Duration::from_millis(16), 400.0, 60.0);
    assert_ne!(&small, button.paths());
    assert_eq!(
        button.paths().border.elements()[0],
        PathElement::Rect(Rect::new(30.0, 0.0, 340.0, 60.0))
    );
}

#[test]
fn rasterized_band_moves_clockwise() {
    init_logger();
    let mut button = LoadingButton::new(ButtonConfig::default().progression_percent(0.1));
    let t0 = Instant::now();
    button.start(t0);
    let mut surface = PixmapSurface::new(300, 100).unwrap();
    let yellow = [255, 255, 0, 255];

    // 300x100 loop is 714.16 long; a = 0.1 puts the tail at x = 121 on top.
    button.on_frame(t0 + Duration::from_millis(300), 300.0, 100.0);
    surface.clear(Color::BLACK);
    button.draw(&mut surface);
    assert_eq!(surface.pixel(150, 4), Some(yellow));
    assert_ne!(surface.pixel(100, 4), Some(yellow));

    // a = 0.6: tail at 428.5, 71.4 into the bottom edge, drawn right to left.
    button.on_frame(t0 + Duration::from_millis(1800), 300.0, 100.0);
    surface.clear(Color::BLACK);
    button.draw(&mut surface);
    assert_eq!(surface.pixel(150, 95), Some(yellow));
    assert_ne!(surface.pixel(200, 95), Some(yellow));
    assert_ne!(surface.pixel(150, 4), Some(yellow));
}
