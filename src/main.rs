mod core;
mod effects;
mod platform;
mod views;

use crate::core::app::App;
use crate::core::config;
use crate::core::types::Mode;
use effects::particle_field::ParticleField;
use platform::renderer::Renderer;
use platform::renderer_cairo::RendererCairo;
use platform::window_x11::{PlatformError, PlatformEvent, WindowX11};
use std::time::Instant;

/// X keycode of `q` on a standard layout.
const KEY_Q: u32 = 24;

#[derive(Debug, Clone, PartialEq)]
struct Args {
    width: i32,
    height: i32,
    start: Option<Mode>,
    seed: Option<u64>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            width: config::DEFAULT_WIDTH,
            height: config::DEFAULT_HEIGHT,
            start: None,
            seed: None,
        }
    }
}

fn parse_args(argv: &[String]) -> Args {
    let mut args = Args::default();

    let mut i = 1;
    while i < argv.len() {
        let value = argv.get(i + 1).map(String::as_str);
        match (argv[i].as_str(), value) {
            ("--width", Some(v)) => {
                i += 1;
                match v.parse::<i32>() {
                    Ok(w) if w > 0 => args.width = w,
                    _ => log::warn!("ignoring --width {}", v),
                }
            }
            ("--height", Some(v)) => {
                i += 1;
                match v.parse::<i32>() {
                    Ok(h) if h > 0 => args.height = h,
                    _ => log::warn!("ignoring --height {}", v),
                }
            }
            ("--start", Some(v)) => {
                i += 1;
                match Mode::parse(v) {
                    Some(Mode::Entry) | None => log::warn!("ignoring --start {}", v),
                    Some(mode) => args.start = Some(mode),
                }
            }
            ("--seed", Some(v)) => {
                i += 1;
                match v.parse::<u64>() {
                    Ok(seed) => args.seed = Some(seed),
                    Err(_) => log::warn!("ignoring --seed {}", v),
                }
            }
            (other, _) => log::warn!("unknown argument {}", other),
        }
        i += 1;
    }

    args
}

/// Draw one frame unless the window's context could not be rebuilt, in which
/// case the renderer still points at the previous frame's surface.
fn draw_frame(
    renderer: &mut dyn Renderer,
    fresh: Result<(), PlatformError>,
    app: &mut App,
    width: i32,
    height: i32,
) -> bool {
    if let Err(e) = fresh {
        log::warn!("skipping frame: {}", e);
        return false;
    }
    renderer.begin_frame(width, height);
    app.render(renderer);
    renderer.end_frame();
    true
}

fn run(args: &Args) -> Result<(), PlatformError> {
    let mut window = WindowX11::new();
    window.create(args.width, args.height, config::WINDOW_TITLE)?;

    let mut renderer = RendererCairo::new(window.create_cairo_context()?);

    let particles = match args.seed {
        Some(seed) => ParticleField::with_seed(seed),
        None => ParticleField::new(),
    };
    let mut app = App::new(args.width as f64, args.height as f64, particles);
    if let Some(mode) = args.start {
        app.start_in(mode);
    }

    let clock = Instant::now();
    let mut last_ms = 0.0;

    'frames: while window.poll_events() {
        for event in window.take_events() {
            match event {
                PlatformEvent::Pointer(e) => app.handle_mouse(&e),
                PlatformEvent::Key(k) if k.pressed && k.ctrl && k.keycode == KEY_Q => {
                    break 'frames;
                }
                PlatformEvent::Key(_) => {}
                PlatformEvent::Resized { width, height } => {
                    app.resize(width as f64, height as f64);
                }
            }
        }

        let now_ms = clock.elapsed().as_secs_f64() * 1000.0;
        app.update(now_ms, now_ms - last_ms);
        last_ms = now_ms;

        // The xlib surface is sized at creation, so rebuild it every frame.
        let fresh = window
            .create_cairo_context()
            .map(|cr| renderer.set_context(cr));
        if draw_frame(&mut renderer, fresh, &mut app, window.width(), window.height()) {
            window.flush();
        }

        std::thread::sleep(std::time::Duration::from_millis(config::FRAME_SLEEP_MS));
    }

    app.shutdown();
    Ok(())
}

fn main() {
    env_logger::init();

    let argv: Vec<String> = std::env::args().collect();
    let args = parse_args(&argv);
    log::debug!("{:?}", args);

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("persona-split: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Color;
    use crate::platform::renderer_recording::RecordingRenderer;

    fn argv(list: &[&str]) -> Vec<String> {
        std::iter::once("persona-split")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse_args(&argv(&[])), Args::default());
    }

    #[test]
    fn test_parses_all_flags() {
        let args = parse_args(&argv(&[
            "--width", "800", "--height", "600", "--start", "creative", "--seed", "42",
        ]));
        assert_eq!(
            args,
            Args {
                width: 800,
                height: 600,
                start: Some(Mode::Creative),
                seed: Some(42),
            }
        );
    }

    #[test]
    fn test_failed_context_skips_frame() {
        let mut app = App::new(640.0, 480.0, ParticleField::with_seed(1));
        app.start_in(Mode::Logical);

        let mut rec = RecordingRenderer::new();
        rec.fill_rect(0.0, 0.0, 1.0, 1.0, Color::from_hex(0xffffff, 1.0));
        let drawn = draw_frame(&mut rec, Err(PlatformError::SurfaceCreation), &mut app, 640, 480);
        assert!(!drawn);
        assert_eq!(rec.commands().len(), 1);

        assert!(draw_frame(&mut rec, Ok(()), &mut app, 640, 480));
        assert!(rec.commands().len() > 1);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let args = parse_args(&argv(&["--width", "-3", "--start", "entry", "--seed", "x", "--height"]));
        assert_eq!(args, Args::default());
    }
}
