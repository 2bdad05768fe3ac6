mod cache;
mod compose;
mod display;
mod error;
mod scene;
mod systems;
mod transition;
mod util;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use display::{Display, TextureStore, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use error::LauncherError;
use scene::SceneRenderer;
use systems::SystemRing;
use tracing::{debug, info, warn, Level};
use transition::TransitionMachine;
use util::{Clock, FpsCounter};

const FONT: &str = "BebasNeue-Regular.ttf";
const TIMING_INTERVAL: u64 = 300;

#[derive(Parser, Debug)]
#[command(name = "bitlauncher", version, about)]
struct Args {
    /// Asset root: background, cover, font and `systems/<name>.png` logos.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// JSON array of `{ "name": ..., "color": [r, g, b] }` replacing the built-in systems.
    #[arg(long)]
    systems: Option<PathBuf>,

    /// Window width.
    #[arg(long, short = 'W', default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Window height.
    #[arg(long, short = 'H', default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Disable VSync for an uncapped framerate.
    #[arg(long)]
    no_vsync: bool,

    /// Point size of the label font.
    #[arg(long, default_value_t = 32)]
    font_size: u16,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .init();

    let systems = match &args.systems {
        Some(path) => SystemRing::load(path)
            .with_context(|| format!("loading systems from {}", path.display()))?,
        None => SystemRing::builtin(),
    };
    info!(
        width = args.width,
        height = args.height,
        vsync = !args.no_vsync,
        assets = %args.assets.display(),
        systems = systems.len(),
        "starting"
    );

    let (mut display, texture_creator) =
        Display::with_options("BitLauncher", args.width, args.height, !args.no_vsync)?;
    let ttf = sdl2::ttf::init().map_err(LauncherError::initialization)?;
    let font_path = args.assets.join(FONT);
    let font = match ttf.load_font(&font_path, args.font_size) {
        Ok(font) => Some(font),
        Err(reason) => {
            warn!(path = %font_path.display(), %reason, "label font unavailable, labels will be skipped");
            None
        },
    };
    let mut textures = TextureStore::new(&texture_creator, font, &args.assets);

    let clock = Clock::start();
    let mut machine = TransitionMachine::new(systems, clock.now_ms());
    let mut scene = SceneRenderer::new();
    let mut fps = FpsCounter::new(60);

    'main: loop {
        for event in display.poll_events() {
            match event.input() {
                Some(input) => machine.handle(input, clock.now_ms()),
                None => break 'main,
            }
        }

        let now = clock.now_ms();
        machine.tick(now);
        let frame = machine.frame(now);
        display.present(&mut textures, |painter| {
            scene.render_frame(painter, machine.systems(), frame)
        })?;

        let frames = fps.tick();
        if frames % TIMING_INTERVAL == 0 {
            let (min_fps, max_fps) = fps.min_max_fps();
            debug!(
                frames,
                avg_fps = fps.avg_fps(),
                min_fps,
                max_fps,
                frame_ms = fps.avg_frame_time_ms(),
                textures = textures.len(),
                "frame timing"
            );
        }
    }

    info!("quit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["bitlauncher"]);
        assert_eq!(args.assets, PathBuf::from("assets"));
        assert_eq!((args.width, args.height), (1280, 1024));
        assert_eq!(args.font_size, 32);
        assert!(!args.no_vsync);
        assert!(args.systems.is_none());
        assert_eq!(log_level(args.verbose), Level::INFO);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "bitlauncher",
            "-W",
            "640",
            "-H",
            "512",
            "--no-vsync",
            "--systems",
            "cab.json",
            "-vv",
        ]);
        assert_eq!((args.width, args.height), (640, 512));
        assert!(args.no_vsync);
        assert_eq!(args.systems, Some(PathBuf::from("cab.json")));
        assert_eq!(log_level(args.verbose), Level::TRACE);
    }
}
