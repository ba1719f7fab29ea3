//! Headless runner: plays a session with the autopilot and prints the final board.

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use pacman_engine::app::{App, Surface};
use pacman_engine::audio::SilentAudio;
use pacman_engine::autopilot::autopilot_direction;
use pacman_engine::constants::RAW_BOARD;
use pacman_engine::events::GameCommand;
use pacman_engine::formatter;
use pacman_engine::game::Game;
use pacman_engine::logging::setup_logging;
use pacman_engine::render::{ascii_frame, DrawCommand};
use pacman_engine::systems::RandomSource;

const FRAME_MS: f64 = 1000.0 / 60.0;
const DEFAULT_SECONDS: f64 = 30.0;

/// Keeps only what a terminal can show: the HUD and status lines.
#[derive(Default)]
struct TerminalSurface {
    commands: usize,
    hud: String,
    status: Option<String>,
}

impl Surface for TerminalSurface {
    fn draw(&mut self, commands: &[DrawCommand]) {
        self.commands = commands.len();
    }

    fn set_hud(&mut self, text: &str) {
        self.hud = text.to_string();
    }

    fn set_status(&mut self, text: Option<&str>) {
        self.status = text.map(str::to_string);
    }
}

struct Options {
    seconds: f64,
    seed: Option<u64>,
}

fn parse_options() -> Result<Options> {
    let mut options = Options {
        seconds: DEFAULT_SECONDS,
        seed: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seconds" => {
                let value = args.next().ok_or_else(|| anyhow!("--seconds needs a value"))?;
                options.seconds = value.parse().with_context(|| format!("invalid --seconds value: {value}"))?;
            }
            "--seed" => {
                let value = args.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                options.seed = Some(value.parse().with_context(|| format!("invalid --seed value: {value}"))?);
            }
            other => return Err(anyhow!("unknown argument: {other}")),
        }
    }

    Ok(options)
}

pub fn main() -> Result<()> {
    setup_logging();
    let options = parse_options()?;

    let source = match options.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_os_rng(),
    };
    let game = Game::with_source(RAW_BOARD.as_slice(), source);
    let mut app = App::mount(Some(TerminalSurface::default()), SilentAudio, game)?;

    app.command(GameCommand::Start);
    info!(seconds = options.seconds, seed = ?options.seed, "Headless session started");

    let frames = (options.seconds * 1000.0 / FRAME_MS).ceil() as u64;
    for frame in 0..frames {
        if let Some(direction) = autopilot_direction(app.game().state()) {
            app.command(GameCommand::MovePlayer(direction));
        }

        formatter::increment_frame();
        if !app.frame(frame as f64 * FRAME_MS) {
            debug!(frame, "Frame loop stopped");
            break;
        }
    }

    let surface = app.surface();
    println!("{}", ascii_frame(app.game().state()));
    println!("{}", surface.hud);
    if let Some(status) = &surface.status {
        println!("{status}");
    }
    debug!(commands = surface.commands, "Last frame size");

    Ok(())
}
