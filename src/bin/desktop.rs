//! SDL2 desktop host: draws the engine's commands in a window and plays its tones as square waves.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};
use sdl2::event::Event;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::keyboard::Keycode;
use sdl2::pixels;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::{debug, info, warn};

use pacman_engine::app::{App, Surface};
use pacman_engine::audio::{AmbientMode, AudioBackend, SilentAudio, Sound, Tone};
use pacman_engine::error::GameError;
use pacman_engine::formatter;
use pacman_engine::game::Game;
use pacman_engine::logging::setup_logging;
use pacman_engine::render::{Color, DrawCommand};

const SCALE: u32 = 2;
const SAMPLE_RATE: i32 = 22_050;
const VOLUME: f32 = 0.08;
const IDLE_SLEEP: Duration = Duration::from_millis(16);

fn sdl_color(color: Color) -> pixels::Color {
    pixels::Color::RGB(color.r, color.g, color.b)
}

struct WindowSurface {
    canvas: Canvas<Window>,
    hud: String,
    status: Option<String>,
}

impl WindowSurface {
    fn execute(&mut self, command: &DrawCommand) -> Result<(), String> {
        match *command {
            DrawCommand::Clear { color } => {
                self.canvas.set_draw_color(sdl_color(color));
                self.canvas.clear();
                Ok(())
            }
            DrawCommand::FillRect { origin, size, color } => {
                let end = origin + size;
                self.canvas.box_(
                    origin.x as i16,
                    origin.y as i16,
                    end.x as i16 - 1,
                    end.y as i16 - 1,
                    sdl_color(color),
                )
            }
            DrawCommand::FillCircle { center, radius, color } => {
                self.canvas
                    .filled_circle(center.x as i16, center.y as i16, radius.round() as i16, sdl_color(color))
            }
            DrawCommand::FillPie {
                center,
                radius,
                start,
                end,
                color,
            } => self.canvas.filled_pie(
                center.x as i16,
                center.y as i16,
                radius.round() as i16,
                start.to_degrees().round() as i16,
                end.to_degrees().round() as i16,
                sdl_color(color),
            ),
        }
    }

    fn update_title(&mut self) {
        let title = match &self.status {
            Some(status) => format!("Pac-Man | {} | {}", self.hud, status),
            None => format!("Pac-Man | {}", self.hud),
        };
        if let Err(e) = self.canvas.window_mut().set_title(&title) {
            warn!("Failed to set window title: {}", e);
        }
    }
}

impl Surface for WindowSurface {
    fn draw(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            if let Err(e) = self.execute(command) {
                warn!(?command, "Draw command failed: {}", e);
                break;
            }
        }
        self.canvas.present();
    }

    fn set_hud(&mut self, text: &str) {
        if self.hud != text {
            self.hud = text.to_string();
            self.update_title();
        }
    }

    fn set_status(&mut self, text: Option<&str>) {
        if self.status.as_deref() != text {
            self.status = text.map(str::to_string);
            self.update_title();
        }
    }
}

/// What the audio thread plays: queued effects first, the ambient loop underneath.
#[derive(Default)]
struct Synth {
    effects: VecDeque<Tone>,
    ambient: &'static [Tone],
    ambient_index: usize,
    /// Samples left of the tone being played.
    remaining: u32,
    frequency: f32,
    phase: f32,
}

impl Synth {
    fn next_tone(&mut self) -> Option<Tone> {
        if let Some(tone) = self.effects.pop_front() {
            return Some(tone);
        }
        if self.ambient.is_empty() {
            return None;
        }
        let tone = self.ambient[self.ambient_index % self.ambient.len()];
        self.ambient_index = (self.ambient_index + 1) % self.ambient.len();
        Some(tone)
    }
}

struct SquareWave {
    synth: Arc<Mutex<Synth>>,
    sample_rate: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        let mut synth = self.synth.lock();
        for sample in out.iter_mut() {
            if synth.remaining == 0 {
                match synth.next_tone() {
                    Some(tone) => {
                        synth.frequency = tone.frequency;
                        synth.remaining = (tone.duration * self.sample_rate).max(1.0) as u32;
                    }
                    None => {
                        *sample = 0.0;
                        continue;
                    }
                }
            }

            synth.phase = (synth.phase + synth.frequency / self.sample_rate) % 1.0;
            *sample = if synth.phase < 0.5 { VOLUME } else { -VOLUME };
            synth.remaining -= 1;
        }
    }
}

struct SquareWaveAudio {
    synth: Arc<Mutex<Synth>>,
    _device: AudioDevice<SquareWave>,
}

impl SquareWaveAudio {
    fn open(audio: &sdl2::AudioSubsystem) -> Result<Self, GameError> {
        let synth = Arc::new(Mutex::new(Synth::default()));
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };

        let device = audio
            .open_playback(None, &desired, |spec| SquareWave {
                synth: Arc::clone(&synth),
                sample_rate: spec.freq as f32,
            })
            .map_err(GameError::Sdl)?;
        device.resume();

        Ok(Self { synth, _device: device })
    }
}

impl AudioBackend for SquareWaveAudio {
    fn play(&mut self, sound: Sound) {
        self.synth.lock().effects.extend(sound.tones().iter().copied());
    }

    fn set_ambient(&mut self, mode: AmbientMode) {
        let mut synth = self.synth.lock();
        synth.ambient = mode.pattern();
        synth.ambient_index = 0;
        synth.remaining = 0;
    }
}

/// DOM-style names for the SDL keys the engine binds.
fn key_name(keycode: Keycode) -> String {
    match keycode {
        Keycode::Up => "ArrowUp".to_string(),
        Keycode::Down => "ArrowDown".to_string(),
        Keycode::Left => "ArrowLeft".to_string(),
        Keycode::Right => "ArrowRight".to_string(),
        Keycode::Return | Keycode::KpEnter => "Enter".to_string(),
        other => other.name(),
    }
}

pub fn main() -> Result<()> {
    setup_logging();

    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;

    let game = Game::new();
    let size = game.state().canvas_size();

    let window = video_subsystem
        .window("Pac-Man", size.x * SCALE, size.y * SCALE)
        .position_centered()
        .build()?;
    let mut canvas = window.into_canvas().present_vsync().build()?;
    canvas.set_logical_size(size.x, size.y)?;

    let audio: Box<dyn AudioBackend> = match sdl_context
        .audio()
        .map_err(GameError::Sdl)
        .and_then(|subsystem| SquareWaveAudio::open(&subsystem))
    {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
            Box::new(SilentAudio)
        }
    };

    let surface = WindowSurface {
        canvas,
        hud: String::new(),
        status: None,
    };
    let mut app = App::mount(Some(surface), audio, game)?;
    let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

    info!("Press Enter to start");
    let clock = Instant::now();
    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    info!("Exit requested. Exiting...");
                    break 'running;
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    let name = key_name(keycode);
                    if !app.handle_key(&name) {
                        debug!(key = %name, "Unbound key");
                    }
                }
                _ => {}
            }
        }

        formatter::increment_frame();
        let timestamp_ms = clock.elapsed().as_secs_f64() * 1000.0;
        if !app.frame(timestamp_ms) {
            std::thread::sleep(IDLE_SLEEP);
        }
    }

    Ok(())
}
