// SPDX-License-Identifier: MPL-2.0
//! Replays a recorded touch trace and prints what the player screen does.
//!
//! ```text
//! tapseek [--config-dir DIR] [--width PX] [--height PX]
//!         [--position MS] [--duration MS] [--raw] TRACE
//! ```
//!
//! With `--raw` only the classified intents are printed.

use std::error::Error as StdError;
use std::fs;
use std::process::ExitCode;
use tapseek::app::paths;
use tapseek::app::{Message, PlayerScreen};
use tapseek::config;
use tapseek::domain::gesture::{Intent, SurfaceGeometry};
use tapseek::domain::ui::Orientation;
use tapseek::gesture::trace::{self, TraceStep};
use tapseek::gesture::{Dispatcher, GestureClassifier};
use tapseek::video_player::SimulatedPlayer;
use tracing::warn;

const DEFAULT_WIDTH: i32 = 1920;
const DEFAULT_HEIGHT: i32 = 1080;

struct Flags {
    width: i32,
    height: i32,
    position_ms: u64,
    duration_ms: Option<u64>,
    raw: bool,
    trace_path: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tapseek=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tapseek: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn StdError>> {
    let mut args = pico_args::Arguments::from_env();

    paths::init_cli_override(args.opt_value_from_str("--config-dir")?);
    let flags = Flags {
        width: args.opt_value_from_str("--width")?.unwrap_or(DEFAULT_WIDTH),
        height: args.opt_value_from_str("--height")?.unwrap_or(DEFAULT_HEIGHT),
        position_ms: args.opt_value_from_str("--position")?.unwrap_or(0),
        duration_ms: args.opt_value_from_str("--duration")?,
        raw: args.contains("--raw"),
        trace_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok())
            .ok_or("missing trace file argument")?,
    };

    let (config, warning) = config::load();
    if let Some(key) = warning {
        warn!(key = %key, "using default settings");
    }

    let steps = trace::parse(&fs::read_to_string(&flags.trace_path)?)?;
    if flags.raw {
        replay_intents(&config, &steps)
    } else {
        replay_screen(&config, &flags, &steps)
    }
}

fn replay_intents(
    config: &config::Config,
    steps: &[TraceStep],
) -> Result<(), Box<dyn StdError>> {
    let dispatcher = Dispatcher::default()
        .on_tap(|| println!("{}", Intent::Tap.name()))
        .on_double_tap(|point| {
            println!("double-tap x={} y={} t={}", point.x, point.y, point.timestamp_ms);
        })
        .on_swipe(|direction| println!("swipe-{}", direction.as_str()))
        .on_long_press(|| println!("{}", Intent::LongPress.name()));
    let mut classifier = GestureClassifier::new(config.gesture_config()?, dispatcher)?;

    for step in steps {
        let step_ms = step.timestamp_ms();
        while let Some(due) = classifier.next_deadline().filter(|&at| at <= step_ms) {
            classifier.tick(due);
        }
        match *step {
            TraceStep::Pointer(event) => classifier.handle(event),
            TraceStep::Tick(now_ms) => classifier.tick(now_ms),
        }
    }
    while let Some(due) = classifier.next_deadline() {
        classifier.tick(due);
    }
    Ok(())
}

fn replay_screen(
    config: &config::Config,
    flags: &Flags,
    steps: &[TraceStep],
) -> Result<(), Box<dyn StdError>> {
    let geometry = SurfaceGeometry::new(flags.width, flags.height)?;
    let mut player = SimulatedPlayer::new(flags.duration_ms);
    player.set_position(flags.position_ms);

    let mut screen = PlayerScreen::new(
        "trace://replay",
        geometry,
        Orientation::from_dimensions(flags.width, flags.height),
        player,
        config.screen_settings()?,
    )?;
    screen.handle(Message::Start);

    for step in steps {
        let step_ms = step.timestamp_ms();
        while let Some(due) = screen.next_deadline().filter(|&at| at <= step_ms) {
            print_effects(due, screen.handle(Message::Tick(due)));
        }
        let message = match *step {
            TraceStep::Pointer(event) => Message::Pointer(event),
            TraceStep::Tick(now_ms) => Message::Tick(now_ms),
        };
        print_effects(step_ms, screen.handle(message));
    }
    while let Some(due) = screen.next_deadline() {
        print_effects(due, screen.handle(Message::Tick(due)));
    }
    Ok(())
}

fn print_effects(now_ms: i64, effects: Vec<tapseek::app::Effect>) {
    for effect in effects {
        println!("{:>8} {:?}", now_ms, effect);
    }
}
