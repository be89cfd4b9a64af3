//! Battle of Balls entry point
//!
//! Loads settings, then runs the frame loop against the terminal (default) or
//! an in-memory display (`--headless`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use battle_of_balls::platform::{HeadlessDisplay, TerminalDisplay};
use battle_of_balls::{Command, Engine, FrameOutcome, Settings};

#[derive(Debug, Parser)]
#[command(name = "battle-of-balls", about = "Eat smaller discs, avoid bigger ones")]
struct Args {
    /// Settings file (JSON); missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed instead of the wall clock
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run this many frames without a terminal and log the result
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u64>,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings.validate().context("invalid settings")?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    match args.headless {
        Some(frames) => run_headless(settings, frames),
        None => run_terminal(settings),
    }
}

fn run_headless(settings: Settings, frames: u64) -> Result<()> {
    log::info!("Battle of Balls (headless) starting...");
    let mut display = HeadlessDisplay::new(settings.width, settings.height);
    let mut engine = Engine::new(settings, &display).context("starting run")?;

    let mut commands = vec![Command::Start];
    for _ in 0..frames {
        if engine.frame(&mut display, &commands)? == FrameOutcome::Defeated {
            break;
        }
        commands.clear();
    }

    let world = engine.world();
    log::info!(
        "Stopped after {} frames: phase {:?}, score {}, player radius {}",
        engine.frames(),
        world.phase,
        world.score(),
        world.player.radius
    );
    println!("{}", world.score());
    Ok(())
}

fn run_terminal(settings: Settings) -> Result<()> {
    log::info!("Battle of Balls starting...");
    let mut display = TerminalDisplay::new(settings.width, settings.height, settings.frame_rate)
        .context("setting up the terminal")?;
    let mut engine = Engine::new(settings, &display).context("starting run")?;

    loop {
        let input = display.poll_input().context("reading keyboard")?;
        if input.quit {
            break;
        }
        if engine.frame(&mut display, &input.commands)? == FrameOutcome::Paused {
            // Nothing is presented while paused; don't spin
            std::thread::sleep(std::time::Duration::from_millis(15));
        }
    }

    drop(display);
    if let Some(best) = engine.high_scores().top_score() {
        println!("Best score this session: {best}");
    }
    Ok(())
}
