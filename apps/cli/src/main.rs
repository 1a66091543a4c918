use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::Result;
use catalog_client::HttpCatalog;
use clap::Parser;
use draft_core::{
    DraftController, DraftPhase, DraftState, DrawOutcome, IdSampler, Roster, SkipReason,
    UniformSampler,
};
use shared::domain::{GameMode, PlayerSlot};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the creature catalog.
    #[arg(long)]
    target: Option<String>,
    /// Start directly in this mode ("normal" or "no_duplicate").
    #[arg(long)]
    mode: Option<GameMode>,
    /// Seed the sampler for a reproducible draft.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(target) = args.target {
        settings.target = target;
    }
    if let Some(mode) = args.mode {
        settings.mode = Some(mode);
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }

    let target = config::validate_target(&settings.target)?;
    info!(catalog = %target, "draft session starting");
    println!("creature draft: two players, {} slots each", Roster::CAPACITY);
    println!("catalog: {target}");

    let catalog = Arc::new(HttpCatalog::new(target));
    let sampler: Box<dyn IdSampler> = match settings.seed {
        Some(seed) => Box::new(UniformSampler::seeded(seed)),
        None => Box::new(UniformSampler::new()),
    };
    let mut controller = DraftController::new_with_dependencies(catalog, sampler, settings.mode);

    print_help();
    print_state(controller.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", prompt_for(controller.state()));
        io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "quit" | "q" | "exit" => break,
            "help" | "?" => print_help(),
            "show" => print_state(controller.state()),
            "reset" => {
                controller.reset();
                print_state(controller.state());
            }
            "normal" => start_mode(&mut controller, GameMode::Normal),
            "nodup" | "no_duplicate" => start_mode(&mut controller, GameMode::NoDuplicate),
            "" | "draw" | "d" => {
                run_draw(&mut controller).await;
                print_state(controller.state());
            }
            other => println!("unrecognized command '{other}' (try 'help')"),
        }
    }

    Ok(())
}

fn start_mode(controller: &mut DraftController, mode: GameMode) {
    if controller.select_mode(mode) {
        print_state(controller.state());
    } else {
        println!("a draft is already running; 'reset' first to change mode");
    }
}

async fn run_draw(controller: &mut DraftController) {
    match controller.draw().await {
        Ok(DrawOutcome::Drawn {
            creature,
            credited_to,
        }) => {
            println!("player {credited_to} drew #{} {}", creature.id, creature.name);
        }
        Ok(DrawOutcome::Skipped(reason)) => match reason {
            SkipReason::ModeNotSelected => println!("pick a mode first: 'normal' or 'nodup'"),
            SkipReason::DraftComplete => println!("the draft is complete; 'reset' to start over"),
            SkipReason::FetchInFlight => println!("a draw is already in flight"),
        },
        Err(err) => println!("draw failed: {err}"),
    }
}

fn prompt_for(state: &DraftState) -> &'static str {
    match state.phase() {
        DraftPhase::AwaitingMode => "mode (normal/nodup)> ",
        DraftPhase::InProgress => "draw> ",
        DraftPhase::Complete => "done> ",
    }
}

fn roster_line(label: PlayerSlot, roster: &Roster, active: bool) -> String {
    let marker = if active { ">" } else { " " };
    let mut slots: Vec<String> = roster
        .creatures()
        .iter()
        .map(|c| format!("#{} {}", c.id, c.name))
        .collect();
    while slots.len() < Roster::CAPACITY {
        slots.push("-".into());
    }
    format!(
        "{marker} player {label} [{}/{}]: {}",
        roster.len(),
        Roster::CAPACITY,
        slots.join(" | ")
    )
}

fn print_state(state: &DraftState) {
    let mode = match state.mode {
        Some(mode) => mode.to_string(),
        None => "not selected".into(),
    };
    println!();
    println!("mode: {mode}");
    println!(
        "{}",
        roster_line(
            PlayerSlot::A,
            &state.roster_a,
            state.active_player == PlayerSlot::A
        )
    );
    println!(
        "{}",
        roster_line(
            PlayerSlot::B,
            &state.roster_b,
            state.active_player == PlayerSlot::B
        )
    );
    if let Some(last) = &state.last_drawn {
        println!("last drawn: #{} {}", last.id, last.name);
    }
    if let Some(message) = &state.error_message {
        println!("problem: {message}");
    }
    match state.phase() {
        DraftPhase::AwaitingMode => println!("pick a mode to begin"),
        DraftPhase::InProgress => println!("next: player {}", state.active_player),
        DraftPhase::Complete => println!("draft complete! compare rosters and pick a winner"),
    }
    println!();
}

fn print_help() {
    println!("commands:");
    println!("  normal | nodup    start a draft in that mode");
    println!("  draw (or enter)   draw a creature for the active player");
    println!("  show              print the rosters");
    println!("  reset             discard the session");
    println!("  quit              leave");
}
