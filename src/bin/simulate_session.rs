// ABOUTME: Synthetic tracking session simulator for the Formcoach engine
// ABOUTME: Drives the full pipeline end-to-end without a camera or pose source
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Formcoach

//! Synthetic tracking session simulator.
//!
//! Generates landmark frame sequences for a chosen exercise, runs them
//! through the tracker, saves the finished session to an in-memory store,
//! and prints the stored record plus progress statistics as JSON.
//!
//! Usage:
//! ```bash
//! # Simulate 12 squats
//! cargo run --bin formcoach-simulate
//!
//! # Simulate 20 noisy pushups, reproducibly
//! cargo run --bin formcoach-simulate -- --exercise pushups --reps 20 --jitter 0.008 --seed 7
//!
//! # Verbose per-frame logging
//! cargo run --bin formcoach-simulate -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use formcoach::logging::{init_logging, LoggingConfig};
use formcoach::models::{ExerciseKind, Landmark, LandmarkFrame};
use formcoach::stats::progress_for_user;
use formcoach::store::{MemorySessionStore, SessionStore};
use formcoach::test_utils::rep_cycle;
use formcoach::tracker::RepTracker;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "formcoach-simulate",
    about = "Formcoach synthetic session simulator",
    long_about = "Run synthetic landmark frames through the tracking engine and print the resulting session record and progress statistics"
)]
struct SimulateArgs {
    /// Exercise to simulate
    #[arg(long, default_value_t = ExerciseKind::Squats)]
    exercise: ExerciseKind,

    /// Number of repetitions to perform
    #[arg(long, default_value_t = 12)]
    reps: u32,

    /// Positional jitter applied to every landmark, in normalized units.
    /// Large values will break the rep thresholds, as real sloppy form does.
    #[arg(long, default_value_t = 0.005)]
    jitter: f64,

    /// Random seed for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Progress-statistics window in days
    #[arg(long, default_value_t = 30)]
    days: u32,

    /// Enable verbose per-frame logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn jittered(frame: &LandmarkFrame, rng: &mut StdRng, amount: f64) -> LandmarkFrame {
    let landmarks = frame
        .landmarks()
        .iter()
        .map(|landmark| {
            Landmark::new(
                landmark.x + rng.gen_range(-amount..=amount),
                landmark.y + rng.gen_range(-amount..=amount),
                landmark.visibility,
            )
        })
        .collect();
    LandmarkFrame::new(landmarks)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SimulateArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging.level = "debug".into();
    }
    init_logging(&logging)?;

    let mut rng = args
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let user_id = Uuid::new_v4();
    let mut tracker = RepTracker::new(args.exercise);
    info!(exercise = %args.exercise, target_reps = args.reps, "starting simulated session");

    let cycle = rep_cycle(args.exercise);
    for _ in 0..args.reps {
        for frame in &cycle {
            let outcome = tracker.process_frame(&jittered(frame, &mut rng, args.jitter));
            if let Some(text) = outcome.speech {
                info!(rep = outcome.rep_count, "coach: {text}");
            }
        }
    }

    let counted = tracker.snapshot().rep_count;
    if counted < args.reps {
        info!(
            counted,
            target = args.reps,
            "jitter broke some reps, as sloppy form would"
        );
    }

    let record = tracker.finish(user_id);
    let store = MemorySessionStore::new();
    let id = store.save_session(&record).await?;
    info!(%id, "session saved");

    let stats = progress_for_user(&store, user_id, args.days).await?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
