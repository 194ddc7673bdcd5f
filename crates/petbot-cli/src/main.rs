//! `petbot` – demo driver for the reactive touch/proximity behaviour.
//!
//! Wires the simulated capabilities to [`ReactiveBehaviour`], drives one
//! scripted session (a few IR polls around an approaching obstacle, one tap,
//! one fling, then shutdown), and prints every call the behaviour made into
//! the external subsystems.
//!
//! No robot required; this is the headless counterpart of deploying the
//! behaviour on real hardware.

use colored::Colorize;
use tracing::info;

use petbot_behaviour::{BehaviourHost, ReactiveBehaviour};
use petbot_hal::sim::{EmotionCall, SimCapabilities, SimHandles};
use petbot_hal::CapabilityBuilder;
use petbot_types::{GestureDirection, IrReading, TouchGesture};

fn main() {
    // ── Structured logging ────────────────────────────────────────────────
    // RUST_LOG selects the filter (defaults to "info"); set
    // PETBOT_LOG_FORMAT=json for newline-delimited JSON output.
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if std::env::var("PETBOT_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .init();
    }

    println!("{}", "petbot – reactive behaviour demo".bold());
    println!();

    // ── Wiring ────────────────────────────────────────────────────────────
    // The obstacle walk-through: clear, closing in, still close, gone.
    let (sim, handles) = SimCapabilities::new()
        .with_ir_script(vec![
            vec![IrReading::new("front_c", 1200), IrReading::new("front_l", 1100)],
            vec![IrReading::new("front_c", 900), IrReading::new("front_l", 1100)],
            vec![IrReading::new("front_c", 950)],
            vec![IrReading::new("front_c", 1500)],
        ])
        .build();

    // Resolve each capability explicitly, as deployment against the real
    // subsystems would; a missing handle fails here, before the session runs.
    let caps = match CapabilityBuilder::new()
        .with_robot(sim.robot)
        .with_emotion(sim.emotion)
        .with_speech(sim.speech)
        .with_sound(sim.sound)
        .build()
    {
        Ok(caps) => caps,
        Err(e) => {
            eprintln!("{} {e}", "capability resolution failed:".red().bold());
            std::process::exit(1);
        }
    };

    let mut host = BehaviourHost::new(ReactiveBehaviour::new(caps));
    if let Err(e) = host.start() {
        eprintln!("{} {e}", "activation failed:".red().bold());
        std::process::exit(1);
    }
    info!(period_ms = host.tick_period().as_millis() as u64, "session started");

    // ── Scripted session ──────────────────────────────────────────────────
    host.tick(); // clear
    host.deliver(TouchGesture::Tap { x: 64, y: 32 });
    host.tick(); // obstacle appears
    host.tick(); // obstacle still there
    host.deliver(TouchGesture::Fling {
        direction: GestureDirection::Left,
        angle_deg: 170.0,
        duration_ms: 90,
        distance: 260.0,
    });
    host.tick(); // obstacle gone

    if let Err(e) = host.stop() {
        eprintln!("{} {e}", "deactivation failed:".red().bold());
        std::process::exit(1);
    }

    // A gesture after shutdown: dropped, nothing recorded for it.
    host.deliver(TouchGesture::Tap { x: 0, y: 0 });

    print_session(&handles);
}

fn print_session(handles: &SimHandles) {
    println!("{}", "sound calls:".bold());
    for effect in handles.sound.calls() {
        println!("  play({effect:?})");
    }

    println!("{}", "emotion calls:".bold());
    for call in handles.emotion.calls() {
        match call {
            EmotionCall::SetCurrent(emotion) => println!("  set_current({emotion:?})"),
            EmotionCall::SetTemporary {
                emotion,
                duration,
                revert_to,
            } => println!(
                "  set_temporary({emotion:?}, {}ms, revert to {revert_to:?})",
                duration.as_millis()
            ),
        }
    }

    if handles.speech.is_empty() {
        println!("{}", "speech calls: none (handle acquired but unused)".dimmed());
    }

    println!();
    println!("{}", "✓ session complete".green());
}
