//! Deterministic replay of a recorded observation stream.
//!
//! Frames are processed with their recorded timestamps, so cooldown and
//! swipe timing behave exactly as they did live. Effects are printed
//! instead of injected.

use std::path::PathBuf;

use airctl_common::config::AppConfig;
use airctl_common::error::AirctlResult;
use airctl_control::dispatcher::{ActionDispatcher, DispatchConfig};
use airctl_control::{ControlBackend, TabDirection};
use airctl_gesture_core::GestureSession;
use airctl_hand_model::labels::GestureSignal;
use airctl_vision::stream::ObservationReader;

/// Prints every requested effect with the frame timestamp it fired at.
struct ConsoleBackend {
    now_ms: u64,
    effects: u64,
}

impl ConsoleBackend {
    fn new() -> Self {
        Self {
            now_ms: 0,
            effects: 0,
        }
    }

    fn print(&mut self, effect: String) {
        self.effects += 1;
        println!("  [{:>8} ms] {effect}", self.now_ms);
    }
}

impl ControlBackend for ConsoleBackend {
    fn move_pointer(&mut self, x: f64, y: f64) -> AirctlResult<()> {
        self.print(format!("move pointer -> ({x:.3}, {y:.3})"));
        Ok(())
    }

    fn click(&mut self) -> AirctlResult<()> {
        self.print("click".to_string());
        Ok(())
    }

    fn scroll(&mut self, amount: f64) -> AirctlResult<()> {
        self.print(format!("scroll {amount:+.2}"));
        Ok(())
    }

    fn volume_up(&mut self) -> AirctlResult<()> {
        self.print("volume up".to_string());
        Ok(())
    }

    fn volume_down(&mut self) -> AirctlResult<()> {
        self.print("volume down".to_string());
        Ok(())
    }

    fn lock_screen(&mut self) -> AirctlResult<()> {
        self.print("lock screen".to_string());
        Ok(())
    }

    fn switch_tab(&mut self, direction: TabDirection) -> AirctlResult<()> {
        self.print(format!("switch tab {direction}"));
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn is_available(&self) -> bool {
        true
    }
}

pub fn run(path: PathBuf, config: AppConfig) -> anyhow::Result<()> {
    let mut reader = ObservationReader::open(&path)?;
    let header = reader.header().clone();
    println!("Replaying {}", path.display());
    println!(
        "  source: {}  recorded: {}  schema: {}",
        header.source, header.epoch_wall, header.schema_version
    );
    println!();

    let mut session = GestureSession::new(&config.gesture);
    let mut dispatcher = ActionDispatcher::new(DispatchConfig::from(&config.control));
    let mut backend = ConsoleBackend::new();

    let mut frames: u64 = 0;
    let mut last_signal: Option<GestureSignal> = None;

    while let Some(frame) = reader.next_frame()? {
        backend.now_ms = frame.timestamp_ms;

        let signal = session.process(frame.hand.as_ref(), frame.timestamp_ms);
        if last_signal != Some(signal) {
            println!("  [{:>8} ms] gesture: {signal}", frame.timestamp_ms);
            last_signal = Some(signal);
        }

        dispatcher.dispatch(
            signal,
            frame.hand.as_ref(),
            session.gate_mut(),
            frame.timestamp_ms,
            &mut backend,
        );
        frames += 1;
    }

    println!();
    println!("{frames} frames, {} effects", backend.effects);
    Ok(())
}
