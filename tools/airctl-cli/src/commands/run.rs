//! Live control session: detector stream in, OS effects out.
//!
//! A reader thread consumes JSONL observation frames from the external
//! landmark detector (stdin or a file/FIFO) and publishes each one into
//! the shared latest-observation slot. The frame loop ticks at the
//! configured rate, polls the slot, and dispatches whatever the gesture
//! core decides.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use airctl_common::clock::{RateController, SessionClock};
use airctl_common::config::AppConfig;
use airctl_control::backends::NullBackend;
use airctl_control::dispatcher::{ActionDispatcher, DispatchConfig};
use airctl_control::ControlBackend;
use airctl_gesture_core::GestureSession;
use airctl_hand_model::labels::GestureSignal;
use airctl_vision::shared::SharedObservation;
use airctl_vision::stream::{ObservationReader, ObservationWriter};
use airctl_vision::LandmarkSource;

pub async fn run(
    input: String,
    backend_name: String,
    config: AppConfig,
    fps: u32,
    record: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut backend = make_backend(&backend_name, &config)?;
    if !backend.is_available() {
        anyhow::bail!(
            "Backend '{}' is not available on this system (try `airctl check`)",
            backend.name()
        );
    }
    tracing::info!(backend = %backend.name(), input = %input, "Control session starting");

    let shared = SharedObservation::new();
    let stop_flag = Arc::new(AtomicBool::new(false));
    let reader_handle = spawn_reader(input, shared.clone(), stop_flag.clone(), record)?;

    let clock = SessionClock::start();
    let mut session = GestureSession::new(&config.gesture);
    let mut dispatcher = ActionDispatcher::new(DispatchConfig::from(&config.control));
    let mut source: Box<dyn LandmarkSource> = Box::new(shared);
    let mut rate = RateController::new(fps);
    let mut last_signal: Option<GestureSignal> = None;
    let mut frames: u64 = 0;

    while !stop_flag.load(Ordering::Relaxed) {
        let now_ms = clock.elapsed_ms();
        if !rate.should_tick(now_ms) {
            tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
            continue;
        }

        source.submit(now_ms)?;
        let observation = source.latest();

        let signal = session.process(observation.as_ref(), now_ms);
        if last_signal != Some(signal) {
            tracing::info!(gesture = %signal, "Gesture changed");
            last_signal = Some(signal);
        }

        dispatcher.dispatch(
            signal,
            observation.as_ref(),
            session.gate_mut(),
            now_ms,
            backend.as_mut(),
        );
        frames += 1;
    }

    reader_handle
        .join()
        .map_err(|_| anyhow::anyhow!("Observation reader thread panicked"))??;

    tracing::info!(frames, "Control session stopped");
    Ok(())
}

/// Consume the detector stream on a dedicated thread, publishing each
/// frame into the shared slot. The stop flag is raised at end of stream
/// so the frame loop can drain and exit.
fn spawn_reader(
    input: String,
    shared: SharedObservation,
    stop_flag: Arc<AtomicBool>,
    record: Option<PathBuf>,
) -> anyhow::Result<std::thread::JoinHandle<anyhow::Result<()>>> {
    let handle = std::thread::Builder::new()
        .name("observation-reader".to_string())
        .spawn(move || -> anyhow::Result<()> {
            let result = read_stream(&input, &shared, record);
            stop_flag.store(true, Ordering::SeqCst);
            result
        })?;
    Ok(handle)
}

fn read_stream(
    input: &str,
    shared: &SharedObservation,
    record: Option<PathBuf>,
) -> anyhow::Result<()> {
    let reader: Box<dyn std::io::Read + Send> = if input == "-" {
        Box::new(std::io::stdin())
    } else {
        Box::new(std::fs::File::open(input)?)
    };

    let mut stream = ObservationReader::new(reader)?;
    tracing::info!(source = %stream.header().source, "Observation stream opened");

    // Tee the incoming stream into a recording, reusing its header so the
    // recording replays with the same timestamps and metadata.
    let mut recorder = match record {
        Some(path) => {
            let writer = ObservationWriter::new(path, stream.header().clone())?;
            tracing::info!(path = %writer.path().display(), "Recording observation stream");
            Some(writer)
        }
        None => None,
    };

    while let Some(frame) = stream.next_frame()? {
        if let Some(writer) = recorder.as_mut() {
            writer.write_frame(&frame)?;
        }
        shared.publish(frame.hand, frame.timestamp_ms);
    }

    tracing::info!("Observation stream ended");
    Ok(())
}

fn make_backend(name: &str, config: &AppConfig) -> anyhow::Result<Box<dyn ControlBackend>> {
    match name {
        "null" => Ok(Box::new(NullBackend::new())),
        #[cfg(target_os = "linux")]
        "uinput" => {
            let backend = airctl_control::backends::UinputBackend::new(
                config.control.screen_width,
                config.control.screen_height,
                config.control.pointer_sensitivity,
            )?;
            Ok(Box::new(backend))
        }
        #[cfg(not(target_os = "linux"))]
        "uinput" => anyhow::bail!("The uinput backend is only available on Linux"),
        other => anyhow::bail!("Unknown backend '{other}' (expected uinput|null)"),
    }
}
