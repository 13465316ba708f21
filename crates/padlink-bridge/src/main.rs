//! Padlink bridge binary.
//!
//! # Usage
//!
//! ```bash
//! # Defaults match the reference hardware
//! padlink-bridge
//!
//! # Explicit device and port
//! padlink-bridge --device "Wacom Intuos Pro M Finger" --serial /dev/ttyAMA0
//! ```

use std::time::Duration;

use clap::Parser;
use padlink_bridge::{CommandChannel, EvdevSource, Runtime, find_device, open_serial};
use padlink_gesture::{GestureConfig, GestureEngine};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Trackpad-to-serial HID bridge
#[derive(Parser, Debug)]
#[command(name = "padlink-bridge")]
#[command(about = "Translates trackpad gestures into serial mouse commands")]
#[command(version)]
struct Args {
    /// Input device name to listen to
    #[arg(long, default_value = "Wacom Intuos Pro M Finger")]
    device: String,

    /// Serial port connected to the peripheral
    #[arg(long, default_value = "/dev/ttyAMA0")]
    serial: String,

    /// Serial baud rate
    #[arg(long, default_value = "115200")]
    baud: u32,

    /// Pointer movement scale factor (lower = slower)
    #[arg(long, default_value = "0.5")]
    sensitivity: f32,

    /// Minimum scaled delta before a move is emitted
    #[arg(long, default_value = "2")]
    threshold: i32,

    /// Scale factor on raw two-finger deltas
    #[arg(long, default_value = "0.05")]
    scroll_scaling: f32,

    /// Multiplier on the scaled scroll delta
    #[arg(long, default_value = "1.0")]
    scroll_sensitivity: f32,

    /// Invert scroll direction
    #[arg(long)]
    invert_scroll: bool,

    /// Maximum tap duration in milliseconds
    #[arg(long, default_value = "400")]
    tap_timeout_ms: u64,

    /// Cancel tap eligibility on any mid-session finger-count change
    #[arg(long)]
    strict_tap: bool,

    /// Commands buffered before a batched serial write
    #[arg(long, default_value = "5")]
    batch_size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            movement_sensitivity: self.sensitivity,
            movement_threshold: self.threshold,
            scroll_input_scaling: self.scroll_scaling,
            scroll_sensitivity: self.scroll_sensitivity,
            invert_scroll: self.invert_scroll,
            tap_timeout: Duration::from_millis(self.tap_timeout_ms),
            strict_tap: self.strict_tap,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    tracing::info!("padlink bridge starting");

    let device = find_device(&args.device)?;
    let mut source = EvdevSource::new(device)?;
    let port = open_serial(&args.serial, args.baud)?;

    let engine = GestureEngine::new(args.gesture_config());
    let channel = CommandChannel::new(port, args.batch_size);
    let runtime = Runtime::new(engine, channel);

    let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for interrupt: {e}");
        }
        let _ = shutdown_tx.send(true);
    });

    runtime.run(&mut source, &mut shutdown_rx).await?;

    tracing::info!("padlink bridge stopped");
    Ok(())
}
