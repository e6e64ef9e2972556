//! Application entry point for the frost-crystal drawing viewer.
//!
//! This binary sets up logging and eframe/egui and delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer` module.

mod canvas;
mod viewer;

use anyhow::{Result, anyhow};
use tracing::info;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` once the window is closed.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_line_number(true)
        .init();

    info!("starting frost viewer");

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Frost",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
    .map_err(|e| anyhow!("failed to run viewer: {e}"))?;

    info!("frost viewer closed");
    Ok(())
}
