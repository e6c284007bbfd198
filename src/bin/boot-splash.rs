//! Boot splash for the SSD1351 panel
//!
//! Shows the welcome image with the scanner animation until SIGTERM or SIGINT.
//! Exits 0 on a signal-initiated stop and 1 if the panel cannot be brought up.
//! The last frame stays on the panel after exit.

use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use linux_embedded_hal::Delay;
use signal_hook::consts::{SIGINT, SIGTERM};
use ssd1351_splash::linux::Hardware;
use ssd1351_splash::{Builder, Config, Splash, WELCOME_IMAGE};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let shutdown = Arc::new(AtomicBool::new(false));
    let setup = register_signals(&shutdown).and_then(|()| {
        let config = Builder::new().build().context("invalid configuration")?;
        let hardware = open_panel(&config)?;
        Ok((config, hardware))
    });

    let (config, mut hardware) = match setup {
        Ok(ready) => ready,
        Err(e) => {
            log::error!("boot-splash: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut splash = Splash::from_config(&WELCOME_IMAGE, &config);
    splash.run(hardware.display_mut(), &shutdown, &mut Delay);

    ExitCode::SUCCESS
}

fn register_signals(shutdown: &Arc<AtomicBool>) -> Result<()> {
    for signal in [SIGTERM, SIGINT] {
        signal_hook::flag::register(signal, Arc::clone(shutdown))
            .with_context(|| format!("installing handler for signal {signal}"))?;
    }
    Ok(())
}

fn open_panel(config: &Config) -> Result<Hardware> {
    let mut hardware = Hardware::open(config)?;
    hardware.start(&mut Delay)?;
    log::info!("boot-splash: panel on");
    Ok(hardware)
}
