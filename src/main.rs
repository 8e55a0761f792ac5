use anyhow::Result;

use sheetpick::{config::Config, logging, ui};

fn main() -> Result<()> {
    // Logging is best effort; the picker works without it.
    if let Err(e) = logging::init() {
        eprintln!("sheetpick: logging disabled: {e:#}");
    }

    let config = Config::from_exe_dir();
    tracing::info!(?config, "starting");
    ui::run(config)
}
