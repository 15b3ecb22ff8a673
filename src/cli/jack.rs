// src/cli/jack.rs - Launch the Brightside Jack dashboard

use crate::infra::config::Config;
use crate::tui;

/// `brightside jack`
pub fn run_jack(config: &Config) -> anyhow::Result<()> {
    println!("🕶️ Brightside Jack booting up...");
    tui::run_dashboard(config)
        .map_err(|e| anyhow::anyhow!("Error launching Brightside Jack: {e}"))
}
