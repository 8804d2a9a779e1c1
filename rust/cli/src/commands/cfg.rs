//! Configuration command handler.
//!
//! Prints the resolved table configuration with the source of every value.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "min_bet": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "min_bet": {
            "value": config.min_bet,
            "source": sources.min_bet,
        },
        "chip_unit": {
            "value": config.chip_unit,
            "source": sources.chip_unit,
        },
        "fold_when_not_facing_bet": {
            "value": config.fold_when_not_facing_bet,
            "source": sources.fold_when_not_facing_bet,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
