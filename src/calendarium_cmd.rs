use anyhow::Result;
use antikythera_computus::calendarium;

use crate::render::{dominical_letter_name, epact_label, month_name};

/// Run the `calendarium` subcommand: dump the liturgical table the way the
/// old breviaries print it.
pub fn run() -> Result<()> {
    for entry in calendarium() {
        println!(
            "{} {:2}  {}  {:>5}",
            &month_name(entry.month)[..3],
            entry.day,
            dominical_letter_name(entry.dominical),
            epact_label(entry.epact)
        );
    }
    Ok(())
}
