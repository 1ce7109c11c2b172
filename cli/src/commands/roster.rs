use menagerie_common::{config::Config, success};
use menagerie_core::scenario;

use crate::terminal::print::TerminalNarrator;

pub fn roster(cfg: &Config) -> anyhow::Result<()> {
    let shelter = scenario::shelter();
    scenario::roll_call(&shelter, &mut TerminalNarrator, cfg);
    success!("{} animals on the roster", shelter.len());
    Ok(())
}
