use menagerie_core::scenario;

use crate::terminal::print::TerminalNarrator;

pub fn scratch(name: &str) -> anyhow::Result<()> {
    let shelter = scenario::shelter();
    Ok(scenario::scratch(&shelter, name, &mut TerminalNarrator)?)
}
