use menagerie_common::{config::Config, success};
use menagerie_core::scenario;

use crate::terminal::print::TerminalNarrator;

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let shelter = scenario::run(&mut TerminalNarrator, cfg)?;
    success!(
        "Demo complete: {} animals introduced, {} put through {} rounds",
        shelter.len(),
        cfg.spotlight,
        cfg.rounds
    );
    Ok(())
}
