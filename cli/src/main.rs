mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, roster, scratch};
use menagerie_common::info;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;
    print::initialize(commands.no_color);

    let cfg = commands.config();
    let command = commands.resolved_command();
    info!("running {command:?} with {cfg:?}");

    match command {
        Commands::Demo => demo::demo(&cfg),
        Commands::Roster => roster::roster(&cfg),
        Commands::Scratch { name } => scratch::scratch(&name),
    }
}
