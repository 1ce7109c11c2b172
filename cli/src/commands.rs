pub mod demo;
pub mod roster;
pub mod scratch;

use clap::{ArgAction, Parser, Subcommand};
use menagerie_common::config::{Config, DEFAULT_ROUNDS, DEFAULT_SPOTLIGHT};

#[derive(Parser, Debug)]
#[command(name = "menagerie")]
#[command(about = "A small tour of dogs, cats and what they can do.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Skip section headers
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Raise diagnostic log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Trick rounds in the demo
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ROUNDS, global = true)]
    pub rounds: usize,

    /// Dog to put through its tricks
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SPOTLIGHT, global = true)]
    pub spotlight: String,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the full demo (default)
    #[command(alias = "d")]
    Demo,
    /// Only the roll call of every animal
    #[command(alias = "r")]
    Roster,
    /// Let a cat scratch the furniture
    #[command(alias = "s")]
    Scratch { name: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            rounds: self.rounds,
            spotlight: self.spotlight.clone(),
        }
    }

    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Demo)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_runs_default_demo() {
        let cli = CommandLine::try_parse_from(["menagerie"]).unwrap();
        assert_eq!(cli.resolved_command(), Commands::Demo);
        assert_eq!(cli.config(), Config::default());
        assert!(!cli.no_color);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_aliases() {
        let cli = CommandLine::try_parse_from(["menagerie", "r"]).unwrap();
        assert_eq!(cli.resolved_command(), Commands::Roster);

        let cli = CommandLine::try_parse_from(["menagerie", "s", "Whiskers"]).unwrap();
        assert_eq!(cli.resolved_command(), Commands::Scratch { name: String::from("Whiskers") });
    }

    #[test]
    fn test_options_feed_config() {
        let cli = CommandLine::try_parse_from([
            "menagerie", "demo", "-qq", "--rounds", "0", "--spotlight", "Max", "-vv",
        ])
        .unwrap();
        let cfg = cli.config();
        assert_eq!(cfg.quiet, 2);
        assert_eq!(cfg.rounds, 0);
        assert_eq!(cfg.spotlight, "Max");
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_bad_rounds() {
        assert!(CommandLine::try_parse_from(["menagerie", "--rounds", "-1"]).is_err());
        assert!(CommandLine::try_parse_from(["menagerie", "scratch"]).is_err());
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;
        <CommandLine as CommandFactory>::command().debug_assert();
    }
}
