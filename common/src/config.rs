pub const DEFAULT_ROUNDS: usize = 2;
pub const DEFAULT_SPOTLIGHT: &str = "Buddy";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Quiet level. Anything above zero hides section headers.
    pub quiet: u8,
    /// How many times the spotlighted dog runs through its tricks.
    ///
    /// Zero is allowed and performs nothing.
    pub rounds: usize,
    /// Name of the dog put through its tricks.
    pub spotlight: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            rounds: DEFAULT_ROUNDS,
            spotlight: String::from(DEFAULT_SPOTLIGHT),
        }
    }
}
