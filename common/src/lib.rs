//! # Menagerie Common
//!
//! Plumbing shared by every crate in the workspace.
//!
//! * **[`config`]**: run-time settings assembled by the CLI.
//! * **[`narrator`]**: the output port every emitted line goes through.
//!
//! The `success!`, `info!` and `warn!` macros wrap `tracing` with the
//! workspace's targets so library crates never need to know how the
//! terminal renders them.

pub mod config;
pub mod narrator;

#[doc(hidden)]
pub use tracing;

/// Target for lines that must reach the user verbatim.
pub const PRINT_TARGET: &str = "menagerie::print";
/// Target for positive status messages.
pub const SUCCESS_TARGET: &str = "menagerie::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "menagerie::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "menagerie::info", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "menagerie::warn", $($arg)*)
    };
}
