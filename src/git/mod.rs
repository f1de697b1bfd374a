//! Git operations used by the subcommands.

pub mod client;

pub use client::{CommitOutcome, Git};
