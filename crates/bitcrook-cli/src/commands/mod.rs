//! Subcommand implementations.

pub mod caselaw;
