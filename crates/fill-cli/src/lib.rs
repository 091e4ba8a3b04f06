//! Shared pieces of the IntelliFill CLI.

pub mod logging;
