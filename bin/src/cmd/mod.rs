//! CLI subcommand modules.
//!
//! This module contains the implementations for all ewmom CLI subcommands.

pub(crate) mod score;
pub(crate) mod series;
pub(crate) mod signals;
