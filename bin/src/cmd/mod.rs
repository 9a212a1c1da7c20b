//! CLI subcommand modules.
//!
//! This module contains the implementations for all greenblatt CLI subcommands.

pub(crate) mod list;
pub(crate) mod ratios;
pub(crate) mod score;
pub(crate) mod statements;
