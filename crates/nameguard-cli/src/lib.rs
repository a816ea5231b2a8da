//! nameguard CLI library.
//!
//! Loads naming configuration and asset manifests, and implements the
//! `validate`, `rename` and `rules` commands on top of `nameguard-lint`.

pub mod commands;
pub mod input;
