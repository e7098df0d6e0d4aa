//! Core library components.
//!
//! This module contains the sealing pipeline and the pieces it is built
//! from: configuration, binary discovery, external command execution,
//! manifest rendering and live validation.

pub mod config;
pub mod confirm;
pub mod constants;
pub mod encoding;
pub mod extract;
pub mod kubectl;
pub mod kubeseal;
pub mod locate;
pub mod manifest;
pub mod pipeline;
pub mod process;
pub mod scratch;
pub mod validate;
