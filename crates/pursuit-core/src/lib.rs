//! Core types and definitions for the pursuit-evasion simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! kinematic state, geometry helpers, components, commands, configuration,
//! errors, state snapshots, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod geometry;
pub mod state;
pub mod types;

pub use error::SimError;
