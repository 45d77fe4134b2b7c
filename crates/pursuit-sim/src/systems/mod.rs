//! ECS systems that operate on the engagement world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod control;
pub mod guidance;
pub mod movement;
pub mod snapshot;
pub mod terminal;
pub mod trajectory;
