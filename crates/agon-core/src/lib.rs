//! # Agon Core
//!
//! Core types shared by all Agon game environments:
//! - [`Message`] / [`MessagePool`] — the append-only dialogue log
//! - [`RoleAssignment`] — attacker/defender pairing with one-time reversal
//! - [`Environment`] / [`TimeStep`] — the episode contract a driving loop sees
//! - [`RewardVector`] — per-participant scores keyed by identity

pub mod environment;
pub mod message;
pub mod reward;
pub mod roles;

pub use environment::{EnvError, Environment, TimeStep};
pub use message::{Message, MessagePool, MODERATOR};
pub use reward::RewardVector;
pub use roles::RoleAssignment;
