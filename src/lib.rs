//! Melee Core - directional melee combat resolution
//!
//! Decides whether a guard stops a strike, how much damage lands on which
//! body part, and which way the defender flinches. Input, animation, audio
//! and health live with the caller; this crate only reads poses and action
//! states and hands back a [`combat::CombatOutcome`].

pub mod combat;
pub mod core;
pub mod data;
