//! Combat data loading and load-time validation

pub mod registry;

pub use registry::WeaponRegistry;
