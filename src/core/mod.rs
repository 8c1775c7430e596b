pub mod config;
pub mod error;
pub mod types;

pub use config::CombatConfig;
pub use error::{DataError, Result};
pub use types::{CombatantId, Side};
