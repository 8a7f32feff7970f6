//! System orchestration, startup, and shutdown logic.

pub mod inventory_system;
pub mod logging;
pub mod seed;

pub use inventory_system::*;
pub use logging::*;
pub use seed::*;
