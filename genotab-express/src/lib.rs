pub mod config;
pub mod families;
pub mod rules;

// re-exports
pub use config::*;
pub use families::*;
pub use rules::*;
