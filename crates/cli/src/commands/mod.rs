//! Command implementations.

mod helpers;
mod info;
mod validate;

pub use helpers::run_helpers;
pub use info::run_info;
pub use validate::run_validate;
