//! Domain Value Objects
//!
//! Immutable value types shared by the domain and config layers.

mod config_warning;
mod resolver_options;

pub use config_warning::ConfigWarning;
pub use resolver_options::ResolverOptions;
