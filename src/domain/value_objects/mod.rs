//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod chain_id;
mod config_warning;
mod endpoint;
mod network_family;
mod secrets;
mod signing_secret;
mod source_path_set;

pub use chain_id::ChainId;
pub use config_warning::ConfigWarning;
pub use endpoint::Endpoint;
pub use network_family::NetworkFamily;
pub use secrets::Secrets;
pub use signing_secret::SigningSecret;
pub use source_path_set::SourcePathSet;
