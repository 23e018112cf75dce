//! Domain Entities
//!
//! - `CompilerProfile` - solc version, metadata policy and optimizer settings
//! - `NetworkTarget` - a named deployment target with endpoint and signers
//! - `VerificationCredential` - explorer API key for one network family

mod compiler_profile;
mod network_target;
mod verification_credential;

pub use compiler_profile::{BytecodeHash, CompilerProfile, OptimizerSettings};
pub use network_target::NetworkTarget;
pub use verification_credential::VerificationCredential;
