//! Domain Layer
//!
//! The build-configuration core: pure types and rules with no I/O.
//!
//! ## Structure
//!
//! - `entities/` - CompilerProfile, NetworkTarget, VerificationCredential
//! - `value_objects/` - Immutable value types (ChainId, Endpoint, SourcePathSet, ...)
//! - `services/` - SourceSetFilter, TargetRegistry, NetworkCatalog
//! - `policies/` - TestFilePolicy
//! - `ports/` - Interface definitions for infrastructure (discovery, environment, hooks)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or process environment
//! 2. **Load once** - Everything here is built at startup and read-only afterwards
//! 3. **Ports & Adapters** - Discovery and environment access go through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
