//! Source discovery implementations

mod walk;

pub use walk::WalkDiscovery;
