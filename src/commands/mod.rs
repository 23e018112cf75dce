//! Command handlers for the solpipe binary

pub mod networks;
pub mod profile;
pub mod sources;
pub mod target;
pub mod verify_key;
