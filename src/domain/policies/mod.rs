//! Domain Policies
//!
//! Rules that decide what goes into a build.

mod test_file_policy;

pub use test_file_policy::TestFilePolicy;
