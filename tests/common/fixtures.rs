//! Test fixtures - reusable content constants for tests.

/// Minimal compilable contract
pub const CONTRACT: &str =
    "// SPDX-License-Identifier: MIT\npragma solidity 0.8.19;\n\ncontract Empty {}\n";

/// Hardhat-style private key (well-known test account, never funded)
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcaea4d07a0ad2e3b4";

/// Config that narrows the build to `core/` and ignores mocks
#[allow(dead_code)]
pub const SCOPED_CONFIG: &str = r#"[sources]
include = ["core/**"]
exclude = ["**/mocks/**"]
"#;
