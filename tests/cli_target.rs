mod common;

use common::*;

#[test]
fn target_without_private_key_still_resolves() {
    let result = TestEnv::new().run(&["target", "bsc"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("chain id:  56"));
    assert!(result
        .stdout
        .contains("endpoint:  https://bsc-dataseed2.binance.org"));
    assert!(result.stdout.contains("signer:    none (PRIVATE_KEY not set)"));
    assert!(
        result.stderr.contains("PRIVATE_KEY is not set"),
        "expected a warning on stderr, got:\n{}",
        result.stderr
    );
}

#[test]
fn target_masks_private_key() {
    let result = TestEnv::new()
        .with_env("PRIVATE_KEY", TEST_PRIVATE_KEY)
        .run(&["target", "goerli"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("signer:    0xac…e3b4"));
    assert!(!result.stdout.contains(TEST_PRIVATE_KEY));
    assert!(!result.stderr.contains(TEST_PRIVATE_KEY));
}

#[test]
fn target_same_key_on_every_network() {
    let env = TestEnv::new().with_env("PRIVATE_KEY", TEST_PRIVATE_KEY);

    let signers: Vec<String> = ["bscTest", "bsc", "goerli", "tomoTest"]
        .iter()
        .map(|name| env.run(&["--json", "target", name]).json()["signer"].to_string())
        .collect();

    assert!(signers.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn target_reads_private_key_from_dotenv() {
    let env = TestEnv::new().with_file(
        ".env",
        &format!("# deploy key\nexport PRIVATE_KEY=\"{}\"\n", TEST_PRIVATE_KEY),
    );

    let result = env.run(&["--json", "target", "bscTest"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.json()["signing_keys"], 1);
}

#[test]
fn target_process_env_wins_over_dotenv() {
    let env = TestEnv::new()
        .with_file(".env", "PRIVATE_KEY=0x1111111111111111111111111111111111111111\n")
        .with_env("PRIVATE_KEY", TEST_PRIVATE_KEY);

    let result = env.run(&["target", "bsc"]);

    assert!(result.stdout.contains("signer:    0xac…e3b4"));
}

#[test]
fn target_unknown_network_suggests_and_fails() {
    let result = TestEnv::new().run(&["target", "bscTset"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("unknown network 'bscTset'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'bscTest'?"));
    assert!(result.stdout.is_empty());
}
