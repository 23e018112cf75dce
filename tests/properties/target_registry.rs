//! Property tests for signing key and credential resolution.

use proptest::prelude::*;

use solpipe::domain::value_objects::{Secrets, SigningSecret};
use solpipe::{NetworkCatalog, NetworkFamily, TargetRegistry};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every target carries exactly the one shared key, or none.
    #[test]
    fn property_signing_key_is_shared(key in proptest::option::of("[0-9a-fx]{0,66}")) {
        let secrets = Secrets {
            signing_secret: key.clone().map(SigningSecret::new),
            ..Secrets::default()
        };
        let registry = TargetRegistry::new(&NetworkCatalog::builtin(), &secrets);

        for target in registry.targets() {
            match &key {
                Some(key) => {
                    prop_assert_eq!(target.signing_keys.len(), 1);
                    prop_assert_eq!(target.signing_keys[0].expose(), key.as_str());
                }
                None => prop_assert!(target.signing_keys.is_empty()),
            }
        }
    }

    /// PROPERTY: networks of one family resolve to the same verification key.
    #[test]
    fn property_family_shares_verification_key(
        bsc in "[A-Z0-9]{0,16}",
        eth in "[A-Z0-9]{0,16}",
    ) {
        let mut secrets = Secrets::default();
        secrets.api_keys.insert(NetworkFamily::Bsc, bsc.clone());
        secrets.api_keys.insert(NetworkFamily::Ethereum, eth.clone());
        let registry = TargetRegistry::new(&NetworkCatalog::builtin(), &secrets);

        for target in registry.targets() {
            let credential = registry.credential_for_network(&target.name).unwrap();
            prop_assert_eq!(credential.api_key.as_str(), registry.verification_key(target.family));
        }
        prop_assert_eq!(registry.verification_key(NetworkFamily::Bsc), bsc.as_str());
        prop_assert_eq!(registry.verification_key(NetworkFamily::Ethereum), eth.as_str());
        prop_assert_eq!(registry.verification_key(NetworkFamily::TomoChain), "");
    }
}
