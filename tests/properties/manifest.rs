//! Property tests for manifest and ledger file loading.

use proptest::prelude::*;

use caravan::domain::entities::DeploymentRecord;
use caravan::domain::ports::LedgerRepository;
use caravan::domain::value_objects::ArgsFingerprint;
use caravan::infrastructure::manifest;
use caravan::{Ledger, ResourceName, TomlLedgerRepository};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 192,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Loading arbitrary file content as a manifest returns a result, never panics.
    #[test]
    fn property_manifest_loading_never_panics(content in "\\PC*") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caravan.toml");
        std::fs::write(&path, &content).unwrap();

        let _ = manifest::load_with_warnings(&path);
    }

    /// PROPERTY: Generated well-formed manifests load cleanly, in declaration order.
    #[test]
    fn property_valid_manifests_load_in_order(
        raw_names in prop::collection::vec("[a-z][a-z0-9-]{0,12}", 1..10)
    ) {
        // Duplicate names fail manifest loading, so keep first occurrences only.
        let mut seen = std::collections::HashSet::new();
        let names: Vec<String> = raw_names
            .into_iter()
            .filter(|n| seen.insert(n.clone()))
            .collect();

        let mut content = String::from("version = 1\n\n[deployer]\ncommand = \"./deploy.sh\"\n");
        for name in &names {
            content.push_str(&format!("\n[[resource]]\nname = \"{name}\"\n"));
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caravan.toml");
        std::fs::write(&path, &content).unwrap();

        let (loaded, warnings) = manifest::load_with_warnings(&path).unwrap();
        prop_assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

        let loaded_names: Vec<String> = loaded.graph().iter().map(|s| s.name().to_string()).collect();
        prop_assert_eq!(loaded_names, names);
    }

    /// PROPERTY: Loading arbitrary file content as a ledger returns a result, never panics.
    #[test]
    fn property_ledger_loading_never_panics(content in "\\PC*") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caravan.ledger");
        std::fs::write(&path, &content).unwrap();

        let _ = TomlLedgerRepository::new().load(&path);
    }

    /// PROPERTY: A saved ledger loads back with every record and identifier intact.
    #[test]
    fn property_ledger_save_load_preserves_records(
        entries in prop::collection::btree_map("[a-z][a-z0-9-]{0,10}", "[ -~]{0,24}", 0..8)
    ) {
        let mut ledger = Ledger::new();
        for (name, identifier) in &entries {
            ledger.record(DeploymentRecord::success(
                ResourceName::parse(name).unwrap(),
                identifier.as_str(),
                ArgsFingerprint::from_args(&[]),
            ));
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caravan.ledger");
        let repo = TomlLedgerRepository::new();
        repo.save(&ledger, &path).unwrap();
        let loaded = repo.load(&path).unwrap();

        prop_assert_eq!(loaded.len(), entries.len());
        for (name, identifier) in &entries {
            let parsed = ResourceName::parse(name).unwrap();
            prop_assert_eq!(loaded.identifier_of(&parsed), Some(identifier.as_str()));
        }
    }
}
