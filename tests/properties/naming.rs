//! Property tests for resource names and argument fingerprints.

use proptest::prelude::*;

use caravan::domain::value_objects::ArgsFingerprint;
use caravan::ResourceName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Name parsing accepts or rejects, never panics.
    #[test]
    fn property_name_parsing_never_panics(raw in "\\PC*") {
        let _ = ResourceName::parse(&raw);
    }

    /// PROPERTY: Every name in the accepted alphabet round-trips through as_str.
    #[test]
    fn property_accepted_names_round_trip(raw in "[a-z0-9][a-z0-9_-]{0,30}") {
        let name = ResourceName::parse(&raw).unwrap();
        prop_assert_eq!(name.as_str(), raw.as_str());
    }

    /// PROPERTY: Uppercase anywhere in the input is rejected.
    #[test]
    fn property_uppercase_is_rejected(
        prefix in "[a-z0-9]{1,8}",
        upper in "[A-Z]",
        suffix in "[a-z0-9]{0,8}",
    ) {
        let raw = format!("{prefix}{upper}{suffix}");
        prop_assert!(ResourceName::parse(&raw).is_err());
    }

    /// PROPERTY: Equal argument vectors always fingerprint equal, with the sha256 prefix.
    #[test]
    fn property_fingerprint_is_deterministic(args in prop::collection::vec("[ -~]{0,16}", 0..6)) {
        let a = ArgsFingerprint::from_args(&args);
        let b = ArgsFingerprint::from_args(&args);

        prop_assert!(a.matches(&b));
        prop_assert!(a.as_str().starts_with("sha256:"));
        prop_assert_eq!(a.hex().len(), 64);
    }

    /// PROPERTY: Appending any argument, even an empty one, changes the fingerprint.
    #[test]
    fn property_fingerprint_sees_appended_args(
        args in prop::collection::vec("[ -~]{0,16}", 0..6),
        extra in "[ -~]{0,16}",
    ) {
        let mut longer = args.clone();
        longer.push(extra);

        let a = ArgsFingerprint::from_args(&args);
        let b = ArgsFingerprint::from_args(&longer);
        prop_assert!(!a.matches(&b));
    }
}
