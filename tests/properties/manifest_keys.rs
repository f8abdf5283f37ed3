//! Property tests for manifest key normalization.

use std::path::Path;

use proptest::prelude::*;

use esmc::domain::entities::manifest_key;

fn relative_path_string() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: keys are project-relative and use forward slashes.
    #[test]
    fn property_manifest_key_is_project_relative(rel in relative_path_string()) {
        let root = Path::new("/project");
        let file = root.join("src").join(&rel);

        let key = manifest_key(root, &file);

        prop_assert_eq!(key.clone(), format!("src/{}", rel));
        prop_assert!(!key.starts_with('/'));
        prop_assert!(!key.contains('\\'));
    }

    /// PROPERTY: distinct files never share a key.
    #[test]
    fn property_manifest_key_is_injective(
        a in relative_path_string(),
        b in relative_path_string(),
    ) {
        prop_assume!(a != b);
        let root = Path::new("/project");

        prop_assert_ne!(manifest_key(root, &root.join(&a)), manifest_key(root, &root.join(&b)));
    }
}
