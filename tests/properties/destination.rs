//! Property tests for destination path derivation.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use esmc::domain::services::destination_for;

fn relative_path_string() -> impl Strategy<Value = String> {
    // Segments never start with '.', so "." and ".." cannot appear
    let segment = proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the relative path under the source root is kept verbatim.
    #[test]
    fn property_destination_keeps_relative_path(rel in relative_path_string()) {
        let source_root = Path::new("/project/src");
        let dest_root = Path::new("/project/dist/nodejs");
        let file = source_root.join(&rel);

        let dest = destination_for(&file, source_root, dest_root).unwrap();

        prop_assert!(dest.starts_with(dest_root));
        prop_assert_eq!(dest.strip_prefix(dest_root).unwrap(), Path::new(&rel));
        prop_assert_eq!(dest.file_name(), file.file_name());
    }

    /// PROPERTY: files outside the source root never get a destination.
    #[test]
    fn property_outside_source_root_is_rejected(rel in relative_path_string()) {
        let file = PathBuf::from("/elsewhere").join(&rel);

        let result = destination_for(&file, Path::new("/project/src"), Path::new("/project/dist"));

        prop_assert!(result.is_err());
    }
}
