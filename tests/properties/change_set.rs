//! Property tests for change set construction.

use std::path::PathBuf;

use proptest::prelude::*;

use esmc::domain::entities::ChangeSet;

fn file_list() -> impl Strategy<Value = Vec<PathBuf>> {
    let name = proptest::string::string_regex("[a-d]{1,3}\\.js").unwrap();
    proptest::collection::vec(name.prop_map(|n| PathBuf::from("src").join(n)), 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: files are sorted, unique, and nothing is lost.
    #[test]
    fn property_change_set_is_sorted_and_deduplicated(files in file_list()) {
        let set = ChangeSet::new(files.clone());

        prop_assert!(set.files().windows(2).all(|w| w[0] < w[1]));
        for file in &files {
            prop_assert!(set.contains(file));
        }
        prop_assert!(set.len() <= files.len());
        prop_assert_eq!(set.is_empty(), files.is_empty());
    }

    /// PROPERTY: input order does not matter.
    #[test]
    fn property_change_set_ignores_input_order(files in file_list()) {
        let mut reversed = files.clone();
        reversed.reverse();

        prop_assert_eq!(ChangeSet::new(files), ChangeSet::new(reversed));
    }
}
