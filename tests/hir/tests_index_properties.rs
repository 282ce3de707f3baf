//! Random edit sequences keep the global index equal to the union of the
//! registered files and libraries.

use proptest::prelude::*;

use robotls::hir::{Library, LibraryDefinition, Workspace};

use crate::helpers::source_fixtures::{BROWSER_RESOURCE, COMMON_RESOURCE, LOGIN_SUITE};
use crate::helpers::workspace_helpers::{assert_index_consistent, builtin, file};

const PATHS: [&str; 3] = ["/ws/a.resource", "/ws/b.resource", "/ws/nested/a.resource"];
const TEXTS: [&str; 4] = [
    COMMON_RESOURCE,
    BROWSER_RESOURCE,
    LOGIN_SUITE,
    "*** Variables ***\n${BASE_URL}    other\n\n*** Keywords ***\nFind\nFind\n",
];

#[derive(Debug, Clone)]
enum Op {
    Add { path: usize, text: usize },
    Remove { path: usize },
    AddLibrary { builtin: bool },
    RemoveAllLibraries,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..PATHS.len(), 0..TEXTS.len()).prop_map(|(path, text)| Op::Add { path, text }),
        2 => (0..PATHS.len()).prop_map(|path| Op::Remove { path }),
        1 => any::<bool>().prop_map(|builtin| Op::AddLibrary { builtin }),
        1 => Just(Op::RemoveAllLibraries),
    ]
}

fn other_library() -> Library {
    Library::new(
        &LibraryDefinition::from_json(
            r#"{"name": "Collections", "keywords": [{"name": "Find"}, {"name": "Append To List"}]}"#,
        )
        .unwrap(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_index_matches_registered_modules(ops in prop::collection::vec(op(), 1..24)) {
        let mut workspace = Workspace::new();
        for op in ops {
            match op {
                Op::Add { path, text } => workspace.add_file(file(PATHS[path], TEXTS[text])),
                Op::Remove { path } => {
                    workspace.remove_file_by_path(std::path::Path::new(PATHS[path]));
                }
                Op::AddLibrary { builtin: true } => workspace.add_library(builtin()),
                Op::AddLibrary { builtin: false } => workspace.add_library(other_library()),
                Op::RemoveAllLibraries => workspace.remove_all_libraries(),
            }
            assert_index_consistent(&workspace);
        }
    }

    #[test]
    fn prop_removing_everything_empties_the_index(
        adds in prop::collection::vec((0..PATHS.len(), 0..TEXTS.len()), 1..12)
    ) {
        let mut workspace = Workspace::new();
        for (path, text) in adds {
            workspace.add_file(file(PATHS[path], TEXTS[text]));
        }
        workspace.add_library(builtin());

        for path in PATHS {
            workspace.remove_file_by_path(std::path::Path::new(path));
        }
        workspace.remove_all_libraries();

        prop_assert!(workspace.keywords().is_empty());
        prop_assert!(workspace.variables().is_empty());
        prop_assert_eq!(workspace.file_count(), 0);
    }
}
