//! Key parity audit between two locale trees.
//!
//! Runtime resolution tolerates missing keys, so drift between catalogues is
//! only visible in the rendered interface. This audit compares the trees
//! ahead of time and lists what each side lacks.

use std::collections::{BTreeMap, BTreeSet};

use super::{LocaleTree, NodeKind};

/// Differences between a reference tree and a translated tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParityReport {
    /// Leaf paths present in the reference but absent from the other tree.
    pub missing_in_other: Vec<String>,
    /// Leaf paths present in the other tree but absent from the reference.
    pub missing_in_reference: Vec<String>,
    /// Paths that are a leaf in one tree and a branch in the other.
    pub shape_mismatches: Vec<String>,
}

impl ParityReport {
    /// Compare `reference` against `other`.
    ///
    /// Leaves hidden beneath a shape mismatch are not reported a second time
    /// as missing.
    #[must_use]
    pub fn compare(reference: &LocaleTree, other: &LocaleTree) -> Self {
        let left: BTreeMap<String, NodeKind> = reference.paths().into_iter().collect();
        let right: BTreeMap<String, NodeKind> = other.paths().into_iter().collect();

        let shape_mismatches: BTreeSet<String> = left
            .iter()
            .filter(|(path, kind)| right.get(*path).is_some_and(|theirs| theirs != *kind))
            .map(|(path, _)| path.clone())
            .collect();

        let under_mismatch = |path: &str| {
            shape_mismatches
                .iter()
                .any(|prefix| path.len() > prefix.len() && path.starts_with(&format!("{prefix}.")))
        };

        let missing = |from: &BTreeMap<String, NodeKind>, to: &BTreeMap<String, NodeKind>| {
            from.iter()
                .filter(|(path, kind)| **kind == NodeKind::Leaf && !to.contains_key(*path))
                .map(|(path, _)| path.clone())
                .filter(|path| !under_mismatch(path.as_str()))
                .collect::<Vec<_>>()
        };

        Self {
            missing_in_other: missing(&left, &right),
            missing_in_reference: missing(&right, &left),
            shape_mismatches: shape_mismatches.into_iter().collect(),
        }
    }

    /// Whether the two trees expose the same leaves with the same shape.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.missing_in_other.is_empty()
            && self.missing_in_reference.is_empty()
            && self.shape_mismatches.is_empty()
    }
}
