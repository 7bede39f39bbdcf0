//! Labelling oracle for disjoint-set property verification.
//!
//! Every element carries a component label and a merge relabels one whole
//! component. Quadratic, but trivially correct.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default)]
pub(super) struct LabelOracle {
    labels: BTreeMap<u16, u16>,
}

impl LabelOracle {
    pub(super) fn with_universe(universe: impl IntoIterator<Item = u16>) -> Self {
        Self {
            labels: universe.into_iter().map(|element| (element, element)).collect(),
        }
    }

    pub(super) fn touch(&mut self, element: u16) {
        self.labels.entry(element).or_insert(element);
    }

    /// Returns whether two distinct components were merged.
    pub(super) fn union(&mut self, left: u16, right: u16) -> bool {
        self.touch(left);
        self.touch(right);
        let (Some(&keep), Some(&drop)) = (self.labels.get(&left), self.labels.get(&right)) else {
            return false;
        };
        if keep == drop {
            return false;
        }
        for label in self.labels.values_mut() {
            if *label == drop {
                *label = keep;
            }
        }
        true
    }

    pub(super) fn connected(&self, left: u16, right: u16) -> bool {
        self.labels.get(&left) == self.labels.get(&right)
    }

    pub(super) fn elements(&self) -> impl Iterator<Item = u16> + '_ {
        self.labels.keys().copied()
    }

    pub(super) fn len(&self) -> usize {
        self.labels.len()
    }

    /// Components as a canonical set of member sets.
    pub(super) fn groups(&self) -> BTreeSet<BTreeSet<u16>> {
        let mut by_label: BTreeMap<u16, BTreeSet<u16>> = BTreeMap::new();
        for (&element, &label) in &self.labels {
            by_label.entry(label).or_default().insert(element);
        }
        by_label.into_values().collect()
    }
}
