//! Property runners shared by the closed-world and open-world suites.
//!
//! Each runner drives a structure through the [`DisjointSet`] trait so both
//! variants are held to the same laws.

use std::{
    collections::{BTreeSet, HashMap},
    fmt::Debug,
};

use proptest::{prop_assert, prop_assert_eq, test_runner::TestCaseError};

use crate::{DisjointSet, DynamicUnionFind, UnionFind};

use super::{
    oracle::LabelOracle,
    types::{Step, StepKind, UNIVERSE},
};

/// Read-only view of the parent links and ranks behind a structure.
pub(super) trait ForestShape {
    fn parent(&self, element: u16) -> Option<u16>;
    fn rank(&self, element: u16) -> Option<u8>;
}

impl ForestShape for UnionFind<u16> {
    fn parent(&self, element: u16) -> Option<u16> {
        self.parent_of(&element).copied()
    }

    fn rank(&self, element: u16) -> Option<u8> {
        self.rank_of(&element)
    }
}

impl ForestShape for DynamicUnionFind<u16> {
    fn parent(&self, element: u16) -> Option<u16> {
        self.parent_of(&element).copied()
    }

    fn rank(&self, element: u16) -> Option<u8> {
        self.rank_of(&element)
    }
}

fn ok<R, E: Debug>(result: Result<R, E>) -> Result<R, TestCaseError> {
    result.map_err(|error| TestCaseError::fail(format!("unexpected error: {error:?}")))
}

/// Replays `script`, checking every union result against the oracle.
pub(super) fn replay<D>(
    set: &mut D,
    oracle: &mut LabelOracle,
    script: &[Step],
) -> Result<(), TestCaseError>
where
    D: DisjointSet<u16>,
    D::Error: Debug,
{
    for step in script {
        match step.kind {
            StepKind::Union => {
                let merged = ok(set.union(&step.left, &step.right))?;
                prop_assert_eq!(merged, oracle.union(step.left, step.right));
            }
            StepKind::Find => {
                ok(set.find(&step.left))?;
                oracle.touch(step.left);
            }
            StepKind::Connected => {
                oracle.touch(step.left);
                oracle.touch(step.right);
                let connected = ok(set.connected(&step.left, &step.right))?;
                prop_assert_eq!(connected, oracle.connected(step.left, step.right));
            }
        }
    }
    Ok(())
}

/// Checks membership, grouping, sizes and pairwise connectivity.
pub(super) fn matches_oracle<D>(set: &mut D, oracle: &LabelOracle) -> Result<(), TestCaseError>
where
    D: DisjointSet<u16>,
    D::Error: Debug,
{
    prop_assert_eq!(set.len(), oracle.len());
    for element in oracle.elements() {
        prop_assert!(set.contains(&element));
    }

    let components = set.components();
    let groups: BTreeSet<BTreeSet<u16>> = components
        .values()
        .map(|members| members.iter().copied().collect())
        .collect();
    prop_assert_eq!(groups, oracle.groups());

    let sizes = set.component_sizes();
    prop_assert_eq!(sizes.len(), components.len());
    for (root, members) in &components {
        prop_assert!(members.contains(root), "root must belong to its own component");
        prop_assert_eq!(sizes.get(root), Some(&members.len()));
    }
    prop_assert_eq!(sizes.values().sum::<usize>(), set.len());

    let elements: Vec<u16> = oracle.elements().collect();
    for &left in &elements {
        for &right in &elements {
            prop_assert_eq!(
                ok(set.connected(&left, &right))?,
                oracle.connected(left, right)
            );
        }
    }
    Ok(())
}

/// Checks reflexivity, symmetry and transitivity of `connected`.
pub(super) fn is_equivalence<D>(set: &mut D, elements: &[u16]) -> Result<(), TestCaseError>
where
    D: DisjointSet<u16>,
    D::Error: Debug,
{
    let mut relation: HashMap<(u16, u16), bool> = HashMap::new();
    for &left in elements {
        for &right in elements {
            relation.insert((left, right), ok(set.connected(&left, &right))?);
        }
    }
    let related = |left: u16, right: u16| relation.get(&(left, right)).copied().unwrap_or(false);

    for &a in elements {
        prop_assert!(related(a, a), "connected must be reflexive");
        for &b in elements {
            prop_assert_eq!(related(a, b), related(b, a), "connected must be symmetric");
            for &c in elements {
                if related(a, b) && related(b, c) {
                    prop_assert!(related(a, c), "connected must be transitive");
                }
            }
        }
    }
    Ok(())
}

/// Replaying every union a second time must merge nothing.
pub(super) fn unions_are_idempotent<D>(set: &mut D, script: &[Step]) -> Result<(), TestCaseError>
where
    D: DisjointSet<u16>,
    D::Error: Debug,
{
    let sizes_before = set.component_sizes();
    for step in script.iter().filter(|step| step.kind == StepKind::Union) {
        prop_assert!(!ok(set.union(&step.left, &step.right))?);
    }
    prop_assert_eq!(set.component_sizes(), sizes_before);
    Ok(())
}

/// Repeated lookups and reports must agree while nothing is merged.
pub(super) fn lookups_are_stable<D>(set: &mut D, elements: &[u16]) -> Result<(), TestCaseError>
where
    D: DisjointSet<u16>,
    D::Error: Debug,
{
    let first_report = set.components();
    for element in elements {
        let first = ok(set.find(element))?;
        let second = ok(set.find(element))?;
        prop_assert_eq!(first, second);
    }
    prop_assert_eq!(set.components(), first_report);
    Ok(())
}

fn apply<D>(set: &mut D, step: &Step) -> Result<(), TestCaseError>
where
    D: DisjointSet<u16>,
    D::Error: Debug,
{
    match step.kind {
        StepKind::Union => {
            ok(set.union(&step.left, &step.right))?;
        }
        StepKind::Find => {
            ok(set.find(&step.left))?;
        }
        StepKind::Connected => {
            ok(set.connected(&step.left, &step.right))?;
        }
    }
    Ok(())
}

/// Every parent chain reaches a self-parented root within `len()` hops, and
/// ranks strictly increase along the way.
pub(super) fn forest_is_well_formed<D>(set: &D) -> Result<(), TestCaseError>
where
    D: DisjointSet<u16> + ForestShape,
{
    for element in 0..UNIVERSE {
        let mut node = element;
        let Some(mut parent) = set.parent(node) else {
            continue;
        };
        let mut hops = 0_usize;
        while parent != node {
            let (Some(child_rank), Some(parent_rank)) = (set.rank(node), set.rank(parent)) else {
                return Err(TestCaseError::fail(format!(
                    "{node} links to {parent}, which has no entry"
                )));
            };
            prop_assert!(
                child_rank < parent_rank,
                "rank of {} ({}) must be below its parent {} ({})",
                node,
                child_rank,
                parent,
                parent_rank
            );
            hops += 1;
            prop_assert!(
                hops <= set.len(),
                "parent chain from {} does not reach a root",
                element
            );
            node = parent;
            parent = set.parent(node).ok_or_else(|| {
                TestCaseError::fail(format!("{node} lost its entry mid-chain"))
            })?;
        }
    }
    Ok(())
}

/// Applies `script` step by step. No entry's rank may drop and the forest
/// must stay well formed after every step.
pub(super) fn ranks_never_decrease<D>(set: &mut D, script: &[Step]) -> Result<(), TestCaseError>
where
    D: DisjointSet<u16> + ForestShape,
    D::Error: Debug,
{
    for step in script {
        let before: Vec<Option<u8>> = (0..UNIVERSE).map(|element| set.rank(element)).collect();
        apply(set, step)?;
        for (element, previous) in (0..UNIVERSE).zip(before) {
            if let Some(previous) = previous {
                let current = set.rank(element);
                prop_assert!(
                    current.is_some_and(|rank| rank >= previous),
                    "rank of {} fell from {} to {:?} after {:?}",
                    element,
                    previous,
                    current,
                    step
                );
            }
        }
        forest_is_well_formed(set)?;
    }
    Ok(())
}
