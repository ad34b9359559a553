//! The merge pipeline: diff, resolve, apply.

use std::collections::BTreeMap;

use sv_diff::{diff_documents, Divergence};
use sv_policy::MergePolicy;
use sv_types::{Document, FieldPath, MergeDecision, Resolution};

use crate::apply::apply_merge;
use crate::resolve::auto_resolve;

/// The result of a merge computation.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeOutcome {
    /// The merged document: local with every `use_imported` path overwritten.
    pub merged: Document,
    /// The full divergence list the merge was computed from.
    pub divergences: Vec<Divergence>,
    /// How many caller-supplied decisions went into the decision map.
    pub decided_by_caller: usize,
}

impl MergeOutcome {
    /// Number of divergences detected between the two documents.
    pub fn divergence_count(&self) -> usize {
        self.divergences.len()
    }
}

/// Reconcile an imported document against the locally stored one.
///
/// Pipeline: diff the pair, build the effective decision map (caller
/// decisions verbatim — including paths that do not appear in the divergence
/// list — with auto-resolution filling every divergence path the caller did
/// not decide), then apply. Conflicts never remain undecided at apply time.
///
/// This is a pure computation: persistence, audit logging, and notification
/// are the caller's concern.
pub fn merge(
    local: &Document,
    imported: &Document,
    caller_decisions: &[MergeDecision],
    policy: &MergePolicy,
) -> MergeOutcome {
    let diff = diff_documents(local, imported, policy);

    let mut decisions: BTreeMap<FieldPath, Resolution> = caller_decisions
        .iter()
        .map(|decision| (decision.path.clone(), decision.resolution))
        .collect();
    for (path, resolution) in auto_resolve(&diff, policy) {
        decisions.entry(path).or_insert(resolution);
    }

    let merged = apply_merge(local, imported, &decisions);

    MergeOutcome {
        merged,
        divergences: diff.divergences,
        decided_by_caller: caller_decisions.len(),
    }
}
