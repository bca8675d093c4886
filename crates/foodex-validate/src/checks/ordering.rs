//! ordCode checks over the implicit and explicit forbidden processes of a
//! derivative.

use std::collections::{BTreeMap, BTreeSet};

use foodex_rules::{OrdCode, WarningEvent};

use super::processes::{ForbiddenProcess, ProcessLedger};
use crate::warning::RaisedWarning;

/// Alternative derivative encodings mixed within one tier.
///
/// Only processes with a fractional ordCode take part. A tier is flagged
/// when it holds more than one distinct fractional code and mixes implicit
/// with explicit processes, or, with `explicit_only`, holds explicit
/// processes alone.
pub(crate) fn check_decimal(ledger: &ProcessLedger, explicit_only: bool) -> Vec<RaisedWarning> {
    let mut tiers: BTreeMap<i64, Vec<&ForbiddenProcess>> = BTreeMap::new();
    for process in ledger.processes().filter(|p| p.ord_code.has_fraction()) {
        tiers.entry(process.ord_code.tier()).or_default().push(process);
    }

    let mut warnings = Vec::new();
    for (tier, processes) in tiers {
        let distinct: BTreeSet<OrdCode> = processes.iter().map(|p| p.ord_code).collect();
        if distinct.len() < 2 {
            continue;
        }
        let has_implicit = processes.iter().any(|p| p.is_implicit());
        let has_explicit = processes.iter().any(|p| !p.is_implicit());
        let mixed = has_implicit && has_explicit;
        if !(mixed || (explicit_only && !has_implicit)) {
            continue;
        }
        let mut codes: Vec<&str> = Vec::with_capacity(processes.len());
        for process in &processes {
            if !codes.contains(&process.code.as_str()) {
                codes.push(process.code.as_str());
            }
        }
        tracing::debug!(tier, codes = codes.len(), "Mixed derivative encodings");
        warnings.push(RaisedWarning::naming(
            WarningEvent::DecimalForbiddenProcess,
            codes,
        ));
    }
    warnings
}

/// Mutually exclusive processes: one warning per non-zero ordCode held by
/// more than one distinct process, naming those processes in code order.
/// A process repeated on the code does not exclude itself.
pub(crate) fn check_mutually_exclusive(ledger: &ProcessLedger) -> Vec<RaisedWarning> {
    let mut by_value: BTreeMap<OrdCode, BTreeSet<&str>> = BTreeMap::new();
    for process in ledger.processes().filter(|p| !p.ord_code.is_exempt()) {
        by_value
            .entry(process.ord_code)
            .or_default()
            .insert(process.code.as_str());
    }

    by_value
        .into_values()
        .filter(|codes| codes.len() > 1)
        .map(|codes| RaisedWarning::naming(WarningEvent::MutuallyExPropertyViolated, codes))
        .collect()
}
