//! Fold page items into keyed collections

use std::collections::BTreeMap;

/// Outcome counters for [`aggregate`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AggregateStats {
    /// Records that created a new entry
    pub inserted: usize,
    /// Records merged into an existing entry
    pub updated: usize,
    /// Records without a key
    pub skipped: usize,
}

impl AggregateStats {
    /// Accumulate another batch's counters.
    pub fn add(&mut self, other: AggregateStats) {
        self.inserted += other.inserted;
        self.updated += other.updated;
        self.skipped += other.skipped;
    }
}

/// Merge `records` into `map`.
///
/// `key` picks each record's map key; records without one are skipped.
/// `merge` receives the current entry (if any) and the record and returns
/// the replacement entry, so the caller decides field-level precedence.
pub fn aggregate<K, E, R, I, KF, MF>(
    map: &mut BTreeMap<K, E>,
    records: I,
    key: KF,
    merge: MF,
) -> AggregateStats
where
    K: Ord,
    I: IntoIterator<Item = R>,
    KF: Fn(&R) -> Option<K>,
    MF: Fn(Option<E>, R) -> E,
{
    let mut stats = AggregateStats::default();

    for record in records {
        let Some(k) = key(&record) else {
            stats.skipped += 1;
            continue;
        };

        let existing = map.remove(&k);
        if existing.is_some() {
            stats.updated += 1;
        } else {
            stats.inserted += 1;
        }
        map.insert(k, merge(existing, record));
    }

    stats
}
