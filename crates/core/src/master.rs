//! Master-record selection for duplicate clusters.

use std::cmp::Reverse;

use crate::record::Matchable;

/// Pick the canonical survivor of a duplicate cluster.
///
/// Ranking, most significant first:
/// 1. populated-field count, descending — the record carrying the most
///    data wins;
/// 2. `created_at`, ascending — earlier wins. A record with no timestamp
///    counts as epoch 0 and therefore beats any dated record at equal
///    completeness: "more complete, then oldest";
/// 3. id, ascending — final deterministic tie-break.
///
/// Returns `None` for an empty slice; callers fall back to the first
/// input id.
pub fn select_master<R: Matchable>(records: &[R]) -> Option<i64> {
    records
        .iter()
        .min_by_key(|r| {
            (
                Reverse(r.completeness()),
                r.created_at().map_or(0, |t| t.timestamp()),
                r.record_id(),
            )
        })
        .map(Matchable::record_id)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::record::WineRecord;

    fn record(id: i64) -> WineRecord {
        WineRecord {
            id,
            producer: Some("Leroy".to_owned()),
            cuvee: None,
            name: None,
            vintage: Some("2015".to_owned()),
            region: None,
            appellation: None,
            grapes: None,
            volume_ml: None,
            norm_producer: None,
            norm_cuvee: None,
            dedupe_block: None,
            is_active: true,
            duplicate_of: None,
            created_at: None,
        }
    }

    #[test]
    fn empty_slice_yields_none() {
        let records: Vec<WineRecord> = Vec::new();
        assert_eq!(select_master(&records), None);
    }

    #[test]
    fn completeness_beats_everything() {
        let mut sparse = record(1);
        sparse.created_at = Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());

        let mut rich = record(2);
        rich.region = Some("Burgundy".to_owned());
        rich.grapes = Some("Pinot Noir".to_owned());
        rich.created_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        assert_eq!(select_master(&[sparse, rich]), Some(2));
    }

    #[test]
    fn earlier_created_at_wins_at_equal_completeness() {
        let mut older = record(5);
        older.created_at = Some(Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap());
        let mut newer = record(3);
        newer.created_at = Some(Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap());

        assert_eq!(select_master(&[newer, older]), Some(5));
    }

    #[test]
    fn missing_timestamp_ranks_earliest() {
        let undated = record(9);
        let mut dated = record(4);
        dated.created_at = Some(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap());

        assert_eq!(select_master(&[dated, undated]), Some(9));
    }

    #[test]
    fn lowest_id_breaks_remaining_ties() {
        assert_eq!(select_master(&[record(8), record(2), record(5)]), Some(2));
    }

    #[test]
    fn selection_is_deterministic() {
        let records = [record(3), record(1), record(2)];
        let first = select_master(&records);
        for _ in 0..10 {
            assert_eq!(select_master(&records), first);
        }
    }
}
