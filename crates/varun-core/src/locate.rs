use crate::geo::distance_km;
use crate::model::{GeoRecord, NearestMatch, Query};

/// Find the dataset record closest to `query` by great-circle distance.
///
/// Linear scan in slice order. Records with a non-finite groundwater level
/// or distance are skipped. The first record reaching the minimum wins, so the result is
/// stable for a fixed dataset order. Returns `None` when no record
/// qualifies (empty dataset or every distance invalid).
pub fn find_nearest(query: &Query, records: &[GeoRecord]) -> Option<NearestMatch> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, record) in records.iter().enumerate() {
        if !record.groundwater_level.is_finite() {
            continue;
        }
        let d = distance_km(
            query.latitude,
            query.longitude,
            record.latitude,
            record.longitude,
        );
        if !d.is_finite() {
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((idx, d)),
        }
    }

    best.map(|(idx, distance_km)| NearestMatch {
        record: records[idx].clone(),
        distance_km,
    })
}
