//! End-to-end tests for the recharge assessment pipeline.
//!
//! Datasets are built from inline CSV text so each test states exactly
//! which records the locator sees.

use std::io::Write;
use varun_core::assess;
use varun_core::classify::{DepthClass, PermeabilityClass, RechargeVerdict};
use varun_core::dataset::{load_dataset, parse_dataset, Dataset, DatasetCache};
use varun_core::error::VarunError;
use varun_core::model::Query;
use varun_core::schema::builtin::load_preset;
use varun_core::structure::StructureType;
use varun_core::trace::build_trace;

const HEADER: &str = "latitude,longitude,groundwater_level,aquifer_code";

fn recharge_dataset(rows: &[&str]) -> Dataset {
    let schema = load_preset("recharge").unwrap();
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    parse_dataset(&text, &schema)
}

// ---------------------------------------------------------------------------
// Scenario 1: query exactly on a record
// ---------------------------------------------------------------------------
#[test]
fn exact_match_has_zero_distance() {
    let ds = recharge_dataset(&["11.0,77.0,15,6", "10.93,76.95,12.5,10", "12.0,78.0,4,7"]);
    let q = Query::new(10.93, 76.95).unwrap();
    let result = assess(&q, &ds).unwrap();

    assert_eq!(result.nearest.distance_km, 0.0);
    assert_eq!(result.nearest.record, ds.records[1]);
    assert_eq!(result.to_report().distance_km, 0.0);
}

// ---------------------------------------------------------------------------
// Scenario 2: very shallow sand is Very Low regardless of permeability
// ---------------------------------------------------------------------------
#[test]
fn shallow_sand_is_very_low() {
    let ds = recharge_dataset(&["10.0,77.0,2.9,7"]);
    let result = assess(&Query::new(10.01, 77.01).unwrap(), &ds).unwrap();

    assert_eq!(result.depth_class, DepthClass::D1);
    assert_eq!(result.aquifer.material, "sand");
    assert_eq!(result.aquifer.permeability, PermeabilityClass::High);
    assert_eq!(result.verdict, RechargeVerdict::VeryLow);
    assert_eq!(result.structure, StructureType::NotRecommended);
}

// ---------------------------------------------------------------------------
// Scenario 3: deep clay is Medium
// ---------------------------------------------------------------------------
#[test]
fn deep_clay_is_medium() {
    let schema = load_preset("aquifer-check").unwrap();
    let text = "village,district,block,lat,lon,aquifer,depth\n\
                Annur,Coimbatore,Annur,11.23,77.10,Clay,25";
    let ds = parse_dataset(text, &schema);
    let result = assess(&Query::new(11.2, 77.1).unwrap(), &ds).unwrap();

    assert_eq!(result.depth_class, DepthClass::D4);
    assert_eq!(result.aquifer.permeability, PermeabilityClass::Low);
    assert_eq!(result.verdict, RechargeVerdict::Medium);
    assert_eq!(result.structure, StructureType::RechargeShaft);

    let report = result.to_report();
    assert_eq!(report.aquifer, "clay");
    assert_eq!(report.label.as_deref(), Some("Annur"));
    assert_eq!(
        report.short_reason,
        "Groundwater at 25m depth (deep) with low permeability clay aquifer."
    );
}

// ---------------------------------------------------------------------------
// Scenario 4: unknown aquifer code falls back to hard rock / medium
// ---------------------------------------------------------------------------
#[test]
fn unknown_code_defaults_to_hard_rock() {
    let ds = recharge_dataset(&["10.0,77.0,15,404"]);
    let q = Query::new(10.0, 77.0).unwrap();
    let result = assess(&q, &ds).unwrap();

    assert_eq!(result.aquifer.material, "hard rock");
    assert_eq!(result.aquifer.permeability, PermeabilityClass::Medium);
    assert!(result.aquifer.defaulted);
    assert_eq!(result.verdict, RechargeVerdict::Medium);

    let trace = build_trace(&q, &result, &ds);
    assert!(trace.warnings.iter().any(|w| w.message.contains("404")));
}

// ---------------------------------------------------------------------------
// Scenario 5: empty dataset is NoMatch, not an infinite distance
// ---------------------------------------------------------------------------
#[test]
fn empty_dataset_is_no_match() {
    let ds = recharge_dataset(&[]);
    let err = assess(&Query::new(10.0, 77.0).unwrap(), &ds).unwrap_err();
    assert!(matches!(err, VarunError::NoMatch));
    assert_eq!(err.status(), 404);
}

#[test]
fn all_rows_invalid_is_no_match() {
    let ds = recharge_dataset(&["abc,77,5,6", "10,77,,6", "NaN,77,5,6"]);
    assert_eq!(ds.skipped.len(), 3);
    let err = assess(&Query::new(10.0, 77.0).unwrap(), &ds).unwrap_err();
    assert!(matches!(err, VarunError::NoMatch));
}

// ---------------------------------------------------------------------------
// Malformed rows are skipped, the rest still answer
// ---------------------------------------------------------------------------
#[test]
fn malformed_rows_do_not_abort_locate() {
    // The malformed row would be the closest if it parsed.
    let ds = recharge_dataset(&["10.0,77.0,bad,6", "10.5,77.5,22,6"]);
    let q = Query::new(10.0, 77.0).unwrap();
    let result = assess(&q, &ds).unwrap();

    assert_eq!(result.nearest.record.groundwater_level, 22.0);
    assert_eq!(result.verdict, RechargeVerdict::VeryHigh);

    let trace = build_trace(&q, &result, &ds);
    assert!(trace
        .warnings
        .iter()
        .any(|w| w.message.contains("1 dataset row(s)")));
}

// ---------------------------------------------------------------------------
// Determinism: identical inputs give byte-identical JSON
// ---------------------------------------------------------------------------
#[test]
fn pipeline_is_deterministic() {
    let ds = recharge_dataset(&[
        "10.93,76.95,12.4,6",
        "11.0168,76.9558,24.75,10",
        "11.1085,77.3411,2.9,7",
    ]);
    let q = Query::new(11.0, 77.0).unwrap();

    let a = serde_json::to_string(&assess(&q, &ds).unwrap().to_report()).unwrap();
    let b = serde_json::to_string(&assess(&q, &ds).unwrap().to_report()).unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Report shape matches the client contract
// ---------------------------------------------------------------------------
#[test]
fn report_json_field_names() {
    let ds = recharge_dataset(&["10.93,76.95,12.5,6"]);
    let result = assess(&Query::new(10.95, 76.97).unwrap(), &ds).unwrap();
    let json = serde_json::to_value(result.to_report()).unwrap();

    for key in [
        "latitude",
        "longitude",
        "groundwater_level_m_bgl",
        "aquifer",
        "soil_permeability_class",
        "recharge_potential",
        "short_reason",
        "details",
        "distance_km",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["aquifer"], "alluvium");
    assert_eq!(json["soil_permeability_class"], "high");
    assert_eq!(json["recharge_potential"], "High");
    assert_eq!(json["depth_class"], "D3");
    assert_eq!(json["aquifer_code"], 6);
    assert_eq!(json["recommended_structure"], "Recharge Shaft");

    let distance = json["distance_km"].as_f64().unwrap();
    assert_eq!(distance, (distance * 100.0).round() / 100.0);
    assert!(distance > 0.0);
}

// ---------------------------------------------------------------------------
// Scenario 6: structure thresholds through the pipeline
// ---------------------------------------------------------------------------
#[test]
fn structure_bounds_through_pipeline() {
    let cases = [
        ("3", StructureType::RechargePit),
        ("10", StructureType::RechargePit),
        ("10.01", StructureType::RechargeShaft),
    ];
    for (depth, expected) in cases {
        let row = format!("10.0,77.0,{depth},6");
        let ds = recharge_dataset(&[&row]);
        let result = assess(&Query::new(10.0, 77.0).unwrap(), &ds).unwrap();
        assert_eq!(result.structure, expected, "depth {depth}");
    }
}

// ---------------------------------------------------------------------------
// File loading and caching
// ---------------------------------------------------------------------------
#[test]
fn load_from_disk_and_assess() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "13.0827,80.2707,5.1,19").unwrap();
    writeln!(file, "9.9252,78.1198,41.2,12").unwrap();

    let schema = load_preset("recharge").unwrap();
    let ds = load_dataset(file.path(), &schema).unwrap();
    let result = assess(&Query::new(13.0, 80.2).unwrap(), &ds).unwrap();
    assert_eq!(result.depth_class, DepthClass::D2);
    assert_eq!(result.verdict, RechargeVerdict::Medium);

    let cache = DatasetCache::new(file.path(), schema);
    let cached = varun_core::assess_cached(&Query::new(9.9, 78.1).unwrap(), &cache).unwrap();
    assert_eq!(cached.depth_class, DepthClass::D5);
    assert_eq!(cached.aquifer.material, "granite");
    assert_eq!(cached.verdict, RechargeVerdict::High);
}

#[test]
fn missing_dataset_reports_generic_unavailable() {
    let schema = load_preset("recharge").unwrap();
    let cache = DatasetCache::new("/nonexistent/groundwater.csv", schema);
    let err = varun_core::assess_cached(&Query::new(10.0, 77.0).unwrap(), &cache).unwrap_err();

    assert!(matches!(err, VarunError::DatasetUnavailable { .. }));
    assert_eq!(err.status(), 503);
    assert!(!err.user_message().contains("nonexistent"));
}

// ---------------------------------------------------------------------------
// Bundled sample dataset
// ---------------------------------------------------------------------------
#[test]
fn bundled_sample_parses() {
    let text = include_str!("../../../data/groundwater_sample.csv");
    let ds = parse_dataset(text, &load_preset("recharge").unwrap());
    assert_eq!(ds.len(), 9);
    assert_eq!(ds.skipped.len(), 1);
    assert_eq!(ds.skipped[0].line_number, 11);

    // Kanyakumari: code 44 is unmapped, depth exactly 3.
    let result = assess(&Query::new(8.09, 77.54).unwrap(), &ds).unwrap();
    assert_eq!(result.depth_class, DepthClass::D2);
    assert_eq!(result.aquifer.material, "hard rock");
    assert_eq!(result.verdict, RechargeVerdict::Low);
    assert_eq!(result.structure, StructureType::RechargePit);
    assert_eq!(result.to_report().label.as_deref(), Some("Kanyakumari"));
}

// ---------------------------------------------------------------------------
// Records built in code bypass row decoding
// ---------------------------------------------------------------------------
#[test]
fn nan_level_record_never_wins() {
    use varun_core::model::{AquiferRef, GeoRecord};

    let mut ds = recharge_dataset(&["10.5,77.5,8,6"]);
    ds.records.insert(
        0,
        GeoRecord {
            latitude: 10.0,
            longitude: 77.0,
            groundwater_level: f64::NAN,
            aquifer: AquiferRef::Code(6),
            label: None,
        },
    );
    let result = assess(&Query::new(10.0, 77.0).unwrap(), &ds).unwrap();

    assert!(result.nearest.record.groundwater_level.is_finite());
    assert_eq!(result.depth_class, DepthClass::D2);
    assert_eq!(result.verdict, RechargeVerdict::Medium);
}
