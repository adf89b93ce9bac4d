use estate_suggest_core::prelude::*;
use std::path::Path;

fn sample() -> Geography {
    Geography::new(
        vec![Province::new("31", "DKI Jakarta")],
        vec![City::new("3171", "Jakarta Selatan", "Kota")],
        vec![Area::new("317101", "Kebayoran Baru")],
    )
}

#[test]
fn bundled_dataset_loads() {
    let geo = Geography::load_default().expect("bundled geography should load");
    let stats = geo.stats();
    assert!(stats.provinces > 0 && stats.cities > 0 && stats.areas > 0);
    assert!(geo.find_province_by_code("31").is_some());
}

#[test]
fn json_and_snapshot_agree() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("geo.json");
    std::fs::write(&json_path, serde_json::to_vec(&sample()).unwrap()).unwrap();

    let from_json = Geography::load_from_path(&json_path).unwrap();
    assert_eq!(from_json, sample());

    let bin_path = dir.path().join("cache").join("geo.bin");
    from_json.save_cache(&bin_path).unwrap();
    assert_eq!(Geography::load_from_path(&bin_path).unwrap(), sample());
}

#[cfg(feature = "compact")]
#[test]
fn compressed_snapshot_loads() {
    use estate_suggest_core::loader::DataFormat;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geo.bin.gz");
    sample().save_cache(&path).unwrap();
    assert_eq!(DataFormat::from_path(&path).unwrap(), DataFormat::BinGz);
    assert_eq!(Geography::load_from_path(&path).unwrap(), sample());
}

#[test]
fn snapshot_rejects_json_target() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("geo.json");
    let err = sample().save_cache(&target).unwrap_err();
    assert!(matches!(err, SuggestError::UnsupportedFormat(_)));
}

#[test]
fn missing_dataset_is_not_found() {
    let err = Geography::load_from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, SuggestError::NotFound(_)));
}

#[test]
fn click_history_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("clicks.json");

    let empty = ClickHistory::load_json(&path).unwrap();
    assert!(empty.is_empty());

    let history = track_suggestion_click("villa bali", &empty);
    let history = track_suggestion_click("villa bali", &history);
    history.save_json(&path).unwrap();

    let reloaded = ClickHistory::load_json(&path).unwrap();
    assert_eq!(reloaded, history);
    assert_eq!(get_display_count("villa bali", &reloaded), 2);
    assert!(empty.is_empty());
}

#[test]
fn end_to_end_suggestions_from_bundled_data() {
    let geo = Geography::load_default().unwrap();
    let ctx = LocationContext::new(Some("31".into()), Some("3171".into()));
    let recent = vec!["rumah kebayoran".to_string(), "apartemen tebet".to_string()];

    let out = get_filtered_suggestions(
        "kebayoran",
        SuggestionSources {
            recent: &recent,
            ..Default::default()
        },
        &geo,
        &ctx,
    );
    assert_eq!(out.recent, vec!["rumah kebayoran"]);
    assert_eq!(
        out.locations,
        vec![
            "Kebayoran Baru, Jakarta Selatan, DKI Jakarta",
            "Kebayoran Lama, Jakarta Selatan, DKI Jakarta",
        ]
    );
}
