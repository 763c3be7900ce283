use std::path::PathBuf;

use super::*;

fn loaded(w: f64, h: f64) -> AssetOutcome {
    AssetOutcome::Loaded {
        size: Size::new(w, h),
    }
}

fn failed() -> AssetOutcome {
    AssetOutcome::Failed {
        reason: "404".to_string(),
    }
}

#[test]
fn gate_needs_timer_and_assets() {
    let mut gate = LoadingGate::new(PreloadSet::new(["hero_bg.png", "logo-hero.png"]));
    assert!(gate.is_loading());

    assert!(!gate.settle("hero_bg.png", loaded(1600.0, 900.0)).unwrap());
    assert!(!gate.mark_timer_done());
    assert!(gate.is_loading());

    assert!(gate.settle("logo-hero.png", loaded(800.0, 400.0)).unwrap());
    assert!(gate.is_open());
}

#[test]
fn failed_assets_count_as_settled() {
    let mut gate = LoadingGate::new(PreloadSet::new(["hero_bg.png"]));
    gate.settle("hero_bg.png", failed()).unwrap();
    assert!(gate.assets().is_settled());
    assert!(gate.mark_timer_done());
    assert_eq!(gate.assets().outcome("hero_bg.png").unwrap().natural_size(), None);
}

#[test]
fn empty_set_only_waits_for_timer() {
    let mut gate = LoadingGate::new(PreloadSet::default());
    assert!(!gate.is_open());
    assert!(gate.mark_timer_done());
}

#[test]
fn unknown_asset_is_rejected() {
    let mut set = PreloadSet::new(["a.png"]);
    assert!(set.settle("b.png", loaded(1.0, 1.0)).is_err());
    assert_eq!(set.pending().collect::<Vec<_>>(), vec!["a.png"]);
}

#[test]
fn preload_reads_natural_size_and_tolerates_missing_files() {
    let dir = PathBuf::from("target").join("preload_unit");
    std::fs::create_dir_all(&dir).unwrap();
    image::RgbaImage::new(7, 3)
        .save_with_format(dir.join("tiny.png"), image::ImageFormat::Png)
        .unwrap();

    let mut set = PreloadSet::new(["tiny.png", "missing.png"]);
    set.preload_all(&dir);
    assert!(set.is_settled());
    assert_eq!(
        set.outcome("tiny.png").unwrap().natural_size(),
        Some(Size::new(7.0, 3.0))
    );
    assert!(matches!(
        set.outcome("missing.png"),
        Some(AssetOutcome::Failed { .. })
    ));
}

#[test]
fn outcome_json_is_tagged() {
    let v = serde_json::to_value(loaded(2.0, 1.0)).unwrap();
    assert_eq!(v["status"], "loaded");
    assert_eq!(v["size"]["width"], 2.0);
    let v = serde_json::to_value(failed()).unwrap();
    assert_eq!(v["status"], "failed");
}
