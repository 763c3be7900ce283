use super::*;

#[test]
fn empty_object_yields_live_site_defaults() {
    let cfg = SiteConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.hero_anchor, AnchorSpec::HERO_LOGO);
    assert_eq!(cfg.loading_duration_ms, 2000);
    assert_eq!(cfg.reveal.section, RevealMargin(-100.0));
    assert_eq!(cfg.site_map().unwrap().main_page_key(), Some("Home"));
}

#[test]
fn overrides_are_honored() {
    let cfg = SiteConfig::from_json_str(
        r#"{
            "hero_anchor": {"x": 0.5, "y": 0.3, "width": 0.25, "offsetY": -6},
            "loading_duration_ms": 500,
            "critical_images": ["bg.png"],
            "reveal": {"section": -80},
            "pages": [{"key": "Lore"}, {"key": "Mods", "label": "Addons"}],
            "main_page": null,
            "layout": false
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.hero_anchor.offset_y, -6.0);
    assert_eq!(cfg.reveal.section, RevealMargin(-80.0));
    assert_eq!(cfg.reveal.text, RevealMargin::TEXT);
    assert_eq!(cfg.site_map().unwrap().main_page_key(), Some("Lore"));
    assert_eq!(cfg.loading_gate().assets().pending().count(), 1);
    assert_eq!(cfg.hero_tracker().anchor().y, 0.3);
}

#[test]
fn invalid_sections_fail_validation() {
    assert!(matches!(
        SiteConfig::from_json_str(r#"{"hero_anchor": {"x": 2, "y": 0, "width": 0.1}}"#),
        Err(ZcError::Validation(_))
    ));
    assert!(SiteConfig::from_json_str(r#"{"main_page": "Missing"}"#).is_err());
    assert!(SiteConfig::from_json_str(r#"{"critical_images": [" "]}"#).is_err());
    assert!(matches!(
        SiteConfig::from_json_str("{not json"),
        Err(ZcError::Config(_))
    ));
}

#[test]
fn load_reports_missing_file() {
    let err = SiteConfig::load(Path::new("target/does-not-exist/site.json")).unwrap_err();
    assert!(err.to_string().contains("open site config"));
}
