use super::*;

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

fn metrics(cw: f64, ch: f64, iw: f64, ih: f64) -> ContainerMetrics {
    ContainerMetrics::new(Size::new(cw, ch), Size::new(iw, ih))
}

#[test]
fn same_aspect_scenario() {
    let anchor = AnchorSpec::new(0.5, 0.2, 0.3);
    let m = metrics(1920.0, 1080.0, 3840.0, 2160.0);

    let fit = CoverFit::compute(m.container, m.image).unwrap();
    assert_eq!(fit.scale, 0.5);
    assert_eq!(fit.offset, Vec2::ZERO);

    let p = resolve(&anchor, &m);
    assert!(p.ready);
    assert!(approx(p.left, 960.0, 1e-9));
    assert!(approx(p.top, 216.0, 1e-9));
    assert!(approx(p.width, 576.0, 1e-9));
}

#[test]
fn portrait_container_landscape_image_scenario() {
    let anchor = AnchorSpec::new(0.497, 0.2, 0.30);
    let m = metrics(800.0, 1200.0, 1600.0, 900.0);

    let fit = CoverFit::compute(m.container, m.image).unwrap();
    assert!(approx(fit.scale, 1200.0 / 900.0, 1e-12));
    assert!(approx(fit.rendered.width, 2133.333, 1e-3));
    assert!(approx(fit.offset.x, -666.667, 1e-3));
    assert!(approx(fit.offset.y, 0.0, 1e-9));

    // -666.667 + 1600 * 0.497 * 1.333 = 393.6
    let p = resolve(&anchor, &m);
    assert!(approx(p.left, 393.6, 1e-6));
    assert!(approx(p.top, 240.0, 1e-9));
    assert!(approx(p.width, 640.0, 1e-9));
}

#[test]
fn cover_never_under_covers() {
    let sizes = [1.0, 3.0, 17.5, 320.0, 1080.0, 1920.0, 4096.0];
    for &cw in &sizes {
        for &ch in &sizes {
            for &iw in &sizes {
                for &ih in &sizes {
                    let fit = CoverFit::compute(Size::new(cw, ch), Size::new(iw, ih)).unwrap();
                    assert!(fit.rendered.width >= cw * (1.0 - 1e-12));
                    assert!(fit.rendered.height >= ch * (1.0 - 1e-12));
                    assert!(fit.offset.x <= 1e-9 && fit.offset.y <= 1e-9);
                }
            }
        }
    }
}

#[test]
fn centered_anchor_lands_on_container_center() {
    let anchor = AnchorSpec::new(0.5, 0.5, 0.1);
    for (cw, ch, iw, ih) in [
        (1920.0, 1080.0, 1600.0, 900.0),
        (800.0, 1200.0, 1600.0, 900.0),
        (375.0, 812.0, 1000.0, 3000.0),
        (1000.0, 1000.0, 7.0, 3.0),
    ] {
        let p = resolve(&anchor, &metrics(cw, ch, iw, ih));
        assert!(p.ready);
        assert!(approx(p.left, cw / 2.0, 1e-9));
        assert!(approx(p.top, ch / 2.0, 1e-9));
    }
}

#[test]
fn offsets_are_plain_pixel_nudges() {
    let base = AnchorSpec::new(0.3, 0.7, 0.2);
    let m = metrics(1280.0, 720.0, 2000.0, 2000.0);
    let a = resolve(&base, &m);
    let b = resolve(&base.with_offset(12.0, -8.0), &m);
    assert!(approx(b.left - a.left, 12.0, 1e-9));
    assert!(approx(b.top - a.top, -8.0, 1e-9));
    assert_eq!(a.width, b.width);
}

#[test]
fn scale_does_not_move_the_anchor() {
    let m = metrics(1280.0, 720.0, 1600.0, 900.0);
    let plain = resolve(&AnchorSpec::new(0.497, 0.2, 0.3), &m);
    let hero = resolve(&AnchorSpec::HERO_LOGO, &m);
    assert_eq!(plain, hero);
}

#[test]
fn resolve_is_idempotent() {
    let m = metrics(1024.0, 640.0, 1600.0, 900.0);
    let a = resolve(&AnchorSpec::HERO_LOGO, &m);
    let b = resolve(&AnchorSpec::HERO_LOGO, &m);
    assert_eq!(a, b);
}

#[test]
fn unmeasured_metrics_are_not_ready() {
    let anchor = AnchorSpec::HERO_LOGO;
    for m in [
        metrics(1920.0, 1080.0, 0.0, 900.0),
        metrics(1920.0, 1080.0, 1600.0, 0.0),
        metrics(0.0, 1080.0, 1600.0, 900.0),
        metrics(1920.0, f64::NAN, 1600.0, 900.0),
    ] {
        let p = resolve(&anchor, &m);
        assert!(!p.ready);
        assert_eq!(p, ResolvedPlacement::not_ready());
    }
}
