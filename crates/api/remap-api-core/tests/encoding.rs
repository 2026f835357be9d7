use remap_api_core::{
    raw, Easing, Point, PointDefinition, PointElement, PointError, RawPointDefinition,
};
use serde_json::json;

#[test]
fn constant_vectors_survive_complexify_simplify() {
    for v in [
        vec![0.0],
        vec![1.5, -2.0],
        vec![3.0, 4.0, 5.0],
        vec![0.1, 0.2, 0.3, 1.0],
    ] {
        let raw = RawPointDefinition::Simple(v.iter().copied().map(PointElement::Number).collect());
        let back = RawPointDefinition::from(raw.clone().complexify()).simplify();
        assert_eq!(back, raw, "raw round trip for {v:?}");

        let typed = PointDefinition::Constant(v.clone());
        let back = PointDefinition::Keyframes(typed.clone().complexify()).simplify();
        assert_eq!(back, typed, "typed round trip for {v:?}");
    }
}

#[test]
fn beatmap_field_decodes_and_reencodes() -> anyhow::Result<()> {
    let field = json!([
        [0, 0, 0, 0],
        [0, 5, 0, 0.5, "easeOutCubic"],
        [0, 0, 0, 1, "easeInCubic", "splineCatmullRom"]
    ]);
    let raw: RawPointDefinition = serde_json::from_value(field)?;
    assert!(!raw.is_simple());
    assert!(!raw.is_runtime());

    let typed = PointDefinition::try_from(raw)?;
    let points = typed.keyframes().expect("keyframes");
    assert_eq!(points.len(), 3);
    assert_eq!(points[1].easing, Some("easeOutCubic".parse::<Easing>()?));
    assert!(points[2].spline.is_some());

    let out = serde_json::to_value(&typed)?;
    assert_eq!(
        out,
        json!([
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 5.0, 0.0, 0.5, "easeOutCubic"],
            [0.0, 0.0, 0.0, 1.0, "easeInCubic", "splineCatmullRom"]
        ])
    );
    Ok(())
}

#[test]
fn raw_mutators_track_time_index() -> anyhow::Result<()> {
    let mut p = Point::new(vec![1.0, 2.0], 0.25)
        .with_easing(Easing::Step)
        .to_raw();
    raw::set_hsv_lerp(&mut p, true)?;
    raw::set_values(&mut p, &[9.0])?;
    assert_eq!(raw::time_index(&p), Some(1));
    assert_eq!(raw::time(&p), Some(0.25));
    assert_eq!(raw::easing(&p), Some(Easing::Step));
    assert!(raw::has_hsv_lerp(&p));

    raw::set_hsv_lerp(&mut p, false)?;
    raw::set_easing(&mut p, None)?;
    assert!(!raw::has_flags(&p));
    Ok(())
}

#[test]
fn malformed_points_report_missing_time() {
    let raw = RawPointDefinition::Complex(vec![vec![PointElement::Nested(vec![])]]);
    assert_eq!(
        PointDefinition::try_from(raw),
        Err(PointError::MissingTime)
    );
}
