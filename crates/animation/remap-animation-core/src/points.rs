//! Keyframe list helpers.

use remap_api_core::{Point, PointDefinition};

/// Stable sort by time. NaN times sort last.
pub fn sort_points(points: &mut [Point]) {
    points.sort_by(|a, b| a.time.total_cmp(&b.time));
}

/// Apply `f` to every keyframe of `def`, consuming it. A constant is
/// complexified first and re-simplified after.
pub fn iterate_points<F>(def: PointDefinition, mut f: F) -> PointDefinition
where
    F: FnMut(&mut Point),
{
    let mut points = def.complexify();
    points.iter_mut().for_each(&mut f);
    PointDefinition::Keyframes(points).simplify()
}
