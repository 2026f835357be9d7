//! Keyframe optimizer: lossy-within-tolerance removal of redundant keyframes.
//!
//! Each pass slides a window over every consecutive triple (A, B, C) of the
//! working list (or the sole pair, once only two points remain) and asks every
//! active heuristic for a removal candidate. All candidates of a pass are
//! removed together; passing stops after `settings.passes` passes or as soon
//! as a pass removes nothing.
//!
//! Built-in heuristics, in the order they run after caller heuristics:
//! - [`DuplicateHeuristic`]: identical value vectors. Ignores flags.
//! - [`SimilarPointsHeuristic`]: values and times both within tolerance.
//! - [`SimilarSlopeHeuristic`]: B lies on the line A -> C.

use std::fmt;
use std::time::Instant;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use remap_api_core::{Point, PointDefinition};

use crate::config::OptimizeSettings;
use crate::points::sort_points;

/// A keyframe as seen by the heuristics.
#[derive(Clone, Debug, PartialEq)]
pub struct PointInfo {
    pub point: Point,
    /// Whether the keyframe carries easing, spline or HSV flags.
    pub has_flags: bool,
}

impl PointInfo {
    pub fn new(point: Point) -> Self {
        let has_flags = point.has_flags();
        Self { point, has_flags }
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.point.values
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.point.time
    }
}

/// Which point of the window a heuristic wants removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Candidate {
    First,
    Middle,
    /// Only meaningful for a triple; in the pair case it names the same
    /// point as `Middle`.
    Last,
}

/// A removal rule. `c` is `None` when the working list is down to the pair
/// `(a, b)`.
pub trait OptimizeHeuristic: Send + Sync {
    fn nominate(
        &self,
        a: &PointInfo,
        b: &PointInfo,
        c: Option<&PointInfo>,
        settings: &OptimizeSettings,
    ) -> Option<Candidate>;
}

impl<F> OptimizeHeuristic for F
where
    F: Fn(&PointInfo, &PointInfo, Option<&PointInfo>, &OptimizeSettings) -> Option<Candidate>
        + Send
        + Sync,
{
    fn nominate(
        &self,
        a: &PointInfo,
        b: &PointInfo,
        c: Option<&PointInfo>,
        settings: &OptimizeSettings,
    ) -> Option<Candidate> {
        self(a, b, c, settings)
    }
}

impl fmt::Debug for dyn OptimizeHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OptimizeHeuristic")
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DuplicateHeuristic;

impl OptimizeHeuristic for DuplicateHeuristic {
    fn nominate(
        &self,
        a: &PointInfo,
        b: &PointInfo,
        c: Option<&PointInfo>,
        _settings: &OptimizeSettings,
    ) -> Option<Candidate> {
        if a.values() != b.values() {
            return None;
        }
        match c {
            Some(c) if b.values() == c.values() => Some(Candidate::Middle),
            Some(_) => None,
            None => Some(Candidate::First),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SimilarPointsHeuristic;

impl OptimizeHeuristic for SimilarPointsHeuristic {
    fn nominate(
        &self,
        a: &PointInfo,
        b: &PointInfo,
        c: Option<&PointInfo>,
        settings: &OptimizeSettings,
    ) -> Option<Candidate> {
        let c = c?;
        if a.has_flags || b.has_flags || c.has_flags {
            return None;
        }
        let similar = |x: &PointInfo, y: &PointInfo| {
            values_close(x.values(), y.values(), settings.difference_threshold)
                && (x.time() - y.time()).abs() <= settings.time_difference_threshold
        };
        (similar(a, b) && similar(b, c)).then_some(Candidate::Middle)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SimilarSlopeHeuristic;

impl OptimizeHeuristic for SimilarSlopeHeuristic {
    fn nominate(
        &self,
        a: &PointInfo,
        b: &PointInfo,
        c: Option<&PointInfo>,
        settings: &OptimizeSettings,
    ) -> Option<Candidate> {
        let c = c?;
        if a.has_flags || b.has_flags || c.has_flags {
            return None;
        }

        let time_eps = settings.time_difference_threshold;
        let (ta, tb, tc) = (a.time(), b.time(), c.time());
        if (ta - tb).abs() <= time_eps || (tb - tc).abs() <= time_eps || (ta - tc).abs() <= time_eps
        {
            return None;
        }
        // B ~ C in value but apart in time is a held pose.
        if values_close(b.values(), c.values(), settings.difference_threshold) {
            return None;
        }

        // Time is the dependent axis: slope = dt / dv, 0 on a flat component.
        let slope = |from: f64, to: f64, dt: f64| {
            let dv = to - from;
            if dv == 0.0 {
                0.0
            } else {
                dt / dv
            }
        };

        let on_line = a
            .values()
            .iter()
            .zip(b.values())
            .zip(c.values())
            .all(|((&va, &vb), &vc)| {
                let s_ab = slope(va, vb, tb - ta);
                let s_ac = slope(va, vc, tc - ta);
                let y_ab = ta - s_ab * va;
                let y_ac = ta - s_ac * va;
                (s_ab - s_ac).abs() < settings.difference_threshold
                    && (y_ab - y_ac).abs() < settings.y_intercept_threshold
            });

        on_line.then_some(Candidate::Middle)
    }
}

fn values_close(a: &[f64], b: &[f64], threshold: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < threshold)
}

/// Counters for one optimizer run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeStats {
    pub input_points: usize,
    pub output_points: usize,
    pub passes_run: usize,
}

impl OptimizeStats {
    pub fn removed(&self) -> usize {
        self.input_points - self.output_points
    }
}

/// Optimize a keyframe list. The result is sorted by time.
pub fn optimize_points(points: Vec<Point>, settings: &OptimizeSettings) -> Vec<Point> {
    optimize_points_with_stats(points, settings).0
}

/// [`optimize_points`], also reporting what happened.
pub fn optimize_points_with_stats(
    mut points: Vec<Point>,
    settings: &OptimizeSettings,
) -> (Vec<Point>, OptimizeStats) {
    let started = Instant::now();
    sort_points(&mut points);

    let mut stats = OptimizeStats {
        input_points: points.len(),
        output_points: points.len(),
        passes_run: 0,
    };
    if points.len() <= 2 {
        return (points, stats);
    }

    let builtins: [(bool, &dyn OptimizeHeuristic); 3] = [
        (settings.optimize_duplicates, &DuplicateHeuristic),
        (settings.optimize_similar_points, &SimilarPointsHeuristic),
        (settings.optimize_similar_points_slope, &SimilarSlopeHeuristic),
    ];
    let heuristics: Vec<&dyn OptimizeHeuristic> = settings
        .additional_heuristics
        .iter()
        .map(|h| &**h)
        .chain(builtins.into_iter().filter(|(on, _)| *on).map(|(_, h)| h))
        .collect();

    let mut infos: Vec<PointInfo> = points.into_iter().map(PointInfo::new).collect();

    if !heuristics.is_empty() {
        for pass in 0..settings.passes {
            if infos.len() < 2 {
                break;
            }
            stats.passes_run += 1;

            let doomed = nominate_pass(&infos, &heuristics, settings);
            log::debug!(
                "optimizer pass {}: removing {} of {} points",
                pass + 1,
                doomed.len(),
                infos.len()
            );
            if doomed.is_empty() {
                break;
            }

            let mut index = 0;
            infos.retain(|_| {
                let keep = !doomed.contains(&index);
                index += 1;
                keep
            });
        }
    }

    stats.output_points = infos.len();
    if settings.performance_log {
        log::info!(
            "optimized {} -> {} points in {} passes ({:?})",
            stats.input_points,
            stats.output_points,
            stats.passes_run,
            started.elapsed()
        );
    }

    (infos.into_iter().map(|info| info.point).collect(), stats)
}

fn nominate_pass(
    infos: &[PointInfo],
    heuristics: &[&dyn OptimizeHeuristic],
    settings: &OptimizeSettings,
) -> HashSet<usize> {
    let mut doomed = HashSet::new();

    if let [a, b] = infos {
        for h in heuristics {
            match h.nominate(a, b, None, settings) {
                Some(Candidate::First) => {
                    doomed.insert(0);
                }
                Some(Candidate::Middle | Candidate::Last) => {
                    doomed.insert(1);
                }
                None => {}
            }
        }
        return doomed;
    }

    for (i, window) in infos.windows(3).enumerate() {
        let (a, b, c) = (&window[0], &window[1], &window[2]);
        for h in heuristics {
            if let Some(candidate) = h.nominate(a, b, Some(c), settings) {
                doomed.insert(match candidate {
                    Candidate::First => i,
                    Candidate::Middle => i + 1,
                    Candidate::Last => i + 2,
                });
            }
        }
    }
    doomed
}

/// Optimize a definition and collapse it to constant form when possible.
/// Constants pass through untouched.
pub fn optimize(def: PointDefinition, settings: &OptimizeSettings) -> PointDefinition {
    match def {
        PointDefinition::Constant(v) => PointDefinition::Constant(v),
        PointDefinition::Keyframes(points) => {
            PointDefinition::Keyframes(optimize_points(points, settings)).simplify()
        }
    }
}
