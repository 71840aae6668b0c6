use std::collections::HashMap;

use crate::field::noise::ScalarField;
use crate::foundation::core::Point;

/// `levels` interior thresholds evenly spaced across `[lo, hi]`.
///
/// Endpoints are excluded so every threshold can actually be crossed by the
/// field; the count always equals `levels`.
pub(crate) fn thresholds(lo: f64, hi: f64, levels: u32) -> Vec<f64> {
    let n = f64::from(levels) + 1.0;
    (1..=levels)
        .map(|k| lo + (hi - lo) * f64::from(k) / n)
        .collect()
}

/// Extract isolines from a scalar field with marching squares.
///
/// Returns one polyline per connected segment chain, in unit-square
/// coordinates (origin bottom-left, field row 0 mapped to the top edge).
pub(crate) fn extract_isolines(field: &ScalarField, levels: u32) -> Vec<Vec<Point>> {
    let (mut lo, mut hi) = (f32::INFINITY, f32::NEG_INFINITY);
    for &v in &field.values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || hi <= lo {
        return Vec::new();
    }

    let mut out = Vec::new();
    for t in thresholds(f64::from(lo), f64::from(hi), levels) {
        out.extend(trace_level(field, t as f32));
    }
    out
}

/// Cell-edge identity on the sampling grid. Two adjacent cells share the
/// same key for their common edge, which makes chain stitching exact without
/// quantizing point coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum EdgeKey {
    /// Horizontal edge from grid point (row, col) to (row, col + 1).
    H(u32, u32),
    /// Vertical edge from grid point (row, col) to (row + 1, col).
    V(u32, u32),
}

#[derive(Clone, Copy)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

fn side_key(i: u32, j: u32, side: Side) -> EdgeKey {
    match side {
        Side::Top => EdgeKey::H(i, j),
        Side::Bottom => EdgeKey::H(i + 1, j),
        Side::Left => EdgeKey::V(i, j),
        Side::Right => EdgeKey::V(i, j + 1),
    }
}

fn trace_level(field: &ScalarField, t: f32) -> Vec<Vec<Point>> {
    let (w, h) = (field.width, field.height);
    if w < 2 || h < 2 {
        return Vec::new();
    }
    let v = |i: usize, j: usize| field.values[i * w + j];

    let mut points: HashMap<EdgeKey, Point> = HashMap::new();
    let mut segments: Vec<[EdgeKey; 2]> = Vec::new();

    for i in 0..h - 1 {
        for j in 0..w - 1 {
            let tl = v(i, j);
            let tr = v(i, j + 1);
            let br = v(i + 1, j + 1);
            let bl = v(i + 1, j);

            let mut case = 0u8;
            if tl >= t {
                case |= 8;
            }
            if tr >= t {
                case |= 4;
            }
            if br >= t {
                case |= 2;
            }
            if bl >= t {
                case |= 1;
            }

            let saddle_inside = || (tl + tr + br + bl) / 4.0 >= t;
            let pairs: &[[Side; 2]] = match case {
                0 | 15 => &[],
                1 => &[[Side::Left, Side::Bottom]],
                2 => &[[Side::Bottom, Side::Right]],
                3 => &[[Side::Left, Side::Right]],
                4 => &[[Side::Top, Side::Right]],
                5 if saddle_inside() => {
                    &[[Side::Left, Side::Top], [Side::Right, Side::Bottom]]
                }
                5 => &[[Side::Top, Side::Right], [Side::Left, Side::Bottom]],
                6 => &[[Side::Top, Side::Bottom]],
                7 => &[[Side::Left, Side::Top]],
                8 => &[[Side::Top, Side::Left]],
                9 => &[[Side::Top, Side::Bottom]],
                10 if saddle_inside() => {
                    &[[Side::Top, Side::Right], [Side::Left, Side::Bottom]]
                }
                10 => &[[Side::Top, Side::Left], [Side::Right, Side::Bottom]],
                11 => &[[Side::Top, Side::Right]],
                12 => &[[Side::Left, Side::Right]],
                13 => &[[Side::Bottom, Side::Right]],
                14 => &[[Side::Left, Side::Bottom]],
                _ => unreachable!(),
            };

            for &[a, b] in pairs {
                let (ci, cj) = (i as u32, j as u32);
                let ka = side_key(ci, cj, a);
                let kb = side_key(ci, cj, b);
                points
                    .entry(ka)
                    .or_insert_with(|| edge_point(field, ka, t));
                points
                    .entry(kb)
                    .or_insert_with(|| edge_point(field, kb, t));
                segments.push([ka, kb]);
            }
        }
    }

    chain_segments(&segments, &points)
}

/// Crossing point on a grid edge, linearly interpolated, in unit-square
/// coordinates (y up, field row 0 at the top).
fn edge_point(field: &ScalarField, key: EdgeKey, t: f32) -> Point {
    let (w, h) = (field.width, field.height);
    let v = |i: u32, j: u32| field.values[i as usize * w + j as usize];
    let frac = |va: f32, vb: f32| {
        let d = vb - va;
        if d == 0.0 { 0.0 } else { f64::from((t - va) / d) }
    };

    let (x, y_down) = match key {
        EdgeKey::H(i, j) => {
            let s = frac(v(i, j), v(i, j + 1));
            (f64::from(j) + s, f64::from(i))
        }
        EdgeKey::V(i, j) => {
            let s = frac(v(i, j), v(i + 1, j));
            (f64::from(j), f64::from(i) + s)
        }
    };
    Point::new(x / (w as f64 - 1.0), 1.0 - y_down / (h as f64 - 1.0))
}

fn chain_segments(
    segments: &[[EdgeKey; 2]],
    points: &HashMap<EdgeKey, Point>,
) -> Vec<Vec<Point>> {
    let mut adjacency: HashMap<EdgeKey, Vec<usize>> = HashMap::new();
    for (idx, &[a, b]) in segments.iter().enumerate() {
        adjacency.entry(a).or_default().push(idx);
        adjacency.entry(b).or_default().push(idx);
    }

    let mut used = vec![false; segments.len()];
    let mut chains = Vec::new();

    for start in 0..segments.len() {
        if used[start] {
            continue;
        }
        used[start] = true;
        let [a, b] = segments[start];
        let mut chain = std::collections::VecDeque::from([a, b]);

        // Grow both ends until no unused segment continues the chain.
        for forward in [true, false] {
            loop {
                let Some(tip) = (if forward {
                    chain.back().copied()
                } else {
                    chain.front().copied()
                }) else {
                    break;
                };
                let Some(next) = adjacency
                    .get(&tip)
                    .and_then(|ids| ids.iter().find(|&&i| !used[i]))
                    .copied()
                else {
                    break;
                };
                used[next] = true;
                let [na, nb] = segments[next];
                let far = if na == tip { nb } else { na };
                if forward {
                    chain.push_back(far);
                } else {
                    chain.push_front(far);
                }
            }
        }

        chains.push(chain.iter().map(|k| points[k]).collect());
    }
    chains
}
