// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Leading-face scans against the occupancy query.

use super::state::SweepState;
use crate::contact::Axis;

/// Half-open run of voxel indices walked in the direction of travel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    from: i32,
    to: i32,
    step: i32,
}

impl Span {
    /// Indices from `from` towards `to` (exclusive); empty if `to` lies behind `from`.
    pub(crate) fn cells(self) -> impl Iterator<Item = i32> {
        let len = if self.step > 0 {
            self.to - self.from
        } else {
            self.from - self.to
        };
        (0..len.max(0)).map(move |k| self.from + k * self.step)
    }
}

/// Index ranges of the leading face after a crossing on `axis`.
///
/// The crossed axis contributes the single plane the leading edge just
/// entered; the other two span the box's whole current footprint, trail to
/// lead inclusive.
pub(crate) fn face_spans(state: &SweepState, axis: Axis) -> [Span; 3] {
    let crossed = axis.index();
    core::array::from_fn(|i| {
        let step = state.step[i];
        let to = state.lead_index[i] + step;
        let from = if i == crossed {
            state.lead_index[i]
        } else {
            state.trail_index[i]
        };
        Span { from, to, step }
    })
}

/// Queries every cell of the leading face; returns the first solid one.
pub(crate) fn scan_leading_face<E, Q>(
    state: &SweepState,
    axis: Axis,
    query: &mut Q,
) -> Result<Option<[i32; 3]>, E>
where
    Q: FnMut([i32; 3]) -> Result<bool, E>,
{
    let [xs, ys, zs] = face_spans(state, axis);
    for x in xs.cells() {
        for y in ys.cells() {
            for z in zs.cells() {
                if query([x, y, z])? {
                    return Ok(Some([x, y, z]));
                }
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::math::DEFAULT_EPSILON;

    fn eps() -> f64 {
        f64::from(DEFAULT_EPSILON)
    }

    fn visited(state: &SweepState, axis: Axis) -> Vec<[i32; 3]> {
        let mut seen = Vec::new();
        let hit = scan_leading_face::<(), _>(state, axis, &mut |cell| {
            seen.push(cell);
            Ok(false)
        });
        assert_eq!(hit, Ok(None));
        seen
    }

    #[test]
    fn reversed_span_is_empty() {
        let span = Span {
            from: 3,
            to: 1,
            step: 1,
        };
        assert_eq!(span.cells().count(), 0);
        let down = Span {
            from: 1,
            to: -2,
            step: -1,
        };
        assert_eq!(down.cells().collect::<Vec<_>>(), vec![1, 0, -1]);
    }

    #[test]
    fn face_covers_whole_footprint_once() {
        // 2x2 footprint on Y/Z, moving +X.
        let mut state = SweepState::default();
        assert!(state.reset(
            [3.0, 0.0, 0.0],
            [0.0, 0.5, 0.5],
            [1.0, 2.5, 1.5],
            eps(),
        ));
        let axis = state.step_forward();
        assert_eq!(axis, Axis::X);
        let cells = visited(&state, axis);
        let unique: BTreeSet<_> = cells.iter().copied().collect();
        assert_eq!(cells.len(), unique.len(), "no cell may be queried twice");
        let expected: BTreeSet<_> = [
            [1, 0, 0],
            [1, 0, 1],
            [1, 1, 0],
            [1, 1, 1],
            [1, 2, 0],
            [1, 2, 1],
        ]
        .into_iter()
        .collect();
        assert_eq!(unique, expected);
    }

    #[test]
    fn negative_travel_scans_plane_behind_box() {
        let mut state = SweepState::default();
        assert!(state.reset(
            [0.0, -2.0, 0.0],
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            eps(),
        ));
        let axis = state.step_forward();
        assert_eq!(axis, Axis::Y);
        assert_eq!(visited(&state, axis), vec![[0, -1, 0]]);
    }

    #[test]
    fn scan_stops_at_first_solid_cell() {
        let mut state = SweepState::default();
        assert!(state.reset(
            [0.0, 0.0, 2.0],
            [0.0, 0.0, 0.0],
            [3.0, 1.0, 1.0],
            eps(),
        ));
        let axis = state.step_forward();
        let mut calls = 0;
        let hit = scan_leading_face::<(), _>(&state, axis, &mut |cell| {
            calls += 1;
            Ok(cell == [0, 0, 1])
        });
        assert_eq!(hit, Ok(Some([0, 0, 1])));
        assert_eq!(calls, 1);
    }

    #[test]
    fn query_errors_propagate() {
        let mut state = SweepState::default();
        assert!(state.reset(
            [1.0, 0.0, 0.0],
            [0.0; 3],
            [1.0, 1.0, 1.0],
            eps(),
        ));
        let axis = state.step_forward();
        let hit = scan_leading_face(&state, axis, &mut |_| Err("storage offline"));
        assert_eq!(hit, Err("storage offline"));
    }
}
