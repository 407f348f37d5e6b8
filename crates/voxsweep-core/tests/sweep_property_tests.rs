// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Property tests over random boxes, vectors, and voxel fields.

use proptest::prelude::*;
use voxsweep_core::{
    sweep, Aabb, Axis, ContactLog, SlideOnContact, StopOnContact, Translate, Vec3,
};

fn arb_box() -> impl Strategy<Value = Aabb> {
    (
        prop::array::uniform3(-1.0e5f32..1.0e5),
        prop::array::uniform3(0.1f32..3.0),
    )
        .prop_map(|(min, size)| {
            let min = Vec3::from(min);
            Aabb::new(min, min.add(&Vec3::from(size)))
        })
}

fn arb_vector() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(-20.0f32..20.0).prop_map(Vec3::from)
}

/// Deterministic pseudo-random field: roughly one voxel in `density` is solid.
fn noisy_field(seed: u32, density: u32) -> impl Fn(i32, i32, i32) -> bool {
    move |x, y, z| {
        let mut h = seed;
        for c in [x, y, z] {
            h = h.wrapping_mul(0x9E37_79B9) ^ c.cast_unsigned();
            h ^= h >> 15;
        }
        h.wrapping_mul(0x85EB_CA6B) % density == 0
    }
}

proptest! {
    #[test]
    fn zero_vector_never_moves(mut body in arb_box(), seed in any::<u32>()) {
        let before = body;
        let field = noisy_field(seed, 2);
        let out = sweep(&field, &mut body, Vec3::ZERO, &mut StopOnContact, Translate::Apply).unwrap();
        prop_assert_eq!(out.distance, 0.0);
        prop_assert_eq!(out.contacts, 0);
        prop_assert_eq!(body, before);
    }

    #[test]
    fn unobstructed_sweep_covers_full_vector(mut body in arb_box(), v in arb_vector()) {
        let before = body;
        let empty = |_x: i32, _y: i32, _z: i32| false;
        let out = sweep(&empty, &mut body, v, &mut StopOnContact, Translate::Apply).unwrap();
        let len = v.length();
        prop_assert!((out.distance - len).abs() <= len * 1e-6 + 1e-6, "{} vs {}", out.distance, len);
        prop_assert_eq!(out.displacement, v);
        prop_assert_eq!(body, before.translated(v));
    }

    #[test]
    fn identical_inputs_replay_identically(
        body in arb_box(),
        v in arb_vector(),
        seed in any::<u32>(),
    ) {
        let field = noisy_field(seed, 7);
        let run = || {
            let mut b = body;
            let mut log = ContactLog::new(SlideOnContact);
            let out = sweep(&field, &mut b, v, &mut log, Translate::Apply).unwrap();
            (out, b, log.into_parts().1)
        };
        let (out_a, box_a, log_a) = run();
        let (out_b, box_b, log_b) = run();
        prop_assert_eq!(out_a, out_b);
        prop_assert_eq!(box_a, box_b);
        prop_assert_eq!(log_a, log_b);
    }

    #[test]
    fn slide_contacts_arrive_in_order(
        body in arb_box(),
        v in arb_vector(),
        seed in any::<u32>(),
    ) {
        let field = noisy_field(seed, 5);
        let mut b = body;
        let mut log = ContactLog::new(SlideOnContact);
        let out = sweep(&field, &mut b, v, &mut log, Translate::Apply).unwrap();
        // Each slide removes one axis for good.
        prop_assert!(out.contacts <= 3);
        let distances: Vec<f32> = log.contacts().iter().map(|c| c.distance()).collect();
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]), "{:?}", distances);
        prop_assert!(out.distance <= v.length() + 1e-3);
        let axes: Vec<usize> = log.contacts().iter().map(|c| c.axis().index()).collect();
        for (i, a) in axes.iter().enumerate() {
            prop_assert!(!axes[..i].contains(a), "axis {} blocked twice", a);
        }
    }

    #[test]
    fn stop_never_overshoots_vector(
        body in arb_box(),
        v in arb_vector(),
        seed in any::<u32>(),
    ) {
        let field = noisy_field(seed, 3);
        let mut b = body;
        let out = sweep(&field, &mut b, v, &mut StopOnContact, Translate::Apply).unwrap();
        prop_assert!(out.contacts <= 1);
        prop_assert!(out.distance <= v.length() * (1.0 + 1e-6));
        for axis in 0..3 {
            // The box only ever moves along the requested direction.
            prop_assert!(out.displacement[axis] * v[axis] >= 0.0);
            prop_assert!(out.displacement[axis].abs() <= v[axis].abs());
        }
    }

    #[test]
    fn box_flush_against_wall_stops_at_once(
        wall in -100_000i32..100_000,
        positive in any::<bool>(),
        along in 0.1f32..20.0,
        across in prop::array::uniform2(-20.0f32..20.0),
        corner in prop::array::uniform2(-1.0e5f32..1.0e5),
        size in prop::array::uniform3(0.1f32..3.0),
    ) {
        #[allow(clippy::cast_precision_loss)]
        let face = wall as f32;
        let (min_x, max_x, vx) = if positive {
            (face - size[0], face, along)
        } else {
            (face + 1.0, face + 1.0 + size[0], -along)
        };
        let start = Aabb::new(
            Vec3::new(min_x, corner[0], corner[1]),
            Vec3::new(max_x, corner[0] + size[1], corner[1] + size[2]),
        );
        let mut body = start;
        let solid = move |x: i32, _y: i32, _z: i32| x == wall;
        let mut log = ContactLog::new(StopOnContact);
        let v = Vec3::new(vx, across[0], across[1]);
        let out = sweep(&solid, &mut body, v, &mut log, Translate::Apply).unwrap();
        prop_assert!(out.contacts >= 1);
        let first = log.contacts()[0];
        prop_assert_eq!(first.distance(), 0.0);
        prop_assert_eq!(first.axis(), Axis::X);
        prop_assert_eq!(body, start);
    }
}
