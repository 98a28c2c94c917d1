use std::collections::BTreeMap;

use crate::foundation::{
    core::{FrameIndex, Transform},
    math::Fnv1a64,
};

/// 128-bit digest of one frame's rendered state, built from two independent
/// seeded FNV-1a streams. Used to assert bit-identical evaluation across
/// repeated calls, scrub orders, and worker processes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

pub fn fingerprint_state(
    frame: FrameIndex,
    state: &BTreeMap<String, Transform>,
) -> FrameFingerprint {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    write_u64_pair(&mut a, &mut b, frame.0);
    write_u64_pair(&mut a, &mut b, state.len() as u64);
    for (id, transform) in state {
        write_str_pair(&mut a, &mut b, id);
        for v in [
            transform.position.x,
            transform.position.y,
            transform.position.z,
            transform.scale.x,
            transform.scale.y,
            transform.scale.z,
            transform.rotation.x,
            transform.rotation.y,
            transform.rotation.z,
            transform.opacity,
        ] {
            write_u64_pair(&mut a, &mut b, v.to_bits());
        }
    }

    FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::core::DVec3;

    fn state_with_opacity(opacity: f64) -> BTreeMap<String, Transform> {
        BTreeMap::from([(
            "hook".to_string(),
            Transform::at(DVec3::new(1.0, 2.0, 0.0)).with_opacity(opacity),
        )])
    }

    #[test]
    fn fingerprint_is_deterministic_for_same_state() {
        let s = state_with_opacity(1.0);
        assert_eq!(
            fingerprint_state(FrameIndex(3), &s),
            fingerprint_state(FrameIndex(3), &s)
        );
    }

    #[test]
    fn fingerprint_changes_with_state_and_frame() {
        let a = state_with_opacity(1.0);
        let b = state_with_opacity(0.5);
        assert_ne!(
            fingerprint_state(FrameIndex(3), &a),
            fingerprint_state(FrameIndex(3), &b)
        );
        assert_ne!(
            fingerprint_state(FrameIndex(3), &a),
            fingerprint_state(FrameIndex(4), &a)
        );
    }

    #[test]
    fn empty_state_still_hashes_the_frame() {
        let empty = BTreeMap::new();
        assert_ne!(
            fingerprint_state(FrameIndex(0), &empty),
            fingerprint_state(FrameIndex(1), &empty)
        );
    }
}
