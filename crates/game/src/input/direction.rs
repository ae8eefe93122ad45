use std::cmp::Ordering;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use bitflags::bitflags;

bitflags! {
    /// Directional intent collapsed from every held movement key alias.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectionKeys: u8 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl DirectionKeys {
    /// Net forward and left axes. Opposing keys on one axis cancel.
    pub fn axes(self) -> (Ordering, Ordering) {
        let forward = self
            .contains(Self::FORWARD)
            .cmp(&self.contains(Self::BACK));
        let left = self.contains(Self::LEFT).cmp(&self.contains(Self::RIGHT));
        (forward, left)
    }
}

/// Eight-way heading relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Forward,
    ForwardLeft,
    Left,
    BackLeft,
    Back,
    BackRight,
    Right,
    ForwardRight,
}

impl Heading {
    pub const ALL: [Heading; 8] = [
        Heading::Forward,
        Heading::ForwardLeft,
        Heading::Left,
        Heading::BackLeft,
        Heading::Back,
        Heading::BackRight,
        Heading::Right,
        Heading::ForwardRight,
    ];

    /// `None` when no directional key is held. A fully cancelled set
    /// (forward+back, left+right, or all four) resolves to `Forward`.
    pub fn from_keys(keys: DirectionKeys) -> Option<Self> {
        if keys.is_empty() {
            return None;
        }

        use Ordering::{Equal, Greater, Less};
        let heading = match keys.axes() {
            (Greater, Equal) | (Equal, Equal) => Self::Forward,
            (Greater, Greater) => Self::ForwardLeft,
            (Equal, Greater) => Self::Left,
            (Less, Greater) => Self::BackLeft,
            (Less, Equal) => Self::Back,
            (Less, Less) => Self::BackRight,
            (Equal, Less) => Self::Right,
            (Greater, Less) => Self::ForwardRight,
        };
        Some(heading)
    }

    /// Yaw offset from the camera azimuth, counter-clockwise seen from above.
    pub fn offset(self) -> f32 {
        match self {
            Self::Forward => 0.0,
            Self::ForwardLeft => FRAC_PI_4,
            Self::Left => FRAC_PI_2,
            Self::BackLeft => FRAC_PI_2 + FRAC_PI_4,
            Self::Back => PI,
            Self::BackRight => -FRAC_PI_2 - FRAC_PI_4,
            Self::Right => -FRAC_PI_2,
            Self::ForwardRight => -FRAC_PI_4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_means_no_heading() {
        assert_eq!(Heading::from_keys(DirectionKeys::empty()), None);
    }

    #[test]
    fn cardinal_offsets() {
        let cases = [
            (DirectionKeys::FORWARD, 0.0),
            (DirectionKeys::BACK, PI),
            (DirectionKeys::LEFT, FRAC_PI_2),
            (DirectionKeys::RIGHT, -FRAC_PI_2),
        ];
        for (keys, expected) in cases {
            let heading = Heading::from_keys(keys).unwrap();
            assert!((heading.offset() - expected).abs() < 1e-6, "{keys:?}");
        }
    }

    #[test]
    fn diagonals_sit_between_cardinals() {
        let back_left = Heading::from_keys(DirectionKeys::BACK | DirectionKeys::LEFT).unwrap();
        assert_eq!(back_left, Heading::BackLeft);
        assert!((back_left.offset() - 3.0 * FRAC_PI_4).abs() < 1e-6);

        let forward_right =
            Heading::from_keys(DirectionKeys::FORWARD | DirectionKeys::RIGHT).unwrap();
        assert!((forward_right.offset() + FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn opposing_keys_cancel_per_axis() {
        let keys = DirectionKeys::FORWARD | DirectionKeys::BACK | DirectionKeys::LEFT;
        assert_eq!(Heading::from_keys(keys), Some(Heading::Left));

        assert_eq!(
            Heading::from_keys(DirectionKeys::FORWARD | DirectionKeys::BACK),
            Some(Heading::Forward)
        );
        assert_eq!(Heading::from_keys(DirectionKeys::all()), Some(Heading::Forward));
    }

    #[test]
    fn every_heading_offset_and_travel_direction() {
        use crate::angle::heading_vector;
        use glam::Vec3;

        let r = std::f32::consts::FRAC_1_SQRT_2;
        let (f, b, l, rt) = (
            DirectionKeys::FORWARD,
            DirectionKeys::BACK,
            DirectionKeys::LEFT,
            DirectionKeys::RIGHT,
        );
        // Travel with the camera on +Z looking toward -Z.
        let table = [
            (Heading::Forward, f, 0.0, Vec3::new(0.0, 0.0, -1.0)),
            (Heading::ForwardLeft, f | l, FRAC_PI_4, Vec3::new(-r, 0.0, -r)),
            (Heading::Left, l, FRAC_PI_2, Vec3::new(-1.0, 0.0, 0.0)),
            (Heading::BackLeft, b | l, 3.0 * FRAC_PI_4, Vec3::new(-r, 0.0, r)),
            (Heading::Back, b, PI, Vec3::new(0.0, 0.0, 1.0)),
            (Heading::BackRight, b | rt, -3.0 * FRAC_PI_4, Vec3::new(r, 0.0, r)),
            (Heading::Right, rt, -FRAC_PI_2, Vec3::new(1.0, 0.0, 0.0)),
            (Heading::ForwardRight, f | rt, -FRAC_PI_4, Vec3::new(r, 0.0, -r)),
        ];
        assert_eq!(table.len(), Heading::ALL.len());

        for ((heading, keys, offset, travel), listed) in table.into_iter().zip(Heading::ALL) {
            assert_eq!(heading, listed);
            assert_eq!(Heading::from_keys(keys), Some(heading));
            assert!((heading.offset() - offset).abs() < 1e-6, "{heading:?}");
            let moved = heading_vector(heading.offset() + PI);
            assert!((moved - travel).length() < 1e-5, "{heading:?}: {moved:?}");
        }
    }

    #[test]
    fn left_and_right_together_resolve_forward() {
        assert_eq!(
            Heading::from_keys(DirectionKeys::LEFT | DirectionKeys::RIGHT),
            Some(Heading::Forward)
        );
        assert_eq!(
            Heading::from_keys(DirectionKeys::LEFT | DirectionKeys::RIGHT | DirectionKeys::BACK),
            Some(Heading::Back)
        );
    }

    #[test]
    fn offsets_stay_within_half_turn() {
        for heading in Heading::ALL {
            assert!(heading.offset().abs() <= PI);
        }
    }
}
