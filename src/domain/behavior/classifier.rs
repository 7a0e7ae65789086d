//! Profile Classifier - resolves axis scores into one of the four quadrants.
//!
//! Rules are evaluated in a fixed order:
//!
//! 1. Quadrant: both axes beyond the dead zone.
//! 2. Near origin: both axes inside the dead zone, resolved by sign.
//! 3. Dominant axis: exactly one axis beyond the dead zone, resolved by the
//!    axis with the larger magnitude.
//!
//! In the dominant-axis case a strongly negative emotionality resolves to
//! `Pragmatic`, not `Analytical`. Existing clients depend on that mapping.

use super::profile::{AxisScores, Profile};

/// Half-width of the band around each axis origin treated as noise.
pub const DEAD_ZONE: i32 = 10;

/// Stateless quadrant classifier.
pub struct ProfileClassifier;

impl ProfileClassifier {
    pub fn classify(axes: &AxisScores) -> Profile {
        let a = axes.assertiveness;
        let e = axes.emotionality;

        if let Some(profile) = Self::quadrant(a, e) {
            return profile;
        }

        if a.abs() <= DEAD_ZONE && e.abs() <= DEAD_ZONE {
            return Self::by_sign(a, e);
        }

        Self::dominant_axis(a, e)
    }

    fn quadrant(a: i32, e: i32) -> Option<Profile> {
        match (a, e) {
            (a, e) if a > DEAD_ZONE && e < -DEAD_ZONE => Some(Profile::Pragmatic),
            (a, e) if a > DEAD_ZONE && e > DEAD_ZONE => Some(Profile::Intuitive),
            (a, e) if a < -DEAD_ZONE && e < -DEAD_ZONE => Some(Profile::Analytical),
            (a, e) if a < -DEAD_ZONE && e > DEAD_ZONE => Some(Profile::Integrator),
            _ => None,
        }
    }

    fn by_sign(a: i32, e: i32) -> Profile {
        match (a >= 0, e >= 0) {
            (true, true) => Profile::Intuitive,
            (true, false) => Profile::Pragmatic,
            (false, true) => Profile::Integrator,
            (false, false) => Profile::Analytical,
        }
    }

    fn dominant_axis(a: i32, e: i32) -> Profile {
        if a.abs() >= e.abs() {
            if a > 0 {
                Profile::Pragmatic
            } else {
                Profile::Analytical
            }
        } else if e > 0 {
            Profile::Intuitive
        } else {
            Profile::Pragmatic
        }
    }
}
