use rand::Rng;

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / core::f64::consts::PI)
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (core::f64::consts::PI / 180.0)
}

/// Noise-style sample in [-1, 1]
#[inline]
pub fn random_unit(rng: &mut impl Rng) -> f64 {
    rng.gen_range(-1.0..=1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::{FRAC_PI_2, PI};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn angle_conversions() {
        assert_relative_eq!(rad_to_deg(PI), 180.0);
        assert_relative_eq!(rad_to_deg(FRAC_PI_2), 90.0);
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(deg_to_rad(-90.0), -FRAC_PI_2);
    }

    #[test]
    fn angle_conversions_round_trip() {
        for deg in [-720.0, -45.0, 0.0, 12.5, 359.0] {
            assert_relative_eq!(rad_to_deg(deg_to_rad(deg)), deg, epsilon = 1e-9);
        }
    }

    #[test]
    fn random_unit_samples_cover_both_signs() {
        let mut rng = StdRng::seed_from_u64(123);
        let samples: Vec<f64> = (0..2_000).map(|_| random_unit(&mut rng)).collect();

        assert!(samples.iter().all(|n| (-1.0..=1.0).contains(n)));
        assert!(samples.iter().any(|n| *n < -0.9));
        assert!(samples.iter().any(|n| *n > 0.9));
    }

    #[test]
    fn random_unit_is_reproducible_per_seed() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..16).map(|_| random_unit(&mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(draw(5), draw(5));
        assert_ne!(draw(5), draw(6));
    }
}
