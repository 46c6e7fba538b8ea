use approx::assert_relative_eq;
use core::f64::consts::FRAC_PI_2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use veckit::{AnchoredVec2, Mat23, Vec2};

#[test]
fn rotate_around_matches_pivot_formula() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let r = AnchoredVec2::new(
            Vec2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
            Vec2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
        );
        let pivot = Vec2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
        let theta = rng.gen_range(-7.0..7.0);

        let rot = r.rotate_around(theta, pivot);
        assert_relative_eq!(rot.origin, pivot + (r.origin - pivot).rotate(theta), epsilon = 1e-9);
        assert_relative_eq!(rot.dir, r.dir.rotate(theta), epsilon = 1e-9);
        assert_relative_eq!(rot.length(), r.length(), epsilon = 1e-9);

        assert_eq!(r.rotate_about_origin(theta), r.rotate_around(theta, Vec2::ZERO));
    }
}

#[test]
fn quarter_turn_scenario() {
    let r = AnchoredVec2::new(Vec2::ZERO, Vec2::new(50.0, 0.0));
    let rot = r.rotate_around(FRAC_PI_2, Vec2::ZERO);
    assert_relative_eq!(rot.dir, Vec2::new(0.0, 50.0), epsilon = 1e-9);
    assert_relative_eq!(rot.origin, Vec2::ZERO, epsilon = 1e-9);
}

#[test]
fn f_glyph_composition() {
    // The three strokes of an "F", built from points and translations.
    let f = [
        AnchoredVec2::from_points(Vec2::ZERO, Vec2::new(0.0, 100.0)),
        AnchoredVec2::from_points(Vec2::ZERO, Vec2::new(50.0, 0.0)).translate(Vec2::new(0.0, 50.0)),
        AnchoredVec2::from_points(Vec2::ZERO, Vec2::new(50.0, 0.0)).translate(Vec2::new(0.0, 100.0)),
    ];
    assert_eq!(f[1].head(), Vec2::new(50.0, 50.0));
    assert_eq!(f[2].head(), Vec2::new(50.0, 100.0));

    // Mirroring the glyph flips the bars but keeps their lengths.
    let mirrored: Vec<_> = f.iter().map(|r| r.transform(Mat23::reflect_y())).collect();
    assert_eq!(mirrored[1].head(), Vec2::new(-50.0, 50.0));
    assert_relative_eq!(mirrored[2].length(), 50.0);
}

#[test]
fn scale_then_translate_is_independent_of_order() {
    let r = AnchoredVec2::from_angle(Vec2::new(2.0, 2.0), 0.4, 1.0);
    let a = r.scale(3.0).translate(Vec2::new(1.0, -1.0));
    let b = r.translate(Vec2::new(1.0, -1.0)).scale(3.0);
    assert_eq!(a, b);
    assert_relative_eq!(a.length(), 3.0, epsilon = 1e-12);
}
