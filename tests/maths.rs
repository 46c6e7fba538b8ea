use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use veckit::math::utils::{deg_to_rad, rad_to_deg};
use veckit::math::{Mat23, Vec2};

fn random_vec(rng: &mut StdRng) -> Vec2 {
    Vec2::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0))
}

#[test]
fn public_math_api_smoke() {
    let v = Vec2::new(1.0, 2.0);
    let m = Mat23::rotation(0.0);
    let _ = m * v;
}

#[test]
fn three_four_five() {
    let v = Vec2::new(3.0, 4.0);
    assert_relative_eq!(v.length(), 5.0);
    assert_relative_eq!(v.normalize(), Vec2::new(0.6, 0.8), epsilon = 1e-12);
}

#[test]
fn normalize_is_unit_or_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1_000 {
        let v = random_vec(&mut rng);
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
    }
    assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
}

#[test]
fn identity_and_composition_laws() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..500 {
        let p = random_vec(&mut rng);
        assert_eq!(Mat23::IDENTITY.transform(p), p);

        let a = Mat23::rotation(rng.gen_range(-4.0..4.0)) * Mat23::translation(random_vec(&mut rng));
        let b = Mat23::shear_x(rng.gen_range(-2.0..2.0)) * Mat23::scale(random_vec(&mut rng));
        assert_relative_eq!((a * b).transform(p), a.transform(b.transform(p)), epsilon = 1e-6, max_relative = 1e-9);
    }
}

#[test]
fn translation_scenario() {
    let m = Mat23::translation(Vec2::new(5.0, 5.0));
    assert_eq!(m.transform(Vec2::new(1.0, 1.0)), Vec2::new(6.0, 6.0));
    assert_eq!(m.transform_linear(Vec2::new(1.0, 1.0)), Vec2::new(1.0, 1.0));
}

#[test]
fn noise_wraps_around() {
    assert_relative_eq!(Vec2::from_noise(-1.0), Vec2::new(1.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(Vec2::from_noise(1.0), Vec2::new(1.0, 0.0), epsilon = 1e-9);
}

#[test]
fn angle_helpers_agree() {
    assert_relative_eq!(Vec2::rad_to_deg(1.0), rad_to_deg(1.0));
    assert_relative_eq!(Vec2::deg_to_rad(30.0), deg_to_rad(30.0));
    assert_relative_eq!(Vec2::new(1.0, 0.0).angle_to(Vec2::from_angle(deg_to_rad(30.0))), deg_to_rad(30.0), epsilon = 1e-12);
}
