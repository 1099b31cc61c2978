use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::sampling::{random_about, random_eccentricity, random_near, random_two_pi};

#[test]
fn test_random_eccentricity_stays_in_band() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    for _ in 0..1000 {
        let e = random_eccentricity(&mut rng);
        assert!((0.0..=0.2).contains(&e), "eccentricity {e} out of band");
    }
}

#[test]
fn test_random_near_clusters_around_mean() {
    let mut rng = ChaChaRng::seed_from_u64(2);
    let mut sum = 0.0;
    let samples = 4000;
    for _ in 0..samples {
        sum += random_near(&mut rng, 10.0, 3.0);
    }
    let mean = sum / f64::from(samples);
    assert!((mean - 10.0).abs() < 0.1, "sample mean {mean}");
}

#[test]
fn test_random_about_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    for _ in 0..1000 {
        let v = random_about(&mut rng, 100.0, 0.2);
        assert!((80.0..=120.0).contains(&v));
    }
}

#[test]
fn test_random_two_pi_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    for _ in 0..1000 {
        let angle = random_two_pi(&mut rng);
        assert!((0.0..std::f64::consts::TAU).contains(&angle));
    }
}

#[test]
fn test_sampling_is_deterministic_per_seed() {
    let mut a = ChaChaRng::seed_from_u64(42);
    let mut b = ChaChaRng::seed_from_u64(42);
    for _ in 0..32 {
        assert_eq!(random_eccentricity(&mut a), random_eccentricity(&mut b));
    }
}
