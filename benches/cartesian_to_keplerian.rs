use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use nalgebra::{Vector3, Vector6};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orbel::constants::{EARTH_GRAVITATIONAL_PARAMETER, GAUSS_GRAV_SQUARED};
use orbel::conversion::{
    cartesian_to_keplerian, cartesian_to_keplerian_with_tolerance, keplerian_to_cartesian,
};

const MU: f64 = EARTH_GRAVITATIONAL_PARAMETER;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

/// Random element set of a bound, non-degenerate orbit.
#[inline]
fn random_elliptic_elements(rng: &mut StdRng) -> Vector6<f64> {
    Vector6::new(
        rng.random_range(7_000.0e3..50_000.0e3),
        rng.random_range(0.05..0.7),
        rng.random_range(0.1..3.0),
        rand_angle(rng),
        rand_angle(rng),
        rand_angle(rng),
    )
}

/// Cartesian state on a random circular orbit plane, built without an element
/// detour so its eccentricity stays at the rounding floor.
#[inline]
fn random_circular_state(rng: &mut StdRng) -> Vector6<f64> {
    let radius = rng.random_range(7_000.0e3..20_000.0e3);
    let inclination: f64 = rng.random_range(0.2..2.9);
    let node: f64 = rand_angle(rng);
    let latitude: f64 = rand_angle(rng);

    let node_direction = Vector3::new(node.cos(), node.sin(), 0.0);
    let orbit_normal = Vector3::new(
        inclination.sin() * node.sin(),
        -inclination.sin() * node.cos(),
        inclination.cos(),
    );
    let along_track = orbit_normal.cross(&node_direction);

    let speed = (MU / radius).sqrt();
    let position = radius * (latitude.cos() * node_direction + latitude.sin() * along_track);
    let velocity = speed * (-latitude.sin() * node_direction + latitude.cos() * along_track);

    Vector6::new(
        position.x, position.y, position.z, velocity.x, velocity.y, velocity.z,
    )
}

/// Generic regime: inclined ellipses far from every branch threshold.
fn bench_generic_elliptic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("cartesian_to_keplerian/generic_elliptic", |b| {
        b.iter_batched(
            || {
                // Pre-generate the states to keep the inverse transform out of the timed section
                (0..samples)
                    .map(|_| keplerian_to_cartesian(&random_elliptic_elements(&mut rng), MU).unwrap())
                    .collect::<Vec<_>>()
            },
            |states| {
                // Benchmark only the forward conversions
                for state in states {
                    let elements = cartesian_to_keplerian(black_box(&state), black_box(MU)).unwrap();
                    black_box(elements);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Circular branch: eccentricity below threshold, periapsis replaced by the node.
fn bench_circular_branch(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let samples = 10_000usize;
    let tolerance = 1e-9;

    c.bench_function("cartesian_to_keplerian/circular_branch", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| random_circular_state(&mut rng))
                    .collect::<Vec<_>>()
            },
            |states| {
                for state in states {
                    let elements = cartesian_to_keplerian_with_tolerance(
                        black_box(&state),
                        black_box(MU),
                        tolerance,
                    )
                    .unwrap();
                    black_box(elements);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Equatorial branch: the orbit plane carries no node, the x-axis stands in.
fn bench_equatorial_branch(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x0BADF00D);
    let samples = 10_000usize;

    c.bench_function("cartesian_to_keplerian/equatorial_branch", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        let elements = Vector6::new(
                            rng.random_range(7_000.0e3..50_000.0e3),
                            rng.random_range(0.05..0.7),
                            0.0,
                            rand_angle(&mut rng),
                            0.0,
                            rand_angle(&mut rng),
                        );
                        keplerian_to_cartesian(&elements, MU).unwrap()
                    })
                    .collect::<Vec<_>>()
            },
            |states| {
                for state in states {
                    let _ = cartesian_to_keplerian(black_box(&state), black_box(MU));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Hyperbolic regime: e ∈ [1.2, 2.5], true anomaly kept inside the asymptotes.
fn bench_hyperbolic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xCAFEBABE);
    let samples = 10_000usize;

    c.bench_function("cartesian_to_keplerian/hyperbolic", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        let branch: f64 = rng.random_range(0.05..1.5);
                        let anomaly = if rng.random::<bool>() {
                            branch
                        } else {
                            std::f64::consts::TAU - branch
                        };
                        let elements = Vector6::new(
                            rng.random_range(-50_000.0e3..-7_000.0e3),
                            rng.random_range(1.2..2.5),
                            rng.random_range(0.1..3.0),
                            rand_angle(&mut rng),
                            rand_angle(&mut rng),
                            anomaly,
                        );
                        keplerian_to_cartesian(&elements, MU).unwrap()
                    })
                    .collect::<Vec<_>>()
            },
            |states| {
                for state in states {
                    let _ = cartesian_to_keplerian(black_box(&state), black_box(MU));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Inverse direction: element sets back to Cartesian states.
fn bench_inverse_elliptic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x00C0FFEE);
    let samples = 10_000usize;

    c.bench_function("keplerian_to_cartesian/generic_elliptic", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| random_elliptic_elements(&mut rng))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for elements in cases {
                    let state =
                        keplerian_to_cartesian(black_box(&elements), black_box(MU)).unwrap();
                    black_box(state);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Fixed heliocentric case in au and au/day, useful for stability profiling.
fn bench_fixed_heliocentric_case(c: &mut Criterion) {
    let state = Vector6::new(
        -0.62355005100316385,
        1.2114681148601605,
        0.25200059143776038,
        -1.5549845137774663E-002,
        -4.6315774892682878E-003,
        -9.3633621261339246E-004,
    );

    c.bench_function("cartesian_to_keplerian/fixed_heliocentric_case", |b| {
        b.iter(|| {
            let elements =
                cartesian_to_keplerian(black_box(&state), black_box(GAUSS_GRAV_SQUARED));
            black_box(elements.ok());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_generic_elliptic,
    bench_circular_branch,
    bench_equatorial_branch,
    bench_hyperbolic,
    bench_inverse_elliptic,
    bench_fixed_heliocentric_case
);
criterion_main!(benches);
