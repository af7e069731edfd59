use ndarray::{
    ArrayD,
    IxDyn
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use intervals::arithmetic::division::division_masks;
use intervals::arithmetic::multiplication::multiplication_masks;
use intervals::interval::interval::Interval;
use intervals::interval::intervalerror::IntervalError;
use intervals::set::setrelation::{
    contain,
    straddle_zero
};
use intervals::subdivision::subdivision::{
    bisect,
    reconstitute,
    subintervalise
};
use intervals::trigonometry::sine::sin_case_masks;
use intervals::trigonometry::tangent::tan;

const SAMPLES: usize = 100;
const STEPS: usize = 10;

fn random_interval(rng: &mut ChaCha8Rng, range: f64) -> Interval {
    let a: f64 = rng.gen_range(-range..range);
    let b: f64 = rng.gen_range(-range..range);
    Interval::proper(a, b)
}

fn random_away_from_zero(rng: &mut ChaCha8Rng) -> Interval {
    let a: f64 = rng.gen_range(0.1..10.0);
    let b: f64 = rng.gen_range(0.1..10.0);
    let x = Interval::proper(a, b);
    if rng.gen_bool(0.5) { -x } else { x }
}

fn random_array(rng: &mut ChaCha8Rng, shape: &[usize], range: f64) -> Interval {
    let count: usize = shape.iter().product();
    let (lo, hi): (Vec<f64>, Vec<f64>) = (0..count)
        .map(|_| {
            let a: f64 = rng.gen_range(-range..range);
            let b: f64 = rng.gen_range(-range..range);
            (a.min(b), a.max(b))
        })
        .unzip();
    Interval::from_arrays(
        ArrayD::from_shape_vec(IxDyn(shape), lo).unwrap(),
        ArrayD::from_shape_vec(IxDyn(shape), hi).unwrap(),
    )
    .unwrap()
}

fn grid(x: &Interval) -> Vec<f64> {
    let (lo, hi) = x.as_scalar().unwrap();
    (0..=STEPS)
        .map(|k| if k == STEPS { hi } else { lo + (hi - lo) * k as f64 / STEPS as f64 })
        .collect()
}

fn assert_encloses(z: &Interval, value: f64, context: &str) {
    let (lo, hi) = z.as_scalar().unwrap();
    let slack = 1e-9 * (1.0 + value.abs());
    assert!(lo - slack <= value && value <= hi + slack, "{context}: {value} outside [{lo},{hi}]");
}

#[test]
fn binary_operations_enclose_every_sampled_result() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let x = random_interval(&mut rng, 10.0);
        let y = random_interval(&mut rng, 10.0);
        let divisor = random_away_from_zero(&mut rng);

        let sum = (&x + &y).unwrap();
        let difference = (&x - &y).unwrap();
        let product = (&x * &y).unwrap();
        let quotient = (&x / &divisor).unwrap();
        for a in grid(&x) {
            for b in grid(&y) {
                assert_encloses(&sum, a + b, "sum");
                assert_encloses(&difference, a - b, "difference");
                assert_encloses(&product, a * b, "product");
            }
            for c in grid(&divisor) {
                assert_encloses(&quotient, a / c, "quotient");
            }
        }
    }
}

#[test]
fn powers_and_trigonometry_enclose_sampled_values() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let x = random_interval(&mut rng, 8.0);
        let n: i32 = rng.gen_range(0..6);
        let power = x.powi(n).unwrap();
        let sine = x.sin();
        let cosine = x.cos();
        let tangent = tan(&x);
        for a in grid(&x) {
            assert_encloses(&power, a.powi(n), "powi");
            assert_encloses(&sine, a.sin(), "sin");
            assert_encloses(&cosine, a.cos(), "cos");
            let (lo, hi) = tangent.as_scalar().unwrap();
            if lo.is_finite() && hi.is_finite() {
                assert_encloses(&tangent, a.tan(), "tan");
            }
        }
    }
}

#[test]
fn array_results_match_elementwise_results() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for shape in [vec![6], vec![3, 4], vec![2, 3, 2]] {
        let x = random_array(&mut rng, &shape, 5.0);
        let y = random_array(&mut rng, &shape, 5.0);
        let product = (&x * &y).unwrap();
        let sine = x.sin();
        let elements: Vec<(Interval, Interval)> = x.iter().unwrap().zip(y.iter().unwrap()).collect();
        let products: Vec<Interval> = product.iter().unwrap().collect();
        let sines: Vec<Interval> = sine.iter().unwrap().collect();
        for (index, (a, b)) in elements.iter().enumerate() {
            assert_eq!((a * b).unwrap(), products[index]);
            assert_eq!(a.sin(), sines[index]);
        }
    }
}

#[test]
fn case_masks_partition_random_batches() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let x = random_array(&mut rng, &[10, 10], 4.0);
    let y = random_array(&mut rng, &[10, 10], 4.0);

    let multiplication = multiplication_masks(&x, &y).unwrap();
    let trigonometric = sin_case_masks(&x.checked_mul(3.0).unwrap());
    for masks in [
        multiplication.iter().map(|(_, mask)| mask.clone()).collect::<Vec<ArrayD<bool>>>(),
        trigonometric.iter().map(|(_, mask)| mask.clone()).collect::<Vec<ArrayD<bool>>>(),
    ] {
        for index in ndarray::indices(IxDyn(&[10, 10])) {
            let hits = masks.iter().filter(|mask| mask[&index]).count();
            assert_eq!(hits, 1);
        }
    }

    let divisors = Interval::from_arrays(
        x.magnitude().mapv(|m| m + 0.5),
        x.magnitude().mapv(|m| m + 1.0),
    )
    .unwrap();
    let division = division_masks(&y, &divisors).unwrap();
    for index in ndarray::indices(IxDyn(&[10, 10])) {
        let hits = division.iter().filter(|(_, mask)| mask[&index]).count();
        assert_eq!(hits, 1);
    }
}

#[test]
fn division_faults_whenever_any_divisor_straddles_zero() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    for _ in 0..SAMPLES {
        let x = random_array(&mut rng, &[4], 3.0);
        let y = random_array(&mut rng, &[4], 3.0);
        let result = &x / &y;
        if straddle_zero(&y) {
            assert_eq!(result, Err(IntervalError::DivideByZero));
        } else {
            assert!(result.is_ok());
        }
    }
}

#[test]
fn subdivision_covers_exactly() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for _ in 0..SAMPLES {
        let x = random_interval(&mut rng, 100.0);
        let n: usize = rng.gen_range(1..16);
        let tiles = subintervalise(&x, n).unwrap();
        assert_eq!(reconstitute(&tiles).unwrap(), x);
        if n > 1 {
            let lo: Vec<f64> = tiles.lo().iter().copied().collect();
            let hi: Vec<f64> = tiles.hi().iter().copied().collect();
            for k in 1..n {
                assert_eq!(lo[k], hi[k - 1]);
            }
        }

        let (left, right) = bisect(&x, None).unwrap();
        assert_eq!(left.hi(), right.lo());
        assert!(contain(&x, &left).unwrap() && contain(&x, &right).unwrap());
    }
}
