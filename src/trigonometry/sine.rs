use std::f64::consts::{
    FRAC_PI_2,
    PI,
    TAU
};

use ndarray::ArrayD;

use crate::interval::interval::Interval;
use crate::trigonometry::casetable::{
    case_masks,
    enclose,
    CaseEntry,
    PeriodicFunction,
    Resolution,
    TrigCase
};

// Sub-domains of [0, 2π):
//   RISING_LOW   [0, π/2)
//   FALLING      [π/2, 3π/2)
//   RISING_HIGH  [3π/2, 2π)
const RISING_LOW: usize = 0;
const FALLING: usize = 1;
const RISING_HIGH: usize = 2;

const SINE_TABLE: [CaseEntry; 12] = [
    CaseEntry::new(RISING_LOW, RISING_LOW, false, Resolution::Increasing),
    CaseEntry::new(RISING_LOW, FALLING, false, Resolution::CrossesMaximum),
    CaseEntry::new(RISING_LOW, RISING_HIGH, false, Resolution::FullRange),
    CaseEntry::new(FALLING, FALLING, false, Resolution::Decreasing),
    CaseEntry::new(FALLING, RISING_HIGH, false, Resolution::CrossesMinimum),
    CaseEntry::new(RISING_HIGH, RISING_HIGH, false, Resolution::Increasing),
    CaseEntry::new(RISING_LOW, RISING_LOW, true, Resolution::FullRange),
    CaseEntry::new(FALLING, RISING_LOW, true, Resolution::CrossesMinimum),
    CaseEntry::new(RISING_HIGH, RISING_LOW, true, Resolution::Increasing),
    CaseEntry::new(FALLING, FALLING, true, Resolution::FullRange),
    CaseEntry::new(RISING_HIGH, FALLING, true, Resolution::CrossesMaximum),
    CaseEntry::new(RISING_HIGH, RISING_HIGH, true, Resolution::FullRange),
];

#[derive(Clone, Copy, Debug, Default)]
pub struct Sine;

impl PeriodicFunction for Sine {
    fn name(&self) -> &'static str {
        "sin"
    }

    fn period(&self) -> f64 {
        TAU
    }

    fn full_range(&self) -> (f64, f64) {
        (-1.0, 1.0)
    }

    fn eval(&self, x: f64) -> f64 {
        x.sin()
    }

    fn domain(&self, reduced: f64) -> usize {
        if reduced < FRAC_PI_2 {
            RISING_LOW
        } else if reduced < PI + FRAC_PI_2 {
            FALLING
        } else {
            RISING_HIGH
        }
    }

    fn table(&self) -> &'static [CaseEntry] {
        &SINE_TABLE
    }
}

pub fn sin(x: &Interval) -> Interval {
    enclose(&Sine, x)
}

pub fn sin_case_masks(x: &Interval) -> Vec<(TrigCase, ArrayD<bool>)> {
    case_masks(&Sine, x)
}

impl Interval {
    pub fn sin(&self) -> Interval {
        sin(self)
    }
}
