use std::f64::consts::{
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
//   FALLING  [0, π)
//   RISING   [π, 2π)
const FALLING: usize = 0;
const RISING: usize = 1;

const COSINE_TABLE: [CaseEntry; 6] = [
    CaseEntry::new(FALLING, FALLING, false, Resolution::Decreasing),
    CaseEntry::new(FALLING, RISING, false, Resolution::CrossesMinimum),
    CaseEntry::new(RISING, RISING, false, Resolution::Increasing),
    CaseEntry::new(FALLING, FALLING, true, Resolution::FullRange),
    CaseEntry::new(RISING, FALLING, true, Resolution::CrossesMaximum),
    CaseEntry::new(RISING, RISING, true, Resolution::FullRange),
];

#[derive(Clone, Copy, Debug, Default)]
pub struct Cosine;

impl PeriodicFunction for Cosine {
    fn name(&self) -> &'static str {
        "cos"
    }

    fn period(&self) -> f64 {
        TAU
    }

    fn full_range(&self) -> (f64, f64) {
        (-1.0, 1.0)
    }

    fn eval(&self, x: f64) -> f64 {
        x.cos()
    }

    fn domain(&self, reduced: f64) -> usize {
        if reduced < PI {
            FALLING
        } else {
            RISING
        }
    }

    fn table(&self) -> &'static [CaseEntry] {
        &COSINE_TABLE
    }
}

pub fn cos(x: &Interval) -> Interval {
    enclose(&Cosine, x)
}

pub fn cos_case_masks(x: &Interval) -> Vec<(TrigCase, ArrayD<bool>)> {
    case_masks(&Cosine, x)
}

impl Interval {
    pub fn cos(&self) -> Interval {
        cos(self)
    }
}
