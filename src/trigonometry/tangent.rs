use std::f64::consts::{
    FRAC_PI_2,
    PI
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

// Branches of [0, π), split by the pole at π/2:
//   LEFT   [0, π/2]
//   RIGHT  (π/2, π)
// tan is increasing on each branch; any path across the pole is unbounded.
const LEFT: usize = 0;
const RIGHT: usize = 1;

const TANGENT_TABLE: [CaseEntry; 6] = [
    CaseEntry::new(LEFT, LEFT, false, Resolution::Increasing),
    CaseEntry::new(RIGHT, RIGHT, false, Resolution::Increasing),
    CaseEntry::new(LEFT, RIGHT, false, Resolution::Unbounded),
    CaseEntry::new(RIGHT, LEFT, true, Resolution::Increasing),
    CaseEntry::new(LEFT, LEFT, true, Resolution::Unbounded),
    CaseEntry::new(RIGHT, RIGHT, true, Resolution::Unbounded),
];

#[derive(Clone, Copy, Debug, Default)]
pub struct Tangent;

impl PeriodicFunction for Tangent {
    fn name(&self) -> &'static str {
        "tan"
    }

    fn period(&self) -> f64 {
        PI
    }

    fn full_range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn eval(&self, x: f64) -> f64 {
        x.tan()
    }

    fn domain(&self, reduced: f64) -> usize {
        if reduced <= FRAC_PI_2 {
            LEFT
        } else {
            RIGHT
        }
    }

    fn table(&self) -> &'static [CaseEntry] {
        &TANGENT_TABLE
    }
}

pub fn tan(x: &Interval) -> Interval {
    enclose(&Tangent, x)
}

pub fn tan_case_masks(x: &Interval) -> Vec<(TrigCase, ArrayD<bool>)> {
    case_masks(&Tangent, x)
}

impl Interval {
    pub fn tan(&self) -> Interval {
        tan(self)
    }
}
