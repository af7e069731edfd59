use ndarray::ArrayD;

// ─────────────────────────────────────────────────────────────────────────────
// Sign cases
// ─────────────────────────────────────────────────────────────────────────────
//
// The three categories are tested in a fixed order, so every interval lands in
// exactly one of them even when it could satisfy two tests ([0, 0] is both
// lo >= 0 and hi <= 0, and is classified non-negative):
//
//   lo >= 0          -> NonNegative
//   hi <= 0          -> NonPositive
//   lo < 0 < hi      -> Straddle

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignCase {
    NonNegative,
    Straddle,
    NonPositive,
}

impl SignCase {
    pub const ALL: [SignCase; 3] = [SignCase::NonNegative, SignCase::Straddle, SignCase::NonPositive];

    pub fn classify(lo: f64, hi: f64) -> SignCase {
        if lo >= 0.0 {
            SignCase::NonNegative
        } else if hi <= 0.0 {
            SignCase::NonPositive
        } else {
            SignCase::Straddle
        }
    }
}

/// Sign of a divisor that does not enclose zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DivisorSign {
    Positive,
    Negative,
}

impl DivisorSign {
    pub const ALL: [DivisorSign; 2] = [DivisorSign::Positive, DivisorSign::Negative];

    /// `None` when `lo <= 0 <= hi`.
    pub fn classify(lo: f64, hi: f64) -> Option<DivisorSign> {
        if lo > 0.0 {
            Some(DivisorSign::Positive)
        } else if hi < 0.0 {
            Some(DivisorSign::Negative)
        } else {
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplication table (Moore)
// ─────────────────────────────────────────────────────────────────────────────
//
//   x \ y   |  NonNegative      Straddle                 NonPositive
//   --------+------------------------------------------------------------
//   NonNeg  |  [xl*yl, xh*yh]   [xh*yl, xh*yh]           [xh*yl, xl*yh]
//   Straddle|  [xl*yh, xh*yh]   min/max of all corners   [xh*yl, xl*yl]
//   NonPos  |  [xl*yh, xh*yl]   [xl*yh, xl*yl]           [xh*yh, xl*yl]

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MulCase {
    pub left: SignCase,
    pub right: SignCase,
}

impl MulCase {
    pub fn classify(x_lo: f64, x_hi: f64, y_lo: f64, y_hi: f64) -> MulCase {
        MulCase {
            left: SignCase::classify(x_lo, x_hi),
            right: SignCase::classify(y_lo, y_hi),
        }
    }

    pub fn table() -> Vec<MulCase> {
        SignCase::ALL
            .iter()
            .flat_map(|&left| SignCase::ALL.iter().map(move |&right| MulCase { left, right }))
            .collect()
    }

    pub fn bounds(&self, x_lo: f64, x_hi: f64, y_lo: f64, y_hi: f64) -> (f64, f64) {
        use SignCase::*;
        match (self.left, self.right) {
            (NonNegative, NonNegative) => (x_lo * y_lo, x_hi * y_hi),
            (NonNegative, Straddle) => (x_hi * y_lo, x_hi * y_hi),
            (NonNegative, NonPositive) => (x_hi * y_lo, x_lo * y_hi),
            (Straddle, NonNegative) => (x_lo * y_hi, x_hi * y_hi),
            (Straddle, Straddle) => {
                let corners = [x_lo * y_lo, x_lo * y_hi, x_hi * y_lo, x_hi * y_hi];
                let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
                let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                (lo, hi)
            },
            (Straddle, NonPositive) => (x_hi * y_lo, x_lo * y_lo),
            (NonPositive, NonNegative) => (x_lo * y_hi, x_hi * y_lo),
            (NonPositive, Straddle) => (x_lo * y_hi, x_lo * y_lo),
            (NonPositive, NonPositive) => (x_hi * y_hi, x_lo * y_lo),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Division table
// ─────────────────────────────────────────────────────────────────────────────
//
//   x \ y   |  Positive          Negative
//   --------+------------------------------------
//   NonNeg  |  [xl/yh, xh/yl]    [xh/yh, xl/yl]
//   Straddle|  [xl/yl, xh/yl]    [xh/yh, xl/yh]
//   NonPos  |  [xl/yl, xh/yh]    [xh/yl, xl/yh]

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DivCase {
    pub dividend: SignCase,
    pub divisor: DivisorSign,
}

impl DivCase {
    pub fn classify(x_lo: f64, x_hi: f64, y_lo: f64, y_hi: f64) -> Option<DivCase> {
        DivisorSign::classify(y_lo, y_hi).map(|divisor| DivCase {
            dividend: SignCase::classify(x_lo, x_hi),
            divisor,
        })
    }

    pub fn table() -> Vec<DivCase> {
        SignCase::ALL
            .iter()
            .flat_map(|&dividend| DivisorSign::ALL.iter().map(move |&divisor| DivCase { dividend, divisor }))
            .collect()
    }

    pub fn bounds(&self, x_lo: f64, x_hi: f64, y_lo: f64, y_hi: f64) -> (f64, f64) {
        use DivisorSign::*;
        use SignCase::*;
        match (self.dividend, self.divisor) {
            (NonNegative, Positive) => (x_lo / y_hi, x_hi / y_lo),
            (Straddle, Positive) => (x_lo / y_lo, x_hi / y_lo),
            (NonPositive, Positive) => (x_lo / y_lo, x_hi / y_hi),
            (NonNegative, Negative) => (x_hi / y_hi, x_lo / y_lo),
            (Straddle, Negative) => (x_hi / y_hi, x_lo / y_hi),
            (NonPositive, Negative) => (x_hi / y_lo, x_lo / y_hi),
        }
    }
}

/// One boolean mask per table entry, marking the elements that fall in it.
///
/// `cases` holds a single case per element, so the masks partition the
/// elements as long as `table` lists every case.
pub fn case_masks<C>(cases: &ArrayD<C>, table: &[C]) -> Vec<(C, ArrayD<bool>)>
    where C: Copy + PartialEq {
    table
        .iter()
        .map(|&case| (case, cases.map(|element| *element == case)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_classification_is_exclusive() {
        assert_eq!(SignCase::classify(0.0, 0.0), SignCase::NonNegative);
        assert_eq!(SignCase::classify(0.0, 3.0), SignCase::NonNegative);
        assert_eq!(SignCase::classify(-3.0, 0.0), SignCase::NonPositive);
        assert_eq!(SignCase::classify(-1.0, 1.0), SignCase::Straddle);
        assert_eq!(DivisorSign::classify(-1.0, 0.0), None);
        assert_eq!(DivisorSign::classify(0.5, 1.0), Some(DivisorSign::Positive));
    }

    #[test]
    fn test_tables_are_complete() {
        let mul = MulCase::table();
        assert_eq!(mul.len(), 9);
        for (i, a) in mul.iter().enumerate() {
            assert!(mul[i + 1..].iter().all(|b| a != b));
        }
        assert_eq!(DivCase::table().len(), 6);
    }

    #[test]
    fn test_every_multiplication_case_matches_corner_analysis() {
        let samples = [(2.0, 3.0), (-1.0, 2.0), (-3.0, -2.0), (0.0, 0.0), (0.0, 4.0), (-4.0, 0.0)];
        for &(x_lo, x_hi) in samples.iter() {
            for &(y_lo, y_hi) in samples.iter() {
                let corners = [x_lo * y_lo, x_lo * y_hi, x_hi * y_lo, x_hi * y_hi];
                let expected_lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
                let expected_hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let (lo, hi) = MulCase::classify(x_lo, x_hi, y_lo, y_hi).bounds(x_lo, x_hi, y_lo, y_hi);
                assert_eq!(lo, expected_lo, "lo of [{x_lo},{x_hi}]*[{y_lo},{y_hi}]");
                assert_eq!(hi, expected_hi, "hi of [{x_lo},{x_hi}]*[{y_lo},{y_hi}]");
            }
        }
    }

    #[test]
    fn test_every_division_case_matches_corner_analysis() {
        let dividends = [(2.0, 3.0), (-1.0, 2.0), (-3.0, -2.0), (0.0, 4.0), (-4.0, 0.0)];
        let divisors = [(2.0, 4.0), (-4.0, -2.0), (0.5, 8.0), (-8.0, -0.5)];
        for &(x_lo, x_hi) in dividends.iter() {
            for &(y_lo, y_hi) in divisors.iter() {
                let corners = [x_lo / y_lo, x_lo / y_hi, x_hi / y_lo, x_hi / y_hi];
                let expected_lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
                let expected_hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let case = DivCase::classify(x_lo, x_hi, y_lo, y_hi).unwrap();
                let (lo, hi) = case.bounds(x_lo, x_hi, y_lo, y_hi);
                assert_eq!(lo, expected_lo);
                assert_eq!(hi, expected_hi);
            }
        }
    }
}
