use num_traits::Zero;

use crate::RatNum;
use super::RatPoly;

impl RatPoly {
    /// Horner evaluation in floating point. NaN for the NaN polynomial.
    pub fn eval(&self, x: f64) -> f64 { 
        if self.is_nan() { 
            return f64::NAN
        }

        let mut coeffs = self.coeffs.iter().rev();
        let Some(a) = coeffs.next() else { 
            return 0.0
        };

        coeffs.fold(a.to_f64(), |res, a| res * x + a.to_f64())
    }

    /// Horner evaluation without rounding.
    pub fn eval_exact(&self, x: &RatNum) -> RatNum { 
        if self.is_nan() || x.is_nan() { 
            return RatNum::nan()
        }

        let mut coeffs = self.coeffs.iter().rev();
        let Some(a) = coeffs.next() else { 
            return RatNum::zero()
        };

        coeffs.fold(a.clone(), |res, a| res * x + a)
    }

    pub fn differentiate(&self) -> Self { 
        if self.is_nan() { 
            return Self::nan()
        }

        if self.degree == 0 { 
            return Self::zero()
        }

        let coeffs = self.coeffs.iter().enumerate().skip(1).map(|(i, a)| 
            a * RatNum::from(i)
        ).collect();

        Self::from_coeffs(coeffs)
    }

    /// The antiderivative whose constant term is `c`.
    pub fn anti_differentiate(&self, c: &RatNum) -> Self { 
        if self.is_nan() { 
            return Self::nan()
        }

        if self.is_zero() { 
            return Self::from_const(c.clone())
        }

        let coeffs = std::iter::once(c.clone()).chain(
            self.coeffs.iter().enumerate().map(|(i, a)| a / RatNum::from(i + 1))
        ).collect();

        Self::from_coeffs(coeffs)
    }

    /// `F(upper) - F(lower)` for an antiderivative `F`. The bounds may be given in either order.
    pub fn integrate(&self, lower: f64, upper: f64) -> f64 { 
        if self.is_nan() || lower.is_nan() || upper.is_nan() { 
            return f64::NAN
        }

        let f = self.anti_differentiate(&RatNum::zero());
        f.eval(upper) - f.eval(lower)
    }
}
