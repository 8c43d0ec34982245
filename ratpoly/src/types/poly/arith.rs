use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Rem, RemAssign, Neg};
use auto_impl_ops::auto_ops;
use itertools::{EitherOrBoth, Itertools};
use log::trace;
use num_traits::{Zero, One, Pow};

use crate::RatNum;
use super::RatPoly;

impl Neg for RatPoly {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Neg for &RatPoly {
    type Output = RatPoly;
    fn neg(self) -> Self::Output {
        if self.is_nan() || self.is_zero() { 
            return self.clone()
        }
        // negation keeps the leading coefficient non-zero.
        RatPoly::new_raw(self.coeffs.iter().map(|a| -a).collect())
    }
}

#[auto_ops]
impl AddAssign<&RatPoly> for RatPoly {
    fn add_assign(&mut self, rhs: &RatPoly) {
        if self.is_nan() || rhs.is_nan() { 
            *self = RatPoly::nan()
        } else if rhs.is_zero() { 
            // do nothing
        } else if self.is_zero() { 
            *self = rhs.clone()
        } else { 
            let coeffs = self.coeffs.iter().zip_longest(rhs.coeffs.iter()).map(|e| 
                match e { 
                    EitherOrBoth::Both(a, b) => a + b,
                    EitherOrBoth::Left(a) => a.clone(),
                    EitherOrBoth::Right(b) => b.clone()
                }
            ).collect();

            // leading terms may cancel.
            *self = RatPoly::from_coeffs(coeffs)
        }
    }
}

#[auto_ops]
impl SubAssign<&RatPoly> for RatPoly {
    fn sub_assign(&mut self, rhs: &RatPoly) {
        *self += -rhs
    }
}

#[auto_ops]
impl MulAssign<&RatNum> for RatPoly {
    fn mul_assign(&mut self, rhs: &RatNum) {
        if self.is_nan() || rhs.is_nan() { 
            *self = RatPoly::nan()
        } else if rhs.is_one() { 
            // do nothing
        } else { 
            let coeffs = self.coeffs.iter().map(|a| a * rhs).collect();
            *self = RatPoly::from_coeffs(coeffs)
        }
    }
}

#[auto_ops]
impl DivAssign<&RatNum> for RatPoly {
    fn div_assign(&mut self, rhs: &RatNum) {
        *self *= rhs.inv()
    }
}

#[auto_ops]
impl MulAssign<&RatPoly> for RatPoly {
    fn mul_assign(&mut self, rhs: &RatPoly) {
        if self.is_nan() || rhs.is_nan() { 
            *self = RatPoly::nan()
        } else if self.is_zero() || rhs.is_zero() { 
            *self = RatPoly::zero()
        } else if rhs.is_const() { 
            *self *= rhs.const_term()
        } else { 
            let n = self.coeffs.len() + rhs.degree;
            let mut coeffs = vec![RatNum::zero(); n];

            for (i, a) in self.coeffs.iter().enumerate() { 
                for (j, b) in rhs.coeffs.iter().enumerate() { 
                    coeffs[i + j] += a * b;
                }
            }

            *self = RatPoly::from_coeffs(coeffs)
        }
    }
}

impl RatPoly {
    /// Long division: `(q, r)` with `self = q * rhs + r` and `deg r < deg rhs` or `r = 0`.
    /// Both are NaN if either operand is NaN or `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) { 
        if self.is_nan() || rhs.is_nan() || rhs.is_zero() { 
            return (Self::nan(), Self::nan())
        }

        if self.is_zero() || rhs.degree > self.degree { 
            return (Self::zero(), self.clone())
        }

        let j = rhs.degree;
        let b = rhs.lead_coeff();

        let mut q = vec![RatNum::zero(); self.degree - j + 1];
        let mut r = self.clone();

        // each step cancels the leading term of r, so deg r strictly decreases.
        while !r.is_zero() && r.degree >= j { 
            let k = r.degree - j;
            let c = r.lead_coeff() / &b; // (a/b) x^{i-j}

            trace!("div_rem: deg r = {}, q += ({c}) x^{k}", r.degree);

            r -= Self::mono(c.clone(), k) * rhs;
            q[k] = c;
        }

        (Self::from_coeffs(q), r)
    }
}

// Truncating division: the remainder is discarded.
#[auto_ops]
impl Div<&RatPoly> for RatPoly {
    type Output = Self;

    fn div(self, rhs: &RatPoly) -> Self {
        self.div_rem(rhs).0
    }
}

#[auto_ops]
impl Rem<&RatPoly> for RatPoly {
    type Output = Self;

    fn rem(self, rhs: &RatPoly) -> Self::Output {
        self.div_rem(rhs).1
    }
}

macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl Pow<$t> for &RatPoly {
            type Output = RatPoly;
            fn pow(self, n: $t) -> Self::Output {
                if self.is_nan() { 
                    return RatPoly::nan()
                }
                let mut res = RatPoly::one();
                for _ in 0..n { 
                    res *= self
                }
                res
            }
        }

        impl Pow<$t> for RatPoly {
            type Output = RatPoly;
            fn pow(self, n: $t) -> Self::Output {
                (&self).pow(n)
            }
        }
    };
}

impl_pow_unsigned!(u32);
impl_pow_unsigned!(usize);

impl Sum for RatPoly {
    fn sum<Iter: Iterator<Item = Self>>(iter: Iter) -> Self {
        iter.fold(Self::zero(), |mut res, p| { 
            res += p;
            res
        })
    }
}

impl<'a> Sum<&'a RatPoly> for RatPoly {
    fn sum<Iter: Iterator<Item = &'a RatPoly>>(iter: Iter) -> Self {
        iter.fold(Self::zero(), |mut res, p| { 
            res += p;
            res
        })
    }
}
