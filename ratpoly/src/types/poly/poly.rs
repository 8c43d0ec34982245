use std::fmt::{Display, Debug};
use num_traits::{Zero, One};

use crate::{Elem, RatNum};
use crate::util::format::{lc, mono};

// A polynomial sum_i coeffs[i] x^i over Q, kept in canonical form:
//
// * zero is the empty sequence with degree 0,
// * otherwise coeffs.len() == degree + 1 and coeffs[degree] != 0,
// * NaN is the single coefficient [NaN], and no other value holds a NaN.
//
// Every constructor goes through `from_coeffs` or `new_raw`, so a value is
// never observed outside this form.

#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde_with::DeserializeFromStr))]
pub struct RatPoly {
    pub(super) coeffs: Vec<RatNum>,
    pub(super) degree: usize,
}

impl RatPoly {
    // `coeffs` must already be canonical.
    pub(super) fn new_raw(coeffs: Vec<RatNum>) -> Self { 
        let degree = coeffs.len().saturating_sub(1);
        let p = Self { coeffs, degree };
        p.check_rep();
        p
    }

    /// Builds a polynomial from ascending coefficients, dropping trailing zeros.
    /// Any NaN coefficient makes the whole polynomial NaN.
    pub fn from_coeffs(mut coeffs: Vec<RatNum>) -> Self { 
        if coeffs.iter().any(|a| a.is_nan()) { 
            return Self::nan()
        }

        while coeffs.last().is_some_and(|a| a.is_zero()) { 
            coeffs.pop();
        }

        Self::new_raw(coeffs)
    }

    pub fn nan() -> Self { 
        Self::new_raw(vec![RatNum::nan()])
    }

    /// The term `c x^e`. Zero if `c` is zero.
    pub fn mono<R>(c: R, e: usize) -> Self
    where R: Into<RatNum> { 
        let c = c.into();
        if c.is_zero() { 
            return Self::zero()
        }

        let mut coeffs = vec![RatNum::zero(); e];
        coeffs.push(c);
        Self::from_coeffs(coeffs)
    }

    pub fn from_const<R>(c: R) -> Self
    where R: Into<RatNum> { 
        Self::mono(c, 0)
    }

    pub fn variable() -> Self { 
        Self::mono(1, 1)
    }

    /// Highest exponent with a non-zero coefficient, 0 for zero.
    /// Meaningless for NaN.
    pub fn degree(&self) -> usize { 
        self.degree
    }

    pub fn coeff(&self, pow: usize) -> RatNum { 
        self.coeffs.get(pow).cloned().unwrap_or_else(RatNum::zero)
    }

    pub fn coeffs(&self) -> &[RatNum] { 
        &self.coeffs
    }

    pub fn lead_coeff(&self) -> RatNum { 
        self.coeff(self.degree)
    }

    pub fn const_term(&self) -> RatNum { 
        self.coeff(0)
    }

    pub fn is_nan(&self) -> bool { 
        self.coeffs.first().is_some_and(|a| a.is_nan())
    }

    pub fn is_const(&self) -> bool { 
        self.degree == 0 && !self.is_nan()
    }

    /// Non-zero terms `(exponent, coefficient)` in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &RatNum)> + '_ { 
        self.coeffs.iter().enumerate().filter(|(_, a)| !a.is_zero())
    }

    fn check_rep(&self) { 
        let n = self.coeffs.len();
        if n == 0 { 
            debug_assert_eq!(self.degree, 0, "degree of the zero polynomial must be 0");
            return
        }

        debug_assert_eq!(self.degree, n - 1, "degree != coeffs.len() - 1");

        if self.coeffs[0].is_nan() { 
            debug_assert_eq!(n, 1, "NaN polynomial must hold a single NaN");
        } else { 
            debug_assert!(self.coeffs.iter().all(|a| !a.is_nan()), "NaN coefficient in {:?}", self.coeffs);
            debug_assert!(!self.coeffs[n - 1].is_zero(), "leading coefficient is zero");
        }
    }
}

impl From<Vec<RatNum>> for RatPoly {
    fn from(coeffs: Vec<RatNum>) -> Self {
        Self::from_coeffs(coeffs)
    }
}

impl FromIterator<RatNum> for RatPoly {
    fn from_iter<T: IntoIterator<Item = RatNum>>(iter: T) -> Self {
        Self::from_coeffs(iter.into_iter().collect())
    }
}

impl Display for RatPoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_nan() { 
            return f.write_str("NaN")
        }

        let terms = self.iter().rev();
        f.write_str(&lc(terms, mono, "*"))
    }
}

impl Debug for RatPoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RatPoly {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}

impl Zero for RatPoly {
    fn zero() -> Self {
        Self::new_raw(vec![])
    }

    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }
}

impl One for RatPoly {
    fn one() -> Self {
        Self::from_const(1)
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }
}

impl Elem for RatPoly {
    fn math_symbol() -> String {
        format!("{}[x]", RatNum::math_symbol())
    }

    fn nan() -> Self {
        RatPoly::nan()
    }

    fn is_nan(&self) -> bool {
        RatPoly::is_nan(self)
    }
}

cfg_if::cfg_if! { 
    if #[cfg(feature = "tex")] {
        use crate::TeX;

        fn tex_mono(e: usize) -> String { 
            match e { 
                0 | 1 => mono(e),
                _ => format!("x^{{{e}}}")
            }
        }

        impl TeX for RatPoly {
            fn tex_math_symbol() -> String {
                format!("{}[x]", RatNum::tex_math_symbol())
            }

            fn tex_string(&self) -> String {
                if self.is_nan() { 
                    return RatNum::nan().tex_string()
                }

                let terms = self.iter().rev().map(|(i, a)| (i, a.tex_string()));
                lc(terms, tex_mono, "")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;

    fn r(p: i64, q: i64) -> RatNum { 
        RatNum::new(p, q)
    }

    #[test]
    fn zero() {
        let z = RatPoly::zero();
        assert!(z.is_zero());
        assert!(!z.is_nan());
        assert_eq!(z.degree(), 0);
        assert!(z.coeffs().is_empty());
        assert_eq!(z, RatPoly::default());
        assert_eq!(z, RatPoly::from_coeffs(vec![]));
        assert_eq!(z, RatPoly::mono(0, 5));
    }

    #[test]
    fn nan() {
        let n = RatPoly::nan();
        assert!(n.is_nan());
        assert!(!n.is_zero());
        assert!(!n.is_const());
        assert_eq!(n.coeffs(), &[RatNum::nan()]);
    }

    #[test]
    fn mono_init() { 
        let p = RatPoly::mono(3, 2);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.coeffs(), &[RatNum::zero(), RatNum::zero(), RatNum::from(3)]);

        let p = RatPoly::mono(r(-1, 2), 0);
        assert_eq!(p.degree(), 0);
        assert!(p.is_const());
        assert_eq!(p.const_term(), r(-1, 2));
    }

    #[test]
    fn from_coeffs_trims() { 
        let p = RatPoly::from_coeffs(vec![r(1, 1), r(2, 1), r(0, 1), r(0, 3)]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.coeffs().len(), 2);

        let p = RatPoly::from_coeffs(vec![r(0, 1), r(0, 1)]);
        assert!(p.is_zero());
    }

    #[test]
    fn from_coeffs_nan() { 
        let p = RatPoly::from_coeffs(vec![r(1, 1), RatNum::nan(), r(2, 1)]);
        assert!(p.is_nan());
        assert_eq!(p, RatPoly::nan());
    }

    #[test]
    fn from_iter() { 
        let p: RatPoly = [r(1, 1), r(0, 1), r(-2, 3)].into_iter().collect();
        assert_eq!(p, RatPoly::from(vec![r(1, 1), r(0, 1), r(-2, 3)]));
        assert_eq!(p.degree(), 2);
    }

    #[test]
    fn coeff() { 
        let p = RatPoly::from_coeffs(vec![r(2, 1), r(3, 1), r(-4, 1)]);
        assert_eq!(p.coeff(0), r(2, 1));
        assert_eq!(p.coeff(1), r(3, 1));
        assert_eq!(p.coeff(2), r(-4, 1));
        assert_eq!(p.coeff(3), RatNum::zero());
        assert_eq!(p.lead_coeff(), r(-4, 1));
        assert_eq!(RatPoly::zero().coeff(0), RatNum::zero());
        assert_eq!(RatPoly::zero().lead_coeff(), RatNum::zero());
    }

    #[test]
    fn iter() { 
        let p = RatPoly::from_coeffs(vec![r(2, 1), r(0, 1), r(-4, 1)]);
        let terms: Vec<_> = p.iter().map(|(i, a)| (i, a.clone())).collect();
        assert_eq!(terms, vec![(0, r(2, 1)), (2, r(-4, 1))]);
    }

    #[test]
    fn one() { 
        assert_eq!(RatPoly::one(), RatPoly::from_const(1));
        assert!(RatPoly::one().is_one());
        assert!(!RatPoly::variable().is_one());
    }

    #[test]
    fn display() { 
        let p = RatPoly::from_coeffs(vec![r(3, 1), r(5, 3), r(-2, 1), r(1, 1)]);
        assert_eq!(p.to_string(), "x^3-2*x^2+5/3*x+3");

        let p = RatPoly::from_coeffs(vec![r(1, 1), r(0, 1), r(-3, 2), r(0, 1), r(1, 1)]);
        assert_eq!(p.to_string(), "x^4-3/2*x^2+1");

        let p = RatPoly::from_coeffs(vec![r(1, 1), r(-1, 1)]);
        assert_eq!(p.to_string(), "-x+1");

        let p = RatPoly::from_coeffs(vec![r(-1, 1), r(0, 1), r(-1, 1)]);
        assert_eq!(p.to_string(), "-x^2-1");

        let p = RatPoly::from_coeffs(vec![r(0, 1), r(-7, 2)]);
        assert_eq!(p.to_string(), "-7/2*x");

        assert_eq!(RatPoly::from_const(r(-1, 2)).to_string(), "-1/2");
        assert_eq!(RatPoly::variable().to_string(), "x");
        assert_eq!(RatPoly::zero().to_string(), "0");
        assert_eq!(RatPoly::nan().to_string(), "NaN");
    }

    #[test]
    fn debug() { 
        let p = RatPoly::mono(2, 3);
        assert_eq!(format!("{p:?}"), "2*x^3");
    }

    #[test]
    fn hash_nan() { 
        let set: HashSet<RatPoly> = [
            RatPoly::nan(),
            RatPoly::from_coeffs(vec![RatNum::nan(), r(1, 1)]),
            RatPoly::mono(RatNum::nan(), 4),
        ].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() { 
        let p = RatPoly::from_coeffs(vec![r(3, 1), r(5, 3), r(-2, 1), r(1, 1)]);
        let ser = serde_json::to_string(&p).unwrap();
        assert_eq!(ser, "\"x^3-2*x^2+5/3*x+3\"");

        let des: RatPoly = serde_json::from_str(&ser).unwrap();
        assert_eq!(des, p);

        let res = serde_json::from_str::<RatPoly>("\"2x\"");
        assert!(res.is_err());
    }

    #[test]
    #[cfg(feature = "tex")]
    fn tex() { 
        let p = RatPoly::from_coeffs(vec![r(3, 1), r(-5, 3), r(0, 1), r(1, 1)]);
        assert_eq!(p.tex_string(), "x^{3}-\\frac{5}{3}x+3");
        assert_eq!(RatPoly::tex_math_symbol(), "\\mathbb{Q}[x]");
    }
}
