use std::cmp::Ordering;
use std::fmt::{Display, Debug};
use std::iter::{Sum, Product};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Neg};
use std::str::FromStr;
use std::sync::OnceLock;
use auto_impl_ops::auto_ops;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Zero, One, Signed, ToPrimitive};
use regex::Regex;

use crate::{Elem, ParseError};

#[derive(Clone, PartialEq, Eq, Hash)]
enum Repr { 
    Num { numer: BigInt, denom: BigInt },
    NaN,
}

// Exact rational in lowest terms with a positive denominator, or NaN.
// Values are never mutated once handed out; the `*Assign` operators replace `self` wholesale.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde_with::DeserializeFromStr))]
pub struct RatNum(Repr);

impl RatNum {
    #[inline]
    fn new_raw(numer: BigInt, denom: BigInt) -> RatNum {
        let r = RatNum(Repr::Num { numer, denom });
        r.check_rep();
        r
    }

    /// `numer / denom` in lowest terms. A zero denominator gives NaN.
    pub fn new<N, D>(numer: N, denom: D) -> RatNum
    where N: Into<BigInt>, D: Into<BigInt> {
        Self::reduced(numer.into(), denom.into())
    }

    fn reduced(numer: BigInt, denom: BigInt) -> RatNum { 
        if denom.is_zero() { 
            return Self::nan()
        }

        if numer.is_zero() { 
            return Self::new_raw(numer, BigInt::one())
        }

        let (numer, denom) = if denom.is_negative() { 
            (-numer, -denom)
        } else { 
            (numer, denom)
        };

        let g = numer.gcd(&denom);

        if g.is_one() { 
            Self::new_raw(numer, denom)
        } else { 
            Self::new_raw(numer / &g, denom / &g)
        }
    }

    pub fn from_numer<N>(a: N) -> RatNum
    where N: Into<BigInt> {
        Self::new_raw(a.into(), BigInt::one())
    }

    pub fn nan() -> RatNum { 
        RatNum(Repr::NaN)
    }

    pub fn is_nan(&self) -> bool { 
        matches!(self.0, Repr::NaN)
    }

    pub fn numer(&self) -> Option<&BigInt> { 
        match &self.0 { 
            Repr::Num { numer, .. } => Some(numer),
            Repr::NaN => None
        }
    }

    pub fn denom(&self) -> Option<&BigInt> { 
        match &self.0 { 
            Repr::Num { denom, .. } => Some(denom),
            Repr::NaN => None
        }
    }

    pub fn is_negative(&self) -> bool { 
        self.numer().map(|a| a.is_negative()).unwrap_or(false)
    }

    pub fn is_integer(&self) -> bool { 
        self.denom().map(|b| b.is_one()).unwrap_or(false)
    }

    pub fn abs(&self) -> RatNum { 
        if self.is_negative() { 
            -self
        } else { 
            self.clone()
        }
    }

    /// Multiplicative inverse. Zero and NaN both invert to NaN.
    pub fn inv(&self) -> RatNum { 
        match &self.0 { 
            Repr::Num { numer, denom } => Self::reduced(denom.clone(), numer.clone()),
            Repr::NaN => Self::nan()
        }
    }

    /// The value as an `i64`, if it is an integer in range.
    /// Non-integral values are not truncated.
    pub fn to_i64(&self) -> Option<i64> { 
        match &self.0 { 
            Repr::Num { numer, denom } if denom.is_one() => numer.to_i64(),
            _ => None
        }
    }

    pub fn to_f64(&self) -> f64 { 
        match &self.0 { 
            Repr::Num { numer, denom } => {
                match (numer.to_f64(), denom.to_f64()) {
                    (Some(p), Some(q)) if p.is_finite() && q.is_finite() => p / q,
                    _ => Self::scaled_quotient(numer, denom)
                }
            },
            Repr::NaN => f64::NAN
        }
    }

    // a / b = (a * 2^k / b) * 2^-k, where the integer quotient keeps about 64 significant bits.
    fn scaled_quotient(a: &BigInt, b: &BigInt) -> f64 {
        let k = b.bits() as i64 - a.bits() as i64 + 64;
        let q = if k >= 0 {
            (a << k as u64) / b
        } else {
            a / (b << k.unsigned_abs())
        };

        let q = q.to_f64().unwrap_or(f64::NAN);
        let e = (-k).clamp(-4096, 4096) as i32;
        let h = e / 2;
        q * 2f64.powi(h) * 2f64.powi(e - h)
    }

    fn check_rep(&self) { 
        if let Repr::Num { numer, denom } = &self.0 { 
            debug_assert!(denom.is_positive(), "denominator must be positive: {denom}");
            if numer.is_zero() { 
                debug_assert!(denom.is_one(), "zero must be 0/1, found 0/{denom}");
            } else { 
                debug_assert!(numer.gcd(denom).is_one(), "{numer}/{denom} is not reduced");
            }
        }
    }
}

impl From<i32> for RatNum {
    fn from(i: i32) -> Self {
        Self::from_numer(i)
    }
}

impl From<i64> for RatNum {
    fn from(i: i64) -> Self {
        Self::from_numer(i)
    }
}

impl From<usize> for RatNum {
    fn from(i: usize) -> Self {
        Self::from_numer(i)
    }
}

impl From<BigInt> for RatNum {
    fn from(i: BigInt) -> Self {
        Self::from_numer(i)
    }
}

impl From<(i64, i64)> for RatNum {
    fn from(pair: (i64, i64)) -> Self {
        let (p, q) = pair;
        Self::new(p, q)
    }
}

fn ratio_pattern() -> &'static Regex { 
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(.+)/(.+)$").expect("valid pattern"))
}

fn parse_int(s: &str) -> Result<BigInt, ParseError> { 
    // BigInt accepts '_' separators, which are not part of the grammar.
    if s.contains('_') { 
        return Err(ParseError::InvalidNumber(s.to_string()))
    }
    s.parse::<BigInt>().map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

impl FromStr for RatNum {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() { 
            return Err(ParseError::Empty)
        }

        if s == "NaN" { 
            return Ok(Self::nan())
        }

        if let Some(c) = ratio_pattern().captures(s) { 
            let a = parse_int(&c[1])?;
            let b = parse_int(&c[2])?;
            return Ok(Self::reduced(a, b))
        }

        parse_int(s).map(Self::from_numer)
    }
}

impl Default for RatNum {
    fn default() -> Self {
        Self::zero()
    }
}

impl Display for RatNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 { 
            Repr::Num { numer, denom } if denom.is_one() => write!(f, "{numer}"),
            Repr::Num { numer, denom } => write!(f, "{numer}/{denom}"),
            Repr::NaN => f.write_str("NaN")
        }
    }
}

impl Debug for RatNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RatNum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}

impl Zero for RatNum {
    fn zero() -> Self {
        Self::new_raw(BigInt::zero(), BigInt::one())
    }

    fn is_zero(&self) -> bool {
        matches!(&self.0, Repr::Num { numer, .. } if numer.is_zero())
    }
}

impl One for RatNum {
    fn one() -> Self {
        Self::from_numer(1)
    }

    fn is_one(&self) -> bool {
        matches!(&self.0, Repr::Num { numer, denom } if numer.is_one() && denom.is_one())
    }
}

macro_rules! impl_add_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        #[auto_ops]
        impl $trait<&RatNum> for RatNum {
            fn $method(&mut self, rhs: &RatNum) {
                *self = match (&self.0, &rhs.0) { 
                    (Repr::Num { numer: a, denom: b }, Repr::Num { numer: c, denom: d }) => { 
                        if b == d { 
                            RatNum::reduced(a $op c, b.clone())   // a/b ± c/b
                        } else { 
                            let l = b.lcm(d);                      // l = xb = yd
                            let p = a * (&l / b) $op c * (&l / d); // xa ± yc
                            RatNum::reduced(p, l)
                        }
                    },
                    _ => RatNum::nan()
                }
            }
        }
    };
}

impl_add_assign_op!(AddAssign, add_assign, +);
impl_add_assign_op!(SubAssign, sub_assign, -);

impl Neg for RatNum {
    type Output = Self;
    fn neg(self) -> Self::Output {
        match self.0 { 
            Repr::Num { numer, denom } => RatNum::new_raw(-numer, denom),
            Repr::NaN => RatNum::nan()
        }
    }
}

impl Neg for &RatNum {
    type Output = RatNum;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

#[auto_ops]
impl MulAssign<&RatNum> for RatNum {
    fn mul_assign(&mut self, rhs: &RatNum) {
        *self = match (&self.0, &rhs.0) { 
            (Repr::Num { numer: a, denom: b }, Repr::Num { numer: c, denom: d }) => { 
                if a.is_zero() || c.is_zero() { 
                    RatNum::zero()
                } else { 
                    let k = a.gcd(d);              // a = ka', d = kd'
                    let l = b.gcd(c);              // b = lb', c = lc'
                    let p = (a / &k) * (c / &l);   // a'c'
                    let q = (b / &l) * (d / &k);   // b'd'
                    RatNum::new_raw(p, q)
                }
            },
            _ => RatNum::nan()
        }
    }
}

#[auto_ops]
impl DivAssign<&RatNum> for RatNum {
    fn div_assign(&mut self, rhs: &RatNum) {
        *self *= rhs.inv()
    }
}

macro_rules! impl_accum {
    ($trait:ident, $method:ident, $accum_trait:ident, $accum_method:ident, $accum_init:ident) => {
        impl $trait for RatNum {
            fn $method<Iter: Iterator<Item = Self>>(iter: Iter) -> Self {
                iter.fold(Self::$accum_init(), |mut res, r| { 
                    $accum_trait::$accum_method(&mut res, r);
                    res
                })
            }
        }

        impl<'a> $trait<&'a RatNum> for RatNum {
            fn $method<Iter: Iterator<Item = &'a RatNum>>(iter: Iter) -> Self {
                iter.fold(Self::$accum_init(), |mut res, r| { 
                    $accum_trait::$accum_method(&mut res, r);
                    res
                })
            }
        }
    }
}

impl_accum!(Sum, sum, AddAssign, add_assign, zero);
impl_accum!(Product, product, MulAssign, mul_assign, one);

// NaN is comparable only with itself.
impl PartialOrd for RatNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.0, &other.0) { 
            (Repr::Num { numer: a, denom: b }, Repr::Num { numer: c, denom: d }) => { 
                Some(Ord::cmp(&(a * d), &(c * b))) // b, d > 0
            },
            (Repr::NaN, Repr::NaN) => Some(Ordering::Equal),
            _ => None
        }
    }
}

impl Elem for RatNum { 
    fn math_symbol() -> String {
        String::from("Q")
    }

    fn nan() -> Self {
        RatNum::nan()
    }

    fn is_nan(&self) -> bool {
        RatNum::is_nan(self)
    }
}

cfg_if::cfg_if! { 
    if #[cfg(feature = "tex")] {
        use crate::TeX;

        impl TeX for RatNum {
            fn tex_math_symbol() -> String {
                String::from("\\mathbb{Q}")
            }

            fn tex_string(&self) -> String {
                match &self.0 { 
                    Repr::Num { numer, denom } if denom.is_one() => numer.to_string(),
                    Repr::Num { numer, denom } => { 
                        let sign = if numer.is_negative() { "-" } else { "" };
                        format!("{sign}\\frac{{{}}}{{{denom}}}", numer.abs())
                    },
                    Repr::NaN => String::from("\\mathrm{NaN}")
                }
            }
        }
    }
}
