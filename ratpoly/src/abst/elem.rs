use std::fmt::{Debug, Display};
use std::hash::Hash;

pub trait ElemBase: 
    Default + 
    PartialEq + 
    Eq + 
    Hash + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

impl<T> ElemBase for T where T: 
    Default + 
    PartialEq + 
    Eq + 
    Hash + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

// An exact value that may also be the sticky "not a number" sentinel.
pub trait Elem: ElemBase { 
    fn math_symbol() -> String;
    fn nan() -> Self;
    fn is_nan(&self) -> bool;
}

#[cfg(test)]
mod tests { 
    use std::collections::HashSet;
    use crate::{RatNum, RatPoly};
    use super::*;

    fn nan_class<T: Elem>(values: Vec<T>) -> usize { 
        let set: HashSet<_> = values.into_iter().filter(|v| v.is_nan()).collect();
        set.len()
    }

    #[test]
    fn math_symbol() { 
        assert_eq!(RatNum::math_symbol(), "Q");
        assert_eq!(RatPoly::math_symbol(), "Q[x]");
    }

    #[test]
    fn nan_is_one_class() { 
        let a = RatNum::new(1, 0);
        let b = RatNum::new(-7, 0);
        assert_eq!(nan_class(vec![a, b, RatNum::from(3), <RatNum as Elem>::nan()]), 1);

        let p = RatPoly::from_coeffs(vec![RatNum::from(1), RatNum::nan()]);
        let q = <RatPoly as Elem>::nan();
        assert_eq!(nan_class(vec![p, q, RatPoly::variable()]), 1);
    }
}
