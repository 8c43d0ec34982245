use num_traits::Zero;
use ratpoly::{RatNum, RatPoly};
use ratpoly::util::log::init_logger_from_env;

fn p(s: &str) -> RatPoly { 
    let _ = init_logger_from_env();
    s.parse().unwrap()
}

#[test]
fn format_round_trip() { 
    assert_eq!(p("x^3-2*x^2+5/3*x+3").to_string(), "x^3-2*x^2+5/3*x+3");
}

#[test]
fn exact_cancellation() { 
    let q = RatPoly::mono(3, 0) + RatPoly::mono(-3, 0);
    assert!(q.is_zero());
    assert_eq!(q.to_string(), "0");
}

#[test]
fn eval() { 
    assert_eq!(p("x+2").eval(3.0), 5.0);
    assert_eq!(p("x^2-x+1").eval(3.0), 7.0);
}

#[test]
fn division() { 
    assert_eq!((p("x^2-1") / p("x-1")).to_string(), "x+1");
    assert_eq!((p("x^3-1") / p("x-1")).to_string(), "x^2+x+1");
    assert_eq!((p("x^3-2*x^2+5/3*x+3") / p("2*x")).to_string(), "1/2*x^2-x+5/6");
}

#[test]
fn nan_propagates() { 
    let n = RatPoly::nan();
    let x = p("x");
    assert_eq!((&n + &x).to_string(), "NaN");
    assert_eq!((&x - &n).to_string(), "NaN");
    assert_eq!((&n * &x).to_string(), "NaN");
    assert_eq!((&x / &n).to_string(), "NaN");
    assert_eq!((&x / RatPoly::zero()).to_string(), "NaN");
    assert_eq!((-&n).to_string(), "NaN");
    assert_eq!(n.differentiate().to_string(), "NaN");
    assert_eq!(n.anti_differentiate(&RatNum::zero()).to_string(), "NaN");
    assert!(n.eval(1.0).is_nan());
    assert!(n.integrate(0.0, 1.0).is_nan());
}

#[test]
fn calculus() { 
    assert_eq!(p("x^3").differentiate().to_string(), "3*x^2");
    assert_eq!(p("3*x^2").anti_differentiate(&RatNum::from(0)).to_string(), "x^3");
    assert_eq!(p("x^2").integrate(0.0, 3.0), 9.0);
}

#[test]
fn chained() { 
    // (x + 1)^2 - (x - 1)^2 = 4x
    let a = p("x+1");
    let b = p("x-1");
    let d = &a * &a - &b * &b;
    assert_eq!(d.to_string(), "4*x");
    assert_eq!(d.degree(), 1);
    assert_eq!((&d / &a).to_string(), "4");
    assert_eq!((&d % &a).to_string(), "-4");
}
