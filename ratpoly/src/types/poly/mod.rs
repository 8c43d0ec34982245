mod poly;
mod arith;
mod calc;
mod parse;

pub use poly::RatPoly;
