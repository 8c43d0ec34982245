mod ratio;
mod poly;

pub use ratio::RatNum;
pub use poly::RatPoly;
