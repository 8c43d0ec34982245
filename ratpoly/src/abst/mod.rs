mod elem;

pub use elem::*;
