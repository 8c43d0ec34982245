use derive_more::Display;

// Raised only for malformed text. Undefined arithmetic yields NaN instead.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum ParseError { 
    #[display("empty input")]
    Empty,
    #[display("invalid number: '{_0}'")]
    InvalidNumber(String),
    #[display("invalid term: '{_0}'")]
    InvalidTerm(String),
    #[display("invalid exponent: '{_0}'")]
    InvalidExponent(String),
    #[display("dangling sign at position {_0}")]
    DanglingSign(usize),
}

impl std::error::Error for ParseError {}
