use std::str::FromStr;
use log::debug;
use num_traits::{Zero, One};

use crate::{ParseError, RatNum};
use super::RatPoly;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'a> { 
    Sign { negative: bool, pos: usize },
    Term(&'a str),
}

// Splits at '+' and '-', keeping each sign as its own token.
fn tokenize(s: &str) -> Vec<Token<'_>> { 
    let mut tokens = vec![];
    let mut start = 0;

    for (i, c) in s.char_indices() { 
        if c != '+' && c != '-' { 
            continue
        }
        if start < i { 
            tokens.push(Token::Term(&s[start..i]));
        }
        tokens.push(Token::Sign { negative: c == '-', pos: i });
        start = i + 1;
    }

    if start < s.len() { 
        tokens.push(Token::Term(&s[start..]));
    }

    tokens
}

// An unsigned term: "C", "x", "C*x", "x^E" or "C*x^E".
fn parse_term(t: &str) -> Result<(RatNum, usize), ParseError> { 
    let Some(i) = t.find('x') else { 
        let c = t.parse::<RatNum>()?;
        return Ok((c, 0))
    };

    let (c, e) = (&t[..i], &t[i + 1..]);
    let invalid = || ParseError::InvalidTerm(t.to_string());

    let c = if c.is_empty() { 
        RatNum::one()
    } else { 
        let c = c.strip_suffix('*').filter(|c| !c.is_empty()).ok_or_else(invalid)?;
        c.parse::<RatNum>()?
    };

    let e = if e.is_empty() { 
        1
    } else { 
        let e = e.strip_prefix('^').ok_or_else(invalid)?;
        if e.is_empty() || !e.bytes().all(|b| b.is_ascii_digit()) { 
            return Err(ParseError::InvalidExponent(t.to_string()))
        }
        e.parse::<usize>().map_err(|_| ParseError::InvalidExponent(t.to_string()))?
    };

    Ok((c, e))
}

fn parse_terms(s: &str) -> Result<RatPoly, ParseError> { 
    let mut terms = vec![];
    let mut sign: Option<(bool, usize)> = None;

    for token in tokenize(s) { 
        match token { 
            Token::Sign { negative, pos } => { 
                if let Some((_, p)) = sign { 
                    return Err(ParseError::DanglingSign(p))
                }
                sign = Some((negative, pos));
            },
            Token::Term(t) => { 
                let (c, e) = parse_term(t)?;
                let negative = sign.take().is_some_and(|(negative, _)| negative);

                if c.is_zero() { 
                    continue
                }

                let c = if negative { -c } else { c };
                terms.push((c, e));
            }
        }
    }

    if let Some((_, p)) = sign { 
        return Err(ParseError::DanglingSign(p))
    }

    let Some(deg) = terms.iter().map(|(_, e)| *e).max() else { 
        return Ok(RatPoly::zero())
    };

    let too_large = || ParseError::InvalidExponent(format!("x^{deg}"));
    let len = deg.checked_add(1).ok_or_else(too_large)?;

    let mut coeffs = vec![];
    coeffs.try_reserve_exact(len).map_err(|_| too_large())?;
    coeffs.resize(len, RatNum::zero());

    for (c, e) in terms {
        coeffs[e] += c;
    }

    Ok(RatPoly::from_coeffs(coeffs))
}

impl FromStr for RatPoly {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s { 
            "" => Err(ParseError::Empty),
            "0" => Ok(Self::zero()),
            "NaN" => Ok(Self::nan()),
            _ => parse_terms(s).map_err(|e| { 
                debug!("cannot parse '{s}': {e}");
                e
            })
        }
    }
}
