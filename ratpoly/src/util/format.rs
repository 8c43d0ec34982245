use std::fmt::Display;

// "1", "x" or "x^e".
pub fn mono(e: usize) -> String { 
    match e { 
        0 => String::from("1"),
        1 => String::from("x"),
        _ => format!("x^{e}")
    }
}

// Joins (exponent, coefficient) pairs, highest first, without whitespace.
// `mono` renders the monomial of each non-constant term.
// Only the leading term keeps a bare sign; later terms are joined by `+` / `-`.
pub fn lc<R, S, F>(mut terms: S, mono: F, sep: &str) -> String
where 
    R: Display, 
    S: Iterator<Item = (usize, R)>,
    F: Fn(usize) -> String
{ 
    let mut res = String::new();

    let Some((e, r)) = terms.next() else { 
        return String::from("0")
    };

    let x = mono(e);
    let r = r.to_string();

    let term = if e == 0 { 
        r
    } else if r == "1" { 
        x
    } else if r == "-1" { 
        format!("-{x}")
    } else { 
        format!("{r}{sep}{x}")
    };

    res += &term;

    for (e, r) in terms {
        let x = mono(e);
        let r = r.to_string();

        let (op, r) = if let Some(r) = r.strip_prefix('-') { 
            ('-', r) 
        } else { 
            ('+', r.as_str())
        };

        let term = if e == 0 { 
            r.to_string()
        } else if r == "1" { 
            x
        } else { 
            format!("{r}{sep}{x}")
        };

        res.push(op);
        res += &term;
    }

    res
}
