//! [§ 6.6.5.2 :nth-child() pseudo-class](https://www.w3.org/TR/selectors-3/#nth-child-pseudo)
//!
//! "The :nth-child(an+b) pseudo-class notation represents an element that
//! has an+b-1 siblings before it in the document tree, for any positive
//! integer or zero value of n."

/// Parse the argument of an `:nth-*` pseudo-class into `(a, b)`.
///
/// Accepts `odd`, `even`, a bare integer and the `an+b` forms (`2n+1`,
/// `-n+3`, `n`, `+n-1`), with whitespace anywhere. Returns `None` for
/// anything else, in which case the pseudo-class never matches.
///
/// ```
/// use folio_css::selector::parse_nth;
///
/// assert_eq!(parse_nth("odd"), Some((2, 1)));
/// assert_eq!(parse_nth(" -n + 3 "), Some((-1, 3)));
/// assert_eq!(parse_nth("7"), Some((0, 7)));
/// assert_eq!(parse_nth("2x"), None);
/// ```
#[must_use]
pub fn parse_nth(arg: &str) -> Option<(i32, i32)> {
    let expr: String = arg
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    match expr.as_str() {
        "odd" => return Some((2, 1)),
        "even" => return Some((2, 0)),
        _ => {}
    }

    let Some((a, b)) = expr.split_once('n') else {
        return expr.parse().ok().map(|b| (0, b));
    };

    let a = match a {
        "" | "+" => 1,
        "-" => -1,
        a => a.parse().ok()?,
    };
    // "b" must carry an explicit sign when present: "2n+1", "2n-1".
    let b = match b {
        "" => 0,
        b if b.starts_with(['+', '-']) => b.parse().ok()?,
        _ => return None,
    };
    Some((a, b))
}

/// Does the 1-based `position` satisfy `an+b` for some n ≥ 0?
///
/// With `a == 0` only `position == b` matches. Otherwise `position - b` must
/// be a multiple of `a` whose quotient is not negative, which also handles
/// negative `a` (`-n+3` matches 1, 2 and 3).
///
/// The arithmetic is widened to `i64` since `b` may be any `i32`.
#[must_use]
pub fn match_nth(position: i32, a: i32, b: i32) -> bool {
    if a == 0 {
        return position == b;
    }
    let delta = i64::from(position) - i64::from(b);
    let a = i64::from(a);
    delta % a == 0 && delta / a >= 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_n_plus_one() {
        for pos in [1, 3, 5, 7] {
            assert!(match_nth(pos, 2, 1));
        }
        for pos in [2, 4, 6] {
            assert!(!match_nth(pos, 2, 1));
        }
    }

    #[test]
    fn test_zero_a_is_exact() {
        assert!(match_nth(3, 0, 3));
        assert!(!match_nth(6, 0, 3));
        assert!(!match_nth(0, 0, 3));
    }

    #[test]
    fn test_negative_a() {
        assert!(match_nth(1, -1, 3));
        assert!(match_nth(3, -1, 3));
        assert!(!match_nth(4, -1, 3));
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        assert!(match_nth(1, 1, i32::MIN));
        assert!(!match_nth(1, -1, i32::MIN));
        assert!(!match_nth(i32::MIN, 1, i32::MAX));
        assert!(match_nth(i32::MAX, -1, i32::MAX));
        assert!(!match_nth(2, i32::MIN, 1));
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(parse_nth("2n+1"), Some((2, 1)));
        assert_eq!(parse_nth("EVEN"), Some((2, 0)));
        assert_eq!(parse_nth("n"), Some((1, 0)));
        assert_eq!(parse_nth("+n-2"), Some((1, -2)));
        assert_eq!(parse_nth("0n+3"), Some((0, 3)));
        assert_eq!(parse_nth("-3"), Some((0, -3)));
        assert_eq!(parse_nth("2n1"), None);
        assert_eq!(parse_nth(""), None);
    }
}
