/// Appends one decimal digit to an accumulated literal (`acc * 10 + digit`).
///
/// ## Errors
/// Returns `Err(error)` if the result does not fit in an `i64`.
///
/// ## Parameters
/// - `acc`: The value accumulated so far.
/// - `digit`: The next digit, `0..=9`.
/// - `error`: The error to return on overflow.
///
/// ## Example
/// ```
/// use annota::util::num::push_digit_checked;
///
/// assert_eq!(push_digit_checked(12, 7, "too big!"), Ok(127));
/// assert!(push_digit_checked(i64::MAX, 0, "too big!").is_err());
/// ```
pub fn push_digit_checked<E>(acc: i64, digit: u32, error: E) -> Result<i64, E> {
    acc.checked_mul(10)
       .and_then(|v| v.checked_add(i64::from(digit)))
       .ok_or(error)
}

/// Raises `base` to `exponent` by repeated multiplication starting from `1`.
///
/// Bases `0`, `1` and `-1` are answered directly, since their powers never
/// overflow and the loop would otherwise run `exponent` times. For any other
/// base the product overflows within 64 steps, so the loop is bounded.
///
/// ## Errors
/// Returns `Err(error)` if an intermediate product overflows.
///
/// ## Example
/// ```
/// use annota::util::num::pow_checked;
///
/// assert_eq!(pow_checked(2, 10, ()), Ok(1024));
/// assert_eq!(pow_checked(7, 0, ()), Ok(1));
/// assert_eq!(pow_checked(-1, 1_000_001, ()), Ok(-1));
/// assert!(pow_checked(10, 19, ()).is_err());
/// ```
pub fn pow_checked<E>(base: i64, exponent: u64, error: E) -> Result<i64, E> {
    match base {
        0 => Ok(i64::from(exponent == 0)),
        1 => Ok(1),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => {
            let mut acc: i64 = 1;
            for _ in 0..exponent {
                match acc.checked_mul(base) {
                    Some(v) => acc = v,
                    None => return Err(error),
                }
            }
            Ok(acc)
        },
    }
}
