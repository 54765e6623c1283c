// the collection of utility functions mainly for bracket parsing and proceeding

/// Finds the rightmost occurrence of any of the given operator characters at
/// bracket depth zero. Splitting at the rightmost occurrence keeps `+ - * /`
/// left-associative. A `+` or `-` directly after an exponent marker belongs
/// to a number literal (as in `2e-3`) and is skipped.
pub fn find_rightmost_operator_outside_brackets(
    input: &str,
    operators: &[char],
) -> Option<(usize, char)> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut bracket_depth: i32 = 0;
    let mut last: Option<(usize, char)> = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && operators.contains(&c) => {
                let exponent_sign = (c == '+' || c == '-')
                    && i >= 2
                    && matches!(chars[i - 1].1, 'e' | 'E')
                    && chars[i - 2].1.is_ascii_digit();
                if !exponent_sign {
                    last = Some((pos, c));
                }
            }
            _ => {}
        }
    }

    last
}

/// Finds the leftmost occurrence of any of the given operator characters at
/// bracket depth zero. Splitting at the leftmost occurrence keeps `^`
/// right-associative.
pub fn find_leftmost_operator_outside_brackets(
    input: &str,
    operators: &[char],
) -> Option<(usize, char)> {
    let mut bracket_depth: i32 = 0;

    for (pos, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && operators.contains(&c) => {
                return Some((pos, c));
            }
            _ => {}
        }
    }

    None
}

/// Finds the position of the closing bracket matching the opening bracket at
/// `bracket_start`.
pub fn find_pair_to_this_bracket(input: &str, bracket_start: usize) -> Result<usize, String> {
    let mut stack = 0usize;
    for (i, c) in input.char_indices() {
        if i < bracket_start {
            continue;
        }
        if c == '(' {
            stack += 1;
        } else if c == ')' {
            if stack == 0 {
                return Err(format!("unbalanced brackets in '{}'", input));
            }
            stack -= 1;
            if stack == 0 {
                return Ok(i);
            }
        }
    }
    Err(format!("unbalanced brackets in '{}'", input))
}

pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(num_values);
    let step = (end - start) / (num_values as f64 - 1.0);

    for i in 0..num_values {
        let value = start + (i as f64 * step);
        values.push(value);
    }

    values
}

/// Central-difference numerical derivative, used in tests to cross-check the
/// analytic differentiation.
pub fn numerical_derivative<F>(f: F, x_values: Vec<f64>, h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let mut derivatives = Vec::with_capacity(x_values.len());

    for &x in &x_values {
        let f_x_plus_h = f(x + h);
        let f_x_minus_h = f(x - h);
        let derivative = (f_x_plus_h - f_x_minus_h) / (2.0 * h);
        derivatives.push(derivative);
    }

    derivatives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rightmost_operator_skips_brackets() {
        assert_eq!(
            find_rightmost_operator_outside_brackets("sin(x+1)*2", &['+', '-']),
            None
        );
        assert_eq!(
            find_rightmost_operator_outside_brackets("a - b + c", &['+', '-']),
            Some((6, '+'))
        );
    }

    #[test]
    fn test_rightmost_operator_skips_exponent_sign() {
        assert_eq!(
            find_rightmost_operator_outside_brackets("2e-3", &['+', '-']),
            None
        );
        assert_eq!(
            find_rightmost_operator_outside_brackets("x+2e-3", &['+', '-']),
            Some((1, '+'))
        );
    }

    #[test]
    fn test_leftmost_operator_for_power() {
        assert_eq!(
            find_leftmost_operator_outside_brackets("2^3^2", &['^']),
            Some((1, '^'))
        );
    }

    #[test]
    fn test_find_pair_to_this_bracket() {
        assert_eq!(find_pair_to_this_bracket("sin(x*(1+x))", 3), Ok(11));
        assert!(find_pair_to_this_bracket("(x + y", 0).is_err());
    }

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(0.0, 1.0, 5);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[4], 1.0);
    }
}
