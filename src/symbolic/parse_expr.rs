use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{
    find_leftmost_operator_outside_brackets, find_pair_to_this_bracket,
    find_rightmost_operator_outside_brackets,
};
/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedZeroFinder::symbolic::symbolic_engine::Expr;
/// let input = "x^2 - 2";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let f = parsed_expression.lambdify1D_checked();
/// println!("{}, f(1.0) = {:?} \n", input, f(1.0));
/// ```
//                  search recursion diagram
//                "x^2+exp(x)-2"                    |
//                |       left  | right             |
//                |_________________________________|
//                |           split by rightmost -  |
//                |_________________________________|
//                | x^2+exp(x)  |        2          |
//                |      |      |        Ok         |
//                |_____\|/_____|___________________|
//                |           split by rightmost +  |
//                |_________________________________|
//                |     x^2     |      exp(x)       |
//                |      |      |         |         |
//                |_____\|/_____|________\|/________|
//                |  split by ^ |  function atom    |
//                |   x  |  2   |     exp -> x      |
//                |   Ok |  Ok  |        Ok         |
//                  etc...

const FUNCTION_NAMES: [&str; 9] = [
    "exp", "ln", "log", "sin", "cos", "tan", "tg", "sqrt", "abs",
];

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn parse_expression_func(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty expression".to_string());
    }

    // the whole input is a number literal (also covers scientific notation
    // like 2e-3 and signed literals like -3.5)
    if let Ok(value) = input.parse::<f64>() {
        return Ok(Expr::Const(value));
    }

    // addition and subtraction, lowest precedence
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['+', '-']) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        if right.is_empty() {
            return Err(format!("missing operand after '{}' in '{}'", op, input));
        }
        if left.is_empty() {
            // unary sign
            return match op {
                '-' => Ok(Expr::Mul(
                    Expr::Const(-1.0).boxed(),
                    parse_expression_func(right)?.boxed(),
                )),
                _ => parse_expression_func(right),
            };
        }
        let lhs = parse_expression_func(left)?.boxed();
        let rhs = parse_expression_func(right)?.boxed();
        return match op {
            '+' => Ok(Expr::Add(lhs, rhs)),
            _ => Ok(Expr::Sub(lhs, rhs)),
        };
    }

    // multiplication and division
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['*', '/']) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        if left.is_empty() {
            return Err(format!("missing operand before '{}' in '{}'", op, input));
        }
        if right.is_empty() {
            return Err(format!("missing operand after '{}' in '{}'", op, input));
        }
        let lhs = parse_expression_func(left)?.boxed();
        let rhs = parse_expression_func(right)?.boxed();
        return match op {
            '*' => Ok(Expr::Mul(lhs, rhs)),
            _ => Ok(Expr::Div(lhs, rhs)),
        };
    }

    // exponentiation, right-associative
    if let Some((pos, _)) = find_leftmost_operator_outside_brackets(input, &['^']) {
        let base = input[..pos].trim();
        let exponent = input[pos + 1..].trim();
        if base.is_empty() {
            return Err(format!("missing base for '^' in '{}'", input));
        }
        if exponent.is_empty() {
            return Err(format!("missing exponent for '^' in '{}'", input));
        }
        return Ok(Expr::Pow(
            parse_expression_func(base)?.boxed(),
            parse_expression_func(exponent)?.boxed(),
        ));
    }

    // function call or fully parenthesized expression
    if let Some(bracket_start) = input.find('(') {
        let bracket_end = find_pair_to_this_bracket(input, bracket_start)?;
        if bracket_end != input.len() - 1 {
            return Err(format!(
                "unexpected characters after closing bracket in '{}'",
                input
            ));
        }
        let name = input[..bracket_start].trim();
        let inner = &input[bracket_start + 1..bracket_end];
        if name.is_empty() {
            return parse_expression_func(inner);
        }
        let arg = parse_expression_func(inner)?.boxed();
        return match name {
            "exp" => Ok(Expr::Exp(arg)),
            "ln" | "log" => Ok(Expr::Ln(arg)),
            "sin" => Ok(Expr::sin(arg)),
            "cos" => Ok(Expr::cos(arg)),
            "tan" | "tg" => Ok(Expr::tg(arg)),
            "sqrt" => Ok(Expr::sqrt(arg)),
            "abs" => Ok(Expr::abs(arg)),
            _ => Err(format!("unknown function '{}'", name)),
        };
    }

    // constants were handled above, so only a variable remains
    if is_identifier(input) {
        if FUNCTION_NAMES.contains(&input) {
            return Err(format!("function '{}' used without an argument", input));
        }
        return Ok(Expr::Var(input.to_string()));
    }

    Err(format!("invalid expression '{}'", input))
}

impl Expr {
    /// Parses a textual mathematical expression into a symbolic expression.
    /// Malformed input comes back as `Err`, never as a panic.
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        parse_expression_func(input)
    }
}
