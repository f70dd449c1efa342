use std::str::FromStr;

use log::debug;

use crate::operator::ast::Operator;
use crate::operator::errors::OperatorError;

/// Parameterless keys, by display name and calculator label
fn parse_keyword(text: &str) -> Option<Operator> {
    match text {
        "sum" => Some(Operator::DigitSum),
        "mirror" => Some(Operator::MirrorAppend),
        "backspace" | "<<" => Some(Operator::Backspace),
        "shiftleft" | "shift<" => Some(Operator::ShiftLeft),
        "shiftright" | "shift>" => Some(Operator::ShiftRight),
        _ => None,
    }
}

fn parse_replace(from: &str, to: &str) -> Option<Operator> {
    Some(Operator::DigitReplace {
        from: from.trim().parse().ok()?,
        to: to.trim().parse().ok()?,
    })
}

/// Display form with an argument list, e.g. `Divide(2)` or `Replace(1=>2)`
fn parse_call(name: &str, args: &str) -> Option<Operator> {
    match name {
        "multiply" => args.parse().ok().map(Operator::Multiply),
        "add" => args.parse().ok().map(Operator::Add),
        "divide" => args.parse().ok().map(Operator::Divide),
        "append" => args.parse().ok().map(Operator::DigitAppend),
        "replace" => {
            let (from, to) = args.split_once("=>")?;
            parse_replace(from, to)
        }
        _ => None,
    }
}

/// Calculator key labels such as `x4`, `+3`, `-2`, `/5` or a bare `7`
fn parse_shorthand(text: &str) -> Option<Operator> {
    if let Some(digits) = text.strip_prefix("append") {
        return digits.trim().parse().ok().map(Operator::DigitAppend);
    }

    let mut chars = text.chars();
    let key = chars.next()?;
    let rest = chars.as_str().trim();

    match key {
        '*' | 'x' => rest.parse().ok().map(Operator::Multiply),
        '+' => rest.parse().ok().map(Operator::Add),
        '-' => rest
            .parse::<i64>()
            .ok()
            .and_then(i64::checked_neg)
            .map(Operator::Add),
        '/' => rest.parse().ok().map(Operator::Divide),
        _ if text.chars().all(|c| c.is_ascii_digit()) => {
            text.parse().ok().map(Operator::DigitAppend)
        }
        _ => None,
    }
}

impl FromStr for Operator {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();

        let parsed = if let Some(op) = parse_keyword(&text) {
            Some(op)
        } else if let Some((name, args)) = text
            .strip_suffix(')')
            .and_then(|call| call.split_once('('))
        {
            parse_call(name.trim(), args.trim())
        } else if let Some((from, to)) = text.split_once("=>") {
            parse_replace(from, to)
        } else {
            parse_shorthand(&text)
        };

        match parsed {
            Some(op) => {
                debug!("Parsed operator '{}' as {}", s, op);
                Ok(op)
            }
            None => Err(OperatorError::Parse(s.to_string())),
        }
    }
}
