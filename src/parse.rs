//! Parse pest pairs into AST nodes
//!
//! None of the command-level functions fail: the grammar accepts any text,
//! skipping what is not a command, and malformed argument items are kept out
//! of the [`ArgumentList`]. Only [`parse_expression`] reports errors.
//!
//! The grammar recurses once per parenthesis level, so [`tokenize`] first
//! scans for commands nested deeper than [`MAX_NESTING`] and cuts them out
//! as [`Ending::TooDeep`] invocations before handing the rest to pest.

use std::ops::Range;

use crate::ast::*;
use crate::errors::EvalError;
use crate::log::{trace, warn};
use crate::{FiguraParser, Rule};
use pest::Parser;
use pest::iterators::{Pair, Pairs};

/// Deepest parenthesis nesting accepted inside one command, counting the
/// command's own parentheses
pub const MAX_NESTING: usize = 64;

/// Split command text into invocations, in source order.
///
/// An invocation without a matching `)` swallows the rest of the text and
/// ends the list with [`Ending::Unclosed`]. An invocation nested deeper
/// than [`MAX_NESTING`] is returned as [`Ending::TooDeep`] with empty
/// arguments, and tokenizing carries on after it.
pub fn tokenize(source: &str) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut offset = 0;
    let mut rest = source;
    while let Some(deep) = find_too_deep(rest) {
        commands.extend(tokenize_shallow(&rest[..deep.span.start], offset));
        trace!(name = %deep.name, "command nested too deep");
        commands.push(Command {
            name: deep.name,
            arguments: String::new(),
            span: offset + deep.span.start..offset + deep.span.end,
            ending: Ending::TooDeep,
        });
        if !deep.closed {
            return commands;
        }
        offset += deep.span.end;
        rest = &rest[deep.span.end..];
    }
    commands.extend(tokenize_shallow(rest, offset));
    commands
}

/// Tokenize text with no over-deep command; spans are shifted by `offset`
fn tokenize_shallow(source: &str, offset: usize) -> Vec<Command> {
    let pairs = match FiguraParser::parse(Rule::program, source) {
        Ok(pairs) => pairs,
        Err(_err) => {
            // Only resource limits make `program` fail; keep the text as one
            // diagnostic instead of dropping it.
            warn!(error = %_err, "command text did not tokenize");
            let name = source
                .trim_start()
                .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .next()
                .unwrap_or_default();
            return vec![Command {
                name: name.to_string(),
                arguments: String::new(),
                span: offset..offset + source.len(),
                ending: Ending::TooDeep,
            }];
        }
    };

    let mut commands = Vec::new();
    for pair in pairs.flatten() {
        let ending = match pair.as_rule() {
            Rule::command => Ending::Closed,
            Rule::unterminated => Ending::Unclosed,
            _ => continue,
        };
        let span = pair.as_span();
        let mut name = String::new();
        let mut arguments = String::new();
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::name => name = inner.as_str().to_string(),
                Rule::arguments | Rule::remainder => arguments = inner.as_str().to_string(),
                _ => {}
            }
        }
        trace!(%name, %arguments, ?ending, "tokenized command");
        commands.push(Command {
            name,
            arguments,
            span: offset + span.start()..offset + span.end(),
            ending,
        });
    }
    commands
}

/// The first command of `source` whose parentheses nest too deep
struct DeepCommand {
    name: String,
    /// From the start of the name to just past the closing `)`, or to the
    /// end of the text when the command never closes
    span: Range<usize>,
    closed: bool,
}

/// Walk the command stream the way the `program` rule does, measuring each
/// command's nesting: `//` comments and text between commands are skipped,
/// quoted strings inside arguments hide their parentheses.
fn find_too_deep(source: &str) -> Option<DeepCommand> {
    let bytes = source.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            i += bytes[i..]
                .iter()
                .position(|&c| c == b'\n' || c == b'\r')
                .unwrap_or(bytes.len() - i);
            continue;
        }
        if !(b.is_ascii_alphabetic() || b == b'_') {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
            i += 1;
        }
        let name_end = i;
        let mut open = i;
        while open < bytes.len() && matches!(bytes[open], b' ' | b'\t' | b'\r' | b'\n') {
            open += 1;
        }
        if bytes.get(open) != Some(&b'(') {
            continue;
        }

        let (end, depth, closed) = measure_arguments(bytes, open);
        if depth > MAX_NESTING {
            return Some(DeepCommand {
                name: source[start..name_end].to_string(),
                span: start..end,
                closed,
            });
        }
        if !closed {
            return None;
        }
        i = end;
    }
    None
}

/// From the `(` at `open`: the end of the invocation, its deepest nesting,
/// and whether it closed
fn measure_arguments(bytes: &[u8], open: usize) -> (usize, usize, bool) {
    let mut depth = 0usize;
    let mut deepest = 0;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return (i + 1, deepest, true);
                }
            }
            b'"' => {
                // An unmatched quote is an ordinary character
                if let Some(close) = bytes[i + 1..].iter().position(|&c| c == b'"') {
                    i += close + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    (bytes.len(), deepest, false)
}

/// Split the text between a command's parentheses into `key=value` pairs.
pub fn parse_arguments(arguments: &str) -> ArgumentList {
    let pairs = match FiguraParser::parse(Rule::argument_list, arguments) {
        Ok(pairs) => pairs,
        Err(_err) => {
            // Unreachable for text from `tokenize`, which caps nesting
            warn!(error = %_err, "arguments did not parse; using defaults");
            return ArgumentList::default();
        }
    };

    let mut list = ArgumentList::default();
    for pair in pairs.flatten() {
        if pair.as_rule() != Rule::pair {
            continue;
        }
        let mut key = None;
        let mut value = "";
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::key => key = Some(inner.as_str()),
                Rule::value => value = inner.as_str(),
                _ => {}
            }
        }
        if let Some(key) = key {
            list.arguments.push(Argument {
                key: key.to_string(),
                value: value.trim().to_string(),
            });
        }
    }
    list
}

/// Read the longest leading float of `value`, like a lenient `parseFloat`.
///
/// `"10px"` reads as 10, `"2*pi"` as 2; empty or non-numeric text is NaN.
pub fn parse_number(value: &str) -> f64 {
    FiguraParser::parse(Rule::number_prefix, value)
        .ok()
        .and_then(|pairs| pairs.flatten().find(|p| p.as_rule() == Rule::number))
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Strip one layer of surrounding double quotes.
pub fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse an arithmetic expression such as `2*pi` or `-(1+2)^2`.
pub fn parse_expression(source: &str) -> Result<Expr, EvalError> {
    let mut pairs = FiguraParser::parse(Rule::expression, source)
        .map_err(|e| EvalError::from_pest(source, e))?;
    let sum = pairs
        .next()
        .and_then(|expression| expression.into_inner().find(|p| p.as_rule() == Rule::sum))
        .ok_or_else(|| malformed(source))?;
    build_sum(source, sum)
}

fn malformed(source: &str) -> EvalError {
    EvalError::Syntax {
        message: "malformed expression".to_string(),
        src: miette::NamedSource::new("expression", source.to_string()),
        span: (0, source.len()).into(),
    }
}

fn next_pair<'i>(source: &str, pairs: &mut Pairs<'i, Rule>) -> Result<Pair<'i, Rule>, EvalError> {
    pairs.next().ok_or_else(|| malformed(source))
}

fn build_sum(source: &str, pair: Pair<Rule>) -> Result<Expr, EvalError> {
    // sum = product ~ (add_op ~ product)*
    let mut inner = pair.into_inner();
    let mut result = build_product(source, next_pair(source, &mut inner)?)?;
    while let Some(op_pair) = inner.next() {
        let op = match op_pair.as_str() {
            "+" => BinaryOp::Add,
            _ => BinaryOp::Sub,
        };
        let rhs = build_product(source, next_pair(source, &mut inner)?)?;
        result = Expr::BinaryOp(Box::new(result), op, Box::new(rhs));
    }
    Ok(result)
}

fn build_product(source: &str, pair: Pair<Rule>) -> Result<Expr, EvalError> {
    // product = unary ~ (mul_op ~ unary)*
    let mut inner = pair.into_inner();
    let mut result = build_unary(source, next_pair(source, &mut inner)?)?;
    while let Some(op_pair) = inner.next() {
        let op = match op_pair.as_str() {
            "*" => BinaryOp::Mul,
            _ => BinaryOp::Div,
        };
        let rhs = build_unary(source, next_pair(source, &mut inner)?)?;
        result = Expr::BinaryOp(Box::new(result), op, Box::new(rhs));
    }
    Ok(result)
}

fn build_unary(source: &str, pair: Pair<Rule>) -> Result<Expr, EvalError> {
    // unary = prefix_op* ~ power
    let mut prefixes = Vec::new();
    let mut power = None;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::prefix_op => prefixes.push(match inner.as_str() {
                "-" => UnaryOp::Neg,
                _ => UnaryOp::Pos,
            }),
            Rule::power => power = Some(inner),
            _ => {}
        }
    }
    let mut result = build_power(source, power.ok_or_else(|| malformed(source))?)?;
    for op in prefixes.into_iter().rev() {
        result = Expr::UnaryOp(op, Box::new(result));
    }
    Ok(result)
}

fn build_power(source: &str, pair: Pair<Rule>) -> Result<Expr, EvalError> {
    // power = atom ~ (pow_op ~ unary)?
    let mut inner = pair.into_inner();
    let base = build_atom(source, next_pair(source, &mut inner)?)?;
    match inner.next() {
        Some(_pow_op) => {
            let exponent = build_unary(source, next_pair(source, &mut inner)?)?;
            Ok(Expr::BinaryOp(Box::new(base), BinaryOp::Pow, Box::new(exponent)))
        }
        None => Ok(base),
    }
}

fn build_atom(source: &str, pair: Pair<Rule>) -> Result<Expr, EvalError> {
    match pair.as_rule() {
        Rule::unsigned_number => pair
            .as_str()
            .parse::<f64>()
            .map(Expr::Number)
            .map_err(|_| malformed(source)),
        Rule::constant => {
            let constant = if pair.as_str().eq_ignore_ascii_case("pi") {
                Constant::Pi
            } else {
                Constant::E
            };
            Ok(Expr::Constant(constant))
        }
        Rule::sum => build_sum(source, pair),
        _ => Err(malformed(source)),
    }
}
