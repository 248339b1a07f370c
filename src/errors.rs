//! Error types with rich diagnostics using miette
//!
//! Nothing here crosses [`crate::parse`] or [`crate::render_svg`]: parsing
//! encodes problems in the returned shapes. These types exist for callers
//! that want to *report* those problems (the CLI's `check` and `eval`).

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::Ending;
use crate::shape::{Shape, ShapeKind};

// ============================================================================
// Expression Errors
// ============================================================================

/// Errors from evaluating an arithmetic argument such as `2*pi`
#[derive(Error, Diagnostic, Debug)]
pub enum EvalError {
    #[error("invalid expression: {message}")]
    #[diagnostic(
        code(figura::eval::syntax),
        help("expressions support numbers, pi, e, + - * / ^ and parentheses")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

impl EvalError {
    /// Build a syntax error from a pest failure inside `expression`
    pub(crate) fn from_pest(expression: &str, err: pest::error::Error<crate::Rule>) -> Self {
        let (start, end) = match err.location {
            pest::error::InputLocation::Pos(pos) => (pos, pos),
            pest::error::InputLocation::Span(span) => span,
        };
        let start = start.min(expression.len());
        let len = end.saturating_sub(start).max(1).min(expression.len() - start);
        EvalError::Syntax {
            message: err.variant.message().into_owned(),
            src: NamedSource::new("expression", expression.to_string()),
            span: (start, len).into(),
        }
    }
}

// ============================================================================
// Command Errors
// ============================================================================

/// Problems with a command in the source text, located by byte span
#[derive(Error, Diagnostic, Debug)]
pub enum CommandError {
    #[error("unknown command: {name}")]
    #[diagnostic(
        code(figura::parse::unknown_command),
        help("known commands are circle, arrow, label and axis2d")
    )]
    UnknownCommand {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a command")]
        span: SourceSpan,
    },

    #[error("unterminated command: {name}")]
    #[diagnostic(
        code(figura::parse::unterminated_command),
        help("add the closing `)`; everything after this point was ignored")
    )]
    Unterminated {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("opened here, never closed")]
        span: SourceSpan,
    },

    #[error("nesting too deep: {name}")]
    #[diagnostic(
        code(figura::parse::nesting_too_deep),
        help("reduce the parenthesis nesting inside this command")
    )]
    TooDeep {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("this command was skipped")]
        span: SourceSpan,
    },
}

/// Turn the error-carrying shapes of a parse into located diagnostics.
///
/// `source` must be the text the shapes were parsed from.
pub fn diagnostics(source_name: &str, source: &str, shapes: &[Shape]) -> Vec<CommandError> {
    shapes
        .iter()
        .filter_map(|shape| {
            let ShapeKind::Unknown(unknown) = &shape.kind else {
                return None;
            };
            let src = NamedSource::new(source_name, source.to_string());
            let span: SourceSpan = shape.span.clone().into();
            let name = unknown.name.clone();
            Some(match unknown.ending {
                Ending::Closed => CommandError::UnknownCommand { name, src, span },
                Ending::Unclosed => CommandError::Unterminated { name, src, span },
                Ending::TooDeep => CommandError::TooDeep { name, src, span },
            })
        })
        .collect()
}

// ============================================================================
// Option Errors
// ============================================================================

/// Errors from reading configuration values given as text
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("unknown unit mode `{0}`")]
    #[diagnostic(
        code(figura::options::unit_mode),
        help("expected `absolute` or `relative`")
    )]
    UnknownUnitMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CanvasSize, UnitMode, parse};

    #[test]
    fn diagnostics_for_unknown_and_unterminated() {
        let source = "circle() foo(x=1) arrow(x1=(";
        let shapes = parse(source, UnitMode::Absolute, CanvasSize::default());
        let errors = diagnostics("input.fig", source, &shapes);

        assert_eq!(errors.len(), 2);
        assert!(matches!(&errors[0], CommandError::UnknownCommand { name, .. } if name == "foo"));
        assert!(matches!(&errors[1], CommandError::Unterminated { name, .. } if name == "arrow"));
        assert_eq!(errors[0].to_string(), "unknown command: foo");
    }

    #[test]
    fn unknown_span_points_at_command() {
        let source = "circle()  foo(x=1)";
        let shapes = parse(source, UnitMode::Absolute, CanvasSize::default());
        let errors = diagnostics("input.fig", source, &shapes);
        let CommandError::UnknownCommand { span, .. } = &errors[0] else {
            panic!("expected unknown command");
        };
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), "foo(x=1)".len());
    }

    #[test]
    fn diagnostics_for_deep_nesting() {
        let deep = format!("label(text={}1{})", "(".repeat(100), ")".repeat(100));
        let source = format!("circle() {deep} arrow()");
        let shapes = parse(&source, UnitMode::Absolute, CanvasSize::default());
        let errors = diagnostics("input.fig", &source, &shapes);

        assert_eq!(errors.len(), 1);
        let CommandError::TooDeep { name, span, .. } = &errors[0] else {
            panic!("expected a nesting error");
        };
        assert_eq!(name, "label");
        assert_eq!(span.offset(), "circle() ".len());
        assert_eq!(span.len(), deep.len());
    }

    #[test]
    fn eval_error_span_is_inside_source() {
        let err = crate::try_evaluate("2*").unwrap_err();
        let EvalError::Syntax { span, .. } = &err;
        assert!(span.offset() <= 2);
    }
}
