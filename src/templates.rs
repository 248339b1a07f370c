//! Ready-to-insert command snippets for each implemented command

/// `(command, snippet)` pairs, in the order an editor palette lists them
pub const TEMPLATES: &[(&str, &str)] = &[
    ("circle", r#"circle(r=50, cx=0, cy=0, fill="none")"#),
    ("arrow", "arrow(x1=0, y1=0, x2=100, y2=0, headSize=10)"),
    ("label", r#"label(text="x", x=0, y=0, size=16)"#),
    (
        "axis2d",
        r#"axis2d(ox=0, oy=0, x1=-10, x2=100, y1=-10, y2=100, xLabel="x", yLabel="y")"#,
    ),
];

/// The snippet for `command`, if it is implemented
pub fn template(command: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, snippet)| *snippet)
}
