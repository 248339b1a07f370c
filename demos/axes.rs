use figura::{Options, UnitMode};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let input = r#"
// unit circle on relative axes
axis2d(ox=0.5, oy=0.5, x1=0.1, x2=0.9, y1=0.1, y2=0.9, xLabel="t", yLabel="f(t)")
circle(cx=0.5, cy=0.5, r=0.25, fill="none", stroke="steelblue")
"#;

    let options = Options::default()
        .with_unit_mode(UnitMode::Relative)
        .with_canvas(400.0, 300.0);
    let shapes = figura::parse(input, options.unit_mode, options.canvas);

    eprint!("{}", figura::layer_listing(&shapes));
    println!("{}", figura::render_svg(&shapes, &options));
}
