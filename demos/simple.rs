use figura::Options;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let input = std::env::args()
        .nth(1)
        .map(|path| std::fs::read_to_string(&path).expect("Failed to read file"))
        .unwrap_or_else(|| {
            r#"circle(r=40, fill="lightyellow")
arrow(x1=-60, y1=0, x2=60, y2=0)
label(text="r", x=20, y=10, isMath=false)"#
                .to_string()
        });

    println!("{}", figura::render(&input, &Options::default()));
}
