use pest::Parser;
use figura::{FiguraParser, Rule};

fn main() {
    let input = r#"axis2d(x2=2*pi, xLabel="t") circle(r=(1"#;

    println!("Parsing: {}", input);
    println!();

    match FiguraParser::parse(Rule::program, input) {
        Ok(pairs) => {
            println!(
                "{}",
                pest_ascii_tree::into_ascii_tree(pairs.clone()).unwrap()
            );
        }
        Err(e) => {
            eprintln!("Parse error: {}", e);
        }
    }

    for command in figura::parse::tokenize(input) {
        println!("{command:?}");
    }
}
