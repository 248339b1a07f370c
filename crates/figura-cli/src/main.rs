use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use figura::{CanvasSize, Options, UnitMode};
use tracing::{debug, info};

#[derive(Parser)]
#[command(author, version, about = "Compile figura diagram commands to SVG", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render commands to an SVG document
    Render {
        #[command(flatten)]
        input: InputArgs,
        /// Write the SVG here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        render: RenderArgs,
        /// Hide shapes by id before rendering (comma separated)
        #[arg(long, value_delimiter = ',')]
        hide: Vec<usize>,
    },
    /// List the shapes the commands produce
    Layers {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        units: UnitArgs,
        /// Also print each shape's resolved properties and bounding box
        #[arg(long)]
        props: bool,
    },
    /// Report unknown, unterminated and over-nested commands
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Evaluate an arithmetic expression such as `2*pi`
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Print the insertion snippet for each command
    Templates,
}

#[derive(Args)]
struct InputArgs {
    /// Source file; stdin when omitted or `-`
    input: Option<PathBuf>,
}

impl InputArgs {
    fn name(&self) -> String {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
            _ => {
                let mut source = String::new();
                std::io::stdin()
                    .read_to_string(&mut source)
                    .context("reading stdin")?;
                Ok(source)
            }
        }
    }
}

#[derive(Args)]
struct UnitArgs {
    /// `absolute` or `relative`
    #[arg(long, default_value = "absolute")]
    unit_mode: UnitMode,
    /// Canvas width
    #[arg(long, default_value_t = 200.0)]
    width: f64,
    /// Canvas height
    #[arg(long, default_value_t = 200.0)]
    height: f64,
}

impl UnitArgs {
    fn canvas(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    units: UnitArgs,
    /// Margin around the fitted shapes
    #[arg(long, default_value_t = 20.0)]
    padding: f64,
    /// Show the canvas instead of fitting the shapes
    #[arg(long)]
    no_auto_fit: bool,
    /// Leave out the background grid
    #[arg(long)]
    no_grid: bool,
    /// Use the canvas size in pixels instead of 100%
    #[arg(long)]
    fixed_size: bool,
}

impl RenderArgs {
    fn options(&self) -> Options {
        Options::default()
            .with_unit_mode(self.units.unit_mode)
            .with_canvas(self.units.width, self.units.height)
            .with_padding(self.padding)
            .with_auto_fit(!self.no_auto_fit)
            .with_grid(!self.no_grid)
            .with_zoom_to_fit(!self.fixed_size)
    }
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries the SVG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            input,
            output,
            render,
            hide,
        } => {
            let source = input.read()?;
            let options = render.options();
            let mut shapes = figura::parse(&source, options.unit_mode, options.canvas);
            for id in hide {
                if !figura::set_visibility(&mut shapes, id, false) {
                    tracing::warn!(id, "no shape with this id");
                }
            }
            let svg = figura::render_svg(&shapes, &options);
            match output {
                Some(path) => {
                    fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), shapes = shapes.len(), "wrote svg");
                }
                None => println!("{svg}"),
            }
        }
        Command::Layers {
            input,
            units,
            props,
        } => {
            let source = input.read()?;
            let shapes = figura::parse(&source, units.unit_mode, units.canvas());
            if !props {
                print!("{}", figura::layer_listing(&shapes));
                return Ok(ExitCode::SUCCESS);
            }
            for shape in &shapes {
                let b = shape.bounding_box;
                println!(
                    "{}{}  box=[{}, {}, {}, {}]",
                    shape.layer_label(),
                    if shape.visible { "" } else { " (hidden)" },
                    b.min_x,
                    b.min_y,
                    b.max_x,
                    b.max_y
                );
                for (key, value) in shape.properties() {
                    println!("    {key} = {value}");
                }
                for error in &shape.errors {
                    println!("    error: {error}");
                }
            }
        }
        Command::Check { input } => {
            let source = input.read()?;
            let shapes = figura::parse(&source, UnitMode::Absolute, CanvasSize::default());
            let errors = figura::diagnostics(&input.name(), &source, &shapes);
            debug!(shapes = shapes.len(), errors = errors.len(), "checked");
            if errors.is_empty() {
                println!("ok: {} shapes", shapes.len());
                return Ok(ExitCode::SUCCESS);
            }
            for error in errors {
                eprintln!("{:?}", miette::Report::new(error));
            }
            return Ok(ExitCode::FAILURE);
        }
        Command::Eval { expression } => match figura::try_evaluate(&expression) {
            Ok(value) => println!("{value}"),
            Err(err) => {
                eprintln!("{:?}", miette::Report::new(err));
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Templates => {
            for (name, snippet) in figura::templates::TEMPLATES {
                println!("{name:<8} {snippet}");
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
