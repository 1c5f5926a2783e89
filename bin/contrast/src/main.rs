use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Builder;
use luminant::{
    apca,
    models::hsl::percent,
    wcag::{Level, TextSize},
    Color, ColorHandle, Contrast, Flash, Matrix,
};

/// Evaluate the accessibility of colors: WCAG contrast, APCA lightness
/// contrast, contrast matrices and flashes.
#[derive(Parser, Debug)]
#[command(name = "luminant", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level used unless RUST_LOG is set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the contrast of a foreground on a background
    Ratio {
        /// Foreground color, e.g. "#777" or "rgb(119, 119, 119)"
        foreground: String,
        /// Background color
        background: String,
    },

    /// Adjust the colors until they meet a contrast threshold
    Search {
        /// Foreground color
        foreground: String,
        /// Background color
        background: String,
        /// Conformance level to reach, AA or AAA
        #[arg(long, default_value = "AA")]
        level: Level,
        /// Use the threshold for large text
        #[arg(long)]
        large: bool,
        /// Explicit contrast threshold, overrides --level and --large
        #[arg(long, value_name = "RATIO")]
        threshold: Option<f64>,
        /// Only adjust this color
        #[arg(long, value_enum)]
        isolate: Option<Slot>,
    },

    /// Print the contrast of every pair of colors
    Matrix {
        /// Colors, each may be a comma separated list
        #[arg(required = true)]
        colors: Vec<String>,
        /// Print the matrix as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the APCA score and the readable font weights per size
    Apca {
        /// Foreground color
        foreground: String,
        /// Background color
        background: String,
    },

    /// Check a sequence of colors for general and red flashes
    Flash {
        /// Colors in the order they are shown
        #[arg(required = true)]
        colors: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Slot {
    Foreground,
    Background,
}

fn parse_color(input: &str) -> Result<Color> {
    input
        .parse::<Color>()
        .with_context(|| format!("could not read {input:?} as a color"))
}

fn describe(color: &Color) -> String {
    match (color.hcolor(), color.hsl()) {
        (Some(hcolor), Some(hsl)) => format!(
            "{hcolor} hsl({}, {}, {})",
            hsl.0.round() % 360.0,
            percent(hsl.1),
            percent(hsl.2)
        ),
        _ => "unset".to_owned(),
    }
}

fn pass_fail(contrast: &Contrast, threshold: f64) -> &'static str {
    if contrast.test(threshold) {
        "pass"
    } else {
        "fail"
    }
}

fn ratio(foreground: &str, background: &str) -> Result<()> {
    let foreground = parse_color(foreground)?;
    let background = parse_color(background)?;

    println!("foreground  {}", describe(&foreground));
    println!("background  {}", describe(&background));

    let contrast = Contrast::new(foreground, background);
    let ratio = contrast.contrast().context("both colors must be set")?;
    println!("contrast    {ratio:.2}:1");
    if let Some(score) = contrast.apca() {
        println!("apca        Lc {score:.1}");
    }

    for level in Level::ALL {
        for size in [TextSize::Normal, TextSize::Large] {
            let threshold = level.threshold(size);
            println!(
                "{:<11} {} ({threshold}:1)",
                format!("{level} {size}"),
                pass_fail(&contrast, threshold)
            );
        }
    }

    Ok(())
}

fn search(
    foreground: &str,
    background: &str,
    threshold: f64,
    isolate: Option<Slot>,
) -> Result<()> {
    let foreground = ColorHandle::new(parse_color(foreground)?);
    let background = ColorHandle::new(parse_color(background)?);

    let mut contrast = Contrast::new(&foreground, &background);
    let isolate = isolate.map(|slot| match slot {
        Slot::Foreground => &foreground,
        Slot::Background => &background,
    });
    contrast.search(threshold, isolate);

    println!("foreground  {}", describe(&foreground.borrow()));
    println!("background  {}", describe(&background.borrow()));
    match contrast.contrast() {
        Some(ratio) => println!(
            "contrast    {ratio:.2}:1, {} for {threshold}:1",
            pass_fail(&contrast, threshold)
        ),
        None => println!("contrast    unset"),
    }

    Ok(())
}

fn matrix(colors: &[String], json: bool) -> Result<()> {
    let matrix = Matrix::new(colors.iter().map(String::as_str));
    if matrix.is_empty() {
        anyhow::bail!("none of the arguments is a color");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    print!("{:>8}", "");
    for column in matrix.keys() {
        print!(" {column:>8}");
    }
    println!();

    for row in matrix.keys() {
        print!("{row:>8}");
        for column in matrix.keys() {
            print!(" {:>8}", matrix.get(row, column).unwrap_or("-"));
        }
        println!();
    }

    Ok(())
}

fn apca_weights(foreground: &str, background: &str) -> Result<()> {
    let foreground = parse_color(foreground)?;
    let background = parse_color(background)?;
    let score = apca::score(&foreground, &background).context("both colors must be set")?;

    println!("Lc {score:.1}");
    for size in apca::FONT_SIZES {
        let weights = apca::readable_weights(score, size);
        let weights = if weights.is_empty() {
            "-".to_owned()
        } else {
            weights
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        println!("{:>5} {weights}", format!("{size}px"));
    }

    Ok(())
}

fn flash(colors: &[String], json: bool) -> Result<()> {
    let colors = colors
        .iter()
        .map(|c| parse_color(c))
        .collect::<Result<Vec<_>>>()?;

    let result = Flash::new().test(&colors);
    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("general flash  {}", result.general);
        println!("red flash      {}", result.red);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level)).init();

    match args.command {
        Command::Ratio {
            foreground,
            background,
        } => ratio(&foreground, &background),
        Command::Search {
            foreground,
            background,
            level,
            large,
            threshold,
            isolate,
        } => {
            let size = if large {
                TextSize::Large
            } else {
                TextSize::Normal
            };
            let threshold = threshold.unwrap_or_else(|| level.threshold(size));
            search(&foreground, &background, threshold, isolate)
        }
        Command::Matrix { colors, json } => matrix(&colors, json),
        Command::Apca {
            foreground,
            background,
        } => apca_weights(&foreground, &background),
        Command::Flash { colors, json } => flash(&colors, json),
    }
}
