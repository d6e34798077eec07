use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use seamcarve::imageio::{load_image, save_color, save_gray};
use seamcarve::{Orientation, SeamCarver};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn number(matches: &ArgMatches<'_>, name: &str, default: u32) -> Result<u32, Error> {
    match matches.value_of(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| format_err!("--{} expects a whole number, got {:?}", name, value)),
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "seamcarve=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width (defaults to the current width)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height (defaults to the current height)"),
        )
        .arg(
            Arg::with_name("highlight")
                .long("highlight")
                .takes_value(true)
                .possible_values(&["vertical", "horizontal"])
                .conflicts_with_all(&["width", "height"])
                .help("Paint seams on a grayscale copy instead of removing them"),
        )
        .arg(
            Arg::with_name("seams")
                .long("seams")
                .takes_value(true)
                .requires("highlight")
                .help("How many seams to paint (default 1)"),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();
    let image = load_image(input)?;
    let (width, height) = image.dimensions();
    info!(input, width, height, "loaded");

    if let Some(direction) = matches.value_of("highlight") {
        let orientation = match direction {
            "vertical" => Orientation::Vertical,
            "horizontal" => Orientation::Horizontal,
            other => return Err(format_err!("unknown seam direction {:?}", other)),
        };
        let seams = number(&matches, "seams", 1)?;
        let gray = SeamCarver::new(&image).highlight(orientation, seams)?;
        save_gray(&gray, output)?;
        info!(output, seams, "highlighted");
    } else {
        let new_width = number(&matches, "width", width)?;
        let new_height = number(&matches, "height", height)?;
        let carved = SeamCarver::new(&image).carve(new_width, new_height)?;
        save_color(&carved, output)?;
        info!(output, width = new_width, height = new_height, "carved");
    }
    Ok(())
}
