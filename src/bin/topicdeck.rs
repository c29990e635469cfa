use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "topicdeck",
    version,
    about = "Generate a slide deck with images and text for a topic"
)]
struct Cli {
    /// Topic for the presentation.
    #[arg(long)]
    topic: String,

    /// Number of slides, title slide included.
    #[arg(
        long = "slides",
        alias = "slide-count",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    slides: u32,

    /// Number of images to fetch.
    #[arg(long = "images", alias = "image-count", default_value_t = 10)]
    images: u32,

    /// Background color of the slides.
    #[arg(long = "bg-color", alias = "bg_color", value_enum, default_value_t = BgChoice::White)]
    bg_color: BgChoice,

    /// Output format of the deck.
    #[arg(long, value_enum, default_value_t = FormatChoice::Html)]
    format: FormatChoice,

    /// Directory the deck is written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Directory downloaded images are stored in until the deck is written.
    #[arg(long, default_value = ".")]
    work_dir: PathBuf,

    /// Seed for slide styling; omit for different colors and fonts on every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Take images from this directory instead of searching the web.
    #[arg(long)]
    images_from: Option<PathBuf>,

    /// Take paragraphs from this text file (blank-line separated) instead of Wikipedia.
    #[arg(long)]
    text_from: Option<PathBuf>,

    /// Print the composed slides as JSON to stdout.
    #[arg(long)]
    dump_plan: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BgChoice {
    White,
    Black,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Html,
    Json,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(path) => {
            println!("Presentation saved as {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("topicdeck=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// clap exits with 2 on usage errors; deck failures stay clear of it.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<topicdeck::DeckError>() {
        Some(topicdeck::DeckError::InsufficientAssets(_)) => 3,
        Some(topicdeck::DeckError::InsufficientContent(_)) => 4,
        _ => 1,
    }
}

fn run(cli: Cli) -> anyhow::Result<PathBuf> {
    let background = match cli.bg_color {
        BgChoice::White => topicdeck::Background::Light,
        BgChoice::Black => topicdeck::Background::Dark,
    };
    let request = topicdeck::TopicRequest::new(
        cli.topic,
        cli.slides as usize,
        cli.images as usize,
        background,
    )?;
    let options = topicdeck::DeckRunOptions {
        out_dir: cli.out_dir,
        work_dir: cli.work_dir,
    };

    let http = topicdeck::HttpSettings::default();
    let mut images: Box<dyn topicdeck::ImageSource> = match cli.images_from {
        Some(dir) => Box::new(topicdeck::DirImageSource::new(dir)),
        None => Box::new(topicdeck::GoogleImageSource::new(&http)?),
    };
    let mut text: Box<dyn topicdeck::TextSource> = match cli.text_from {
        Some(path) => Box::new(topicdeck::FileTextSource::new(path)),
        None => Box::new(topicdeck::WikipediaTextSource::new(&http)?),
    };
    let mut sink = topicdeck::create_sink(match cli.format {
        FormatChoice::Html => topicdeck::SinkKind::Html,
        FormatChoice::Json => topicdeck::SinkKind::Json,
    });
    let styles = match cli.seed {
        Some(seed) => topicdeck::StyleGenerator::seeded(seed),
        None => topicdeck::StyleGenerator::from_entropy(),
    };

    let outcome =
        topicdeck::DeckPipeline::new(images.as_mut(), text.as_mut(), sink.as_mut())
            .with_styles(styles)
            .run(&request, &options)?;

    for (path, reason) in &outcome.cleanup.failed {
        eprintln!("warning: could not delete {}: {reason}", path.display());
    }

    if cli.dump_plan {
        let json =
            serde_json::to_string_pretty(&outcome.slides).context("serialize slide plan")?;
        println!("{json}");
    }

    Ok(outcome.output_path)
}
