use crate::layout::{MAX_BASE_WIDTH, MAX_TRACK_HEIGHT, MIN_TRACK_HEIGHT};
use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="motifmark",
          version=&**FULL_VERSION,
          about="Plots motif occurrences along exon/intron gene structures",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Draw genes with motif occurrences")]
    Plot(PlotArgs),
    #[clap(about = "Report motif occurrences as a table")]
    Scan(ScanArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("plot")))]
#[command(arg_required_else_help(true))]
pub struct PlotArgs {
    #[clap(required = true)]
    #[clap(short = 'f')]
    #[clap(long = "fasta")]
    #[clap(help = "FASTA file with genes (exons uppercase, introns lowercase)")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub fasta_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'm')]
    #[clap(long = "motifs")]
    #[clap(help = "Text file with one motif per line (IUPAC codes allowed)")]
    #[clap(value_name = "MOTIFS")]
    #[arg(value_parser = check_file_exists)]
    pub motifs_path: PathBuf,

    #[clap(short = 'o')]
    #[clap(long = "image")]
    #[clap(help = "Output image path [default: FASTA path with .png extension]")]
    #[clap(value_name = "IMAGE")]
    #[arg(value_parser = check_image_path)]
    pub output_path: Option<String>,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "track-height")]
    #[clap(value_name = "PIXELS")]
    #[clap(help = "Height of each gene track")]
    #[clap(default_value = "100")]
    #[arg(value_parser = track_height_in_range)]
    pub track_height: u32,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "base-width")]
    #[clap(value_name = "PIXELS")]
    #[clap(help = "Width of a single base")]
    #[clap(default_value = "1")]
    #[arg(value_parser = base_width_in_range)]
    pub base_width: u32,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "font-family")]
    #[clap(value_name = "FONT_FAMILY")]
    #[clap(help = "Font family used for labels")]
    pub font_family: Option<String>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("scan")))]
#[command(arg_required_else_help(true))]
pub struct ScanArgs {
    #[clap(required = true)]
    #[clap(short = 'f')]
    #[clap(long = "fasta")]
    #[clap(help = "FASTA file with genes (exons uppercase, introns lowercase)")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub fasta_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'm')]
    #[clap(long = "motifs")]
    #[clap(help = "Text file with one motif per line (IUPAC codes allowed)")]
    #[clap(value_name = "MOTIFS")]
    #[arg(value_parser = check_file_exists)]
    pub motifs_path: PathBuf,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output TSV path [default: stdout]")]
    #[clap(value_name = "TSV")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: Option<String>,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn check_image_path(s: &str) -> Result<String> {
    let prefix_check = check_prefix_path(s)?;
    let path = Path::new(s);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") | Some("png") | Some("pdf") => Ok(prefix_check),
        _ => Err("Image must have an extension of .svg, .png, or .pdf".to_string()),
    }
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn track_height_in_range(s: &str) -> Result<u32> {
    let height: u32 = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid track height", s))?;
    if (MIN_TRACK_HEIGHT..=MAX_TRACK_HEIGHT).contains(&height) {
        Ok(height)
    } else {
        Err(format!(
            "Track height must be between {} and {}",
            MIN_TRACK_HEIGHT, MAX_TRACK_HEIGHT
        ))
    }
}

fn base_width_in_range(s: &str) -> Result<u32> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid base width", s))?;
    if (1..=MAX_BASE_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(format!("Base width must be between 1 and {}", MAX_BASE_WIDTH))
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}
