use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use declaration_pdf::{ComposeOptions, Error, ParagraphSplit, config, default_layout_config};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SplitArg {
    /// Every non-blank line is a paragraph
    EveryLine,
    /// Paragraphs are separated by blank lines
    BlankLine,
}

impl From<SplitArg> for ParagraphSplit {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::EveryLine => ParagraphSplit::EveryLine,
            SplitArg::BlankLine => ParagraphSplit::BlankLine,
        }
    }
}

/// Lay out a declaration letter and write it as PDF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Declaration text (UTF-8)
    text: PathBuf,

    /// Output PDF path
    #[arg(short, long)]
    output: PathBuf,

    /// Layout description (JSON); without it the empty default layout is used
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// How the text is cut into paragraphs
    #[arg(long, value_enum, default_value = "every-line")]
    split: SplitArg,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let source = std::fs::read_to_string(&cli.text).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", e, cli.text.display()),
        ))
    })?;
    let layout = match &cli.layout {
        Some(path) => config::load_layout(path)?,
        None => default_layout_config(),
    };
    let options = ComposeOptions {
        paragraph_split: cli.split.into(),
    };
    declaration_pdf::write_pdf(&source, &layout, &options, &cli.output)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {
            log::info!("wrote {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
