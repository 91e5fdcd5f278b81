use crate::lang::{Charset, Error};
use crate::mach::{Config, Image, Listing};
use ansi_term::Style;
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn, Level};

/// ZX81 P file lister.
#[derive(Parser, Debug)]
#[command(name = "plist", version, about = "Lists the BASIC program in a ZX81 P file")]
pub struct Args {
    /// Show the current line cursor (toggle)
    #[arg(short = 'c', action = ArgAction::Count)]
    cursor: u8,

    /// Use the ZX-81.TTF font (toggle)
    #[arg(short = 'z', action = ArgAction::Count)]
    font: u8,

    /// Maximum number of characters per line [default: 32]
    #[arg(short = 'w', value_name = "WIDTH")]
    width: Option<usize>,

    /// First line to list [default: 0]
    #[arg(short = 's', value_name = "LINE")]
    start: Option<u16>,

    /// Don't stop the listing on spurious program endings (toggle)
    #[arg(short = 'f', action = ArgAction::Count)]
    full: u8,

    /// Accurate: cursor and font on, width 32, full listing off.
    /// Applies first wherever it appears: -c -z -f still toggle it and
    /// -w -s still override it
    #[arg(short = 'a')]
    accurate: bool,

    /// Output listing to this file [default: stdout]
    #[arg(short = 'o', value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// More log output on stderr, repeat for more
    #[arg(short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// The P file to list
    input: PathBuf,
}

impl Args {
    /// The run configuration these options ask for.
    pub fn config(&self) -> Config {
        let mut config = if self.accurate {
            Config::accurate()
        } else {
            Config::default()
        };
        if self.cursor % 2 == 1 {
            config.show_cursor = !config.show_cursor;
        }
        if self.font % 2 == 1 {
            config.charset = config.charset.toggle();
        }
        if self.full % 2 == 1 {
            config.full = !config.full;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(start) = self.start {
            config.start_line = start;
        }
        config
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

pub fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("no Ctrl-C handler: {}", error);
    }

    if let Err(error) = run(&args, &interrupted) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn run(args: &Args, interrupted: &AtomicBool) -> Result<(), Error> {
    let config = args.config();
    config.validate()?;
    let image = load(&args.input)?;

    let output_name = match &args.output {
        Some(path) => path.display().to_string(),
        None => "<stdout>".to_string(),
    };
    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::from_io(&e, &output_name))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(std::io::stdout())),
    };

    let mut count = 0;
    for line in Listing::new(&image, &config) {
        sink.write_all(line.as_bytes())
            .map_err(|e| Error::from_io(&e, &output_name))?;
        count += 1;
        if interrupted.load(Ordering::SeqCst) {
            warn!("interrupted after {} lines", count);
            break;
        }
    }
    sink.flush().map_err(|e| Error::from_io(&e, &output_name))?;
    info!(
        "listed {} lines to {} ({} chars per line, {})",
        count,
        output_name,
        config.width,
        match config.charset {
            Charset::Ascii => "ascii",
            Charset::Font => "font",
        }
    );
    Ok(())
}

/// Reads a P file into a fresh memory image.
pub fn load(path: &Path) -> Result<Image, Error> {
    let name = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| Error::from_io(&e, &name))?;
    info!("loaded {} bytes from {}", bytes.len(), name);
    Ok(Image::from_p_file(&bytes))
}
