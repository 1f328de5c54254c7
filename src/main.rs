//! The `listmark` binary.

use listmark::{Document, ListOptions, Options, Pipeline};

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

const EXIT_SUCCESS: i32 = 0;
const EXIT_PARSE_CONFIG: i32 = 2;
const EXIT_READ_INPUT: i32 = 3;

#[derive(Debug, Parser)]
#[command(about, version)]
#[command(after_help = "\
By default, listmark will attempt to read command-line options from a config file \
specified by --config-file.  This behaviour can be disabled by passing --config-file none.\n\
\n\
Set RUST_LOG=listmark=debug to trace how lists are recognized.")]
struct Cli {
    /// Markdown file(s) to process; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Option<Vec<PathBuf>>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Do not recognize bulleted (*, +, -) lists
    #[arg(long)]
    no_bulleted: bool,

    /// Do not recognize numbered (1.) lists
    #[arg(long)]
    no_numbered: bool,

    /// Recognize numbered lists before bulleted ones
    #[arg(long)]
    numbered_first: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut cli = Cli::parse();

    if cli.config_file != "none" {
        let mut args = std::env::args_os().collect::<Vec<_>>();

        if let Ok(config_args) = fs::read_to_string(&cli.config_file) {
            match shell_words::split(&config_args) {
                Ok(config_args) => {
                    for (i, arg) in config_args.into_iter().enumerate() {
                        args.insert(i + 1, arg.into());
                    }
                }
                Err(e) => {
                    eprintln!("failed to parse {}: {}", cli.config_file, e);
                    process::exit(EXIT_PARSE_CONFIG);
                }
            }
        }

        cli = Cli::parse_from(args);
    }

    log::debug!("{:?}", cli);

    let options = Options {
        lists: ListOptions {
            bulleted: !cli.no_bulleted,
            numbered: !cli.no_numbered,
            numbered_first: cli.numbered_first,
        },
    };

    let mut s: Vec<u8> = Vec::with_capacity(2048);

    match cli.files {
        None => {
            io::stdin().read_to_end(&mut s)?;
        }
        Some(ref files) => {
            for f in files {
                match fs::File::open(f) {
                    Ok(mut io) => {
                        io.read_to_end(&mut s)?;
                    }
                    Err(e) => {
                        eprintln!("failed to read {}: {}", f.display(), e);
                        process::exit(EXIT_READ_INPUT);
                    }
                }
            }
        }
    };

    let document = Document::parse(&String::from_utf8(s)?);
    let document = Pipeline::from_options(&options).run(document);

    if let Some(output_filename) = cli.output {
        let mut bw = io::BufWriter::new(fs::File::create(output_filename)?);
        fmt2io::write(&mut bw, |writer| write!(writer, "{}", document))?;
        bw.flush()?;
    } else {
        let stdout = io::stdout();
        let mut bw = io::BufWriter::new(stdout.lock());
        fmt2io::write(&mut bw, |writer| write!(writer, "{}", document))?;
        bw.flush()?;
    };

    process::exit(EXIT_SUCCESS);
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> String {
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("listmark") {
        if let Ok(path) = xdg_dirs.place_config_file("config") {
            if let Some(path_str) = path.to_str() {
                return path_str.into();
            }
        }
    }

    "none".into()
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> String {
    "none".into()
}
