use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

use crate::universal_codes::Method;

/// Zip, Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug)]
pub struct UzOpts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Code family. When decompressing, None means "tell from the file extension".
    pub method: Option<Method>,
    /// Compress/Decompress
    pub op_mode: Mode,
    /// Output file name, only honoured when a single input file is given
    pub output: Option<String>,
}

impl UzOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            method: None,
            op_mode: Mode::Zip,
            output: None,
        }
    }
}

impl Default for UzOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Compress files with Elias omega or Levenshtein universal codes",
    long_about = "
    Each distinct byte value of the input is ranked by frequency, and the n-th most common value is
    written with the n-th codeword of the chosen universal code. The ranked byte values are saved
    next to the compressed file as a dictionary; both files are needed to decompress.

    Elias omega files are named .eoc (dictionary .eod), Levenshtein files .lc (dictionary .ld)."
)]
pub struct Args {
    /// Files to process
    #[clap(required = true)]
    files: Vec<String>,

    /// Perform compression on the input files (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress", conflicts_with = "compress")]
    decompress: bool,

    /// Code family: omega (111) or levenshtein (222). Decompression reads it from the file
    /// extension when not given
    #[clap(short = 'm', long = "method")]
    method: Option<Method>,

    /// Output file name (single input file only)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    ///Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Parse the command line into UzOpts and set the log level.
pub fn uzopts_init() -> UzOpts {
    uzopts_from(Args::parse())
}

/// Put command line information from CLAP into our internal structure.
pub fn uzopts_from(args: Args) -> UzOpts {
    let mut opts = UzOpts::new();

    // Set the log level
    match args.v {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };

    if args.decompress {
        opts.op_mode = Mode::Unzip
    };
    opts.files = args.files;
    opts.method = args.method;
    opts.force_overwrite = args.force;
    opts.output = args.output;

    // Below we report initialization status to the user
    info!("---- Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match opts.method {
        Some(method) => info!("Method set to {}", method),
        None if opts.op_mode == Mode::Zip => info!("Method set to {}", Method::default()),
        None => info!("Method taken from each file extension"),
    }
    if opts.output.is_some() && opts.files.len() > 1 {
        warn!("Ignoring the output name because more than one input file was given");
        opts.output = None;
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- Initialization End ----\n");
    opts
}
