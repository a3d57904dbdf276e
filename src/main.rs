//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use unizip::compression::{compress::compress_file, decompress::decompress_file};
use unizip::tools::cli::{uzopts_init, Mode};
use unizip::Error;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Unable to start the terminal logger.");
    }

    let options = uzopts_init();

    //----- Figure how what we need to do and go do it
    let mut outcome = Ok(());
    for file in &options.files {
        let result = match options.op_mode {
            Mode::Zip => compress_file(&options, file),
            Mode::Unzip => decompress_file(&options, file),
        };
        match result {
            Ok(report) => println!("{}\n{}\n", file, report),
            Err(e) => {
                error!("{}: {}", file, e);
                outcome = Err(e);
            }
        }
    }

    info!("Done.\n");
    outcome
}
