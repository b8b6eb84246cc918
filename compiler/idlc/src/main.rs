//! IDL debug driver CLI.

use idlc::{DriverError, Options};

fn main() {
    idlc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::from_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    let source = match idlc::read_source(&options.path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = idlc::run(&options, &source, &mut out) {
        match err {
            DriverError::FrontEnd(err) => {
                eprintln!("{}", idlc::render_error(&options.path, &source, err.span(), &err));
            }
            other => eprintln!("error: {other}"),
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: idlc [--tokens] <file.idl>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --tokens    Print the token stream instead of the module tree");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=idl_parse=trace) to trace lexing and parsing.");
}
