//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = dutyshare_cli::run() {
        eprintln!("dutyshare: {err}");
        std::process::exit(1);
    }
}
