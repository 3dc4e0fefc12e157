//! Mint interpreter CLI.

use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    mintc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(target) = args.get(1) else {
        print_usage();
        std::process::exit(1);
    };
    if target == "--help" || target == "-h" {
        print_usage();
        return;
    }
    if args.len() > 2 {
        eprintln!("error: unexpected argument '{}'", args[2]);
        print_usage();
        std::process::exit(1);
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = if target == "-" {
        mintc::run_reader(std::io::stdin().lock(), &mut out)
    } else {
        mintc::run_file(Path::new(target), &mut out)
    };

    if let Err(err) = result {
        // keep whatever the program printed before failing
        if let Err(flush_err) = out.flush() {
            eprintln!("error: cannot flush output: {flush_err}");
        }
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: mint <file.mint>");
    eprintln!("       mint -          read the program from stdin");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=mint_eval=debug) for diagnostics.");
}
