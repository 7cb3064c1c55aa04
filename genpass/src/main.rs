use std::process::exit;

use genpass::cli::parse_args;
use genpass::cli::run;

fn main() {
    let args = parse_args();
    if let Err(e) = run(&args) {
        eprintln!("genpass: error: {e:#}");
        exit(1);
    }
}
