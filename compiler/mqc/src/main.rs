//! `mqc` binary.

use mqc::{init_tracing, run, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args, &mut std::io::stdin().lock()) {
        Ok(output) => println!("{output}"),
        Err(CliError::Usage(usage)) => {
            eprintln!("{usage}");
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
