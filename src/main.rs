use clap::Parser;
use pxc_thumb::extract_thumbnail;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pxc-thumb", about = "Extract the embedded thumbnail from a .pxc file")]
struct Cli {
    /// Source .pxc file
    input: PathBuf,
    /// Destination file for the raw thumbnail bytes
    output: PathBuf,
}

fn main() -> ExitCode {
    // try_parse instead of parse: usage errors exit with code 1 like every
    // other failure, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match extract_thumbnail(&cli.input, &cli.output) {
        Ok(written) => {
            println!("Extracted {written} byte thumbnail to {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
