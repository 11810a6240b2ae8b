use anyhow::Result;
use clap::Parser;
use hnum::parse;

#[derive(Parser, Debug)]
#[command(name = "hnum")]
#[command(about = "Parse a human-readable number into an exact 64-bit integer", long_about = None)]
#[command(version)]
struct Cli {
    /// A human-readable expression of a number, e.g. `11_540`, `2.5M`, `-12k`
    #[arg(allow_hyphen_values = true)]
    num_string: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let num = parse(&cli.num_string)?;
    println!("{num}");

    Ok(())
}
