//! topazcss - Topaz style sheet to CSS converter

use std::process::ExitCode;

use clap::Parser;

use topazcss::{Translation, translate_file};

#[derive(Parser)]
#[command(name = "topazcss")]
#[command(version, about = "Topaz style sheet to CSS converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    topazcss book.style book.css    Convert a flattened style dump to CSS
    topazcss book.style             Print the CSS to stdout
    topazcss --json book.style      Print a JSON summary instead of CSS")]
struct Cli {
    /// Input file (flattened Topaz style dump)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output CSS file (stdout when omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Suppress warnings and the conversion summary
    #[arg(short, long)]
    quiet: bool,

    /// Print a JSON summary (rule count and diagnostics) to stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), topazcss::Error> {
    let result = translate_file(&cli.input)?;

    if !cli.quiet && !cli.json {
        for diagnostic in &result.diagnostics {
            eprintln!("warning: {diagnostic}");
        }
    }

    match &cli.output {
        Some(path) => std::fs::write(path, &result.css)?,
        None if cli.json => {}
        None => print!("{}", result.css),
    }

    if cli.json {
        println!("{}", summary_json(&result));
    } else if !cli.quiet {
        if let Some(path) = &cli.output {
            println!(
                "{} -> {}: {} rules, {} warnings",
                cli.input,
                path,
                result.css.lines().count(),
                result.diagnostics.len()
            );
        }
    }

    Ok(())
}

fn summary_json(result: &Translation) -> String {
    serde_json::json!({
        "rules": result.css.lines().count(),
        "diagnostics": &result.diagnostics,
    })
    .to_string()
}
