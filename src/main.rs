use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::{num, Conversion, RecaseError, Style};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert strings between naming conventions", long_about = None)]
struct Cli {
    /// Strings to convert
    #[arg(value_name = "STRINGS")]
    inputs: Vec<String>,

    /// Target case style (kebab, camel, dot)
    #[arg(short = 't', long = "to", default_value = "kebab")]
    style: Style,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Add two numbers and print their sum
    Sum {
        a: f64,
        b: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    // Absent input is an error, not an empty result
    if cli.inputs.is_empty() {
        return Err(RecaseError::MissingInput.into());
    }

    let conversions: Vec<Conversion> = cli
        .inputs
        .iter()
        .map(|input| Conversion {
            input: input.clone(),
            output: cli.style.convert(input),
        })
        .collect();

    output::print_conversions(cli.style, &conversions, !cli.no_color, &cli.format);

    Ok(())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Sum { a, b } => {
            let sum = num::add_numbers(a, b)?;
            println!("{}", sum);
        }
    }
    Ok(())
}
