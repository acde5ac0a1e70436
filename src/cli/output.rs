use crate::case::Style;
use crate::Conversion;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    style: String,
    total: usize,
    conversions: Vec<JsonConversion>,
}

pub fn print_conversions(
    style: Style,
    conversions: &[Conversion],
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text(conversions, colored_output),
        OutputFormat::Json => print_json(style, conversions),
    }
}

fn print_text(conversions: &[Conversion], colored_output: bool) {
    for conversion in conversions {
        if colored_output {
            println!(
                "{} {} {}",
                conversion.input.dimmed(),
                "→".dimmed(),
                conversion.output.green().bold()
            );
        } else {
            println!("{} -> {}", conversion.input, conversion.output);
        }
    }
}

fn print_json(style: Style, conversions: &[Conversion]) {
    let json_conversions: Vec<JsonConversion> = conversions
        .iter()
        .map(|c| JsonConversion {
            input: c.input.clone(),
            output: c.output.clone(),
        })
        .collect();

    let output = JsonOutput {
        style: style.to_string(),
        total: json_conversions.len(),
        conversions: json_conversions,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
