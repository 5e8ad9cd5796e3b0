use clap::{Parser, ValueEnum};

pub mod commands;

#[derive(Parser)]
#[command(name = "modthree")]
#[command(about = "Compute the value of a binary number modulo 3 with a finite automaton")]
#[command(long_about = "Reads a binary number (most significant digit first) and walks it through \
                       a three-state remainder automaton. The state reached is the remainder: 0, 1 or 2.")]
pub struct Cli {
    /// Binary number to reduce, e.g. 1101
    #[arg(value_name = "BINARY", help = "Binary string made of the characters 0 and 1")]
    pub binary: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "How to print the result")]
    pub format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(long, short = 'v', help = "Log automaton construction and every transition")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sentence
    Text,
    /// Single JSON object
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_positional_and_flags() {
        let cli = Cli::try_parse_from(["modthree", "--format", "json", "-v", "1101"]).unwrap();
        assert_eq!(cli.binary, "1101");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_binary_is_rejected() {
        assert!(Cli::try_parse_from(["modthree"]).is_err());
    }
}
