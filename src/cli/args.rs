use std::fmt;

pub const USAGE: &str = "Usage: supertrek [OPTIONS]

Options:
  -s, --seed <INT>  Seed for the random number generator
  -h, --help        Print help";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub seed: Option<u64>,
    pub help: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue(String),
    InvalidSeed(String),
    Unknown(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArgsError::MissingValue(flag) => write!(f, "{} requires a value", flag),
            ArgsError::InvalidSeed(val) => write!(f, "seed must be a valid integer, got '{}'", val),
            ArgsError::Unknown(arg) => write!(f, "unknown argument: {}", arg),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Parse the process arguments, skipping the program name.
pub fn parse() -> Result<Args, ArgsError> {
    parse_from(std::env::args().skip(1))
}

pub fn parse_from<I>(argv: I) -> Result<Args, ArgsError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut args = Args::default();
    let mut iter = argv.into_iter().map(Into::into);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => {
                let val = iter.next().ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                let seed = val.parse::<u64>().map_err(|_| ArgsError::InvalidSeed(val))?;
                args.seed = Some(seed);
            }
            "--help" | "-h" => args.help = true,
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(args)
}
