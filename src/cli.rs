use clap::{Args, Parser, Subcommand};
use icu_locid::LanguageIdentifier;

use crate::{casing::Casing, error::Error};

#[derive(Debug, Parser)]
#[command(author, version, about = "Recase text the way a binding pipeline would", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transform source text toward the target side (applies --target-casing)
    Forward(TransformArgs),
    /// Transform target text back toward the source side (applies --source-casing)
    Backward(TransformArgs),
}

#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Casing applied on the source side, used by `backward`
    #[arg(long = "source-casing", value_enum, default_value_t = Casing::Unchanged)]
    pub source_casing: Casing,
    /// Casing applied on the target side, used by `forward`
    #[arg(long = "target-casing", value_enum, default_value_t = Casing::Unchanged)]
    pub target_casing: Casing,
    /// Shorthand that sets both casings at once, overriding the two above
    #[arg(long = "casing", value_enum)]
    pub casing: Option<Casing>,
    /// BCP-47 locale driving the case mapping (e.g. 'tr'); root locale if omitted
    #[arg(long, value_parser = parse_locale)]
    pub locale: Option<LanguageIdentifier>,
    /// Text to transform, line by line (reads stdin when omitted)
    pub text: Option<String>,
}

pub fn parse_locale(value: &str) -> Result<LanguageIdentifier, Error> {
    value
        .parse::<LanguageIdentifier>()
        .map_err(|_| Error::InvalidLocale {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_locale_accepts_bcp47_tags() {
        assert_eq!(parse_locale("tr").unwrap().to_string(), "tr");
        assert_eq!(parse_locale("en-US").unwrap().to_string(), "en-US");
        assert!(parse_locale("not a locale").is_err());
    }
}
