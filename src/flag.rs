use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

use clap::builder::{TypedValueParser, ValueParserFactory};
use clap::error::ErrorKind as ClapErrorKind;

use crate::error::ParseError;
use crate::parse::parse;

/// An `i64` that clap can decode from a human-readable literal token.
///
/// Use it as a field type in a clap-derive struct; the registered value
/// parser feeds the raw token through [`parse`] and reports failures as
/// framework errors. Literals may start with `-`, so the argument needs
/// `allow_hyphen_values`:
///
/// ```
/// use clap::Parser;
/// use hnum::HumanInt64;
///
/// #[derive(Parser)]
/// struct Cli {
///     /// Item budget, e.g. `2.5M` or `11_540`
///     #[arg(allow_hyphen_values = true)]
///     budget: HumanInt64,
/// }
///
/// let cli = Cli::parse_from(["demo", "2.5M"]);
/// assert_eq!(i64::from(cli.budget), 2_500_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HumanInt64(pub i64);

impl From<HumanInt64> for i64 {
    fn from(value: HumanInt64) -> Self {
        value.0
    }
}

impl fmt::Display for HumanInt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for HumanInt64 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(HumanInt64)
    }
}

/// Value parser registered with clap for [`HumanInt64`].
#[derive(Clone, Copy, Debug)]
pub struct HumanInt64ValueParser;

impl TypedValueParser for HumanInt64ValueParser {
    type Value = HumanInt64;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let token = value
            .to_str()
            .ok_or_else(|| clap::Error::new(ClapErrorKind::InvalidUtf8).with_cmd(cmd))?;
        parse(token).map(HumanInt64).map_err(|err| {
            let arg = arg.map_or_else(|| "...".to_owned(), ToString::to_string);
            clap::Error::raw(
                ClapErrorKind::ValueValidation,
                format!("invalid value '{token}' for '{arg}': {}\n", err.kind()),
            )
            .with_cmd(cmd)
        })
    }
}

impl ValueParserFactory for HumanInt64 {
    type Parser = HumanInt64ValueParser;

    fn value_parser() -> Self::Parser {
        HumanInt64ValueParser
    }
}
