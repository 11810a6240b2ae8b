use std::fmt;

/// Reason a literal was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    NoDigitsAfterSign,
    NoDigitsFound,
    NoDigitsBeforeSuffix,
    MultipleDecimalPoints,
    DecimalPointRequiresSuffix,
    NoDigitsAfterDecimalPoint,
    TooManyDecimalPlacesForSuffix,
    InvalidUnderscorePosition,
    GroupLengthMustBeThree,
    InvalidCharacterInNumber,
    InvalidCharacterInDecimalPart,
    NumberTooLargeForInt64,
}

impl ErrorKind {
    /// One-line description of the failure.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty input",
            Self::NoDigitsAfterSign => "no digits after sign",
            Self::NoDigitsFound => "no digits found",
            Self::NoDigitsBeforeSuffix => "no digits before suffix",
            Self::MultipleDecimalPoints => "multiple decimal points",
            Self::DecimalPointRequiresSuffix => "decimal point only allowed with suffix",
            Self::NoDigitsAfterDecimalPoint => "no digits after decimal point",
            Self::TooManyDecimalPlacesForSuffix => "too many decimal places for suffix",
            Self::InvalidUnderscorePosition => "invalid underscore position",
            Self::GroupLengthMustBeThree => "group after underscore must be exactly 3 digits",
            Self::InvalidCharacterInNumber => "invalid character in number",
            Self::InvalidCharacterInDecimalPart => "invalid character in decimal part",
            Self::NumberTooLargeForInt64 => "number too large for int64",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.message())
    }
}

/// Error produced when a literal cannot be parsed.
///
/// Carries the original input and the zero-based character offset of the
/// first detected problem. The `Display` rendering puts a caret under the
/// offending character:
///
/// ```text
/// group after underscore must be exactly 3 digits
/// 115_40
///    ^
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    input: String,
    pos: usize,
    kind: ErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, pos: usize, kind: ErrorKind) -> Self {
        Self {
            input: input.to_string(),
            pos,
            kind,
        }
    }

    /// The original input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Zero-based character offset of the first detected problem.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}^",
            self.kind.message(),
            self.input,
            " ".repeat(self.pos)
        )
    }
}

impl std::error::Error for ParseError {}
