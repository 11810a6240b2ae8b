use crate::error::{ErrorKind, ParseError};

/// Multiplier for a metric suffix character, if it is one.
///
/// - `k` / `K` = ×1,000
/// - `M` = ×1,000,000
/// - `G` / `B` = ×1,000,000,000
/// - `T` = ×1,000,000,000,000
fn suffix_scale(c: char) -> Option<i64> {
    match c {
        'k' | 'K' => Some(1_000),
        'M' => Some(1_000_000),
        'G' | 'B' => Some(1_000_000_000),
        'T' => Some(1_000_000_000_000),
        _ => None,
    }
}

/// Character offset of `byte_pos` within `input`.
///
/// Error positions are reported in characters so they line up with what a
/// reader sees even when the input contains multi-byte characters.
fn char_offset(input: &str, byte_pos: usize) -> usize {
    input[..byte_pos].chars().count()
}

/// Parse a human-readable number literal into an exact `i64`.
///
/// Accepts an optional leading sign, underscore-grouped digits
/// (`-2_758_000`), an optional trailing metric suffix (`12k`, `1B`, `999T`),
/// and a decimal fraction when the suffix can absorb it into an integer
/// (`1.2345M` = 1,234,500).
///
/// The first violation wins: the returned [`ParseError`] names the exact
/// character of the first problem and no later checks run.
pub fn parse(input: &str) -> Result<i64, ParseError> {
    let fail = |byte_pos: usize, kind: ErrorKind| {
        Err(ParseError::new(input, char_offset(input, byte_pos), kind))
    };

    if input.is_empty() {
        return fail(0, ErrorKind::EmptyInput);
    }

    // Sign
    let mut sign: i64 = 1;
    let offset = match input.as_bytes()[0] {
        b'+' => 1,
        b'-' => {
            sign = -1;
            1
        }
        _ => 0,
    };
    if offset == 1 && input.len() == 1 {
        return fail(1, ErrorKind::NoDigitsAfterSign);
    }

    let mut num_part = &input[offset..];
    if num_part.is_empty() {
        return fail(offset, ErrorKind::NoDigitsFound);
    }

    // Metric suffix; a lone suffix character is left to the digit checks
    let mut scale: i64 = 1;
    if num_part.len() > 1 {
        if let Some(mult) = num_part.chars().next_back().and_then(suffix_scale) {
            scale = mult;
            num_part = &num_part[..num_part.len() - 1];
            if num_part.is_empty() {
                return fail(input.len() - 1, ErrorKind::NoDigitsBeforeSuffix);
            }
        }
    }

    // Decimal point: only meaningful when a suffix can absorb the fraction
    let mut frac: Option<(&str, usize)> = None;
    if let Some(dot) = num_part.find('.') {
        let tail = &num_part[dot + 1..];
        if tail.contains('.') {
            return fail(offset + dot, ErrorKind::MultipleDecimalPoints);
        }
        if scale == 1 {
            return fail(offset + dot, ErrorKind::DecimalPointRequiresSuffix);
        }
        if tail.is_empty() {
            return fail(offset + dot, ErrorKind::NoDigitsAfterDecimalPoint);
        }
        let mut remaining = scale;
        for _ in tail.chars() {
            remaining /= 10;
        }
        if remaining == 0 {
            return fail(
                offset + num_part.len(),
                ErrorKind::TooManyDecimalPlacesForSuffix,
            );
        }
        frac = Some((tail, offset + dot + 1));
        num_part = &num_part[..dot];
    }

    // Underscore grouping over the integer portion: the first group is free
    // form, every later group must be exactly 3 digits
    let mut digits = String::with_capacity(num_part.len() + frac.map_or(0, |(t, _)| t.len()));
    let mut group_start = 0;
    for (i, group) in num_part.split('_').enumerate() {
        if group.is_empty() {
            return fail(offset + group_start, ErrorKind::InvalidUnderscorePosition);
        }
        if i > 0 && group.chars().count() != 3 {
            return fail(offset + group_start - 1, ErrorKind::GroupLengthMustBeThree);
        }
        for (j, c) in group.char_indices() {
            if !c.is_ascii_digit() {
                return fail(offset + group_start + j, ErrorKind::InvalidCharacterInNumber);
            }
            digits.push(c);
        }
        group_start += group.len() + 1;
    }

    // Fractional digits
    if let Some((tail, tail_start)) = frac {
        for (j, c) in tail.char_indices() {
            if !c.is_ascii_digit() {
                return fail(tail_start + j, ErrorKind::InvalidCharacterInDecimalPart);
            }
            digits.push(c);
        }
    }

    // Magnitude: every character is an ASCII digit by now, so the only
    // possible failure is overflow
    let base: i64 = match digits.parse() {
        Ok(n) => n,
        Err(_) => return fail(0, ErrorKind::NumberTooLargeForInt64),
    };

    // Each fractional digit consumes one factor of ten from the scale
    if let Some((tail, _)) = frac {
        for _ in tail.chars() {
            scale /= 10;
        }
    }

    base.checked_mul(scale)
        .and_then(|n| n.checked_mul(sign))
        .ok_or_else(|| ParseError::new(input, 0, ErrorKind::NumberTooLargeForInt64))
}
