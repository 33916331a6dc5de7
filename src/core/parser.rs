use crate::domain::model::{Instructions, Turn};
use crate::utils::error::{DialError, Result};

/// Parse rotation instructions, one per line.
///
/// Each non-empty line (after trimming) must be `R<n>` or `L<n>` where `n` is a
/// non-negative integer. `R<n>` becomes `+n` and `L<n>` becomes `-n`. Blank
/// lines are skipped. The first bad line aborts the whole parse.
pub fn parse<I, S>(lines: I) -> Result<Instructions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut turns = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        if let Some(turn) = parse_line(index + 1, line.as_ref())? {
            turns.push(turn);
        }
    }
    tracing::debug!("Parsed {} turns", turns.len());
    Ok(Instructions::from(turns))
}

pub fn parse_str(input: &str) -> Result<Instructions> {
    parse(input.lines())
}

/// Parse raw input bytes. A line that is not valid UTF-8 is a bad line.
pub fn parse_bytes(input: &[u8]) -> Result<Instructions> {
    let mut turns = Vec::new();
    for (index, raw) in input.split(|&b| b == b'\n').enumerate() {
        let line_number = index + 1;
        let line = std::str::from_utf8(raw).map_err(|e| {
            DialError::parse(
                line_number,
                &String::from_utf8_lossy(raw),
                format!("line is not valid UTF-8: {}", e),
            )
        })?;
        if let Some(turn) = parse_line(line_number, line)? {
            turns.push(turn);
        }
    }
    tracing::debug!("Parsed {} turns", turns.len());
    Ok(Instructions::from(turns))
}

fn parse_line(line_number: usize, raw: &str) -> Result<Option<Turn>> {
    let line = raw.trim();
    let mut chars = line.chars();
    let Some(direction) = chars.next() else {
        return Ok(None);
    };

    let amount = || -> Result<u32> {
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DialError::parse(
                line_number,
                line,
                "amount must be a non-negative integer",
            ));
        }
        digits
            .parse::<u32>()
            .map_err(|e| DialError::parse(line_number, line, format!("amount out of range: {}", e)))
    };

    match direction {
        'R' => Ok(Some(Turn::right(amount()?))),
        'L' => Ok(Some(Turn::left(amount()?))),
        _ => Err(DialError::parse(line_number, line, "must start with R or L")),
    }
}
