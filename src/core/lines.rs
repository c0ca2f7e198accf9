use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineRangeError {
    #[error("line numbers start at 1 (got {0})")]
    ZeroLine(u32),
    #[error("line range ends before it starts ({start}-{end})")]
    EndBeforeStart { start: u32, end: u32 },
    #[error("invalid line range '{0}'; expected N or START-END")]
    Malformed(String),
    #[error("0-based line {0} has no 1-based equivalent")]
    LineOutOfRange(u32),
}

/// Inclusive, 1-based line selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: u32,
    end: u32,
}

impl LineRange {
    pub fn new(start: u32, end: u32) -> Result<Self, LineRangeError> {
        if start == 0 {
            return Err(LineRangeError::ZeroLine(start));
        }
        if end < start {
            return Err(LineRangeError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Converts editor coordinates, where the first line is 0.
    pub fn from_zero_based(start: u32, end: u32) -> Result<Self, LineRangeError> {
        let shift = |line: u32| line.checked_add(1).ok_or(LineRangeError::LineOutOfRange(line));
        Self::new(shift(start)?, shift(end)?)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn fragment(&self) -> String {
        format_line_fragment(self.start, self.end)
    }
}

impl FromStr for LineRange {
    type Err = LineRangeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (start, end) = parse_bounds(value)?;
        Self::new(start, end)
    }
}

/// Splits `N` or `START-END` into its two bounds without validating them.
pub fn parse_bounds(value: &str) -> Result<(u32, u32), LineRangeError> {
    let trimmed = value.trim();
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|_| LineRangeError::Malformed(trimmed.to_string()))
    };
    match trimmed.split_once('-') {
        Some((start, end)) => Ok((parse(start)?, parse(end)?)),
        None => {
            let line = parse(trimmed)?;
            Ok((line, line))
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Renders `#L<start>` for a single line and `#L<start>-L<end>` otherwise.
pub fn format_line_fragment(start: u32, end: u32) -> String {
    if start == end {
        format!("#L{start}")
    } else {
        format!("#L{start}-L{end}")
    }
}
