use crate::utils::error::EtlError;
use polars::prelude::DataFrame;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Inclusive year range. A reversed range yields no years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: u32,
    pub end: u32,
}

impl YearRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn years(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One HTTP response for a (dataset, year) pair.
#[derive(Debug, Clone)]
pub struct RawPayload {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbsentReason {
    HttpStatus(u16),
    Transport(String),
}

impl fmt::Display for AbsentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsentReason::HttpStatus(status) => write!(f, "HTTP {}", status),
            AbsentReason::Transport(message) => f.write_str(message),
        }
    }
}

/// 單一年份的下載結果
#[derive(Debug)]
pub enum YearOutcome {
    Success(DataFrame),
    Absent(AbsentReason),
    ParseError(EtlError),
}

/// How a dataset treats a payload it downloaded but could not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorPolicy {
    Fatal,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range() {
        assert_eq!(YearRange::new(2019, 2020).years().collect::<Vec<_>>(), vec![2019, 2020]);
        assert_eq!(YearRange::new(2020, 2020).len(), 1);
        assert!(YearRange::new(2021, 2020).is_empty());
        assert_eq!(YearRange::new(2021, 2020).years().count(), 0);
    }

    #[test]
    fn test_absent_reason_display() {
        assert_eq!(AbsentReason::HttpStatus(404).to_string(), "HTTP 404");
        assert_eq!(
            AbsentReason::Transport("connection refused".into()).to_string(),
            "connection refused"
        );
    }
}
