//! Denomination tallies for the physical cash count
//!
//! A `DenominationCount` is never persisted; it only exists to produce a
//! candidate physical total before it is committed to the ledger.

use std::collections::BTreeMap;
use std::fmt;

/// Rupiah notes and coins accepted by the cash count, largest first
pub const DENOMINATIONS: [u32; 10] = [
    100_000, 50_000, 20_000, 10_000, 5_000, 2_000, 1_000, 500, 200, 100,
];

/// Whether `value` is one of the fixed denominations
pub fn is_denomination(value: u32) -> bool {
    DENOMINATIONS.contains(&value)
}

/// Parse a unit count leniently
///
/// Reads an optional sign and the leading run of digits, ignoring the rest.
/// Input with no leading digits, or a negative count, yields 0.
pub fn lenient_count(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        &s[..end]
    };

    if negative || digits.is_empty() {
        return 0;
    }

    // Too many digits for u64 saturates rather than wrapping
    digits.parse::<u64>().unwrap_or(u64::MAX)
}

/// Mapping from denomination face value to the number of units counted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenominationCount {
    counts: BTreeMap<u32, u64>,
}

impl DenominationCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a denomination, replacing any earlier value
    pub fn set(&mut self, denomination: u32, count: u64) {
        self.counts.insert(denomination, count);
    }

    /// Set the count from raw user input, clamping bad values to 0
    pub fn set_raw(&mut self, denomination: u32, raw: &str) {
        self.set(denomination, lenient_count(raw));
    }

    /// Units counted for a denomination; 0 when never set
    pub fn count(&self, denomination: u32) -> u64 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&c| c == 0)
    }

    /// Entries as recorded, including any outside the fixed set
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    /// Parse a `face=count` entry such as `100000=2`
    ///
    /// The face value must be one of [`DENOMINATIONS`]; the count is read
    /// with [`lenient_count`].
    pub fn parse_entry(entry: &str) -> Result<(u32, u64), DenominationParseError> {
        let (face, count) = entry
            .split_once(['=', 'x', 'X', ':'])
            .ok_or_else(|| DenominationParseError::InvalidEntry(entry.to_string()))?;

        let face: u32 = face
            .trim()
            .replace('.', "")
            .parse()
            .map_err(|_| DenominationParseError::InvalidEntry(entry.to_string()))?;

        if !is_denomination(face) {
            return Err(DenominationParseError::UnknownDenomination(face));
        }

        Ok((face, lenient_count(count)))
    }
}

impl FromIterator<(u32, u64)> for DenominationCount {
    fn from_iter<I: IntoIterator<Item = (u32, u64)>>(iter: I) -> Self {
        let mut counts = DenominationCount::new();
        for (denomination, count) in iter {
            counts.set(denomination, count);
        }
        counts
    }
}

/// Errors produced when reading `face=count` entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenominationParseError {
    InvalidEntry(String),
    UnknownDenomination(u32),
}

impl fmt::Display for DenominationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntry(entry) => write!(
                f,
                "Invalid count '{}'. Use the form <denomination>=<count>, e.g. 100000=2",
                entry
            ),
            Self::UnknownDenomination(face) => {
                let faces: Vec<String> = DENOMINATIONS.iter().map(|d| d.to_string()).collect();
                write!(
                    f,
                    "Unknown denomination {}. Expected one of: {}",
                    face,
                    faces.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for DenominationParseError {}
