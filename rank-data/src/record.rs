use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{DECADE_STEP, N_DECADES, START_DECADE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is empty")]
    Empty,
    #[error("expected a name and {expected} ranks, found {found} tokens")]
    WrongTokenCount { expected: usize, found: usize },
    #[error("rank {position} is not a non-negative integer: '{token}'")]
    InvalidRank { token: String, position: usize },
    #[error("invalid name '{0}'")]
    InvalidName(String),
}

/// A name together with its popularity rank for every decade.
///
/// A rank of 1 is the most popular name of that decade, a rank of 0 means the
/// name was not ranked at all. Interpreting the 0 is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankRecord {
    name: String,
    ranks: [u32; N_DECADES],
}

impl RankRecord {
    pub fn new(name: &str, ranks: &[u32]) -> Result<Self, RecordError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(RecordError::InvalidName(name.to_string()));
        }
        let ranks: [u32; N_DECADES] =
            ranks
                .try_into()
                .map_err(|_| RecordError::WrongTokenCount {
                    expected: N_DECADES,
                    found: ranks.len() + 1,
                })?;
        Ok(Self {
            name: name.to_string(),
            ranks,
        })
    }

    /// Parse a line of the form `NAME r0 r1 ... r10`.
    pub fn from_line(line: &str) -> Result<Self, RecordError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((name, rank_tokens)) = tokens.split_first() else {
            return Err(RecordError::Empty);
        };
        if rank_tokens.len() != N_DECADES {
            return Err(RecordError::WrongTokenCount {
                expected: N_DECADES,
                found: tokens.len(),
            });
        }
        let mut ranks = [0u32; N_DECADES];
        for (position, (rank, token)) in ranks.iter_mut().zip(rank_tokens).enumerate() {
            *rank = token.parse().map_err(|_| RecordError::InvalidRank {
                token: token.to_string(),
                position,
            })?;
        }
        Ok(Self {
            name: name.to_string(),
            ranks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw rank for decade index `decade` (0 => 1900s), including the 0
    /// sentinel. `None` if the index is out of range.
    pub fn rank_at(&self, decade: usize) -> Option<u32> {
        self.ranks.get(decade).copied()
    }

    pub fn ranks(&self) -> &[u32] {
        &self.ranks
    }

    /// Smallest ranked value across all decades together with its decade
    /// index. Unranked decades are ignored.
    pub fn best_rank(&self) -> Option<(usize, u32)> {
        self.ranks
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, r)| *r != 0)
            .min_by_key(|(_, r)| *r)
    }

    /// First year of the decade with index `decade`, `None` if that year
    /// does not fit a `u32`.
    pub fn decade_of(decade: usize) -> Option<u32> {
        u32::try_from(decade)
            .ok()
            .and_then(|d| d.checked_mul(DECADE_STEP))
            .and_then(|offset| offset.checked_add(START_DECADE))
    }
}

impl FromStr for RankRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

/// Formats the record the same way it appears in the data file.
impl fmt::Display for RankRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for rank in self.ranks.iter() {
            write!(f, " {rank}")?;
        }
        Ok(())
    }
}
