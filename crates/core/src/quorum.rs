//! Replica quorum values
//!
//! A quorum is either an explicit replica count or one of four symbolic
//! policies resolved by the store. On the wire both travel as a single
//! integer: counts are non-negative, the symbolic policies use fixed
//! negative sentinels.
//!
//! | Policy  | Wire value |
//! |---------|------------|
//! | count n | n          |
//! | one     | -2         |
//! | quorum  | -3         |
//! | all     | -4         |
//! | default | -5         |

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const ONE: i32 = -2;
const QUORUM: i32 = -3;
const ALL: i32 = -4;
const DEFAULT: i32 = -5;

/// Number of replicas that must answer for a request to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quorum {
    /// An explicit replica count
    Count(u16),
    /// A single replica
    One,
    /// A majority of replicas (`n_val / 2 + 1`)
    Quorum,
    /// Every replica
    All,
    /// Whatever the bucket properties say
    Default,
}

impl Quorum {
    /// Build a quorum from its wire integer.
    ///
    /// # Errors
    /// Returns `Error::InvalidQuorum` for negative values other than the
    /// four sentinels, and for counts that do not fit a replica count.
    pub fn new(value: i32) -> Result<Self> {
        match value {
            ONE => Ok(Quorum::One),
            QUORUM => Ok(Quorum::Quorum),
            ALL => Ok(Quorum::All),
            DEFAULT => Ok(Quorum::Default),
            n => u16::try_from(n)
                .map(Quorum::Count)
                .map_err(|_| Error::InvalidQuorum {
                    value: n.to_string(),
                }),
        }
    }

    /// Integer sent on the wire
    pub fn int_value(&self) -> i32 {
        match self {
            Quorum::Count(n) => i32::from(*n),
            Quorum::One => ONE,
            Quorum::Quorum => QUORUM,
            Quorum::All => ALL,
            Quorum::Default => DEFAULT,
        }
    }

    /// Check whether this is a symbolic policy rather than a count
    pub fn is_symbolic(&self) -> bool {
        !matches!(self, Quorum::Count(_))
    }
}

impl From<u16> for Quorum {
    fn from(n: u16) -> Self {
        Quorum::Count(n)
    }
}

impl TryFrom<i32> for Quorum {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Quorum::new(value)
    }
}

impl fmt::Display for Quorum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quorum::Count(n) => write!(f, "{}", n),
            Quorum::One => f.write_str("one"),
            Quorum::Quorum => f.write_str("quorum"),
            Quorum::All => f.write_str("all"),
            Quorum::Default => f.write_str("default"),
        }
    }
}

impl FromStr for Quorum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one" => Ok(Quorum::One),
            "quorum" => Ok(Quorum::Quorum),
            "all" => Ok(Quorum::All),
            "default" => Ok(Quorum::Default),
            other => other
                .parse::<u16>()
                .map(Quorum::Count)
                .map_err(|_| Error::InvalidQuorum {
                    value: s.to_string(),
                }),
        }
    }
}

// Serializes as the string form ("quorum", "2"). Deserialization also
// takes a bare integer, read as the wire value.
impl Serialize for Quorum {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct QuorumVisitor;

impl<'de> Visitor<'de> for QuorumVisitor {
    type Value = Quorum;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a quorum name, a replica count, or a wire sentinel")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Quorum, E> {
        let value = i32::try_from(v).map_err(|_| {
            E::custom(Error::InvalidQuorum {
                value: v.to_string(),
            })
        })?;
        Quorum::new(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Quorum, E> {
        let value = i64::try_from(v).map_err(|_| {
            E::custom(Error::InvalidQuorum {
                value: v.to_string(),
            })
        })?;
        self.visit_i64(value)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Quorum, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Quorum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(QuorumVisitor)
    }
}
