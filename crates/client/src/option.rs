//! Fetch options and the option set.
//!
//! Options are the per-request tuning knobs of a fetch. The set of kinds is
//! closed: every kind is a [`FetchOptionKind`] tag, and every value is a
//! [`FetchOption`] variant carrying the payload type that kind accepts.
//!
//! | Kind | Payload | Wire effect |
//! |------|---------|-------------|
//! | `R` | `Quorum` | read quorum |
//! | `Pr` | `Quorum` | primary-read quorum |
//! | `NVal` | `u32` | replication factor override |
//! | `Timeout` | `u32` (ms) | operation deadline |
//! | `DeletedVClock` | `bool` | return the vclock of tombstones |
//! | `Head` | `bool` | metadata only, omit the body |
//! | `BasicQuorum` | `bool` | reduced quorum semantics |
//! | `IfModified` | `VClock` | skip the body if unchanged |
//! | `SloppyQuorum` | `bool` | let fallback nodes count toward quorum |
//! | `NotFoundOk` | `bool` | a replica's not-found counts toward quorum |
//!
//! Adding a kind means adding a tag here, a variant here, and an arm in
//! [`crate::bridge`]; the compiler rejects a missing arm.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use ringkv_core::{Quorum, VClock};

/// Tag identifying one kind of fetch option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOptionKind {
    /// Read quorum
    R,
    /// Primary-read quorum
    Pr,
    /// Replication factor override
    NVal,
    /// Operation deadline in milliseconds
    Timeout,
    /// Return the vector clock of tombstones
    DeletedVClock,
    /// Fetch metadata only
    Head,
    /// Reduced quorum semantics
    BasicQuorum,
    /// Conditional fetch on a vector clock
    IfModified,
    /// Allow fallback nodes to satisfy quorum
    SloppyQuorum,
    /// Treat a replica's not-found as a quorum vote
    NotFoundOk,
}

impl FetchOptionKind {
    /// Every kind, in registry order
    pub const ALL: [FetchOptionKind; 10] = [
        FetchOptionKind::R,
        FetchOptionKind::Pr,
        FetchOptionKind::NVal,
        FetchOptionKind::Timeout,
        FetchOptionKind::DeletedVClock,
        FetchOptionKind::Head,
        FetchOptionKind::BasicQuorum,
        FetchOptionKind::IfModified,
        FetchOptionKind::SloppyQuorum,
        FetchOptionKind::NotFoundOk,
    ];

    /// Snake-case name used in logs and config files
    pub fn name(&self) -> &'static str {
        match self {
            FetchOptionKind::R => "r",
            FetchOptionKind::Pr => "pr",
            FetchOptionKind::NVal => "n_val",
            FetchOptionKind::Timeout => "timeout",
            FetchOptionKind::DeletedVClock => "deleted_vclock",
            FetchOptionKind::Head => "head",
            FetchOptionKind::BasicQuorum => "basic_quorum",
            FetchOptionKind::IfModified => "if_modified",
            FetchOptionKind::SloppyQuorum => "sloppy_quorum",
            FetchOptionKind::NotFoundOk => "notfound_ok",
        }
    }
}

impl fmt::Display for FetchOptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fetch option together with its value.
///
/// The kind is implied by the variant, so a value can never be stored
/// under the wrong kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOption {
    /// Read quorum
    R(Quorum),
    /// Primary-read quorum
    Pr(Quorum),
    /// Replication factor override
    NVal(u32),
    /// Operation deadline in milliseconds
    Timeout(u32),
    /// Return the vector clock of tombstones
    DeletedVClock(bool),
    /// Fetch metadata only
    Head(bool),
    /// Reduced quorum semantics
    BasicQuorum(bool),
    /// Only return a body if the stored clock differs from this one
    IfModified(VClock),
    /// Allow fallback nodes to satisfy quorum
    SloppyQuorum(bool),
    /// Treat a replica's not-found as a quorum vote
    NotFoundOk(bool),
}

impl FetchOption {
    /// The kind this value belongs to
    pub fn kind(&self) -> FetchOptionKind {
        match self {
            FetchOption::R(_) => FetchOptionKind::R,
            FetchOption::Pr(_) => FetchOptionKind::Pr,
            FetchOption::NVal(_) => FetchOptionKind::NVal,
            FetchOption::Timeout(_) => FetchOptionKind::Timeout,
            FetchOption::DeletedVClock(_) => FetchOptionKind::DeletedVClock,
            FetchOption::Head(_) => FetchOptionKind::Head,
            FetchOption::BasicQuorum(_) => FetchOptionKind::BasicQuorum,
            FetchOption::IfModified(_) => FetchOptionKind::IfModified,
            FetchOption::SloppyQuorum(_) => FetchOptionKind::SloppyQuorum,
            FetchOption::NotFoundOk(_) => FetchOptionKind::NotFoundOk,
        }
    }
}

/// At most one option per kind; the last write for a kind wins.
///
/// Iteration follows registry order, which keeps translation and logging
/// deterministic. The order carries no meaning: no two kinds touch the
/// same operation field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FetchOption>", into = "Vec<FetchOption>")]
pub struct OptionSet {
    entries: BTreeMap<FetchOptionKind, FetchOption>,
}

impl OptionSet {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `option`, returning the value it displaced, if any
    pub fn put(&mut self, option: FetchOption) -> Option<FetchOption> {
        self.entries.insert(option.kind(), option)
    }

    /// Value stored for `kind`
    pub fn get(&self, kind: FetchOptionKind) -> Option<&FetchOption> {
        self.entries.get(&kind)
    }

    /// Check whether `kind` is set
    pub fn contains(&self, kind: FetchOptionKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Remove and return the value stored for `kind`
    pub fn remove(&mut self, kind: FetchOptionKind) -> Option<FetchOption> {
        self.entries.remove(&kind)
    }

    /// Number of kinds set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no option is set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the stored options
    pub fn iter(&self) -> impl Iterator<Item = &FetchOption> {
        self.entries.values()
    }

    /// Copy every option from `other` whose kind is not set here.
    pub fn fill_missing(&mut self, other: &OptionSet) {
        for (kind, option) in &other.entries {
            self.entries
                .entry(*kind)
                .or_insert_with(|| option.clone());
        }
    }
}

impl FromIterator<FetchOption> for OptionSet {
    fn from_iter<I: IntoIterator<Item = FetchOption>>(iter: I) -> Self {
        let mut set = OptionSet::new();
        for option in iter {
            set.put(option);
        }
        set
    }
}

impl From<Vec<FetchOption>> for OptionSet {
    fn from(options: Vec<FetchOption>) -> Self {
        options.into_iter().collect()
    }
}

impl From<OptionSet> for Vec<FetchOption> {
    fn from(set: OptionSet) -> Self {
        set.entries.into_values().collect()
    }
}

impl Extend<FetchOption> for OptionSet {
    fn extend<I: IntoIterator<Item = FetchOption>>(&mut self, iter: I) {
        for option in iter {
            self.put(option);
        }
    }
}
