//! Strategy selector for the random source.

use crate::error::{RandStatError, Result};
use std::fmt;

/// Which underlying random source produces a sample.
///
/// Raw selectors are zero-based: `0` is [`GeneralPurpose`](Self::GeneralPurpose),
/// `1` is [`SharedDefault`](Self::SharedDefault), `2` is
/// [`ThreadLocal`](Self::ThreadLocal).
///
/// # Examples
///
/// ```rust
/// use randstat_core::rng::Strategy;
///
/// assert_eq!(Strategy::from_index(2).unwrap(), Strategy::ThreadLocal);
/// assert_eq!(Strategy::ThreadLocal.index(), 2);
/// assert!(Strategy::from_index(3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// A freshly seeded `StdRng`, instantiated per call.
    GeneralPurpose,
    /// The process-wide [`SharedRng`](super::SharedRng).
    SharedDefault,
    /// `rand::thread_rng()`, reusable across threads without locking.
    ThreadLocal,
}

impl Strategy {
    /// All strategies in selector order.
    pub const ALL: [Strategy; 3] = [
        Strategy::GeneralPurpose,
        Strategy::SharedDefault,
        Strategy::ThreadLocal,
    ];

    /// Resolves a zero-based selector.
    ///
    /// # Errors
    ///
    /// Returns [`RandStatError::InvalidArgument`] for any selector outside
    /// `{0, 1, 2}`.
    pub fn from_index(index: u32) -> Result<Self> {
        match index {
            0 => Ok(Self::GeneralPurpose),
            1 => Ok(Self::SharedDefault),
            2 => Ok(Self::ThreadLocal),
            other => Err(RandStatError::invalid_argument(format!(
                "No method with number {}",
                other
            ))),
        }
    }

    /// Returns the zero-based selector for this strategy.
    #[inline]
    pub fn index(self) -> u32 {
        match self {
            Self::GeneralPurpose => 0,
            Self::SharedDefault => 1,
            Self::ThreadLocal => 2,
        }
    }

    /// Short kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GeneralPurpose => "general-purpose",
            Self::SharedDefault => "shared-default",
            Self::ThreadLocal => "thread-local",
        }
    }

    /// Descriptive label naming the concrete source, used in report headings.
    pub fn label(self) -> &'static str {
        match self {
            Self::GeneralPurpose => "StdRng (fresh per call)",
            Self::SharedDefault => "shared StdRng (process-wide)",
            Self::ThreadLocal => "thread_rng (thread-local)",
        }
    }
}

impl TryFrom<u32> for Strategy {
    type Error = RandStatError;

    fn try_from(index: u32) -> Result<Self> {
        Self::from_index(index)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
