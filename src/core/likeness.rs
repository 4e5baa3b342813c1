//! Likeness feedback
//!
//! After a wrong guess the terminal reports how many letters the guess shares
//! with the password. Letters are matched as a multiset bounded by the
//! password: each letter of the password can be claimed once.

/// Letter-overlap score between a guess and the password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Likeness(usize);

impl Likeness {
    /// Create a likeness from a raw count
    #[inline]
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Get the raw count
    #[inline]
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Calculate the likeness of `candidate` against `solution`
    ///
    /// # Algorithm
    /// 1. Count every byte of the solution in a 256-entry table
    /// 2. Walk the candidate; a byte with remaining count scores one and
    ///    consumes that count
    ///
    /// Each letter of the solution can be claimed by at most one letter of
    /// the candidate.
    ///
    /// # Examples
    /// ```
    /// use termlink::core::Likeness;
    ///
    /// assert_eq!(Likeness::calculate("CAT", "CATS").value(), 3);
    /// assert_eq!(Likeness::calculate("AAAA", "AA").value(), 2);
    /// ```
    #[must_use]
    pub fn calculate(candidate: &str, solution: &str) -> Self {
        let mut available = [0usize; 256];
        for &byte in solution.as_bytes() {
            available[usize::from(byte)] += 1;
        }

        let mut matches = 0;
        for &byte in candidate.as_bytes() {
            let slot = &mut available[usize::from(byte)];
            if *slot > 0 {
                *slot -= 1;
                matches += 1;
            }
        }

        Self(matches)
    }
}

impl std::fmt::Display for Likeness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
