//! Core analysis types.

use std::fmt;

/// Character classes detected in a candidate password.
///
/// `size` is the theoretical alphabet implied by the classes present
/// (26 lowercase + 26 uppercase + 10 digits + 32 symbols), not a count
/// of distinct characters actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Charset {
    /// Any ASCII lowercase letter present.
    pub lowercase: bool,
    /// Any ASCII uppercase letter present.
    pub uppercase: bool,
    /// Any ASCII digit present.
    pub numbers: bool,
    /// Any character that is not an ASCII letter or digit. Whitespace
    /// and non-ASCII characters (accented letters, emoji) count as
    /// symbols, which widens the assumed alphabet for such passwords.
    pub symbols: bool,
    /// Alphabet size implied by the flags above; 0 only for the empty
    /// candidate.
    pub size: usize,
}

/// Qualitative strength bucket derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Good,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a 0-100 score onto the six strength buckets.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => PasswordStrength::VeryWeak,
            20..=39 => PasswordStrength::Weak,
            40..=59 => PasswordStrength::Medium,
            60..=79 => PasswordStrength::Good,
            80..=94 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    /// Human-readable label for this bucket.
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full assessment of a candidate password.
///
/// Freshly constructed on every call; contains no copy of the
/// candidate itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordAnalysis {
    /// Heuristic score clamped to 0-100.
    pub score: u8,
    /// Number of characters (Unicode scalar values) in the candidate.
    pub length: usize,
    /// Character classes present and the implied alphabet size.
    pub charset: Charset,
    /// Estimated entropy in bits: `length * log2(alphabet size)`.
    pub entropy: f64,
    /// Strength bucket for `score`.
    pub strength: PasswordStrength,
    /// Estimated time to brute-force the candidate at 10^9 attempts
    /// per second.
    pub brute_force_time: String,
    /// Ordered remediation messages; order is significant.
    pub feedback: Vec<String>,
}
