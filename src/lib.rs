//! Password strength analysis library
//!
//! Analyzes candidate passwords into a structured assessment: a
//! heuristic 0-100 score, charset composition, an entropy estimate,
//! a brute-force time estimate and ordered remediation feedback.
//! Built for interactive strength meters; every analysis is pure and
//! cheap enough to run on each keystroke.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_PATTERNS_PATH`: Custom path to a common-pattern list file
//!   (default: `./assets/patterns.txt`). Optional; a built-in list
//!   applies until a file is loaded.
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::analyze_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let analysis = analyze_password(&password);
//!
//! println!("Score: {}", analysis.score);
//! println!("Strength: {}", analysis.strength);
//! println!("Crack time: {}", analysis.brute_force_time);
//! for hint in &analysis.feedback {
//!     println!("- {hint}");
//! }
//! ```

// Internal modules
mod analyzer;
mod brute_force;
mod feedback;
mod patterns;
mod signals;
mod types;

// Public API
pub use analyzer::analyze_password;
pub use brute_force::estimate_brute_force_time;
pub use feedback::generate_feedback;
pub use patterns::{
    PatternsError, contains_common_pattern, get_patterns, init_patterns, init_patterns_from_path,
};
pub use types::{Charset, PasswordAnalysis, PasswordStrength};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
