//! Password signal detectors
//!
//! Each signal inspects one aspect of the candidate password; the
//! analyzer and the feedback generator combine the raw signals into
//! the score and the remediation messages.

mod charset;
mod entropy;
mod repeats;

pub use charset::charset_profile;
pub use entropy::entropy_bits;
pub use repeats::has_repeated_run;
