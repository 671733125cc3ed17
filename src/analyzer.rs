//! Password analyzer - main analysis logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::brute_force::estimate_brute_force_time;
use crate::feedback::generate_feedback;
use crate::patterns::contains_common_pattern;
use crate::signals::{charset_profile, entropy_bits, has_repeated_run};
use crate::types::{PasswordAnalysis, PasswordStrength};

/// Analyzes a candidate password and returns the full assessment.
///
/// Accepts any string, including empty and arbitrary Unicode, and
/// never fails. Two calls on the same input (with the same active
/// pattern list) return equal results.
///
/// # Arguments
/// * `password` - The candidate to analyze
///
/// # Returns
/// A `PasswordAnalysis` with score, charset profile, entropy, strength
/// bucket, brute-force time estimate and remediation feedback.
pub fn analyze_password(password: &SecretString) -> PasswordAnalysis {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();

    let charset = charset_profile(pwd);
    let entropy = entropy_bits(length, charset.size);

    let mut score: i32 = 0;

    // Length tiers, cumulative: 8+, 12+ and 16+ each add on top
    if length >= 8 {
        score += 25;
    }
    if length >= 12 {
        score += 15;
    }
    if length >= 16 {
        score += 10;
    }

    // Character diversity
    if charset.lowercase {
        score += 10;
    }
    if charset.uppercase {
        score += 10;
    }
    if charset.numbers {
        score += 10;
    }
    if charset.symbols {
        score += 15;
    }

    // Entropy bonuses
    if entropy >= 50.0 {
        score += 10;
    }
    if entropy >= 70.0 {
        score += 10;
    }

    // Penalties
    if has_repeated_run(pwd) {
        score -= 10;
    }
    if contains_common_pattern(pwd) {
        score -= 15;
    }

    let score = score.clamp(0, 100) as u8;
    let strength = PasswordStrength::from_score(score);
    let brute_force_time = estimate_brute_force_time(length, charset.size);
    let feedback = generate_feedback(password, &charset, length, score);

    PasswordAnalysis {
        score,
        length,
        charset,
        entropy,
        strength,
        brute_force_time,
        feedback,
    }
}

/// Async helper for per-keystroke callers: debounces for 300 ms, then
/// sends the analysis via channel unless the token was cancelled in
/// the meantime.
///
/// Cancellation suppresses the send; it cannot produce a partial
/// analysis because the core analysis is total.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAnalysis>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("analysis cancelled during debounce");
        return;
    }

    let analysis = analyze_password(password);

    if tx.send(analysis).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password analysis result: receiver dropped");
    }
}
