//! Gated URL token generation.
//!
//! Tokens are the random path segment of a shareable gated URL. They are
//! generated from OS entropy and encoded as URL-safe base64 without padding,
//! so a token never needs percent-encoding.

use base64::Engine as _;

/// Length of random bytes before base64 encoding; encodes to 12 characters.
const TOKEN_LENGTH_BYTES: usize = 9;

/// Generates a random URL-safe token for a gated URL.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
