use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::constants::{FINGERPRINT_LEN, PARTICIPATION_KEY_PREFIX};

/// Best-effort per-browser identifier.
///
/// This is an encoding of the user agent and screen width, not a hash. Two
/// browsers that share the first few bytes of their user agent collide, and
/// anyone can forge one. It only exists to stop casual repeat spins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn derive(user_agent: &str, screen_width: i32) -> Self {
        let encoded = STANDARD.encode(format!("{}|{}", user_agent, screen_width));
        Self(encoded.chars().take(FINGERPRINT_LEN).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local storage key marking this browser as having taken part
    pub fn participation_key(&self) -> String {
        format!("{}{}", PARTICIPATION_KEY_PREFIX, self.0)
    }
}

impl From<&str> for Fingerprint {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
