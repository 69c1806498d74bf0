//! Output identifiers.

use core::fmt;
use core::str::FromStr;

use crate::errors::CoreError;

fn is_lower_hex_len(s: &str, n: usize) -> bool {
    s.len() == n && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// "RES:" + 64-hex (lowercase) digest of the canonical params+results bytes.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ResultId(String);

impl ResultId {
    /// Build from a bare 64-hex digest.
    pub fn from_digest_hex(hex64: &str) -> Result<Self, CoreError> {
        if is_lower_hex_len(hex64, 64) {
            Ok(Self(format!("RES:{hex64}")))
        } else {
            Err(CoreError::InvalidHex)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 64-hex part without the prefix.
    pub fn digest_hex(&self) -> &str {
        &self.0[4..]
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResultId {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("RES:").ok_or(CoreError::InvalidId)?;
        if is_lower_hex_len(rest, 64) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidId)
        }
    }
}

impl TryFrom<String> for ResultId {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ResultId> for String {
    fn from(id: ResultId) -> Self {
        id.0
    }
}
