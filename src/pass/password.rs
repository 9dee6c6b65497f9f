use std::fmt;

use zeroize::Zeroize;

/// A generated password. Zeroized on drop.
pub struct Password(String);

impl Password {
    /// Takes ownership of an ASCII buffer and zeroizes it.
    pub(crate) fn from_ascii(buf: &mut Vec<u8>) -> Self {
        let s = buf.iter().map(|&b| char::from(b)).collect();
        buf.zeroize();
        Password(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.0.len())
    }
}
