use std::{fmt, str::FromStr};

use base64::{engine::general_purpose::URL_SAFE, Engine as _};

use crate::signature::SignatureError;

/// A decoded URL signing secret.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        SigningKey(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Decodes a secret given in URL-safe base64 with canonical padding.
impl FromStr for SigningKey {
    type Err = SignatureError;

    fn from_str(encoded_key: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE.decode(encoded_key.as_bytes())?;
        Ok(SigningKey(bytes))
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use crate::key::*;

    #[test]
    fn test_decode_padded_url_safe_key() -> Result<(), SignatureError> {
        let key: SigningKey = "AAAAAAAAAAAAAAAAAAAAAA==".parse()?;
        assert_eq!(&[0u8; 16], key.as_bytes());
        Ok(())
    }

    #[test]
    fn test_decode_key_with_url_safe_characters() -> Result<(), SignatureError> {
        let key: SigningKey = "-_-_".parse()?;
        assert_eq!(&[0xfb, 0xff, 0xbf], key.as_bytes());
        Ok(())
    }

    #[test]
    fn test_reject_invalid_characters() {
        let r = "not-valid-base64!!!".parse::<SigningKey>();
        assert!(matches!(r, Err(SignatureError::KeyDecoding(_))));
    }

    #[test]
    fn test_reject_standard_alphabet() {
        let r = "vNIXE0xscrmjlyV+12Nj/BvUPaw=".parse::<SigningKey>();
        assert!(matches!(r, Err(SignatureError::KeyDecoding(_))));
    }

    #[test]
    fn test_reject_missing_padding() {
        let r = "AAAAAAAAAAAAAAAAAAAAAA".parse::<SigningKey>();
        assert!(matches!(r, Err(SignatureError::KeyDecoding(_))));
    }

    #[test]
    fn test_debug_hides_key_bytes() {
        let key = SigningKey::from_bytes(b"supersecret".to_vec());
        assert_eq!("SigningKey(..)", format!("{key:?}"));
    }
}
