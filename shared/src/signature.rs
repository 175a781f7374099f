use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use thiserror::Error;
use tracing::debug;

use crate::key::SigningKey;
use crate::url_parts::UrlParts;

type HmacSha1 = Hmac<Sha1>;

/// Signs `raw_url` with a URL-safe base64 encoded secret.
///
/// The signature covers `<path>?<query>` and is appended as
/// `<scheme>://<host><path>?<query>&signature=<signature>`. Both the `?` and
/// the `&signature=` are written even when the URL has no query, which is
/// the form verifiers of this scheme expect.
pub fn sign(raw_url: &str, encoded_key: &str) -> Result<String, SignatureError> {
    let key: SigningKey = encoded_key.parse()?;
    sign_with_key(raw_url, &key)
}

/// Same as [sign], for a secret that has already been decoded.
pub fn sign_with_key(raw_url: &str, key: &SigningKey) -> Result<String, SignatureError> {
    let parts = UrlParts::parse(raw_url)?;
    let to_sign = parts.path_and_query();

    let signature = make_url_safe_base64_hash(key.as_bytes(), &to_sign);
    debug!(path_and_query = %to_sign, "Signed url");

    Ok(format!(
        "{}://{}{}&signature={}",
        parts.scheme(),
        parts.host(),
        to_sign,
        signature
    ))
}

pub fn make_url_safe_base64_hash(secret: &[u8], message: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC can take key of any size");

    mac.update(message.as_bytes());

    let result = mac.finalize();
    let result_bytes = result.into_bytes();

    URL_SAFE.encode(result_bytes)
}

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("The secret key is not valid URL-safe base64.")]
    KeyDecoding(#[from] base64::DecodeError),
    #[error("The URL could not be parsed.")]
    UrlParsing(#[from] url::ParseError),
}
