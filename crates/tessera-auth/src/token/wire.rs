//! Token wire format: encoding, signing, and parsing.
//!
//! A token is `base64url(json(claims)) + "." + hex(hmac_sha256(secret,
//! base64url(json(claims))))`. The delimiter is producible by neither the
//! base64url alphabet nor hex, so a token always splits into exactly two
//! segments; anything else is rejected outright.
//!
//! The HMAC is computed over the encoded claims segment exactly as
//! transmitted, never over a re-serialized copy of the decoded claim set.
//! Verification therefore cannot drift from issuance through a
//! canonicalization mismatch.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::claims::ClaimSet;
use crate::error::AuthError;
use crate::secret::ApplicationSecret;
use crate::AuthResult;

/// Separator between the claims segment and the signature.
pub const DELIMITER: char = '.';

type HmacSha256 = Hmac<Sha256>;

/// Computes the hex-encoded HMAC-SHA256 signature of an encoded claims
/// segment.
#[must_use]
pub fn sign(secret: &ApplicationSecret, encoded_claims: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(encoded_claims.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Checks a hex-encoded signature against the encoded claims segment.
///
/// The digest comparison runs in constant time ([`Mac::verify_slice`]), so
/// the check leaks no timing information about the expected signature. An
/// undecodable signature simply fails the check.
#[must_use]
pub fn verify_signature(
    secret: &ApplicationSecret,
    encoded_claims: &str,
    signature: &str,
) -> bool {
    let Ok(provided) = hex::decode(signature) else {
        return false;
    };
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(encoded_claims.as_bytes());
    mac.verify_slice(&provided).is_ok()
}

/// Serializes, encodes, and signs a claim set into a token string.
///
/// # Errors
///
/// Returns an error if the claim set cannot be serialized.
pub fn encode(claims: &ClaimSet, secret: &ApplicationSecret) -> AuthResult<String> {
    let json = serde_json::to_vec(claims)
        .map_err(|e| AuthError::internal(format!("Could not serialize claims: {e}")))?;
    let segment = URL_SAFE_NO_PAD.encode(json);
    let signature = sign(secret, &segment);
    Ok(format!("{segment}{DELIMITER}{signature}"))
}

/// Splits a token into its claims segment and signature.
///
/// Returns `None` unless the token consists of exactly two segments.
#[must_use]
pub fn split(token: &str) -> Option<(&str, &str)> {
    let mut segments = token.split(DELIMITER);
    match (segments.next(), segments.next(), segments.next()) {
        (Some(claims), Some(signature), None) => Some((claims, signature)),
        _ => None,
    }
}

/// Decodes a claims segment back into a [`ClaimSet`].
///
/// # Errors
///
/// Returns an error if the segment is not valid base64url or does not
/// decode to a claim set.
pub fn decode_claims(segment: &str) -> AuthResult<ClaimSet> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| AuthError::invalid_token(format!("Invalid claims encoding: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::invalid_token(format!("Invalid claims structure: {e}")))
}
