use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Reads the `exp` claim out of a provider-issued JWT. The provider already
/// vouched for the token, so the signature is deliberately not checked here;
/// only the timestamp matters. Opaque (non-JWT) tokens yield `None`.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;
    data.claims
        .exp
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
