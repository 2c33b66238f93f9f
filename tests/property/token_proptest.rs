//! Property-based tests for token issue and verify

use chrono::{Duration, Utc};
use proptest::prelude::*;
use socialnet::backend::auth::sessions::{TokenIssuer, TokenVerifier};
use socialnet::backend::AuthError;
use uuid::Uuid;

const SECRET: &str = "proptest-secret";
const BASE64URL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn pair() -> (TokenIssuer, TokenVerifier) {
    (TokenIssuer::new(SECRET).unwrap(), TokenVerifier::new(SECRET).unwrap())
}

proptest! {
    #[test]
    fn test_verify_returns_subject(raw in any::<u128>(), ttl in 1i64..10_000_000) {
        let (issuer, verifier) = pair();
        let subject = Uuid::from_u128(raw);
        let token = issuer.issue(subject, Duration::seconds(ttl)).unwrap();

        prop_assert_eq!(verifier.verify(&token).unwrap(), subject);
    }

    #[test]
    fn test_expired_at_and_after_ttl(ttl in 1i64..100_000, extra in 0i64..100_000) {
        let (issuer, verifier) = pair();
        let issued = Utc::now();
        let token = issuer.issue_at(Uuid::new_v4(), Duration::seconds(ttl), issued).unwrap();

        let result = verifier.verify_at(&token, issued + Duration::seconds(ttl + extra));
        prop_assert!(matches!(result, Err(AuthError::Expired)));
    }

    #[test]
    fn test_tampered_payload_rejected(index in any::<prop::sample::Index>(), pick in 0usize..64) {
        let (issuer, verifier) = pair();
        let token = issuer.issue(Uuid::new_v4(), Duration::hours(1)).unwrap();

        let header_len = token.find('.').unwrap() + 1;
        let payload_len = token[header_len..].find('.').unwrap();
        let position = header_len + index.index(payload_len);

        let original = token.as_bytes()[position];
        let mut replacement = BASE64URL[pick];
        if replacement == original {
            replacement = BASE64URL[(pick + 1) % BASE64URL.len()];
        }

        let mut bytes = token.into_bytes();
        bytes[position] = replacement;
        let tampered = String::from_utf8(bytes).unwrap();

        prop_assert!(matches!(verifier.verify(&tampered), Err(AuthError::InvalidSignature)));
    }
}
