//! End-to-end tests for the token protocol over the in-memory backend.
//!
//! These tests exercise the full flow: application registration, issuance,
//! verification, revocation, and secret rotation.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tessera_auth::{TokenConfig, TokenService, Verification};
use tessera_auth_memory::{MemoryRevocationRegistry, MemorySecretStore};

/// Helper to build a service over fresh in-memory stores.
fn service() -> TokenService {
    TokenService::new(
        Arc::new(MemorySecretStore::new()),
        Arc::new(MemoryRevocationRegistry::new()),
    )
}

// =============================================================================
// Round Trip
// =============================================================================

#[tokio::test]
async fn test_round_trip_surfaces_payload() {
    let service = service();
    service.register_application("app1").await.unwrap();

    let payload = json!({"role": "admin", "features": ["export", "search"]});
    let token = service
        .issue("app1", &payload, Some(Duration::from_secs(5)))
        .await
        .unwrap();

    let verification = service.verify(&token).await;
    assert!(verification.valid);
    assert_eq!(verification.payload, Some(payload));
}

#[tokio::test]
async fn test_round_trip_with_default_ttl() {
    let service = service();
    service.register_application("app1").await.unwrap();

    let token = service.issue("app1", &json!({"n": 1}), None).await.unwrap();
    assert!(service.verify(&token).await.valid);
}

#[tokio::test]
async fn test_tokens_are_independent_across_applications() {
    let service = service();
    service.register_application("app1").await.unwrap();
    service.register_application("app2").await.unwrap();

    let token1 = service.issue("app1", &json!({"app": 1}), None).await.unwrap();
    let token2 = service.issue("app2", &json!({"app": 2}), None).await.unwrap();

    assert_eq!(service.verify(&token1).await.payload, Some(json!({"app": 1})));
    assert_eq!(service.verify(&token2).await.payload, Some(json!({"app": 2})));
}

// =============================================================================
// Expiry
// =============================================================================

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let service = service();
    service.register_application("app1").await.unwrap();

    let token = service
        .issue("app1", &json!({}), Some(Duration::from_millis(1)))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;

    assert_eq!(service.verify(&token).await, Verification::denied());
}

#[tokio::test]
async fn test_configured_default_ttl_governs_expiry() {
    let service = TokenService::with_config(
        Arc::new(MemorySecretStore::new()),
        Arc::new(MemoryRevocationRegistry::new()),
        TokenConfig::default().with_default_ttl(Duration::from_millis(1)),
    );
    service.register_application("app1").await.unwrap();

    let token = service.issue("app1", &json!({}), None).await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert!(!service.verify(&token).await.valid);
}

// =============================================================================
// Tampering and Unknown Applications
// =============================================================================

#[tokio::test]
async fn test_tampered_signature_is_rejected() {
    let service = service();
    service.register_application("app1").await.unwrap();

    let token = service
        .issue("app1", &json!({"role": "admin"}), Some(Duration::from_secs(5)))
        .await
        .unwrap();
    assert!(service.verify(&token).await.valid);

    // Flip the final signature character.
    let (head, tail) = token.split_at(token.len() - 1);
    let flipped = if tail == "0" { "1" } else { "0" };
    let tampered = format!("{head}{flipped}");

    assert_eq!(service.verify(&tampered).await, Verification::denied());
}

#[tokio::test]
async fn test_malformed_tokens_are_rejected() {
    let service = service();
    service.register_application("app1").await.unwrap();

    for garbage in ["", "just-one-segment", "a.b.c", "..", "!!.##"] {
        let verification = service.verify(garbage).await;
        assert!(!verification.valid, "{garbage:?} should be rejected");
        assert!(verification.payload.is_none());
    }
}

#[tokio::test]
async fn test_token_for_unregistered_application_is_rejected() {
    // A well-formed, correctly signed token from one service instance must
    // not verify against an instance that never registered the application.
    let issuing = service();
    issuing.register_application("app1").await.unwrap();
    let token = issuing
        .issue("app1", &json!({"role": "admin"}), Some(Duration::from_secs(5)))
        .await
        .unwrap();

    let verifying = service();
    assert_eq!(verifying.verify(&token).await, Verification::denied());
}

#[tokio::test]
async fn test_issue_for_unregistered_application_is_a_typed_error() {
    let service = service();
    let result = service.issue("ghost", &json!({}), None).await;

    match result {
        Err(tessera_auth::AuthError::UnknownApplication { application_id }) => {
            assert_eq!(application_id, "ghost");
        }
        other => panic!("Expected UnknownApplication, got {other:?}"),
    }
}

// =============================================================================
// Revocation
// =============================================================================

#[tokio::test]
async fn test_revoked_token_is_rejected_before_expiry() {
    let service = service();
    service.register_application("app1").await.unwrap();

    let token = service
        .issue("app1", &json!({"role": "admin"}), Some(Duration::from_secs(60)))
        .await
        .unwrap();
    assert!(service.verify(&token).await.valid);

    service.revoke(&token).await.unwrap();
    assert_eq!(service.verify(&token).await, Verification::denied());
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
    let service = service();
    service.register_application("app1").await.unwrap();

    let token = service.issue("app1", &json!({}), None).await.unwrap();
    service.revoke(&token).await.unwrap();
    service.revoke(&token).await.unwrap();
    service.revoke("never-issued").await.unwrap();
}

#[tokio::test]
async fn test_revoking_one_token_leaves_others_valid() {
    let service = service();
    service.register_application("app1").await.unwrap();

    let revoked = service.issue("app1", &json!({"n": 1}), None).await.unwrap();
    let kept = service.issue("app1", &json!({"n": 2}), None).await.unwrap();

    service.revoke(&revoked).await.unwrap();

    assert!(!service.verify(&revoked).await.valid);
    assert!(service.verify(&kept).await.valid);
}

#[tokio::test]
async fn test_cleanup_prunes_lapsed_tokens_only() {
    let service = service();
    service.register_application("app1").await.unwrap();

    let lapsed = service
        .issue("app1", &json!({}), Some(Duration::from_millis(1)))
        .await
        .unwrap();
    let live = service
        .issue("app1", &json!({}), Some(Duration::from_secs(60)))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(service.cleanup_expired().await.unwrap(), 1);

    assert!(!service.verify(&lapsed).await.valid);
    assert!(service.verify(&live).await.valid);
}

// =============================================================================
// Secret Rotation
// =============================================================================

#[tokio::test]
async fn test_rotation_invalidates_outstanding_tokens() {
    let service = service();
    let first = service.register_application("app1").await.unwrap();

    let token = service
        .issue("app1", &json!({"role": "admin"}), Some(Duration::from_secs(60)))
        .await
        .unwrap();
    assert!(service.verify(&token).await.valid);

    let second = service.register_application("app1").await.unwrap();
    assert_ne!(first, second);

    assert_eq!(service.verify(&token).await, Verification::denied());
}

#[tokio::test]
async fn test_tokens_issued_after_rotation_verify() {
    let service = service();
    service.register_application("app1").await.unwrap();
    service.register_application("app1").await.unwrap();

    let token = service.issue("app1", &json!({}), None).await.unwrap();
    assert!(service.verify(&token).await.valid);
}

// =============================================================================
// Example Scenario
// =============================================================================

#[tokio::test]
async fn test_admin_session_lifecycle() {
    let service = service();
    service.register_application("app1").await.unwrap();

    let token = service
        .issue("app1", &json!({"role": "admin"}), Some(Duration::from_millis(5000)))
        .await
        .unwrap();

    let verification = service.verify(&token).await;
    assert!(verification.valid);
    assert_eq!(verification.payload, Some(json!({"role": "admin"})));

    service.revoke(&token).await.unwrap();

    let verification = service.verify(&token).await;
    assert!(!verification.valid);
    assert!(verification.payload.is_none());
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn test_concurrent_issue_and_verify() {
    let service = Arc::new(service());
    service.register_application("app1").await.unwrap();

    let mut handles = Vec::new();
    for n in 0..16 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            let token = service
                .issue("app1", &json!({"n": n}), Some(Duration::from_secs(5)))
                .await
                .unwrap();
            let verification = service.verify(&token).await;
            assert!(verification.valid);
            assert_eq!(verification.payload, Some(json!({"n": n})));
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
}
