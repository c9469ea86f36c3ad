use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The external identity returned by the OAuth provider after a successful
/// code exchange. Only the login is of interest to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthIdentity {
    pub username: String,
}

/// A server-side session accepted by the gate: one allow-listed username,
/// valid until `expires_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// A session row about to be persisted. Only the hash of the bearer token
/// is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub token_hash: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// A persisted session row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: Uuid,
    pub token_hash: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// The outcome of a successful sign-in: the raw token handed to the browser
/// cookie plus its lifetime.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}
