//! Login to a graph database session with a seed-derived SEA key pair.
//!
//! The session client is an external collaborator reached through
//! [`GraphSession`] and [`GraphUser`]. Its login reports completion through a
//! callback that fires exactly once; [`authenticate`] bridges that callback to
//! a `tokio::sync::oneshot` channel and awaits it. On success the identity is
//! published back into the session's shared store with a single `put`.
//!
//! There is no timeout. A collaborator that keeps the callback alive without
//! ever firing it leaves the caller suspended; one that drops it surfaces as
//! [`AuthError::CallbackDropped`].

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::core::error::KeyError;
use crate::core::operations::derive::derive_sea_pair;
use crate::core::types::{SeaKeyPair, SessionIdentity};

/// Outcome a session reports to its login callback.
pub type AuthAck<E> = Result<SessionIdentity, E>;

/// Single-use login completion callback.
pub type AuthCallback<E> = Box<dyn FnOnce(AuthAck<E>) + Send + 'static>;

/// A session-scoped user handle of a graph database client.
pub trait GraphUser {
    /// Error value the client reports for a failed login. Passed through
    /// to the caller unchanged.
    type Error: Send + 'static;

    /// Starts a login with `pair`. Must invoke `callback` at most once.
    fn auth(&self, pair: SeaKeyPair, callback: AuthCallback<Self::Error>);

    /// Writes `identity` into the session's shared store. Fire and forget.
    fn put(&self, identity: SessionIdentity);
}

/// A graph database client session.
pub trait GraphSession {
    /// User handle type returned by [`GraphSession::user`].
    type User: GraphUser;

    /// Returns the session's user handle.
    fn user(&self) -> Self::User;
}

/// Errors returned by [`authenticate`].
#[derive(Debug, Error)]
pub enum AuthError<E> {
    /// The seed could not produce a key pair; the session was never contacted.
    #[error("Key derivation failed: {0}")]
    Derivation(#[source] KeyError),

    /// The session rejected the login. Carries the client's error verbatim.
    #[error("Authentication failed: {0}")]
    Rejected(E),

    /// The session dropped the login callback without invoking it.
    #[error("Login callback dropped without completing")]
    CallbackDropped,
}

/// Error type of [`authenticate`] for a given session.
pub type SessionAuthError<S> = AuthError<<<S as GraphSession>::User as GraphUser>::Error>;

/// Derives the SEA pair for `seed`, logs the session in with it, and
/// publishes the resulting identity.
///
/// # Errors
///
/// - `AuthError::Derivation` if the seed is rejected (no login attempted)
/// - `AuthError::Rejected` with the client's error if the login fails (no
///   `put` is issued)
/// - `AuthError::CallbackDropped` if the client drops the callback
pub async fn authenticate<S>(session: &S, seed: &str) -> Result<SessionIdentity, SessionAuthError<S>>
where
    S: GraphSession,
{
    let pair = derive_sea_pair(seed).map_err(AuthError::Derivation)?;
    let user = session.user();

    let (tx, rx) = oneshot::channel();
    user.auth(
        pair,
        Box::new(move |ack| {
            // The receiver only goes away if the caller stopped waiting.
            let _ = tx.send(ack);
        }),
    );

    let identity = match rx.await {
        Ok(Ok(identity)) => identity,
        Ok(Err(err)) => {
            warn!("session rejected login");
            return Err(AuthError::Rejected(err));
        }
        Err(_) => {
            warn!("session dropped login callback");
            return Err(AuthError::CallbackDropped);
        }
    };

    user.put(identity.clone());
    info!(pub_key = identity.pub_key(), "session authenticated");
    Ok(identity)
}
