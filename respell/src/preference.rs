//! Resolution and persistence of the active spelling preference.
//!
//! The preference store owns the per-session variant value: it is
//! resolved when the actor identity is set, read through
//! [`PreferenceStore::resolve`], and changed only through
//! [`PreferenceStore::set_preference`]. The account profile store, the
//! device-local cache and the locale signal are injected collaborators;
//! the engine never queries a concrete backend or the ambient
//! environment itself.

use std::sync::Arc;
use std::thread;

use parking_lot::RwLock;
use smol_str::SmolStr;
use thiserror::Error;

use crate::constants::PREFERENCE_KEY;
use crate::Variant;

/// Failure reported by a preference persistence collaborator.
///
/// These errors are logged and degraded around, never propagated to the
/// caller of the preference store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store could not be read.
    #[error("profile store read failed: {0}")]
    Read(String),
    /// The backing store could not be written.
    #[error("profile store write failed: {0}")]
    Write(String),
}

/// Keyed record store addressable by account identity, holding
/// per-account profile fields as strings.
pub trait ProfileStore: Send + Sync {
    /// Reads one field of an account's profile. `Ok(None)` means the
    /// field has never been written.
    fn read_field(&self, actor_id: &str, field: &str) -> Result<Option<String>, StoreError>;

    /// Writes one field of an account's profile.
    fn write_field(&self, actor_id: &str, field: &str, value: &str) -> Result<(), StoreError>;
}

/// Device-local string key-value store. Infallible by contract; a cache
/// that can fail should swallow and log its own errors.
pub trait LocalCache: Send + Sync {
    /// Reads a cached value.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a cached value, overwriting any previous one.
    fn set(&self, key: &str, value: &str);
}

/// Injected capability returning the runtime's current locale tag, if
/// any. Modeled as a capability rather than an environment query so the
/// engine stays runtime-agnostic.
pub trait LocaleSource: Send + Sync {
    /// The current BCP-47 locale tag, if the runtime provides one.
    fn current_locale(&self) -> Option<String>;
}

impl<F> LocaleSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn current_locale(&self) -> Option<String> {
        self()
    }
}

/// The visitor or account on whose behalf a preference is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Actor {
    /// An anonymous visitor with no account profile.
    Anonymous,
    /// An authenticated account, addressed by its identity string.
    Account(SmolStr),
}

impl Actor {
    /// Whether this actor has an account profile to read and write.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Actor::Account(_))
    }
}

// Two states per actor session. `Loading -> Ready` happens once per
// identity; only an identity change re-enters `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Loading,
    Ready(Variant),
}

struct Session {
    actor: Actor,
    state: State,
}

/// Session-scoped owner of the active spelling preference.
///
/// Resolution order: the authenticated account's profile value, then
/// the device-local cache, then a default derived from the runtime
/// locale. Resolution never fails; every error degrades to the next
/// source and is logged.
pub struct PreferenceStore {
    profile: Arc<dyn ProfileStore>,
    cache: Arc<dyn LocalCache>,
    locale: Arc<dyn LocaleSource>,
    session: RwLock<Session>,
}

impl PreferenceStore {
    /// Creates a store for an anonymous session; no source is consulted
    /// until the first [`resolve`](PreferenceStore::resolve).
    pub fn new(
        profile: Arc<dyn ProfileStore>,
        cache: Arc<dyn LocalCache>,
        locale: Arc<dyn LocaleSource>,
    ) -> PreferenceStore {
        PreferenceStore {
            profile,
            cache,
            locale,
            session: RwLock::new(Session {
                actor: Actor::Anonymous,
                state: State::Loading,
            }),
        }
    }

    /// The actor this session currently resolves preferences for.
    pub fn actor(&self) -> Actor {
        self.session.read().actor.clone()
    }

    /// Whether a variant value is available without consulting sources.
    pub fn is_ready(&self) -> bool {
        matches!(self.session.read().state, State::Ready(_))
    }

    /// Switches the session to a new actor identity (sign-in or
    /// sign-out). An identity change discards the resolved value and
    /// re-resolves from the new actor's own sources on the next
    /// [`resolve`](PreferenceStore::resolve); setting the same identity
    /// again keeps the current state.
    pub fn set_actor(&self, actor: Actor) {
        let mut session = self.session.write();
        if session.actor != actor {
            session.actor = actor;
            session.state = State::Loading;
        }
    }

    /// The effective variant for the current actor.
    ///
    /// The first call per identity consults the sources in priority
    /// order and memoizes the result; later calls return the memoized
    /// value until the identity changes or the preference is set.
    pub fn resolve(&self) -> Variant {
        if let State::Ready(variant) = self.session.read().state {
            return variant;
        }

        let actor = self.session.read().actor.clone();
        let variant = self.resolve_from_sources(&actor);

        let mut session = self.session.write();
        // an explicit set that raced us wins
        if let State::Ready(variant) = session.state {
            return variant;
        }
        if session.actor == actor {
            session.state = State::Ready(variant);
        }
        variant
    }

    /// Sets the preference for the current actor.
    ///
    /// The in-memory value is updated first, so same-session
    /// [`resolve`](PreferenceStore::resolve) calls see it immediately;
    /// the local cache is written synchronously; an authenticated
    /// actor's profile is persisted on a detached thread,
    /// fire-and-forget. A profile write failure is logged and does not
    /// roll anything back.
    pub fn set_preference(&self, variant: Variant) {
        let actor = {
            let mut session = self.session.write();
            session.state = State::Ready(variant);
            session.actor.clone()
        };

        self.cache.set(PREFERENCE_KEY, variant.as_str());

        if let Actor::Account(id) = actor {
            let profile = Arc::clone(&self.profile);
            thread::spawn(move || {
                if let Err(e) = profile.write_field(&id, PREFERENCE_KEY, variant.as_str()) {
                    log::warn!("failed to persist spelling preference for {}: {}", id, e);
                }
            });
        }
    }

    fn resolve_from_sources(&self, actor: &Actor) -> Variant {
        if let Actor::Account(id) = actor {
            match self.profile.read_field(id, PREFERENCE_KEY) {
                Ok(Some(raw)) => match raw.parse::<Variant>() {
                    Ok(variant) => return variant,
                    Err(e) => log::warn!("ignoring stored profile preference: {}", e),
                },
                Ok(None) => {}
                Err(e) => log::warn!("profile preference read failed, falling back: {}", e),
            }
        }

        if let Some(raw) = self.cache.get(PREFERENCE_KEY) {
            match raw.parse::<Variant>() {
                Ok(variant) => return variant,
                Err(e) => log::warn!("ignoring cached preference: {}", e),
            }
        }

        match self.locale.current_locale() {
            Some(tag) => Variant::from_locale(&tag),
            None => Variant::British,
        }
    }
}
