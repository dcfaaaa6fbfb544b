/// Storage key for the active spelling preference, shared by the local
/// cache and the account profile store.
pub const PREFERENCE_KEY: &str = "spelling_preference";
