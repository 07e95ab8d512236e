//! Versioned record envelopes

use crate::{Result, Storage};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// On-disk shape of every persisted record: `{"state": ..., "version": N}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Versioned<T> {
    pub state: T,
    pub version: u32,
}

/// Serialize `state` under `key`, tagged with `version`
pub fn save_versioned<S, T>(storage: &S, key: &str, version: u32, state: &T) -> Result<()>
where
    S: Storage + ?Sized,
    T: Serialize,
{
    let envelope = Versioned { state, version };
    let json = serde_json::to_string(&envelope)?;
    storage.set(key, &json)
}

/// Load the record under `key` if it was written with `version`
///
/// A missing key and a version mismatch both yield `Ok(None)`; the mismatch
/// is logged and the stale record is left in place to be overwritten by the
/// next save. A record that matches the version but fails to deserialize is
/// an error.
pub fn load_versioned<S, T>(storage: &S, key: &str, version: u32) -> Result<Option<T>>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    #[derive(Deserialize)]
    struct Header {
        version: u32,
    }

    let header: Header = serde_json::from_str(&raw)?;
    if header.version != version {
        tracing::warn!(
            "discarding persisted {:?}: schema version {} (expected {})",
            key,
            header.version,
            version
        );
        return Ok(None);
    }

    let envelope: Versioned<T> = serde_json::from_str(&raw)?;
    Ok(Some(envelope.state))
}
