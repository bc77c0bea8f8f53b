//! Client session context and its persistence.
//!
//! A [`Session`] is an explicit value handed to the navigation guard and to
//! anything that needs the caller's identity. It is loaded once at start-up,
//! saved at login and cleared at logout; in between, nothing reads the store.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, anyhow};
use serde::Serialize;

use crate::Role;

/// Storage key holding the string-encoded login flag.
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";

/// Storage key holding the role's wire name.
pub const USER_ROLE_KEY: &str = "userRole";

/// String key/value persistence for session fields.
///
/// Each call is atomic per key; no cross-key transaction is implied.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

/// Snapshot of who is using the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Session {
    pub logged_in: bool,
    pub role: Option<Role>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(role: Option<Role>) -> Self {
        Self {
            logged_in: true,
            role,
        }
    }

    /// Read the session back from a store.
    ///
    /// Only the exact string `"true"` counts as logged in.
    pub fn load(store: &dyn SessionStore) -> anyhow::Result<Self> {
        let logged_in = store.get(IS_LOGGED_IN_KEY)?.as_deref() == Some("true");
        let role = store
            .get(USER_ROLE_KEY)?
            .and_then(|raw| Role::parse_optional(&raw));

        tracing::debug!(logged_in, role = ?role, "session loaded");
        Ok(Self { logged_in, role })
    }

    pub fn save(&self, store: &dyn SessionStore) -> anyhow::Result<()> {
        store.set(IS_LOGGED_IN_KEY, if self.logged_in { "true" } else { "false" })?;
        match self.role {
            Some(role) => store.set(USER_ROLE_KEY, role.as_str())?,
            None => store.remove(USER_ROLE_KEY)?,
        }
        tracing::debug!(logged_in = self.logged_in, role = ?self.role, "session saved");
        Ok(())
    }

    pub fn clear(store: &dyn SessionStore) -> anyhow::Result<()> {
        store.remove(IS_LOGGED_IN_KEY)?;
        store.remove(USER_ROLE_KEY)?;
        tracing::debug!("session cleared");
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Stores
// ─────────────────────────────────────────────────────────────────────────────

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> anyhow::Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("session store lock poisoned"))
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Store backed by a small JSON object on disk.
///
/// Every write rewrites the whole file. The mutex serialises writers within
/// the process.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Open the store at `{app_data_dir}/countyrisk/session.json`.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(session_file_path()?))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_all(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read session file {:?}", self.path));
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        // Unparsable content reads as an empty session.
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding unreadable session file");
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create session directory at {:?}", dir))?;
        }

        let json = serde_json::to_string_pretty(entries).context("failed to serialize session")?;

        // Sibling temp file renamed over the target: readers never see a
        // partial write.
        let tmp_path = self.temp_path();
        if let Err(e) = std::fs::write(&tmp_path, json) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("failed to write session file {:?}", tmp_path));
        }
        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("failed to replace session file {:?}", self.path));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "session.json".to_string());
        self.path
            .with_file_name(format!(".{}.tmp.{}", name, std::process::id()))
    }

    fn update<F>(&self, f: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("session file lock poisoned"))?;
        let mut entries = self.read_all()?;
        f(&mut entries);
        self.write_all(&entries)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow!("session file lock poisoned"))?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

/// Resolve the path to the session file:
/// `{app_data_dir}/countyrisk/session.json`.
fn session_file_path() -> anyhow::Result<PathBuf> {
    let mut dir = dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|mut h| {
            h.push(".local");
            h.push("share");
            h
        }))
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    dir.push("countyrisk");
    dir.push("session.json");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("countyrisk-session-{}-{}", name, std::process::id()));
        path.push("session.json");
        path
    }

    #[test]
    fn empty_store_loads_anonymous() {
        let store = MemorySessionStore::new();
        assert_eq!(Session::load(&store).unwrap(), Session::anonymous());
    }

    #[test]
    fn only_exact_true_counts_as_logged_in() {
        let store = MemorySessionStore::new();
        for raw in ["TRUE", "1", "yes", ""] {
            store.set(IS_LOGGED_IN_KEY, raw).unwrap();
            assert!(!Session::load(&store).unwrap().logged_in, "{raw:?}");
        }
        store.set(IS_LOGGED_IN_KEY, "true").unwrap();
        assert!(Session::load(&store).unwrap().logged_in);
    }

    #[test]
    fn save_then_load_preserves_role() {
        let store = MemorySessionStore::new();
        Session::authenticated(Some(Role::RiskAnalyst)).save(&store).unwrap();

        assert_eq!(store.get(IS_LOGGED_IN_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(store.get(USER_ROLE_KEY).unwrap().as_deref(), Some("RISK_ANALYST"));
        assert_eq!(
            Session::load(&store).unwrap(),
            Session::authenticated(Some(Role::RiskAnalyst))
        );
    }

    #[test]
    fn saving_without_role_removes_stale_role() {
        let store = MemorySessionStore::new();
        store.set(USER_ROLE_KEY, "ADMIN").unwrap();
        Session::authenticated(None).save(&store).unwrap();
        assert_eq!(store.get(USER_ROLE_KEY).unwrap(), None);
    }

    #[test]
    fn unknown_stored_role_loads_as_none() {
        let store = MemorySessionStore::new();
        store.set(IS_LOGGED_IN_KEY, "true").unwrap();
        store.set(USER_ROLE_KEY, "GUEST").unwrap();
        assert_eq!(Session::load(&store).unwrap(), Session::authenticated(None));
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = MemorySessionStore::new();
        Session::authenticated(Some(Role::Admin)).save(&store).unwrap();
        Session::clear(&store).unwrap();
        assert_eq!(store.get(IS_LOGGED_IN_KEY).unwrap(), None);
        assert_eq!(store.get(USER_ROLE_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let path = temp_session_path("persist");
        let _ = std::fs::remove_file(&path);

        let store = FileSessionStore::new(&path);
        assert_eq!(store.get(IS_LOGGED_IN_KEY).unwrap(), None);
        Session::authenticated(Some(Role::Vip)).save(&store).unwrap();

        let reopened = FileSessionStore::new(&path);
        assert_eq!(
            Session::load(&reopened).unwrap(),
            Session::authenticated(Some(Role::Vip))
        );

        Session::clear(&reopened).unwrap();
        assert_eq!(Session::load(&store).unwrap(), Session::anonymous());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn truncated_session_file_reads_as_anonymous_and_can_be_cleared() {
        let path = temp_session_path("truncated");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"isLoggedIn": "tr"#).unwrap();

        let store = FileSessionStore::new(&path);
        assert_eq!(Session::load(&store).unwrap(), Session::anonymous());
        Session::clear(&store).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert!(entries.is_empty());

        Session::authenticated(Some(Role::Admin)).save(&store).unwrap();
        assert_eq!(
            Session::load(&FileSessionStore::new(&path)).unwrap(),
            Session::authenticated(Some(Role::Admin))
        );

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn writes_leave_no_temp_file_behind() {
        let path = temp_session_path("atomic");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        let store = FileSessionStore::new(&path);
        Session::authenticated(Some(Role::Vip)).save(&store).unwrap();
        Session::clear(&store).unwrap();

        let names: Vec<String> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["session.json".to_string()]);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
