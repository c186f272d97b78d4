use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::{AppError, AppErrorKind, Role};

/// Durable key/value storage holding the role identifier.
///
/// Implementations exist for browser local storage (in the app crate), a
/// JSON file on disk, and an in-memory map.
pub trait RoleStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-memory storage. Clones share the same map, so a fresh [`RoleStore`]
/// built from a clone observes earlier writes the way a page reload would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a raw value without going through [`RoleStore`], as another
    /// tab or a devtools edit would.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Drop every entry, as clearing site data would.
    pub fn clear_all(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// Handles are equal when they share one map.
impl PartialEq for MemoryStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl RoleStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage backed by a small JSON object on disk (desktop builds).
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<HashMap<String, String>, AppError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`Self::load`], but an unparseable file counts as empty so the
    /// next write replaces it.
    fn load_for_update(&self) -> Result<HashMap<String, String>, AppError> {
        match self.load() {
            Err(e) if e.kind == AppErrorKind::Serialization => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding unreadable session file");
                Ok(HashMap::new())
            }
            other => other,
        }
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl RoleStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.load_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.load_for_update()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// The role store: typed access to the single persisted role value.
pub struct RoleStore {
    storage: Box<dyn RoleStorage>,
    key: String,
}

impl RoleStore {
    pub fn new(storage: impl RoleStorage + 'static, key: impl Into<String>) -> Self {
        Self {
            storage: Box::new(storage),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current role, or `None` for guests.
    ///
    /// Read failures and unrecognized values are logged and treated as "no
    /// role"; callers never see a storage error here.
    pub fn get(&self) -> Option<Role> {
        match self.storage.read(&self.key) {
            Ok(Some(value)) => {
                let role = Role::from_key(&value);
                if role.is_none() {
                    tracing::warn!(key = %self.key, value = %value, "ignoring unrecognized stored role");
                }
                role
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "role storage read failed");
                None
            }
        }
    }

    pub fn set(&self, role: Role) -> Result<(), AppError> {
        self.storage.write(&self.key, role.as_str())?;
        tracing::info!(role = %role, "role stored");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), AppError> {
        self.storage.remove(&self.key)?;
        tracing::info!("role cleared");
        Ok(())
    }
}
