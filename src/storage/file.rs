//! File-backed storage
//!
//! Records are YAML files under the store directory:
//!
//! ```text
//! .servicedesk/
//!   users/<uuid>.yaml
//!   tickets/<uuid>.yaml
//!   reference.yaml
//!   session
//! ```
//!
//! Every write lands in a temporary file first and is renamed into place,
//! so a record is either the old version or the new one, never a torn
//! write. That rename is the transaction boundary of the system.

use crate::core::{ReferenceData, Ticket, TicketId, User, UserId};
use crate::error::{Result, ServiceDeskError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const USERS_DIR: &str = "users";
const TICKETS_DIR: &str = "tickets";
const REFERENCE_FILE: &str = "reference.yaml";
const SESSION_FILE: &str = "session";

/// File-backed store rooted at a `.servicedesk` directory
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open a store at the given root (the `.servicedesk` directory itself)
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the directory layout exists
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.users_dir().is_dir() && self.tickets_dir().is_dir()
    }

    /// Create the directory layout
    pub fn init_layout(&self) -> Result<()> {
        fs::create_dir_all(self.users_dir())?;
        fs::create_dir_all(self.tickets_dir())?;
        debug!(root = %self.root.display(), "initialized store layout");
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(ServiceDeskError::StoreNotInitialized)
        }
    }

    fn users_dir(&self) -> PathBuf {
        self.root.join(USERS_DIR)
    }

    fn tickets_dir(&self) -> PathBuf {
        self.root.join(TICKETS_DIR)
    }

    fn user_path(&self, id: &UserId) -> PathBuf {
        self.users_dir().join(format!("{id}.yaml"))
    }

    fn ticket_path(&self, id: &TicketId) -> PathBuf {
        self.tickets_dir().join(format!("{id}.yaml"))
    }

    fn reference_path(&self) -> PathBuf {
        self.root.join(REFERENCE_FILE)
    }

    fn session_path(&self) -> PathBuf {
        self.root.join(SESSION_FILE)
    }

    /// Serialize a value to a file atomically (write tmp, then rename)
    fn write_yaml<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let content = serde_yaml::to_string(value)?;
        let tmp = path.with_extension("yaml.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn read_yaml<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    fn read_dir_records<T: DeserializeOwned>(&self, dir: &Path) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                records.push(self.read_yaml(&path)?);
            }
        }
        Ok(records)
    }

    // --- users ---

    pub(crate) fn write_user(&self, user: &User) -> Result<()> {
        self.ensure_initialized()?;
        self.write_yaml(&self.user_path(&user.id), user)
    }

    pub(crate) fn read_user(&self, id: &UserId) -> Result<User> {
        self.ensure_initialized()?;
        let path = self.user_path(id);
        if !path.exists() {
            return Err(ServiceDeskError::UserNotFound { id: id.to_string() });
        }
        self.read_yaml(&path)
    }

    pub(crate) fn read_all_users(&self) -> Result<Vec<User>> {
        self.ensure_initialized()?;
        self.read_dir_records(&self.users_dir())
    }

    pub(crate) fn remove_user(&self, id: &UserId) -> Result<()> {
        self.ensure_initialized()?;
        let path = self.user_path(id);
        if !path.exists() {
            return Err(ServiceDeskError::UserNotFound { id: id.to_string() });
        }
        fs::remove_file(path)?;
        Ok(())
    }

    // --- tickets ---

    pub(crate) fn write_ticket(&self, ticket: &Ticket) -> Result<()> {
        self.ensure_initialized()?;
        self.write_yaml(&self.ticket_path(&ticket.id), ticket)
    }

    pub(crate) fn read_ticket(&self, id: &TicketId) -> Result<Ticket> {
        self.ensure_initialized()?;
        let path = self.ticket_path(id);
        if !path.exists() {
            return Err(ServiceDeskError::TicketNotFound { id: id.to_string() });
        }
        self.read_yaml(&path)
    }

    pub(crate) fn read_all_tickets(&self) -> Result<Vec<Ticket>> {
        self.ensure_initialized()?;
        self.read_dir_records(&self.tickets_dir())
    }

    // --- reference data ---

    pub(crate) fn write_reference(&self, data: &ReferenceData) -> Result<()> {
        self.ensure_initialized()?;
        self.write_yaml(&self.reference_path(), data)
    }

    pub(crate) fn read_reference(&self) -> Result<ReferenceData> {
        self.ensure_initialized()?;
        let path = self.reference_path();
        if !path.exists() {
            return Err(ServiceDeskError::StoreNotInitialized);
        }
        self.read_yaml(&path)
    }

    // --- session ---

    pub(crate) fn write_session(&self, id: &UserId) -> Result<()> {
        self.ensure_initialized()?;
        let tmp = self.session_path().with_extension("tmp");
        fs::write(&tmp, id.to_string())?;
        fs::rename(&tmp, self.session_path())?;
        Ok(())
    }

    pub(crate) fn read_session(&self) -> Result<Option<UserId>> {
        self.ensure_initialized()?;
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        match content.trim().parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                // A corrupt session file is treated as "not logged in"
                debug!("discarding unparseable session file");
                Ok(None)
            },
        }
    }

    pub(crate) fn remove_session(&self) -> Result<()> {
        self.ensure_initialized()?;
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
