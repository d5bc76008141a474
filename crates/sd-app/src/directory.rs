//! Per-workspace entry table

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use sd_core::{
    BotId, BotInfo, DirectoryClientPort, EntryKind, NickColorPort, UserId, UserInfo,
    WorkspaceContext,
};
use tracing::{debug, trace};

use crate::entry::{BotEntry, DirectoryEntry, HumanEntry};

/// Entry table of one workspace session.
///
/// Entries are created on first reference and live as long as the
/// directory. Lookup and insertion happen in one critical section, so two
/// concurrent first references to an id share one entry and one fetch.
/// Dropping the directory drops its entries, which aborts fetches still in
/// flight.
pub struct WorkspaceDirectory {
    context: Arc<WorkspaceContext>,
    client: Arc<dyn DirectoryClientPort>,
    colors: Arc<dyn NickColorPort>,
    users: Mutex<HashMap<UserId, Arc<HumanEntry>>>,
    bots: Mutex<HashMap<BotId, Arc<BotEntry>>>,
}

impl WorkspaceDirectory {
    pub fn new(
        context: Arc<WorkspaceContext>,
        client: Arc<dyn DirectoryClientPort>,
        colors: Arc<dyn NickColorPort>,
    ) -> Self {
        Self {
            context,
            client,
            colors,
            users: Mutex::new(HashMap::new()),
            bots: Mutex::new(HashMap::new()),
        }
    }

    /// Get the entry for `id`, creating it (and starting its fetch) on miss.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn user(&self, id: &UserId) -> Arc<HumanEntry> {
        self.user_entry(id, None)
    }

    /// Get the entry for `id`, creating it (and starting its fetch) on miss.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn bot(&self, id: &BotId) -> Arc<BotEntry> {
        self.bot_entry(id, None)
    }

    /// Register a user whose profile is already known.
    ///
    /// An existing entry for the id is returned unchanged; profiles are
    /// written once.
    pub fn insert_user(&self, info: UserInfo) -> Arc<HumanEntry> {
        let id = info.id.clone();
        self.user_entry(&id, Some(info))
    }

    /// Register a bot whose profile is already known.
    pub fn insert_bot(&self, info: BotInfo) -> Arc<BotEntry> {
        let id = info.id.clone();
        self.bot_entry(&id, Some(info))
    }

    pub fn entry(&self, id: &str, kind: EntryKind) -> DirectoryEntry {
        match kind {
            EntryKind::Human => DirectoryEntry::Human(self.user(&UserId::from(id))),
            EntryKind::Bot => DirectoryEntry::Bot(self.bot(&BotId::from(id))),
        }
    }

    /// Number of cached entries of both kinds.
    pub fn len(&self) -> usize {
        let users = self.users.lock().unwrap_or_else(PoisonError::into_inner).len();
        let bots = self.bots.lock().unwrap_or_else(PoisonError::into_inner).len();
        users + bots
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn user_entry(&self, id: &UserId, info: Option<UserInfo>) -> Arc<HumanEntry> {
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = users.get(id) {
            trace!(user_id = %id, "User entry cache hit");
            return Arc::clone(entry);
        }

        debug!(user_id = %id, prefetched = info.is_some(), "Creating user entry");
        let entry = Arc::new(HumanEntry::new(
            Arc::clone(&self.context),
            Arc::clone(&self.client),
            Arc::clone(&self.colors),
            id.clone(),
            info,
        ));
        users.insert(id.clone(), Arc::clone(&entry));
        entry
    }

    fn bot_entry(&self, id: &BotId, info: Option<BotInfo>) -> Arc<BotEntry> {
        let mut bots = self.bots.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = bots.get(id) {
            trace!(bot_id = %id, "Bot entry cache hit");
            return Arc::clone(entry);
        }

        debug!(bot_id = %id, prefetched = info.is_some(), "Creating bot entry");
        let entry = Arc::new(BotEntry::new(
            Arc::clone(&self.context),
            Arc::clone(&self.client),
            Arc::clone(&self.colors),
            id.clone(),
            info,
        ));
        bots.insert(id.clone(), Arc::clone(&entry));
        entry
    }
}
