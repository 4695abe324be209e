//! Per-user conversation context
//!
//! Bounded FIFO buffers per user plus the process-wide store. Contexts
//! are created lazily on first use and never torn down; the store is a
//! working cache, not a system of record.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use disha_config::MemorySettings;
use disha_core::{ConversationEntry, Intent, InteractionRecord};

/// Bounded per-user buffers.
#[derive(Debug)]
pub struct UserContext {
    memory: VecDeque<ConversationEntry>,
    interactions: VecDeque<InteractionRecord>,
    memory_capacity: usize,
    interaction_capacity: usize,
}

impl UserContext {
    fn new(settings: &MemorySettings) -> Self {
        Self {
            memory: VecDeque::with_capacity(settings.conversation_capacity),
            interactions: VecDeque::with_capacity(settings.interaction_capacity),
            memory_capacity: settings.conversation_capacity,
            interaction_capacity: settings.interaction_capacity,
        }
    }

    /// Append a conversation entry, evicting the oldest past capacity.
    pub fn push_entry(&mut self, entry: ConversationEntry) {
        self.memory.push_back(entry);
        while self.memory.len() > self.memory_capacity {
            self.memory.pop_front();
        }
    }

    /// Append an interaction record, evicting the oldest past capacity.
    pub fn push_interaction(&mut self, record: InteractionRecord) {
        self.interactions.push_back(record);
        while self.interactions.len() > self.interaction_capacity {
            self.interactions.pop_front();
        }
    }

    /// Most recent conversation entry.
    pub fn last_entry(&self) -> Option<&ConversationEntry> {
        self.memory.back()
    }

    /// Intent of the most recent conversation entry.
    pub fn last_intent(&self) -> Option<Intent> {
        self.memory.back().map(|entry| entry.intent)
    }

    /// Conversation entries currently held, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &ConversationEntry> {
        self.memory.iter()
    }

    /// Number of conversation entries currently held.
    pub fn memory_len(&self) -> usize {
        self.memory.len()
    }

    /// Interaction records currently held, oldest first.
    pub fn interactions(&self) -> impl Iterator<Item = &InteractionRecord> {
        self.interactions.iter()
    }

    /// Number of interaction records currently held.
    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }
}

/// Process-wide store of per-user contexts.
///
/// The outer lock guards the map only. Each context sits behind its own
/// mutex, so one user's turn serializes against itself without blocking
/// other users.
#[derive(Debug)]
pub struct ContextStore {
    settings: MemorySettings,
    users: RwLock<HashMap<String, Arc<Mutex<UserContext>>>>,
}

impl ContextStore {
    pub fn new(settings: MemorySettings) -> Self {
        Self {
            settings,
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Context for `user_id`, created empty on first use.
    pub fn user(&self, user_id: &str) -> Arc<Mutex<UserContext>> {
        if let Some(context) = self.users.read().get(user_id) {
            return Arc::clone(context);
        }

        let mut users = self.users.write();
        Arc::clone(
            users
                .entry(user_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(UserContext::new(&self.settings)))),
        )
    }

    /// Context for `user_id` if one already exists. Never creates.
    pub fn get(&self, user_id: &str) -> Option<Arc<Mutex<UserContext>>> {
        self.users.read().get(user_id).map(Arc::clone)
    }

    /// Number of users with a context.
    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }
}
