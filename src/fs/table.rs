//! Open file handles addressed by resource id.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;

use crate::effect::TaskError;

pub(crate) type SharedHandle = Arc<tokio::sync::Mutex<tokio::fs::File>>;

#[derive(Default)]
struct TableState {
    last_rid: AtomicU32,
    handles: Mutex<HashMap<u32, SharedHandle>>,
}

/// Registry of open handles, keyed by the `rid` stored in
/// [`Resource`](crate::types::Resource) and [`File`](crate::types::File).
///
/// Clones share the same registry. Ids start at 1 and are never reused, so
/// a stale id fails with [`TaskError::BadResource`] instead of reaching a
/// newer handle.
///
/// # Examples
///
/// ```rust
/// use functional_io::fs::ResourceTable;
///
/// let table = ResourceTable::new();
/// assert!(table.is_empty());
/// assert!(!table.contains(1));
/// ```
#[derive(Clone, Default)]
pub struct ResourceTable {
    state: Arc<TableState>,
}

impl ResourceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open handles.
    pub fn len(&self) -> usize {
        self.state.handles.lock().len()
    }

    /// Returns `true` when nothing is open.
    pub fn is_empty(&self) -> bool {
        self.state.handles.lock().is_empty()
    }

    /// Returns `true` if `rid` refers to an open handle.
    pub fn contains(&self, rid: u32) -> bool {
        self.state.handles.lock().contains_key(&rid)
    }

    pub(crate) fn insert(&self, file: tokio::fs::File) -> u32 {
        let rid = self.state.last_rid.fetch_add(1, Ordering::Relaxed) + 1;
        self.state
            .handles
            .lock()
            .insert(rid, Arc::new(tokio::sync::Mutex::new(file)));
        rid
    }

    pub(crate) fn get(&self, rid: u32) -> Result<SharedHandle, TaskError> {
        self.state
            .handles
            .lock()
            .get(&rid)
            .cloned()
            .ok_or(TaskError::BadResource { rid })
    }

    pub(crate) fn remove(&self, rid: u32) -> Result<SharedHandle, TaskError> {
        self.state
            .handles
            .lock()
            .remove(&rid)
            .ok_or(TaskError::BadResource { rid })
    }
}

impl fmt::Debug for ResourceTable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ResourceTable")
            .field("open", &self.len())
            .field("last_rid", &self.state.last_rid.load(Ordering::Relaxed))
            .finish()
    }
}
