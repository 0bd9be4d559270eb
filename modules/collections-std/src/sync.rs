mod std_sync_mutex;

pub use std_sync_mutex::StdSyncMutex;
