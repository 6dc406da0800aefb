//! Process-scoped default reader with explicit install and teardown.
//!
//! The slot replaces ad-hoc patching of a global: callers never mutate it
//! directly. [`install`] swaps a reader in and hands back a guard; dropping
//! the guard puts the default back on every exit path, including panic.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::adapters::live::LiveFileSystem;
use crate::ports::filesystem::FileReader;

static SLOT: RwLock<Option<Arc<dyn FileReader>>> = RwLock::new(None);
static INSTALL: Mutex<()> = Mutex::new(());

/// Returns the process-wide reader: the installed one, or the live
/// filesystem when nothing is installed.
#[must_use]
pub fn current() -> Arc<dyn FileReader> {
    let slot = SLOT.read().unwrap_or_else(PoisonError::into_inner);
    slot.clone().unwrap_or_else(|| Arc::new(LiveFileSystem))
}

/// Installs `reader` as the process-wide default until the returned guard
/// drops.
///
/// Installations serialize process-wide: a second call blocks until the
/// first guard is dropped, so callers replacing the ambient reader cannot
/// observe each other's substitutes. Do not install twice from the same
/// thread — the second call would block on its own guard. Poisoned locks
/// are recovered, so a panicking installer does not wedge later installs.
pub fn install(reader: Arc<dyn FileReader>) -> AmbientGuard {
    let serialized = INSTALL.lock().unwrap_or_else(PoisonError::into_inner);
    {
        let mut slot = SLOT.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(reader);
    }
    AmbientGuard { _serialized: serialized }
}

/// Restores the default reader when dropped.
#[must_use = "dropping the guard immediately restores the default reader"]
pub struct AmbientGuard {
    _serialized: MutexGuard<'static, ()>,
}

impl Drop for AmbientGuard {
    fn drop(&mut self) {
        let mut slot = SLOT.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryFileSystem;
    use std::path::Path;

    // One test fn on purpose: the slot is process-wide, and a second test
    // asserting on the empty slot would race this one.
    #[tokio::test]
    async fn install_serves_fake_then_restores_live_default() {
        let fake = InMemoryFileSystem::new();
        fake.insert("./foo", "bar");
        {
            let _guard = install(Arc::new(fake));
            let contents = current().read_to_string(Path::new("./foo")).await.unwrap();
            assert_eq!(contents, "bar");
        }

        // guard dropped: the live filesystem answers again
        let dir = std::env::temp_dir().join("revfile_ambient_unit");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("real.txt");
        std::fs::write(&file, "on disk").unwrap();
        assert_eq!(current().read_to_string(&file).await.unwrap(), "on disk");
        let _ = std::fs::remove_dir_all(&dir);

        // a panicking installer still restores, and later installs proceed
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = install(Arc::new(InMemoryFileSystem::new()));
            panic!("installer died");
        }));
        assert!(result.is_err());

        let after = InMemoryFileSystem::new();
        after.insert("./after", "ok");
        let _guard = install(Arc::new(after));
        assert_eq!(current().read_to_string(Path::new("./after")).await.unwrap(), "ok");
    }
}
