use redb::ReadableTable;

use super::db::{next_sequence, Database, DatabaseError};
use super::models::ShareId;
use super::tables::*;

impl Database {
    // ========================================================================
    // Shared file operations
    // ========================================================================

    /// Register file paths for a share and return how many rows were written.
    ///
    /// Duplicate paths are kept as separate rows. The batch commits as a whole.
    /// Fails with [`DatabaseError::UnknownShare`] and writes nothing when `share_id`
    /// has no stored share, so no row can point at a missing share.
    pub fn create_shared_files<S: AsRef<str>>(
        &self,
        share_id: ShareId,
        paths: &[S],
    ) -> Result<usize, DatabaseError> {
        if paths.is_empty() {
            return Ok(0);
        }

        let write_txn = self.begin_write()?;

        let share_exists = {
            let shares = write_txn.open_table(SHARES)?;
            let exists = shares.get(share_id)?.is_some();
            exists
        };
        if !share_exists {
            tracing::warn!(share_id, "rejecting files for unknown share");
            write_txn.abort()?;
            return Err(DatabaseError::UnknownShare(share_id));
        }

        for path in paths {
            let seq = next_sequence(&write_txn, SHARE_FILE_SEQUENCE)?;
            let mut table = write_txn.open_table(SHARE_FILES)?;
            table.insert((share_id, seq), path.as_ref())?;
        }
        write_txn.commit()?;

        tracing::debug!(share_id, count = paths.len(), "shared files registered");
        Ok(paths.len())
    }

    /// Get the paths exposed by a share. Unknown shares have no files.
    pub fn get_shared_files(&self, share_id: ShareId) -> Result<Vec<String>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(SHARE_FILES)?;

        let mut paths = Vec::new();
        for result in table.range((share_id, 0)..=(share_id, u64::MAX))? {
            let (_, value) = result?;
            paths.push(value.value().to_string());
        }

        Ok(paths)
    }
}
