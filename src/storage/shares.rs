use chrono::{DateTime, Utc};
use redb::ReadableTable;

use super::db::{next_sequence, Database, DatabaseError};
use super::models::{decode_share, encode_share, NewShare, Share, ShareId};
use super::tables::*;

impl Database {
    // ========================================================================
    // Share operations
    // ========================================================================

    /// Create a share and return its newly allocated id.
    ///
    /// Id allocation and the record insert commit in one write transaction, and redb
    /// runs write transactions one at a time, so concurrent callers always get
    /// distinct, increasing ids and never observe a record without its id.
    ///
    /// `username` must be non-empty; otherwise [`DatabaseError::MissingUsername`] is
    /// returned before any id is allocated.
    pub fn create_share(&self, new: &NewShare) -> Result<ShareId, DatabaseError> {
        if new.username.is_empty() {
            return Err(DatabaseError::MissingUsername);
        }

        let write_txn = self.begin_write()?;
        let id = next_sequence(&write_txn, SHARE_SEQUENCE)?;
        {
            let mut table = write_txn.open_table(SHARES)?;
            let data = encode_share(&Share::from_new(id, new))?;
            table.insert(id, data.as_slice())?;
        }
        write_txn.commit()?;

        tracing::debug!(share_id = id, username = %new.username, "share created");
        Ok(id)
    }

    /// Get a share by its id
    pub fn get_share(&self, id: ShareId) -> Result<Option<Share>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(SHARES)?;

        match table.get(id)? {
            Some(data) => Ok(Some(decode_share(data.value())?)),
            None => Ok(None),
        }
    }

    /// Get the lowest-id share with the given public name
    pub fn get_share_by_name(&self, name: &str) -> Result<Option<Share>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(SHARES)?;

        for result in table.iter()? {
            let (_, value) = result?;
            let share = decode_share(value.value())?;
            if share.name.as_deref() == Some(name) {
                return Ok(Some(share));
            }
        }

        Ok(None)
    }

    /// Get all shares. Order is storage-defined.
    pub fn get_all_shares(&self) -> Result<Vec<Share>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(SHARES)?;

        let mut shares = Vec::new();
        for result in table.iter()? {
            let (_, value) = result?;
            shares.push(decode_share(value.value())?);
        }

        Ok(shares)
    }

    /// Shares whose expiry is at or before `now`
    pub fn get_expired_shares(&self, now: DateTime<Utc>) -> Result<Vec<Share>, DatabaseError> {
        Ok(self
            .get_all_shares()?
            .into_iter()
            .filter(|share| share.is_expired(now))
            .collect())
    }

    /// Replace every mutable field of the share with `share.id`.
    ///
    /// Returns `false` without writing anything when no share has that id.
    /// `username` must be non-empty, as for [`Database::create_share`].
    pub fn update_share(&self, share: &Share) -> Result<bool, DatabaseError> {
        if share.username.is_empty() {
            return Err(DatabaseError::MissingUsername);
        }

        let write_txn = self.begin_write()?;
        let updated = {
            let mut table = write_txn.open_table(SHARES)?;
            let exists = table.get(share.id)?.is_some();
            if exists {
                let data = encode_share(share)?;
                table.insert(share.id, data.as_slice())?;
            }
            exists
        };
        write_txn.commit()?;
        Ok(updated)
    }

    /// Count a visit: set `last_visited` to `at` and bump `visit_count`.
    ///
    /// The read and write happen in one write transaction so concurrent visits are
    /// never lost. Returns the updated share, or `None` for an unknown id.
    pub fn record_visit(
        &self,
        id: ShareId,
        at: DateTime<Utc>,
    ) -> Result<Option<Share>, DatabaseError> {
        let write_txn = self.begin_write()?;

        let existing = {
            let table = write_txn.open_table(SHARES)?;
            let result = match table.get(id)? {
                Some(data) => Some(decode_share(data.value())?),
                None => None,
            };
            result
        };

        let visited = match existing {
            Some(mut share) => {
                share.last_visited = Some(at);
                share.visit_count = share.visit_count.saturating_add(1);

                let data = encode_share(&share)?;
                let mut table = write_txn.open_table(SHARES)?;
                table.insert(id, data.as_slice())?;
                Some(share)
            }
            None => None,
        };

        write_txn.commit()?;
        Ok(visited)
    }
}
