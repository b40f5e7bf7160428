use redb::TableDefinition;

/// Share records: share id -> Share (msgpack)
pub const SHARES: TableDefinition<u64, &[u8]> = TableDefinition::new("shares");

/// Shared file rows: (share id, row sequence) -> path
pub const SHARE_FILES: TableDefinition<(u64, u64), &str> = TableDefinition::new("share_files");

/// Named counters: sequence name -> last allocated value
pub const SEQUENCES: TableDefinition<&str, u64> = TableDefinition::new("sequences");

pub const SHARE_SEQUENCE: &str = "share";
pub const SHARE_FILE_SEQUENCE: &str = "share_file";
