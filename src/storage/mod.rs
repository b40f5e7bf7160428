pub mod db;
pub mod models;
mod shared_files;
mod shares;
mod tables;

pub use db::{Database, DatabaseError};
pub use tables::*;
