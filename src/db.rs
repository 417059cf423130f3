pub mod pg_store;
pub mod store;

#[cfg(test)]
pub mod memory_store;

pub use pg_store::PgStore;
pub use store::RecordStore;

#[cfg(test)]
pub use memory_store::MemoryStore;
