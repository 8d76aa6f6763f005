//! Database access: initialization, persisted model, and the pool store

pub mod init;
pub mod models;
pub mod pool_store;

pub use init::init_database;
pub use models::QuizEntry;
pub use pool_store::PoolStore;
