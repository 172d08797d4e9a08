//! 账户持久化

pub mod memory;
pub mod migrations;
pub mod postgres;

pub use memory::InMemoryAccountRepository;
pub use migrations::account_migrations;
pub use postgres::PostgresAccountRepository;
