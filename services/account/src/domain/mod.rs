pub mod account;
pub mod repository;
pub mod validation;

pub use account::{Account, AccountDraft, AccountId, Lookup};
pub use repository::AccountRepository;
pub use validation::{Field, ValidationError, validate};
