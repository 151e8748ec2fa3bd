//! Repository operations over the users table.

mod users;
pub use users::{PgUserRepository, UserRepository};
