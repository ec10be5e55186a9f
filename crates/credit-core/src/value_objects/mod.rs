//! Value objects - immutable types that represent domain concepts

mod amount;
mod balance_text;
mod user_id;

pub use amount::{parse_lenient_f64, Amount};
pub use balance_text::format_balance;
pub use user_id::{UserId, UserIdParseError};
