pub use config::*;
pub use lottery::*;
pub use payout_receipt::*;
pub use ticket_balance::*;
pub use treasury::*;

pub mod config;
pub mod lottery;
pub mod payout_receipt;
pub mod ticket_balance;
pub mod treasury;
