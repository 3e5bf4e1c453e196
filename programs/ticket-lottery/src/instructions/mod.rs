pub mod buy_tickets;
pub mod init_config;
pub mod init_lottery;
pub mod play;
pub mod queries;
pub mod reset;
pub mod send_reward;
pub mod withdraw_from_treasury;

pub use buy_tickets::*;
pub use init_config::*;
pub use init_lottery::*;
pub use play::*;
pub use queries::*;
pub use reset::*;
pub use send_reward::*;
pub use withdraw_from_treasury::*;
