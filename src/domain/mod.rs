mod command;
mod config;
mod error;
mod event;
mod journal;
mod money;
mod state;
mod statement;
mod user;

pub use command::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use journal::*;
pub use money::*;
pub use state::*;
pub use statement::*;
pub use user::*;
