mod account;
mod boot;
mod orchestrator;
mod session;

pub use account::*;
pub use boot::*;
pub use orchestrator::*;
pub use session::*;
