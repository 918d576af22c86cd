mod clock;
mod command;
mod engine;
mod event;
mod journal;

pub use clock::*;
pub use command::*;
pub use engine::*;
pub use event::*;
pub use journal::*;
