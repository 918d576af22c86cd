mod clock;
mod command;
mod engine;
mod event;
mod journal;
mod processor;

pub use clock::*;
pub use command::*;
pub use engine::*;
pub use journal::*;
pub use processor::*;
