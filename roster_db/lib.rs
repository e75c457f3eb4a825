pub mod roster;
pub mod uow;

mod repository;
mod storage;

pub use repository::*;
pub use storage::{RosterFile, open_store};
