mod add_player;
mod delete_player;
mod update_player;

pub use add_player::AddPlayerCommandHandler;
pub use delete_player::DeletePlayerCommandHandler;
pub use update_player::UpdatePlayerCommandHandler;
