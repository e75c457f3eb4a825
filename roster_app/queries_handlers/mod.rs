mod get_player_by_id;
mod get_statistics;
mod list_players;

pub use get_player_by_id::GetPlayerByIdQueryHandler;
pub use get_statistics::GetStatisticsQueryHandler;
pub use list_players::ListPlayersQueryHandler;
