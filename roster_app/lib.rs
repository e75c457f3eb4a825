// ListPlayers
// GetPlayerById
// GetStatistics
// AddPlayer
// UpdatePlayer
// DeletePlayer

pub mod app;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod queries_handlers;
pub mod repository;
pub mod service;
pub mod statistics;
pub mod uow;

pub mod test_utils;
