#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use roster_types::{
        errors::StoreError,
        player::{Country, Player, PlayerData},
    };

    use crate::{
        repository::PlayerRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// Failures to inject into the mock store.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct StoreFailures {
        pub begin: bool,
        pub reads: bool,
        pub writes: bool,
        pub commit: bool,
    }

    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        players: Arc<Mutex<Vec<Player>>>,
        failures: Arc<Mutex<StoreFailures>>,
    }

    impl MockPlayerRepository {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn with_players(players: Vec<Player>) -> Self {
            Self {
                players: Arc::new(Mutex::new(players)),
                ..Default::default()
            }
        }

        pub fn snapshot(&self) -> Vec<Player> {
            self.players.lock().unwrap().clone()
        }

        pub fn fail(&self, failures: StoreFailures) {
            *self.failures.lock().unwrap() = failures;
        }

        fn failures(&self) -> StoreFailures {
            *self.failures.lock().unwrap()
        }

        fn check_reads(&self) -> Result<(), StoreError> {
            if self.failures().reads {
                return Err(StoreError::Unavailable("read failure".to_string()));
            }
            Ok(())
        }

        fn check_writes(&self) -> Result<(), StoreError> {
            if self.failures().writes {
                return Err(StoreError::Unavailable("write failure".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn list_all(&self) -> Result<Vec<Player>, StoreError> {
            self.check_reads()?;
            Ok(self.players.lock().unwrap().clone())
        }

        async fn get_by_id(&self, player_id: i32) -> Result<Option<Player>, StoreError> {
            self.check_reads()?;
            Ok(self
                .players
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == player_id)
                .cloned())
        }

        async fn insert(&self, player: &Player) -> Result<Player, StoreError> {
            self.check_writes()?;
            let mut players = self.players.lock().unwrap();
            let id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let stored = player.clone().with_id(id);
            players.push(stored.clone());
            Ok(stored)
        }

        async fn replace(&self, player_id: i32, player: &Player) -> Result<Player, StoreError> {
            self.check_writes()?;
            let mut players = self.players.lock().unwrap();
            let slot = players
                .iter_mut()
                .find(|p| p.id == player_id)
                .ok_or(StoreError::PlayerNotFound(player_id))?;
            *slot = player.clone().with_id(player_id);
            Ok(slot.clone())
        }

        async fn remove(&self, player_id: i32) -> Result<(), StoreError> {
            self.check_writes()?;
            let mut players = self.players.lock().unwrap();
            let position = players
                .iter()
                .position(|p| p.id == player_id)
                .ok_or(StoreError::PlayerNotFound(player_id))?;
            players.remove(position);
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MockUnitOfWork {
        players: Arc<MockPlayerRepository>,

        // Counters to check if commit/rollback was called
        committed: Arc<Mutex<u32>>,
        rolled_back: Arc<Mutex<u32>>,
    }

    impl MockUnitOfWork {
        pub fn new(players: MockPlayerRepository) -> Self {
            Self {
                players: Arc::new(players),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            self.players.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), StoreError> {
            if self.players.failures().commit {
                return Err(StoreError::Unavailable("commit failure".to_string()));
            }
            *self.committed.lock().unwrap() += 1;
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
            *self.rolled_back.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockUnitOfWorkProvider {
        players: MockPlayerRepository,
        committed: Arc<Mutex<u32>>,
        rolled_back: Arc<Mutex<u32>>,
    }

    impl MockUnitOfWorkProvider {
        pub fn new(players: MockPlayerRepository) -> Self {
            Self {
                players,
                ..Default::default()
            }
        }

        pub fn players(&self) -> &MockPlayerRepository {
            &self.players
        }

        pub fn commits(&self) -> u32 {
            *self.committed.lock().unwrap()
        }

        pub fn rollbacks(&self) -> u32 {
            *self.rolled_back.lock().unwrap()
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn tx<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, StoreError> {
            if self.players.failures().begin {
                return Err(StoreError::Unavailable("store offline".to_string()));
            }
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork {
                players: Arc::new(self.players.clone()),
                committed: self.committed.clone(),
                rolled_back: self.rolled_back.clone(),
            });
            Ok(uow)
        }
    }

    #[derive(Default, Clone)]
    pub struct PlayerFactoryOptions<'a> {
        pub id: Option<i32>,
        pub first_name: Option<&'a str>,
        pub last_name: Option<&'a str>,
        pub country_code: Option<&'a str>,
        pub rank: Option<i32>,
        pub weight: Option<i32>,
        pub height: Option<i32>,
        pub last: Option<Vec<u8>>,
    }

    pub fn player_factory(options: PlayerFactoryOptions) -> Player {
        let id = options.id.unwrap_or(0);
        let country_code = options.country_code.unwrap_or("SUI");

        Player {
            id,
            first_name: options.first_name.unwrap_or("Roger").to_string(),
            last_name: options.last_name.unwrap_or("Federer").to_string(),
            short_name: Some("R.FED".to_string()),
            sex: "M".to_string(),
            country: Country {
                code: country_code.to_string(),
                picture: Some(format!("https://flags.example.org/{country_code}.png")),
            },
            picture: Some(format!("https://players.example.org/{id}.png")),
            data: PlayerData {
                rank: options.rank.unwrap_or(1),
                points: 2500,
                weight: options.weight.unwrap_or(85000),
                height: options.height.unwrap_or(185),
                age: 33,
                last: options.last.unwrap_or_else(|| vec![1, 0, 1, 1, 0]),
            },
        }
    }

    /// A roster of three players with distinct ranks and countries.
    pub fn sample_roster() -> Vec<Player> {
        vec![
            player_factory(PlayerFactoryOptions {
                id: Some(17),
                first_name: Some("Rafael"),
                last_name: Some("Nadal"),
                country_code: Some("ESP"),
                rank: Some(1),
                weight: Some(85000),
                height: Some(185),
                last: Some(vec![1, 0, 0, 0, 1]),
            }),
            player_factory(PlayerFactoryOptions {
                id: Some(52),
                first_name: Some("Novak"),
                last_name: Some("Djokovic"),
                country_code: Some("SRB"),
                rank: Some(2),
                weight: Some(80000),
                height: Some(188),
                last: Some(vec![1, 1, 1, 1, 1]),
            }),
            player_factory(PlayerFactoryOptions {
                id: Some(95),
                first_name: Some("Venus"),
                last_name: Some("Williams"),
                country_code: Some("USA"),
                rank: Some(52),
                weight: Some(74000),
                height: Some(185),
                last: Some(vec![0, 1, 0, 0, 1]),
            }),
        ]
    }
}
