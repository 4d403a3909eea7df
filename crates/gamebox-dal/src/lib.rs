pub mod error;
pub mod game;

pub use error::Error;
pub use sqlx::Error as SqlxError;
use sqlx::sqlite::SqlitePoolOptions;
use time::macros::date;
use tracing::debug;

use crate::error::Result;
use crate::game::{CreateGame, GameRepositoryImpl};

pub type ChosenDB = sqlx::Sqlite;
pub type Pool = sqlx::Pool<ChosenDB>;

pub const MAX_LIMIT: usize = 10_000;

pub async fn new_pool(database_url: &str) -> Result<Pool, Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(50)
        .connect(database_url)
        .await?;
    Ok(pool)
}

const CREATE_GAME_TABLE: &str = "CREATE TABLE IF NOT EXISTS game (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    genre TEXT NOT NULL,
    release_date DATE
)";

const CREATE_TITLE_INDEX: &str = "CREATE INDEX IF NOT EXISTS ix_game_title ON game (title)";

/// Ensures the game table and its title index exist.
///
/// Only additive - never drops or alters an existing table.
pub async fn init_db(pool: &Pool) -> Result<()> {
    sqlx::query(CREATE_GAME_TABLE).execute(pool).await?;
    sqlx::query(CREATE_TITLE_INDEX).execute(pool).await?;
    Ok(())
}

/// Inserts a handful of well known games, but only into an empty table.
/// Returns the number of records inserted.
pub async fn seed_demo_games(pool: &Pool) -> Result<usize> {
    let repository = GameRepositoryImpl::new(pool.clone());
    if repository.count().await? > 0 {
        debug!("Game table already has data, skipping demo seed");
        return Ok(0);
    }

    let demo_games = [
        CreateGame {
            title: "The Legend of Zelda: Breath of the Wild".into(),
            genre: "Action-adventure".into(),
            release_date: Some(date!(2017 - 03 - 03)),
        },
        CreateGame {
            title: "God of War".into(),
            genre: "Action-adventure".into(),
            release_date: Some(date!(2018 - 04 - 20)),
        },
        CreateGame {
            title: "Red Dead Redemption 2".into(),
            genre: "Action-adventure".into(),
            release_date: Some(date!(2018 - 10 - 26)),
        },
        CreateGame {
            title: "The Witcher 3: Wild Hunt".into(),
            genre: "Action RPG".into(),
            release_date: Some(date!(2015 - 05 - 19)),
        },
        CreateGame {
            title: "Minecraft".into(),
            genre: "Sandbox, Survival".into(),
            release_date: Some(date!(2011 - 11 - 18)),
        },
    ];

    let count = demo_games.len();
    for game in demo_games {
        repository.create(game).await?;
    }
    debug!("Seeded {} demo games", count);
    Ok(count)
}
