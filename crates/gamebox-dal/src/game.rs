use crate::{Error, error::Result};
use futures::{StreamExt as _, TryStreamExt as _};
use garde::Validate;
use serde::{Deserialize, Serialize};
use sqlx::Pool;
use time::Date;

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct CreateGame {
    #[garde(length(min = 1, max = 100))]
    pub title: String,
    #[garde(length(min = 1, max = 50))]
    pub genre: String,
    #[garde(skip)]
    pub release_date: Option<Date>,
}

/// Partial update - only fields set here overwrite the stored record,
/// `None` leaves the stored value untouched.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Validate)]
pub struct UpdateGame {
    #[garde(inner(length(min = 1, max = 100)))]
    pub title: Option<String>,
    #[garde(inner(length(min = 1, max = 50)))]
    pub genre: Option<String>,
    #[garde(skip)]
    pub release_date: Option<Date>,
}

/// Full replacement - id identifies the record, all other fields overwrite.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct ReplaceGame {
    #[garde(range(min = 1))]
    pub id: i64,
    #[garde(length(min = 1, max = 100))]
    pub title: String,
    #[garde(length(min = 1, max = 50))]
    pub genre: String,
    #[garde(skip)]
    pub release_date: Option<Date>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub release_date: Option<Date>,
}

pub fn apply_update(mut game: Game, payload: UpdateGame) -> Game {
    if let Some(title) = payload.title {
        game.title = title;
    }
    if let Some(genre) = payload.genre {
        game.genre = genre;
    }
    if let Some(release_date) = payload.release_date {
        game.release_date = Some(release_date);
    }
    game
}

impl From<ReplaceGame> for Game {
    fn from(payload: ReplaceGame) -> Self {
        Game {
            id: payload.id,
            title: payload.title,
            genre: payload.genre,
            release_date: payload.release_date,
        }
    }
}

pub type GameRepository = GameRepositoryImpl<Pool<crate::ChosenDB>>;

pub struct GameRepositoryImpl<E> {
    executor: E,
}

impl<'c, E> GameRepositoryImpl<E>
where
    for<'a> &'a E: sqlx::Executor<'c, Database = crate::ChosenDB>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub async fn create(&self, payload: CreateGame) -> Result<Game> {
        let result = sqlx::query("INSERT INTO game (title, genre, release_date) VALUES (?, ?, ?)")
            .bind(&payload.title)
            .bind(&payload.genre)
            .bind(payload.release_date)
            .execute(&self.executor)
            .await?;

        let id = result.last_insert_rowid();
        self.get(id).await
    }

    pub async fn list(&self, limit: usize) -> Result<Vec<Game>> {
        let records =
            sqlx::query_as::<_, Game>("SELECT id, title, genre, release_date FROM game")
                .fetch(&self.executor)
                .take(limit)
                .try_collect::<Vec<_>>()
                .await?;
        Ok(records)
    }

    /// Absent record is a normal result here, callers decide whether
    /// it is an error.
    pub async fn try_get(&self, id: i64) -> Result<Option<Game>> {
        let record =
            sqlx::query_as::<_, Game>("SELECT id, title, genre, release_date FROM game WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.executor)
                .await?;
        Ok(record)
    }

    pub async fn get(&self, id: i64) -> Result<Game> {
        self.try_get(id)
            .await?
            .ok_or_else(|| Error::RecordNotFound(format!("Game {id}")))
    }

    pub async fn update(&self, id: i64, payload: UpdateGame) -> Result<Game> {
        let game = apply_update(self.get(id).await?, payload);
        self.store(&game).await?;
        Ok(game)
    }

    pub async fn replace(&self, payload: ReplaceGame) -> Result<Game> {
        let game: Game = payload.into();
        self.store(&game).await?;
        Ok(game)
    }

    async fn store(&self, game: &Game) -> Result<()> {
        let result =
            sqlx::query("UPDATE game SET title = ?, genre = ?, release_date = ? WHERE id = ?")
                .bind(&game.title)
                .bind(&game.genre)
                .bind(game.release_date)
                .bind(game.id)
                .execute(&self.executor)
                .await?;

        if result.rows_affected() == 0 {
            Err(Error::RecordNotFound(format!("Game {}", game.id)))
        } else {
            Ok(())
        }
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM game WHERE id = ?")
            .bind(id)
            .execute(&self.executor)
            .await?;

        if result.rows_affected() == 0 {
            Err(Error::RecordNotFound(format!("Game {id}")))
        } else {
            Ok(())
        }
    }

    pub async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM game")
            .fetch_one(&self.executor)
            .await?;
        Ok(count as u64)
    }
}
