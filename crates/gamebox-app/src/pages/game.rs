use crate::pages::{PageError, PageResult, render};
use crate::state::AppState;
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use garde::Validate as _;
use gamebox_dal::game::{CreateGame, Game, GameRepository, UpdateGame};
use http::StatusCode;
use serde::Deserialize;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Shape submitted by both the create and the edit form. Empty fields are
/// treated as "not provided" so the edit form routes through the same
/// partial-update semantics as the API.
#[derive(Debug, Deserialize)]
pub struct GameForm {
    title: String,
    genre: String,
    release_date: Option<String>,
}

impl GameForm {
    fn parsed_date(&self) -> PageResult<Option<Date>> {
        match self.release_date.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => Date::parse(s, DATE_FORMAT)
                .map(Some)
                .map_err(|e| PageError::InvalidForm(format!("invalid date '{s}': {e}"))),
        }
    }

    fn into_create(self) -> PageResult<CreateGame> {
        let release_date = self.parsed_date()?;
        let payload = CreateGame {
            title: self.title,
            genre: self.genre,
            release_date,
        };
        payload
            .validate()
            .map_err(|report| PageError::InvalidForm(report.to_string()))?;
        Ok(payload)
    }

    fn into_update(self) -> PageResult<UpdateGame> {
        let release_date = self.parsed_date()?;
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        let payload = UpdateGame {
            title: non_empty(self.title),
            genre: non_empty(self.genre),
            release_date,
        };
        payload
            .validate()
            .map_err(|report| PageError::InvalidForm(report.to_string()))?;
        Ok(payload)
    }
}

pub async fn index() -> Html<String> {
    Html(render::layout(
        "Home",
        "<h1>Gamebox</h1>\
         <p>A small catalog of video games.</p>\
         <p><a href=\"/games\">Browse the catalog</a></p>",
    ))
}

pub async fn list_games(
    repository: GameRepository,
    State(state): State<AppState>,
) -> PageResult<Html<String>> {
    let games = repository.list(state.config().list_limit).await?;

    let rows = games
        .iter()
        .map(|game| {
            format!(
                "<tr><td><a href=\"/games/{id}\">{title}</a></td><td>{genre}</td><td>{date}</td>\
                 <td><a href=\"/games/{id}/edit\">edit</a></td></tr>",
                id = game.id,
                title = render::html_escape(&game.title),
                genre = render::html_escape(&game.genre),
                date = render::date_cell(game.release_date),
            )
        })
        .collect::<String>();

    let body = format!(
        "<h1>Games</h1>\
         <table><tr><th>Title</th><th>Genre</th><th>Released</th><th></th></tr>{rows}</table>"
    );
    Ok(Html(render::layout("Games", &body)))
}

pub async fn game_detail(
    Path(id): Path<i64>,
    repository: GameRepository,
) -> PageResult<Html<String>> {
    let game = repository.get(id).await?;
    Ok(Html(render::layout(&game.title, &detail_body(&game))))
}

fn detail_body(game: &Game) -> String {
    format!(
        r#"<h1>{title}</h1>
<p>Genre: {genre}</p>
<p>Released: {date}</p>
<p><a href="/games/{id}/edit">Edit</a></p>
<button onclick="delGame()">Delete</button>
<script>
function delGame() {{
  fetch('/games/{id}', {{ method: 'DELETE' }}).then(() => window.location = '/games');
}}
</script>"#,
        id = game.id,
        title = render::html_escape(&game.title),
        genre = render::html_escape(&game.genre),
        date = render::date_cell(game.release_date),
    )
}

fn form_body(heading: &str, action: &str, game: Option<&Game>) -> String {
    let title = game.map(|g| render::html_escape(&g.title)).unwrap_or_default();
    let genre = game.map(|g| render::html_escape(&g.genre)).unwrap_or_default();
    let date = game.map(|g| render::date_cell(g.release_date)).unwrap_or_default();
    format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{action}">
<label>Title <input name="title" value="{title}" maxlength="100"></label>
<label>Genre <input name="genre" value="{genre}" maxlength="50"></label>
<label>Release date <input name="release_date" type="date" value="{date}"></label>
<button type="submit">Save</button>
</form>"#,
    )
}

pub async fn new_game_form() -> Html<String> {
    Html(render::layout(
        "New game",
        &form_body("New game", "/games/new", None),
    ))
}

pub async fn create_game(
    repository: GameRepository,
    Form(form): Form<GameForm>,
) -> PageResult<Redirect> {
    let payload = form.into_create()?;
    repository.create(payload).await?;
    Ok(Redirect::to("/games"))
}

pub async fn edit_game_form(
    Path(id): Path<i64>,
    repository: GameRepository,
) -> PageResult<Html<String>> {
    let game = repository.get(id).await?;
    let action = format!("/games/{}/edit", game.id);
    Ok(Html(render::layout(
        "Edit game",
        &form_body("Edit game", &action, Some(&game)),
    )))
}

pub async fn edit_game(
    Path(id): Path<i64>,
    repository: GameRepository,
    Form(form): Form<GameForm>,
) -> PageResult<Redirect> {
    let payload = form.into_update()?;
    let game = repository.update(id, payload).await?;
    Ok(Redirect::to(&format!("/games/{}", game.id)))
}

pub async fn delete_game(
    Path(id): Path<i64>,
    repository: GameRepository,
) -> PageResult<impl IntoResponse> {
    repository.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", get(index))
        .route("/games", get(list_games))
        .route("/games/new", get(new_game_form).post(create_game))
        .route("/games/{id}", get(game_detail).delete(delete_game))
        .route("/games/{id}/edit", get(edit_game_form).post(edit_game))
}
