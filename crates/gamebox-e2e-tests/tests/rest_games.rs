use gamebox_dal::game::Game;
use gamebox_e2e_tests::{launch_env, prepare_env};
use serde_json::json;
use tracing::info;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_games_crud() {
    let (args, _config_guard) = prepare_env("test_games_crud").unwrap();
    let base_url = args.base_url.clone();
    let client = launch_env(args).await.unwrap();

    let api_url = base_url.join("api/games").unwrap();

    // database starts seeded with the five demo games
    let response = client.get(api_url.clone()).send().await.unwrap();
    assert!(response.status().is_success());
    let games: Vec<Game> = response.json().await.unwrap();
    assert_eq!(games.len(), 5);

    let response = client
        .post(api_url.clone())
        .json(&json!({"title": "Chrono Trigger", "genre": "RPG", "release_date": "1995-03-11"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let created: Game = response.json().await.unwrap();
    info!("Created: {:?}", created);
    assert!(created.id > 0);
    assert_eq!(created.title, "Chrono Trigger");
    assert_eq!(created.genre, "RPG");
    assert_eq!(created.release_date.unwrap().to_string(), "1995-03-11");

    let record_url = base_url
        .join(&format!("api/games/{}", created.id))
        .unwrap();

    let response = client.get(record_url.clone()).send().await.unwrap();
    assert!(response.status().is_success());
    let fetched: Game = response.json().await.unwrap();
    assert_eq!(fetched, created);

    // partial update touches only the fields in the body
    let response = client
        .patch(record_url.clone())
        .json(&json!({"genre": "JRPG"}))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let patched: Game = response.json().await.unwrap();
    assert_eq!(patched.title, "Chrono Trigger");
    assert_eq!(patched.genre, "JRPG");
    assert_eq!(patched.release_date, created.release_date);

    // full replace overwrites everything, id comes in the body
    let response = client
        .put(api_url.clone())
        .json(&json!({
            "id": created.id,
            "title": "Chrono Cross",
            "genre": "RPG",
            "release_date": "1999-11-18"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let replaced: Game = response.json().await.unwrap();
    assert_eq!(replaced.title, "Chrono Cross");
    assert_eq!(replaced.release_date.unwrap().to_string(), "1999-11-18");

    let response = client.delete(record_url.clone()).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let response = client.get(record_url.clone()).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    // deleting the same id again reports not found
    let response = client.delete(record_url.clone()).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    // the rest of the table is untouched
    let response = client.get(api_url.clone()).send().await.unwrap();
    let games: Vec<Game> = response.json().await.unwrap();
    assert_eq!(games.len(), 5);
}

#[tokio::test]
#[traced_test]
async fn test_create_validation() {
    let (args, _config_guard) = prepare_env("test_create_validation").unwrap();
    let base_url = args.base_url.clone();
    let client = launch_env(args).await.unwrap();

    let api_url = base_url.join("api/games").unwrap();

    // missing required field
    let response = client
        .post(api_url.clone())
        .json(&json!({"title": "No Genre"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);

    // empty required field
    let response = client
        .post(api_url.clone())
        .json(&json!({"title": "", "genre": "RPG"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);

    // release date is optional
    let response = client
        .post(api_url.clone())
        .json(&json!({"title": "Tetris", "genre": "Puzzle"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let created: Game = response.json().await.unwrap();
    assert_eq!(created.release_date, None);
}

#[tokio::test]
#[traced_test]
async fn test_missing_records() {
    let (args, _config_guard) = prepare_env("test_missing_records").unwrap();
    let base_url = args.base_url.clone();
    let client = launch_env(args).await.unwrap();

    let response = client
        .get(base_url.join("api/games/987654").unwrap())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .patch(base_url.join("api/games/987654").unwrap())
        .json(&json!({"genre": "RPG"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .put(base_url.join("api/games").unwrap())
        .json(&json!({"id": 987654, "title": "Ghost", "genre": "None"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
