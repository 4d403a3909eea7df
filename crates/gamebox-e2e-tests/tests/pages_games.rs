use gamebox_e2e_tests::{launch_env, prepare_env};
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_pages_flow() {
    let (args, _config_guard) = prepare_env("test_pages_flow").unwrap();
    let base_url = args.base_url.clone();
    let client = launch_env(args).await.unwrap();

    let response = client.get(base_url.clone()).send().await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("Gamebox"));

    // listing shows the seeded records
    let games_url = base_url.join("games").unwrap();
    let response = client.get(games_url.clone()).send().await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("Minecraft"));
    assert!(body.contains("The Witcher 3: Wild Hunt"));

    // create via the form, redirect lands back on the listing
    let response = client
        .post(base_url.join("games/new").unwrap())
        .form(&[
            ("title", "Chrono Trigger"),
            ("genre", "RPG"),
            ("release_date", "1995-03-11"),
        ])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.url().path(), "/games");
    let body = response.text().await.unwrap();
    assert!(body.contains("Chrono Trigger"));
    assert!(body.contains("1995-03-11"));
}

#[tokio::test]
#[traced_test]
async fn test_pages_edit_and_delete() {
    let (args, _config_guard) = prepare_env("test_pages_edit_and_delete").unwrap();
    let base_url = args.base_url.clone();
    let client = launch_env(args).await.unwrap();

    // seeded record with id 1 exists
    let detail_url = base_url.join("games/1").unwrap();
    let response = client.get(detail_url.clone()).send().await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("The Legend of Zelda: Breath of the Wild"));

    // empty fields on the edit form leave stored values untouched
    let response = client
        .post(base_url.join("games/1/edit").unwrap())
        .form(&[("title", ""), ("genre", "Open world"), ("release_date", "")])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.url().path(), "/games/1");
    let body = response.text().await.unwrap();
    assert!(body.contains("The Legend of Zelda: Breath of the Wild"));
    assert!(body.contains("Open world"));
    assert!(body.contains("2017-03-03"));

    let response = client.delete(detail_url.clone()).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 204);

    // gone record renders the HTML error page
    let response = client.get(detail_url.clone()).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
    let body = response.text().await.unwrap();
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Record not found"));
}

#[tokio::test]
#[traced_test]
async fn test_pages_invalid_form() {
    let (args, _config_guard) = prepare_env("test_pages_invalid_form").unwrap();
    let base_url = args.base_url.clone();
    let client = launch_env(args).await.unwrap();

    // bad date on the create form
    let response = client
        .post(base_url.join("games/new").unwrap())
        .form(&[
            ("title", "Broken"),
            ("genre", "RPG"),
            ("release_date", "not-a-date"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);

    // empty required field on the create form
    let response = client
        .post(base_url.join("games/new").unwrap())
        .form(&[("title", ""), ("genre", "RPG"), ("release_date", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 422);
}
