//
//  qiita-cli
//  tests/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoint paths, bodies and decode targets of the resource methods.

use mockito::Matcher;
use serde_json::json;

use qiita::api::client::{ClientConfig, QiitaClient};
use qiita::api::entities::Tagging;
use qiita::api::resources::{CreateItemOptions, UpdateItemOptions};

fn client_for(server: &mockito::Server) -> QiitaClient {
    let config = ClientConfig::new().base_url(&server.url()).token("t");
    QiitaClient::with_config(config).unwrap()
}

fn user_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "permanent_id": 1,
        "profile_image_url": "https://example.com/qiita.png",
        "followees_count": 1,
        "followers_count": 2,
        "items_count": 3
    })
}

fn item_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Example title",
        "body": "# Example",
        "rendered_body": "<h1>Example</h1>",
        "coediting": false,
        "comments_count": 0,
        "created_at": "2000-01-01T00:00:00+00:00",
        "updated_at": "2000-01-01T00:00:00+00:00",
        "group": null,
        "likes_count": 10,
        "private": false,
        "reactions_count": 0,
        "stocks_count": 5,
        "tags": [{"name": "Rust", "versions": ["1.80"]}],
        "url": format!("https://qiita.com/qiita/items/{}", id),
        "user": user_json("qiita"),
        "page_views_count": null
    })
}

#[tokio::test]
async fn probes_map_204_and_404_to_bool() {
    let mut server = mockito::Server::new_async().await;
    let _following = server
        .mock("GET", "/api/v2/tags/Rust/following")
        .with_status(204)
        .create_async()
        .await;
    let _not_following = server
        .mock("GET", "/api/v2/tags/Go/following")
        .with_status(404)
        .with_body(r#"{"message": "Not found", "type": "not_found"}"#)
        .create_async()
        .await;
    let _stock = server
        .mock("GET", "/api/v2/items/abc/stock")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.is_following_tag("Rust").await.unwrap());
    assert!(!client.is_following_tag("Go").await.unwrap());
    assert!(client.is_item_stocked("abc").await.unwrap());
}

#[tokio::test]
async fn probes_propagate_other_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/users/qiita/following")
        .with_status(401)
        .with_body(r#"{"message": "Unauthorized", "type": "unauthorized"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.is_following_user("qiita").await.unwrap_err();
    assert_eq!(err.message(), "Unauthorized");
}

#[tokio::test]
async fn path_segments_are_percent_encoded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/v2/tags/C%23/following")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    client.follow_tag("C#").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn search_tags_is_served_outside_the_version_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/tags")
        .match_query(Matcher::UrlEncoded("q".into(), "ru".into()))
        .with_status(200)
        .with_body(
            r#"[{"name": "Rust", "url_name": "rust", "icon_url": null, "follower_count": 10, "item_count": 20}]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let results = client.search_tags("ru").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url_name, "rust");
    assert_eq!(results[0].item_count, 20);
    mock.assert_async().await;
}

#[tokio::test]
async fn create_item_posts_the_options() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/items")
        .match_body(Matcher::PartialJson(json!({
            "title": "Example title",
            "body": "# Example",
            "tags": [{"name": "Rust", "versions": ["1.80"]}],
            "private": true
        })))
        .with_status(201)
        .with_body(item_json("c686397e4a0f4f11683d").to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = CreateItemOptions {
        title: "Example title".to_string(),
        body: "# Example".to_string(),
        tags: vec![Tagging {
            name: "Rust".to_string(),
            versions: vec!["1.80".to_string()],
        }],
        coediting: None,
        group_url_name: None,
        private: Some(true),
        tweet: None,
    };
    let item = client.create_item(&options).await.unwrap();

    assert_eq!(item.id, "c686397e4a0f4f11683d");
    assert_eq!(item.tags[0].versions, vec!["1.80".to_string()]);
    mock.assert_async().await;
}

#[tokio::test]
async fn update_item_sends_only_set_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/v2/items/abc")
        .match_body(Matcher::Json(json!({"title": "New title"})))
        .with_status(200)
        .with_body(item_json("abc").to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = UpdateItemOptions {
        title: Some("New title".to_string()),
        ..Default::default()
    };
    client.update_item("abc", &options).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_reaction_targets_the_reaction_name() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v2/items/abc/reactions/%2B1")
        .with_status(200)
        .with_body(
            json!({
                "name": "+1",
                "image_url": "https://cdn.qiita.com/emoji/twemoji/unicode/1f44d.png",
                "created_at": "2000-01-01T00:00:00+00:00",
                "user": user_json("qiita")
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let reaction = client.delete_item_reaction("abc", "+1").await.unwrap();

    assert_eq!(reaction.name, "+1");
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_access_token_exchanges_the_code() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/access_tokens")
        .match_body(Matcher::Json(json!({
            "client_id": "a91f0396a0968ff593eafdd194e3d17d32c41b1da7b25e873b42e9058058cd9d",
            "client_secret": "01ad2bfb0f5d5bea2e5b98e6e11b6d1ed8b0e1dbd6e4ffdaf75f3cea7cfbd6ac",
            "code": "fefef"
        })))
        .with_status(201)
        .with_body(
            r#"{"client_id": "a91f0396a0968ff593eafdd194e3d17d32c41b1da7b25e873b42e9058058cd9d", "scopes": ["read_qiita"], "token": "ea5d0a593b2655e9568f144fb1826342292f5c6b"}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let token = client
        .fetch_access_token(
            "a91f0396a0968ff593eafdd194e3d17d32c41b1da7b25e873b42e9058058cd9d",
            "01ad2bfb0f5d5bea2e5b98e6e11b6d1ed8b0e1dbd6e4ffdaf75f3cea7cfbd6ac",
            "fefef",
        )
        .await
        .unwrap();

    assert_eq!(token.token, "ea5d0a593b2655e9568f144fb1826342292f5c6b");
    assert_eq!(token.scopes, vec!["read_qiita".to_string()]);
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_items_forwards_the_search_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/items")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "tag:rust".into()),
            Matcher::UrlEncoded("per_page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(json!([item_json("abc")]).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let mut pages = client.fetch_items(qiita::api::resources::FetchItemsOptions {
        page: None,
        per_page: Some(1),
        query: Some("tag:rust".to_string()),
    });
    let first = pages.advance().await.unwrap().unwrap();

    assert_eq!(first[0].user.id, "qiita");
    assert_eq!(first[0].likes_count, 10);
    mock.assert_async().await;
}
