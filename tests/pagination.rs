//
//  qiita-cli
//  tests/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Paginator behaviour for both cursoring styles.

use mockito::Matcher;
use serde_json::Value;

use qiita::api::client::{ClientConfig, QiitaClient};
use qiita::api::common::{
    Cursor, ErrorKind, PaginationConfig, PaginationStyle, Paginator, PaginatorState, Query,
};

fn client_with(server: &mockito::Server, pagination: PaginationConfig) -> QiitaClient {
    let config = ClientConfig::new()
        .base_url(&server.url())
        .token("t")
        .pagination(pagination);
    QiitaClient::with_config(config).unwrap()
}

fn page_counter() -> PaginationConfig {
    PaginationConfig {
        style: PaginationStyle::PageCounter,
        ..Default::default()
    }
}

async fn mock_page(server: &mut mockito::Server, page: &str, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/api/v2/items")
        .match_query(Matcher::UrlEncoded("page".into(), page.into()))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn page_counter_stops_at_first_empty_page() {
    let mut server = mockito::Server::new_async().await;
    let first = mock_page(&mut server, "1", r#"["a", "b"]"#).await;
    let second = mock_page(&mut server, "2", r#"["c"]"#).await;
    let third = mock_page(&mut server, "3", "[]").await;

    let client = client_with(&server, page_counter());
    let mut pages: Paginator<'_, String> = client.paginate(&client.endpoint("/items"), Query::new());

    assert_eq!(pages.advance().await.unwrap(), Some(vec!["a".to_string(), "b".to_string()]));
    assert_eq!(pages.advance().await.unwrap(), Some(vec!["c".to_string()]));
    assert_eq!(pages.advance().await.unwrap(), None);
    assert!(pages.is_exhausted());
    // Exhausted paginators do not issue further requests.
    assert_eq!(pages.advance().await.unwrap(), None);

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
}

#[tokio::test]
async fn page_counter_starts_at_requested_page_and_keeps_query() {
    let mut server = mockito::Server::new_async().await;
    let third = server
        .mock("GET", "/api/v2/items")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "3".into()),
            Matcher::UrlEncoded("query".into(), "tag:rust".into()),
            Matcher::UrlEncoded("per_page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body("[1, 2]")
        .create_async()
        .await;

    let client = client_with(&server, page_counter());
    let query = Query::new().with("query", "tag:rust").with("page", 3).with("per_page", 2);
    let mut pages: Paginator<'_, u32> = client.paginate(&client.endpoint("/items"), query);

    assert_eq!(pages.initial_cursor(), &Cursor::Page(3));
    assert_eq!(pages.advance().await.unwrap(), Some(vec![1, 2]));
    assert_eq!(pages.state(), &PaginatorState::Active(Cursor::Page(4)));
    third.assert_async().await;
}

#[tokio::test]
async fn link_header_follows_next_until_absent() {
    let mut server = mockito::Server::new_async().await;
    let next = format!("{}/api/v2/items?page=2", server.url());
    let first = server
        .mock("GET", "/api/v2/items")
        .with_status(200)
        .with_header(
            "link",
            &format!("<{}>; rel=\"next\", <{}/api/v2/items?page=2>; rel=\"last\"", next, server.url()),
        )
        .with_body(r#"[{"id": 1}]"#)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/v2/items")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_header("link", &format!("<{}/api/v2/items>; rel=\"first\"", server.url()))
        .with_body(r#"[{"id": 2}]"#)
        .create_async()
        .await;

    let client = client_with(&server, PaginationConfig::default());
    let mut pages: Paginator<'_, Value> = client.paginate(&client.endpoint("/items"), Query::new());
    let all = pages.collect_all().await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[1]["id"], 2);
    assert!(pages.is_exhausted());
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn restart_goes_back_to_the_first_page() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", "/api/v2/tags")
        .with_status(200)
        .with_body(r#"["Rust"]"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_with(&server, PaginationConfig::default());
    let mut pages: Paginator<'_, String> = client.paginate(&client.endpoint("/tags"), Query::new());

    assert_eq!(pages.advance().await.unwrap(), Some(vec!["Rust".to_string()]));
    assert_eq!(pages.advance().await.unwrap(), None);
    assert_eq!(pages.restart().await.unwrap(), Some(vec!["Rust".to_string()]));
    assert_eq!(pages.pages_fetched(), 1);

    first.assert_async().await;
}

#[tokio::test]
async fn restart_after_second_page_counter_page_refetches_page_one() {
    let mut server = mockito::Server::new_async().await;
    let one = server
        .mock("GET", "/api/v2/items")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body("[1, 2]")
        .expect(2)
        .create_async()
        .await;
    let two = mock_page(&mut server, "2", "[3]").await;

    let client = client_with(&server, page_counter());
    let mut pages: Paginator<'_, u32> = client.paginate(&client.endpoint("/items"), Query::new());

    let first = pages.advance().await.unwrap();
    assert_eq!(pages.advance().await.unwrap(), Some(vec![3]));
    assert_eq!(pages.state(), &PaginatorState::Active(Cursor::Page(3)));

    let again = pages.restart().await.unwrap();
    assert_eq!(again, first);
    assert_eq!(pages.state(), &PaginatorState::Active(Cursor::Page(2)));
    assert_eq!(pages.pages_fetched(), 1);

    one.assert_async().await;
    two.assert_async().await;
}

#[tokio::test]
async fn restart_after_second_link_page_refetches_page_one() {
    let mut server = mockito::Server::new_async().await;
    let base = server.url();
    let one = server
        .mock("GET", "/api/v2/items")
        .with_status(200)
        .with_header("link", &format!("<{}/api/v2/items?page=2>; rel=\"next\"", base))
        .with_body(r#"["a"]"#)
        .expect(2)
        .create_async()
        .await;
    let two = server
        .mock("GET", "/api/v2/items")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_header("link", &format!("<{}/api/v2/items?page=3>; rel=\"next\"", base))
        .with_body(r#"["b"]"#)
        .create_async()
        .await;

    let client = client_with(&server, PaginationConfig::default());
    let mut pages: Paginator<'_, String> = client.paginate(&client.endpoint("/items"), Query::new());

    let first = pages.advance().await.unwrap();
    assert_eq!(pages.advance().await.unwrap(), Some(vec!["b".to_string()]));
    assert_eq!(
        pages.state(),
        &PaginatorState::Active(Cursor::Link(format!("{}/api/v2/items?page=3", base)))
    );

    let again = pages.restart().await.unwrap();
    assert_eq!(again, first);
    assert_eq!(
        pages.state(),
        &PaginatorState::Active(Cursor::Link(format!("{}/api/v2/items?page=2", base)))
    );

    one.assert_async().await;
    two.assert_async().await;
}

#[tokio::test]
async fn page_counter_stops_after_the_last_page_the_platform_serves() {
    let mut server = mockito::Server::new_async().await;
    let in_range = server
        .mock("GET", "/api/v2/items")
        .match_query(Matcher::Regex("page=(9[89]|100)$".into()))
        .with_status(200)
        .with_body("[1]")
        .expect(3)
        .create_async()
        .await;
    let beyond = server
        .mock("GET", "/api/v2/items")
        .match_query(Matcher::UrlEncoded("page".into(), "101".into()))
        .with_status(400)
        .with_body(r#"{"message": "page out of range", "type": "bad_request"}"#)
        .expect(0)
        .create_async()
        .await;

    // Starting at page 98 the default ceiling of 100 pages would run past page 100.
    let client = client_with(&server, page_counter());
    let mut pages: Paginator<'_, u32> =
        client.paginate(&client.endpoint("/items"), Query::new().with("page", 98));

    assert_eq!(pages.collect_all().await.unwrap(), vec![1, 1, 1]);
    assert!(pages.is_exhausted());
    in_range.assert_async().await;
    beyond.assert_async().await;
}

#[tokio::test]
async fn page_counter_without_ceiling_stops_at_the_largest_page_number() {
    let mut server = mockito::Server::new_async().await;
    let last = mock_page(&mut server, &u32::MAX.to_string(), "[5]").await;

    let config = PaginationConfig {
        max_pages: None,
        stop_on_empty: false,
        ..page_counter()
    };
    let client = client_with(&server, config);
    let mut pages: Paginator<'_, u32> =
        client.paginate(&client.endpoint("/items"), Query::new().with("page", u32::MAX));

    assert_eq!(pages.advance().await.unwrap(), Some(vec![5]));
    assert!(pages.is_exhausted());
    assert_eq!(pages.advance().await.unwrap(), None);
    last.assert_async().await;
}

#[tokio::test]
async fn max_pages_caps_the_sequence() {
    let mut server = mockito::Server::new_async().await;
    let one = mock_page(&mut server, "1", "[1]").await;
    let two = mock_page(&mut server, "2", "[2]").await;
    let three = server
        .mock("GET", "/api/v2/items")
        .match_query(Matcher::UrlEncoded("page".into(), "3".into()))
        .expect(0)
        .create_async()
        .await;

    let config = PaginationConfig {
        max_pages: Some(2),
        ..page_counter()
    };
    let client = client_with(&server, config);
    let mut pages: Paginator<'_, u32> = client.paginate(&client.endpoint("/items"), Query::new());

    assert_eq!(pages.collect_all().await.unwrap(), vec![1, 2]);
    one.assert_async().await;
    two.assert_async().await;
    three.assert_async().await;
}

#[tokio::test]
async fn empty_pages_continue_when_stop_on_empty_is_off() {
    let mut server = mockito::Server::new_async().await;
    let _one = mock_page(&mut server, "1", "[]").await;
    let _two = mock_page(&mut server, "2", "[7]").await;

    let config = PaginationConfig {
        max_pages: Some(2),
        stop_on_empty: false,
        ..page_counter()
    };
    let client = client_with(&server, config);
    let mut pages: Paginator<'_, u32> = client.paginate(&client.endpoint("/items"), Query::new());

    assert_eq!(pages.advance().await.unwrap(), Some(vec![]));
    assert_eq!(pages.advance().await.unwrap(), Some(vec![7]));
    assert_eq!(pages.advance().await.unwrap(), None);
}

#[tokio::test]
async fn errors_exhaust_the_paginator() {
    let mut server = mockito::Server::new_async().await;
    let _one = server
        .mock("GET", "/api/v2/items")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(403)
        .with_body(r#"{"message": "Forbidden", "type": "forbidden"}"#)
        .create_async()
        .await;

    let client = client_with(&server, page_counter());
    let mut pages: Paginator<'_, Value> = client.paginate(&client.endpoint("/items"), Query::new());

    let err = pages.advance().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert!(pages.is_exhausted());
    assert_eq!(pages.advance().await.unwrap(), None);
}

#[tokio::test]
async fn resource_paginators_use_the_client_policy() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/users/qiita/followers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let config = PaginationConfig {
        per_page: Some(50),
        ..page_counter()
    };
    let client = client_with(&server, config);
    let mut pages = client.fetch_user_followers("qiita", Default::default());

    assert_eq!(pages.style(), PaginationStyle::PageCounter);
    assert_eq!(pages.advance().await.unwrap(), None);
    mock.assert_async().await;
}
