mod support;

use book_finder::services::catalog::{CatalogClient, CatalogError, OpenLibraryClient};
use support::spawn_stub_catalog;

#[tokio::test]
async fn decodes_matching_docs() {
    let stub = spawn_stub_catalog().await;
    let client = OpenLibraryClient::new(&stub.base_url);

    let docs = client.search_title("Hobbit").await.unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].title.as_deref(), Some("The Hobbit"));
    assert_eq!(docs[0].first_publish_year, Some(1937));
    assert_eq!(docs[0].cover_i, Some(12345));
}

#[tokio::test]
async fn empty_docs_is_not_an_error() {
    let stub = spawn_stub_catalog().await;
    let client = OpenLibraryClient::new(&stub.base_url);

    let docs = client.search_title("zzzzxqnosuchbook").await.unwrap();

    assert!(docs.is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let stub = spawn_stub_catalog().await;
    let client = OpenLibraryClient::new(&stub.base_url);

    let err = client.search_title("down").await.unwrap_err();

    match err {
        CatalogError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let stub = spawn_stub_catalog().await;
    let client = OpenLibraryClient::new(&stub.base_url);

    let err = client.search_title("broken").await.unwrap_err();

    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn title_reaches_catalog_intact() {
    let stub = spawn_stub_catalog().await;
    let client = OpenLibraryClient::new(&stub.base_url);

    for title in ["Tom & Jerry #1", "  padded  ", "100% Rust?"] {
        let docs = client.search_title(title).await.unwrap();
        assert_eq!(docs[0].title.as_deref(), Some(title));
    }

    assert_eq!(
        stub.received(),
        vec!["Tom & Jerry #1", "  padded  ", "100% Rust?"]
    );
}
