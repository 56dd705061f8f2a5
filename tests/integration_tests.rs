//! End-to-end tests: mock catalog API -> fetch -> table -> CSV file

use comicfetch::output::{default_columns, write_table_to_csv, Table};
use comicfetch::{Credentials, FetchConfig, Fetcher};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn character(id: u64, name: &str, comics: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "comics": { "available": comics, "items": [] },
        "series": { "available": 1, "items": [] },
        "stories": { "available": 2, "items": [] },
        "events": { "available": 0, "items": [] },
    })
}

fn page(offset: u64, total: u64, results: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "code": 200,
        "status": "Ok",
        "data": {
            "offset": offset,
            "limit": results.len(),
            "total": total,
            "count": results.len(),
            "results": results,
        }
    })
}

#[tokio::test]
async fn extract_paginated_catalog_to_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            0,
            3,
            vec![
                character(1, "3-D Man", 12),
                character(2, "A-Bomb", 4),
            ],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            2,
            3,
            vec![character(3, "Abyss", 7)],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FetchConfig::new()
        .with_base_url(mock_server.uri())
        .with_page_size(2);
    let credentials = Credentials::new("pub_key", "priv_key").unwrap();
    let fetcher = Fetcher::new(config, credentials).unwrap();

    let results = fetcher.fetch_all().await.unwrap();
    assert_eq!(results.len(), 3);

    let table = Table::from_records(results.records(), default_columns());
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("characters.csv");
    let rows = write_table_to_csv(&csv_path, &table, None).unwrap();
    assert_eq!(rows, 3);

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,name,description,comics,series,stories,events",
            "1,3-D Man,,12,1,2,0",
            "2,A-Bomb,,4,1,2,0",
            "3,Abyss,,7,1,2,0",
        ]
    );
}

#[tokio::test]
async fn zero_record_run_writes_header_only_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0, 0, vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FetchConfig::new()
        .with_base_url(mock_server.uri())
        .with_page_size(100);
    let credentials = Credentials::new("pub_key", "priv_key").unwrap();
    let fetcher = Fetcher::new(config, credentials).unwrap();

    let results = fetcher.fetch_all().await.unwrap();
    assert!(results.is_empty());

    let table = Table::from_records(results.records(), default_columns());
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("empty.csv");
    write_table_to_csv(&csv_path, &table, None).unwrap();

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        contents.trim_end(),
        "id,name,description,comics,series,stories,events"
    );
}

#[tokio::test]
async fn mid_pagination_failure_reports_missed_offset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            0,
            4,
            vec![character(1, "A", 0), character(2, "B", 0)],
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let config = FetchConfig::new()
        .with_base_url(mock_server.uri())
        .with_page_size(2);
    let credentials = Credentials::new("pub_key", "priv_key").unwrap();
    let fetcher = Fetcher::new(config, credentials).unwrap();

    let err = fetcher.fetch_all().await.unwrap_err();
    assert_eq!(err.kind(), "fetch");
    assert_eq!(err.offset(), Some(2));
    assert!(err.to_string().contains("HTTP 502"));
}
