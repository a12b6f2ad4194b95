use elasticemail_client::{Client, Error, FilePayload, ParameterMap};
use httpmock::prelude::*;
use serde::Deserialize;

const API_KEY: &str = "test-key";

fn client(server: &MockServer) -> Client {
    Client::builder(API_KEY)
        .base_url(server.base_url())
        .build()
        .unwrap()
}

#[derive(Debug, Deserialize, PartialEq)]
struct Echo {
    name: String,
}

#[tokio::test]
async fn request_posts_form_with_api_key_and_decodes_data() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/echo")
                .header("content-type", "application/x-www-form-urlencoded")
                .body("name=T1&emails=a%40x.com&emails=b%40x.com&apikey=test-key");
            then.status(200)
                .json_body(serde_json::json!({"success": true, "error": null, "data": {"name": "T1"}}));
        })
        .await;

    let params = ParameterMap::new()
        .param("name", "T1")
        .opt("count", None::<u32>)
        .repeated("emails", Some(["a@x.com", "b@x.com"]));
    let echo: Echo = client(&server).request("echo", params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(echo, Echo { name: "T1".to_string() });
}

#[tokio::test]
async fn request_surfaces_api_error_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/account/load");
            then.status(200)
                .body(r#"{"success":false,"error":"Incorrect apikey","data":null}"#);
        })
        .await;

    let err = client(&server)
        .request::<Echo>("account/load", ParameterMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.to_string(), "Incorrect apikey");
}

#[tokio::test]
async fn request_reports_unparseable_body_as_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/account/load");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = client(&server)
        .request::<Echo>("account/load", ParameterMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn request_non_2xx_without_body_uses_reason_phrase() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/account/load");
            then.status(503);
        })
        .await;

    let err = client(&server)
        .request::<Echo>("account/load", ParameterMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "Service Unavailable");
}

#[tokio::test]
async fn upload_sends_multipart_body_and_returns_raw_response() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/file/upload")
                .header_exists("content-type")
                .body_contains("Content-Disposition: form-data; name=\"apikey\"\r\n\r\ntest-key\r\n")
                .body_contains("Content-Disposition: form-data; name=\"expiresAfterDays\"\r\n\r\n7\r\n")
                .body_contains(
                    "name=\"filefoobarname\"; filename=\"report.csv\"\r\nContent-Type: text/csv\r\n\r\na,b\n1,2\r\n",
                );
            then.status(200).body(r#"{"success":true,"data":{"filename":"report.csv","size":8}}"#);
        })
        .await;

    let file = FilePayload::new("report.csv", "a,b\n1,2").with_content_type("text/csv");
    let body = client(&server)
        .upload_files("file/upload", &[file], ParameterMap::new().param("expiresAfterDays", 7))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        body,
        br#"{"success":true,"data":{"filename":"report.csv","size":8}}"#.to_vec()
    );
}

#[tokio::test]
async fn upload_failure_keeps_server_description() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/attachment/upload");
            then.status(500).body("Internal error");
        })
        .await;

    let err = client(&server)
        .upload_files(
            "attachment/upload",
            &[FilePayload::new("a.txt", "hi")],
            ParameterMap::new(),
        )
        .await
        .unwrap_err();

    match &err {
        Error::Transport { status, body, .. } => {
            assert_eq!(*status, 500);
            assert_eq!(body, b"Internal error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "Internal error");
}

#[tokio::test]
async fn download_returns_named_file() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/file/download")
                .query_param("fileName", "report-1.csv")
                .query_param("apikey", API_KEY);
            then.status(200)
                .header("content-type", "text/csv")
                .header("content-disposition", r#"attachment; filename="report.csv"; size=120"#)
                .body("a,b\n1,2");
        })
        .await;

    let file = client(&server)
        .download_file(
            "file/download",
            ParameterMap::new().param("fileName", "report-1.csv"),
        )
        .await
        .unwrap()
        .expect("a file");

    mock.assert_async().await;
    assert_eq!(file.file_name, "report.csv");
    assert_eq!(file.content_type.as_deref(), Some("text/csv"));
    assert_eq!(file.content, b"a,b\n1,2");
}

#[tokio::test]
async fn download_empty_body_is_not_found_even_with_disposition() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/file/download");
            then.status(200)
                .header("content-disposition", r#"attachment; filename="empty.csv""#);
        })
        .await;

    let err = client(&server)
        .download_file("file/download", ParameterMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn download_empty_body_without_disposition_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/file/download");
            then.status(200);
        })
        .await;

    let err = client(&server)
        .download_file("file/download", ParameterMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn download_successful_envelope_without_file_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/attachment/get");
            then.status(200).body(r#"{"success":true,"error":null,"data":null}"#);
        })
        .await;

    let file = client(&server)
        .download_file("attachment/get", ParameterMap::new())
        .await
        .unwrap();
    assert!(file.is_none());
}

#[tokio::test]
async fn download_failed_envelope_is_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/attachment/get");
            then.status(200)
                .body(r#"{"success":false,"error":"File not found","data":null}"#);
        })
        .await;

    let err = client(&server)
        .download_file("attachment/get", ParameterMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.to_string(), "File not found");
}

#[tokio::test]
async fn download_non_2xx_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/file/download");
            then.status(404).body("No such file");
        })
        .await;

    let err = client(&server)
        .download_file("file/download", ParameterMap::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "No such file");
}

#[tokio::test]
async fn failed_envelope_with_unexpected_data_is_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/account/load");
            then.status(200)
                .body(r#"{"success":false,"error":"Access denied","data":""}"#);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/attachment/get");
            then.status(200)
                .body(r#"{"success":false,"error":"Access denied","data":{"code":403}}"#);
        })
        .await;

    let client = client(&server);
    let err = client
        .request::<Vec<Echo>>("account/load", ParameterMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.to_string(), "Access denied");

    let err = client
        .download_file("attachment/get", ParameterMap::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.to_string(), "Access denied");
}
