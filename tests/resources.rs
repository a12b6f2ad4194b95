use elasticemail_client::models::{
    Campaign, CampaignTemplate, ContactStatus, EmailMessage, LogJobStatus, LogQuery, NewContact,
    TemplateQuery, TemplateScope,
};
use elasticemail_client::{Client, Error, FilePayload};
use httpmock::prelude::*;
use std::collections::BTreeMap;

fn client(server: &MockServer) -> Client {
    Client::builder("test-key")
        .base_url(format!("{}/v2/", server.base_url()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn account_load_decodes_lowercase_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/account/load")
                .body("apikey=test-key");
            then.status(200).body(
                r#"{"success":true,"data":{"publicaccountid":"abc-123","email":"me@x.com","status":"Active","credit":12.5,"datecreated":"2024-01-05T15:04:05","issub":false}}"#,
            );
        })
        .await;

    let account = client(&server).account().load().await.unwrap();

    mock.assert_async().await;
    assert_eq!(account.public_account_id, "abc-123");
    assert_eq!(account.email, "me@x.com");
    assert_eq!(account.credit, 12.5);
    assert!(account.date_created.is_some());
    assert!(!account.is_sub);
}

#[tokio::test]
async fn email_send_expands_recipients_and_merge_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/email/send")
                .body_contains("subject=Welcome")
                .body_contains("msgTo=a%40x.com&msgTo=b%40x.com")
                .body_contains("lists=vip%2Cnew")
                .body_contains("merge_firstname=Ann")
                .body_contains("isTransactional=True")
                .body_contains("apikey=test-key");
            then.status(200).body(
                r#"{"success":true,"data":{"transactionid":"t-1","messageid":"m-1"}}"#,
            );
        })
        .await;

    let message = EmailMessage {
        subject: Some("Welcome".to_string()),
        msg_to: Some(vec!["a@x.com".to_string(), "b@x.com".to_string()]),
        lists: Some(vec!["vip".to_string(), "new".to_string()]),
        merge: Some(BTreeMap::from([("firstname".to_string(), "Ann".to_string())])),
        is_transactional: Some(true),
        ..Default::default()
    };
    let sent = client(&server).email().send(&message).await.unwrap();

    mock.assert_async().await;
    assert_eq!(sent.transaction_id, "t-1");
    assert_eq!(sent.message_id, "m-1");
}

#[tokio::test]
async fn email_send_with_files_uses_multipart() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/email/send")
                .body_contains("name=\"subject\"\r\n\r\nInvoice\r\n")
                .body_contains("name=\"filefoobarname\"; filename=\"invoice.pdf\"");
            then.status(200).body(
                r#"{"success":true,"data":{"transactionid":"t-2","messageid":"m-2"}}"#,
            );
        })
        .await;

    let message = EmailMessage {
        subject: Some("Invoice".to_string()),
        ..Default::default()
    };
    let files = [FilePayload::new("invoice.pdf", b"%PDF-1.4".to_vec())
        .with_content_type("application/pdf")];
    let sent = client(&server)
        .email()
        .send_with_files(&message, &files)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(sent.transaction_id, "t-2");
}

#[tokio::test]
async fn contact_add_sends_custom_fields_and_repeated_lists() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/contact/add")
                .body_contains("publicAccountID=abc")
                .body_contains("listName=Newsletter&listName=Beta")
                .body_contains("field_city=Oslo")
                .body_contains("field_plan=pro");
            then.status(200)
                .body(r#"{"success":true,"data":{"email":"a@x.com","status":"Active"}}"#);
        })
        .await;

    let contact = NewContact {
        public_account_id: "abc".to_string(),
        email: "a@x.com".to_string(),
        list_names: Some(vec!["Newsletter".to_string(), "Beta".to_string()]),
        custom_fields: Some(BTreeMap::from([
            ("city".to_string(), "Oslo".to_string()),
            ("plan".to_string(), "pro".to_string()),
        ])),
        ..Default::default()
    };
    let added = client(&server).contact().add(&contact).await.unwrap();

    mock.assert_async().await;
    assert_eq!(added.email, "a@x.com");
    assert_eq!(added.status, Some(ContactStatus::Active));
}

#[tokio::test]
async fn contact_change_status_sends_symbolic_name() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/contact/changestatus")
                .body("emails=a%40x.com%2Cb%40x.com&status=Unsubscribed&apikey=test-key");
            then.status(200).body(r#"{"success":true}"#);
        })
        .await;

    let emails = vec!["a@x.com".to_string(), "b@x.com".to_string()];
    client(&server)
        .contact()
        .change_status(ContactStatus::Unsubscribed, None, Some(emails.as_slice()))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn campaign_add_sends_json_document() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/campaign/add")
                .body_contains("campaign=%7B%22name%22%3A%22Spring%22");
            then.status(200).body(r#"{"success":true,"data":42}"#);
        })
        .await;

    let campaign = Campaign {
        name: "Spring".to_string(),
        templates: vec![CampaignTemplate {
            template_id: Some(7),
            ..Default::default()
        }],
        ..Default::default()
    };
    let id = client(&server).campaign().add(&campaign).await.unwrap();

    mock.assert_async().await;
    assert_eq!(id, 42);
}

#[tokio::test]
async fn log_load_formats_dates_and_statuses() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/log/load")
                .body_contains("statuses=Failed%2CSent")
                .body_contains("from=1%2F5%2F2024+3%3A04%3A05+PM")
                .body_contains("limit=0");
            then.status(200).body(
                r#"{"success":true,"data":{"recipients":[{"to":"a@x.com","status":"Sent"}]}}"#,
            );
        })
        .await;

    let from = chrono::NaiveDate::from_ymd_opt(2024, 1, 5)
        .and_then(|d| d.and_hms_opt(15, 4, 5))
        .unwrap();
    let query = LogQuery {
        statuses: Some(vec![LogJobStatus::Failed, LogJobStatus::Sent]),
        from: Some(from),
        limit: Some(0),
        ..Default::default()
    };
    let log = client(&server).log().load(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(log.recipients.len(), 1);
    assert_eq!(log.recipients[0].to, "a@x.com");
}

#[tokio::test]
async fn template_list_mixes_joined_and_repeated_parameters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/template/getlist")
                .body("templateScopes=Private%2CPublic&tags=a&tags=b&apikey=test-key");
            then.status(200).body(
                r#"{"success":true,"data":{"templates":[{"templateid":3,"name":"Welcome"}],"templatescount":1}}"#,
            );
        })
        .await;

    let query = TemplateQuery {
        scope: Some(vec![TemplateScope::Private, TemplateScope::Public]),
        tags: Some(vec!["a".to_string(), "b".to_string()]),
        ..Default::default()
    };
    let list = client(&server).template().list(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(list.templates_count, 1);
    assert_eq!(list.templates[0].template_id, 3);
}

#[tokio::test]
async fn attachment_upload_decodes_envelope() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v2/attachment/upload");
            then.status(200).body(
                r#"{"success":true,"data":{"filename":"logo.png","id":"att-1","size":4}}"#,
            );
        })
        .await;

    let attachment = client(&server)
        .attachment()
        .upload(FilePayload::new("logo.png", b"\x89PNG".to_vec()))
        .await
        .unwrap();

    assert_eq!(attachment.id, "att-1");
    assert_eq!(attachment.size, 4);
}

#[tokio::test]
async fn file_download_round_trips_through_facade() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/file/download")
                .query_param("fileName", "export.zip");
            then.status(200)
                .header("content-type", "application/zip")
                .header("content-disposition", "attachment; filename=export.zip")
                .body("PK");
        })
        .await;

    let file = client(&server)
        .file()
        .download("export.zip")
        .await
        .unwrap()
        .expect("a file");

    assert_eq!(file.file_name, "export.zip");
    assert_eq!(file.content_type.as_deref(), Some("application/zip"));
}

#[tokio::test]
async fn sms_send_reports_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/sms/send")
                .body_contains("to=%2B4712345678");
            then.status(200)
                .body(r#"{"success":false,"error":"SMS is not enabled for this account"}"#);
        })
        .await;

    let err = client(&server)
        .sms()
        .send("+4712345678", "hi")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.to_string(), "SMS is not enabled for this account");
}

#[tokio::test]
async fn void_operations_accept_missing_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/list/delete")
                .body("listName=Old+list&apikey=test-key");
            then.status(200).body(r#"{"success":true,"error":null,"data":null}"#);
        })
        .await;

    client(&server).list().delete("Old list").await.unwrap();
}
