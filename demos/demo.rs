use elasticemail_client::models::{ContactQuery, EmailMessage};
use elasticemail_client::{ClientBuilder, FilePayload};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ClientBuilder::from_env()?.build()?;

    let account = client.account().load().await?;
    println!("Account: {} ({:?})", account.email, account.status);

    let contacts = client
        .contact()
        .list(&ContactQuery {
            limit: Some(10),
            ..Default::default()
        })
        .await?;
    for contact in &contacts {
        println!("Contact: {} {:?}", contact.email, contact.status);
    }

    let report = FilePayload::new("report.txt", "hello from rust").with_content_type("text/plain");
    let sent = client
        .email()
        .send_with_files(
            &EmailMessage {
                from: Some(account.email.clone()),
                msg_to: Some(vec![account.email.clone()]),
                subject: Some("Demo".into()),
                body_text: Some("See attached.".into()),
                ..Default::default()
            },
            &[report],
        )
        .await?;
    println!("Sent: {}", sent.message_id);

    let status = client.email().status(&sent.message_id).await?;
    println!("Status: {:?}", status.status_name);

    Ok(())
}
