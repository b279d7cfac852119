//! Submit a conversion and poll its status.
//!
//! Fill in your own account credentials before running:
//!   cargo run --example simple

use neospeech_rest::TtsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let client = TtsClient::builder()
        .email("mail@example.com")
        .account_id("1234657890")
        .login_key("login_key")
        .password("password")
        .build()?;

    let resp = client.convert_simple("Hello, World!").await?;
    println!("convert: {resp:#?}");

    if let Some(report) = resp.http_error() {
        eprintln!("request never reached the service: {}", report.message);
        return Ok(());
    }

    if let Some(number) = resp.get("conversionNumber") {
        let status = client.get_conversion_status(number).await?;
        println!("status: {status:#?}");
    }

    Ok(())
}
