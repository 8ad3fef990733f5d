use plesk::{CreateClientAuth, CreateClientConfig, create_client};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = create_client(CreateClientConfig {
        host: "https://localhost:8443".to_string(),
        auth: CreateClientAuth {
            username: "admin".to_string(),         // Plesk administrator login
            password: "your_password".to_string(), // Plesk administrator password
        },
    });

    match client.server().get_info().await {
        Ok(info) => println!("✅ Connected to {}", info["hostname"]),
        Err(e) => println!("❌ Failed to reach the panel: {}", e),
    }

    match client.domains().get_by_name("example.com").await {
        Ok(domain) => println!("✅ Domain: {}", domain),
        Err(e) if e.status().is_some_and(|s| s.as_u16() == 404) => {
            println!("ℹ️ example.com does not exist yet, creating it");
            let created = client
                .domains()
                .create(&json!({
                    "name": "example.com",
                    "hosting_type": "virtual",
                    "hosting_settings": { "ftp_login": "example", "ftp_password": "changeme" }
                }))
                .await?;
            println!("✅ Created domain {}", created["id"]);
        }
        Err(e) => println!("❌ Failed to look up domain: {}", e),
    }

    match client.databases().servers.get_all().await {
        Ok(servers) => println!("✅ Found {} database servers", servers.as_array().map_or(0, Vec::len)),
        Err(e) => println!("❌ Failed to list database servers: {}", e),
    }

    Ok(())
}
