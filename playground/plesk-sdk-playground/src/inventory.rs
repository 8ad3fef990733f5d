use anyhow::Result;
use plesk::{Client, Value};
use tracing::info;

fn print_json(title: &str, value: &Value) -> Result<()> {
    println!("== {}", title);
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn count(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}

/// Prints server info, server IPs and either one domain or every domain.
pub async fn print_inventory(client: &Client, domain: Option<&str>) -> Result<()> {
    let server = client.server().get_info().await?;
    print_json("server", &server)?;

    let ips = client.server().get_ips().await?;
    info!("server has {} ip address(es)", count(&ips));
    print_json("server ips", &ips)?;

    match domain {
        Some(name) => {
            let found = client.domains().get_by_name(name).await?;
            print_json(name, &found)?;
        }
        None => {
            let domains = client.domains().get_all().await?;
            info!("found {} domain(s)", count(&domains));
            print_json("domains", &domains)?;
        }
    }

    Ok(())
}
