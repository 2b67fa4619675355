use anyhow::Result;
use sevima::{Client, Order, Query};

fn main() -> Result<()> {
    // Example program that calls the library API.
    // Configure credentials via env vars or a `.env` file.
    let client = Client::from_env()?;

    let query = Query::new().page(1).per_page(20).order("nama", Order::Asc);
    let dosen = client.get_dosen(Some(&query))?;

    println!("{}", serde_json::to_string_pretty(&dosen)?);
    Ok(())
}
