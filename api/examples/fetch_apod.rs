use spaceapi_api::{apod::ApodParams, models::is_empty_response, DateRangeParams, NasaClient};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter("spaceapi_api=info")
        .init();

    let client = match env::var("NASA_API_KEY") {
        Ok(key) if !key.is_empty() => NasaClient::new(key),
        _ => {
            eprintln!("NASA_API_KEY not set, falling back to DEMO_KEY (30 requests/hour).");
            eprintln!("Get a personal key at https://api.nasa.gov/#signUp\n");
            NasaClient::demo()
        }
    };

    println!("Fetching today's Astronomy Picture of the Day...\n");

    let picture = client.apod(ApodParams::default()).await;
    if is_empty_response(&picture) {
        eprintln!("No picture returned.");
    } else {
        println!("{} ({})", picture["title"], picture["date"]);
        println!("{}\n", picture["url"]);
    }

    println!("Coronal mass ejections in January 2024:\n");
    let cmes = client
        .donki_cme(DateRangeParams::new("2024-01-01", "2024-01-31"))
        .await;
    for (i, cme) in cmes.as_array().into_iter().flatten().enumerate() {
        println!("{}. {} @ {}", i + 1, cme["activityID"], cme["startTime"]);
    }

    Ok(())
}
