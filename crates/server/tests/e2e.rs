use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes;
use server::state::ServerState;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Use DATABASE_URL from environment; if not present, skip tests gracefully
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip e2e tests. Provide .env.test or env var.");
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    // Connect DB and run migrations
    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await { eprintln!("migrations notice: {}", e); }

    let app: Router = routes::build_router(ServerState::with_database(db), cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "OK");
    Ok(())
}

#[tokio::test]
async fn e2e_company_and_service_flow() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = reqwest::Client::new();
    let rn = format!("RN-{}", Uuid::new_v4());

    // Create company, then the same registration number again
    let res = c.post(format!("{}/companies", app.base_url))
        .json(&json!({"name": "Acme", "registrationNumber": rn}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let acme = res.json::<serde_json::Value>().await?;
    assert_eq!(acme["services"], json!([]));

    let res = c.post(format!("{}/companies", app.base_url))
        .json(&json!({"name": "Acme", "registrationNumber": rn}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    // Service under the company
    let res = c.post(format!("{}/services", app.base_url))
        .json(&json!({"name": "Audit", "description": "Annual audit", "price": 500, "companyId": acme["id"]}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let audit = res.json::<serde_json::Value>().await?;

    let res = c.get(format!("{}/services/{}", app.base_url, audit["id"].as_str().unwrap_or_default())).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let fetched = res.json::<serde_json::Value>().await?;
    assert_eq!(fetched["company"]["name"], "Acme");
    assert_eq!(fetched["company"]["id"], acme["id"]);

    // Newest company first
    let rn_b = format!("RN-{}", Uuid::new_v4());
    let res = c.post(format!("{}/companies", app.base_url))
        .json(&json!({"name": "Beta", "registrationNumber": rn_b}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let listed = c.get(format!("{}/companies", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    let names: Vec<_> = listed.as_array().map(|l| l.iter().filter_map(|c| c["registrationNumber"].as_str()).collect()).unwrap_or_default();
    let pos_a = names.iter().position(|n| *n == rn).expect("acme listed");
    let pos_b = names.iter().position(|n| *n == rn_b).expect("beta listed");
    assert!(pos_b < pos_a);
    Ok(())
}
