use tracing::{error, info};
use user_store::config::db::{DbConfig, DbKind};
use user_store::demo::run_example_operations;
use user_store::infra::state::build_state;

mod telemetry;

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    // DB_HOST, DB_PORT, DB_NAME, DB_LOGIN and DB_PASS come from the
    // environment, optionally seeded from a .env file in the working directory.
    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let state = match build_state()
        .with_db(DbKind::Postgres)
        .with_config(config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to initialise the user store: {e}");
            std::process::exit(1);
        }
    };

    info!("database ready");

    match run_example_operations(&state.users).await {
        Ok(report) => println!("{}", report.email_matches),
        Err(e) => error!(error = %e, "example operations failed"),
    }

    if let Err(e) = state.shutdown().await {
        error!(error = %e, "failed to close database pool");
    }
}
