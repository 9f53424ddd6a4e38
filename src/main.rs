use std::env;

use actix_web::{App, HttpServer, middleware, web};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use dotenvy::dotenv;

use retail_prices::db::establish_connection_pool;
use retail_prices::repository::errors::RepositoryResult;
use retail_prices::repository::{DieselRepository, PriceReader, PriceWriter};
use retail_prices::routes::prices::get_applicable_price;
use retail_prices::seed;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Loads the sample tariffs on a fresh database; an already-populated store
/// is left untouched.
fn seed_if_empty(repo: &DieselRepository) -> RepositoryResult<()> {
    if repo.count_prices()? == 0 {
        let created = repo.create_prices(&seed::sample_prices())?;
        log::info!("Seeded {} sample price records", created.len());
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("prices.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
                log::error!("Failed to run database migrations: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get a database connection: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    if let Err(e) = seed_if_empty(&repo) {
        log::error!("Failed to seed sample price records: {e}");
        std::process::exit(1);
    }

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(get_applicable_price)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
