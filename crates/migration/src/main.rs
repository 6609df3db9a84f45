use migration::Migrator;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:./gruzzolo.db?mode=rwc".to_string());

    let db = Database::connect(&url).await?;

    match command.as_str() {
        "up" => Migrator::up(&db, None).await?,
        "down" => Migrator::down(&db, None).await?,
        "fresh" => Migrator::fresh(&db).await?,
        "status" => {
            Migrator::status(&db).await?;
        }
        other => {
            eprintln!("unknown command {other:?} (expected: up, down, fresh, status)");
            std::process::exit(2);
        }
    }

    Ok(())
}
