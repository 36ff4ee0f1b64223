use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookset_admin::domain::{ApiError, BookSetFilter, BookSetProvider};
use bookset_admin::services::dashboard;
use bookset_admin::{ApiClient, Config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookset_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    tracing::info!(api = %config.api_base_url, "starting operator console");

    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let command = std::env::args().nth(1).unwrap_or_else(|| "stats".to_string());
    let result = match command.as_str() {
        "stats" => print_stats(&client).await,
        "list" => print_book_sets(&client).await,
        other => {
            eprintln!("Unknown command: {} (expected `stats` or `list`)", other);
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn print_stats(client: &ApiClient) -> Result<(), ApiError> {
    let stats = dashboard::load_stats(client).await?;
    println!("Book sets:      {}", stats.total_book_sets);
    println!("Boards:         {}", stats.total_boards);
    println!("Mediums:        {}", stats.total_mediums);
    println!("Classes:        {}", stats.total_classes);
    println!("Academic years: {}", stats.total_years);
    println!("Books:          {}", stats.total_books);
    Ok(())
}

async fn print_book_sets(client: &ApiClient) -> Result<(), ApiError> {
    let sets = client.list_book_sets(&BookSetFilter::default()).await?;
    if sets.is_empty() {
        println!("No book sets found.");
        return Ok(());
    }

    for set in sets {
        println!("#{} {}", set.id, set.set_name);
        if let (Some(board), Some(medium), Some(class), Some(year)) =
            (&set.boards, &set.mediums, &set.classes, &set.academic_years)
        {
            println!(
                "    {} / {} / {} / {}",
                board.board_name, medium.medium_name, class.class_name, year.year_name
            );
        }
        for item in &set.book_set_items {
            println!("    {} x {}", item.quantity, item.books.label());
        }
    }
    Ok(())
}
