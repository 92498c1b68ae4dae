//! Encourage — classifies short texts as encouragement or not.

use std::path::PathBuf;
use std::sync::Arc;

use encourage_core::ServiceConfig;
use encourage_remote::LLMConfig;
use encourage_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn resolve_data_dir() -> PathBuf {
    std::env::var("ENCOURAGE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

fn print_usage() {
    println!("Encourage — encouragement classifier server");
    println!();
    println!("Usage: encourage [command]");
    println!();
    println!("Commands:");
    println!("  (none)                   Start the server");
    println!("  classify <text...>       Classify text once and print the result");
    println!("  help                     Show this help message");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let data_dir = resolve_data_dir();
    let config = ServiceConfig::from_env(&data_dir)?;
    let llm_config = LLMConfig::load(&config.data_paths.llm_config_file);

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--classify" | "classify" => {
                let text = args[2..].join(" ");
                let state = AppState::new(&config, &llm_config);
                match state.classifier.classify_text(&text).await {
                    Ok(result) => {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                        return Ok(());
                    }
                    Err(e) => {
                        eprintln!("{}", e);
                        eprintln!("Usage: encourage classify <text...>");
                        std::process::exit(1);
                    }
                }
            }
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'encourage help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    info!("Data directory: {}", data_dir.display());

    let port = config.port;
    let state = Arc::new(AppState::new(&config, &llm_config));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Encourage server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
