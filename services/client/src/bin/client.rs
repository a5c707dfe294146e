//! services/client/src/bin/client.rs

use bytes::Bytes;
use chrono::Utc;
use clap::{Parser, Subcommand};
use client_lib::{
    adapters::{
        ApiClient, ConsoleNotifier, HttpDocumentAdapter, HttpProgressAdapter, MemorySessionStore,
    },
    config::Config,
    error::AppError,
};
use learning_assistant_core::{
    routes, AuthContext, DashboardLoader, DashboardView, DocumentCollectionManager,
    DocumentListState, DocumentListView, GuardDecision, NotificationSink, RouteGuard,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "learning-client",
    about = "Manage your learning-assistant documents and progress from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List your documents.
    Documents,
    /// Upload a document. The title defaults to the file name without its extension.
    Upload {
        path: PathBuf,
        #[arg(long)]
        title: Option<String>,
    },
    /// Delete a document by id.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Show your totals and recent activity.
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded. Using API at {}", config.api_base_url);

    // --- 2. Restore the Session ---
    let store = Arc::new(MemorySessionStore::seeded(
        config.auth_token.as_deref(),
        &config.auth_username,
    ));
    let auth = Arc::new(AuthContext::new(store));
    auth.initialize().await;
    match RouteGuard::new(auth.clone()).check().await {
        GuardDecision::Render => {}
        GuardDecision::Redirect(route) => return Err(AppError::SignedOut(route)),
        GuardDecision::Loading => {
            return Err(AppError::Internal("Session check did not finish.".to_string()))
        }
    }

    // --- 3. Initialize Service Adapters ---
    let api = ApiClient::new(&config)?;
    let notifier: Arc<dyn NotificationSink> = Arc::new(ConsoleNotifier);
    let documents = DocumentCollectionManager::new(
        Arc::new(HttpDocumentAdapter::new(api.clone())),
        notifier.clone(),
    );

    // --- 4. Run the Command ---
    match cli.command {
        Command::Documents => {
            documents.load().await?;
            print_documents(&documents.state().await);
        }
        Command::Upload { path, title } => upload(&documents, path, title).await?,
        Command::Delete { id, yes } => delete(&documents, &id, yes).await?,
        Command::Dashboard => {
            let dashboard = DashboardLoader::new(Arc::new(HttpProgressAdapter::new(api)), notifier);
            dashboard.load().await?;
            print_dashboard(dashboard.state().await.view());
        }
    }

    Ok(())
}

async fn upload(
    manager: &DocumentCollectionManager,
    path: PathBuf,
    title: Option<String>,
) -> Result<(), AppError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::Internal(format!("'{}' has no file name", path.display())))?
        .to_string();
    let payload = tokio::fs::read(&path).await?;

    manager.open_upload().await;
    manager.select_file(name, Bytes::from(payload)).await;
    if let Some(title) = title {
        manager.set_upload_title(title).await;
    }
    let document = manager.submit_upload().await?;

    println!("Open it at {}", routes::document(&document.id));
    print_documents(&manager.state().await);
    Ok(())
}

async fn delete(manager: &DocumentCollectionManager, id: &str, yes: bool) -> Result<(), AppError> {
    manager.load().await?;
    let Some(target) = manager.documents().await.into_iter().find(|d| d.id == id) else {
        println!("No document with id {} in your library.", id);
        return Ok(());
    };

    manager.request_delete(target.clone()).await;
    if !yes && !confirm(&target.title).await? {
        manager.cancel_delete().await;
        println!("Cancelled.");
        return Ok(());
    }
    manager.confirm_delete().await?;
    Ok(())
}

async fn confirm(title: &str) -> Result<bool, AppError> {
    println!(
        "Are you sure you want to delete the document \"{}\"? \
         This action cannot be undone and will remove all associated AI data. [y/N]",
        title
    );
    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn print_documents(state: &DocumentListState) {
    match state.view(Utc::now()) {
        DocumentListView::Loading => println!("Loading..."),
        DocumentListView::Empty => {
            println!("No Documents Yet.");
            println!("Upload your first PDF with `learning-client upload <file>`.");
        }
        DocumentListView::Documents(cards) => {
            for card in cards {
                let mut details = vec![card.size_label];
                if let Some(count) = card.flashcard_count {
                    details.push(format!("{} Flashcards", count));
                }
                if let Some(count) = card.quiz_count {
                    details.push(format!("{} Quizzes", count));
                }
                details.push(card.created_label);
                println!("{}  {}", card.id, card.title);
                println!("    {}  {}", details.join(" | "), card.link);
            }
        }
    }
}

fn print_dashboard(view: DashboardView) {
    match view {
        DashboardView::Loading => println!("Loading..."),
        DashboardView::Unavailable => println!("No dashboard data available."),
        DashboardView::Ready { stats, activity } => {
            for stat in stats {
                println!("{:<18}{}", stat.label, stat.value);
            }
            println!();
            println!("Recent Activity");
            if activity.is_empty() {
                println!("No recent activity yet. Start learning to see progress here.");
            }
            for entry in activity {
                let when = entry
                    .timestamp
                    .map(|t| t.format("%b %e, %Y %H:%M").to_string())
                    .unwrap_or_else(|| "unknown time".to_string());
                println!(
                    "{}: {}  ({})  {}",
                    entry.kind.label(),
                    entry.description,
                    when,
                    entry.link
                );
            }
        }
    }
}
