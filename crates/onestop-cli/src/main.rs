use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use onestop_application::{AuthManager, StudentManager};
use onestop_core::route::{Route, RouteGuard, RouteOutcome};
use onestop_infrastructure::{JsonSessionRepository, JsonStore, JsonStudentRepository};

mod commands;

#[derive(Parser)]
#[command(name = "onestop")]
#[command(about = "OneStop - one profile, many university applications (simulated backend)", long_about = None)]
struct Cli {
    /// Store directory (defaults to the platform data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account (mock: any email, password of 6+ characters)
    Signup {
        email: String,
        password: String,
        name: String,
    },
    /// Sign in (mock: any email, password of 6+ characters)
    Login { email: String, password: String },
    /// Sign out and clear all student data
    Logout,
    /// Show or edit the student profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Browse the university catalog
    Universities {
        /// Case-insensitive name/location filter
        #[arg(long, default_value = "")]
        search: String,
        /// Restrict to universities accepting these exams (repeatable)
        #[arg(long = "exam")]
        exams: Vec<String>,
    },
    /// Apply to universities by catalog id
    Apply { university_ids: Vec<String> },
    /// List submitted applications
    Applications,
    /// Update the status of one application
    SetStatus { id: String, status: String },
    /// Manage the document vault
    Documents {
        #[command(subcommand)]
        action: DocumentsAction,
    },
    /// Show the exam and deadline tracker
    Deadlines,
    /// Resolve a URL path through the route guard
    Open { path: String },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the current profile
    Show,
    /// Set one field by its camelCase name (e.g. fullName, isEWS)
    Set { field: String, value: String },
}

#[derive(Subcommand)]
enum DocumentsAction {
    /// List vault contents
    List,
    /// Record an uploaded file (metadata only)
    Upload {
        name: String,
        /// File size in bytes
        #[arg(long, default_value_t = 0)]
        size: u64,
    },
    /// Import documents from DigiLocker (simulated)
    Import,
    /// Remove a document by id
    Remove { id: String },
}

impl Commands {
    /// The screen this command corresponds to, for the session guard.
    fn route(&self) -> Route {
        match self {
            Commands::Signup { .. } => Route::Auth {
                mode: onestop_core::route::AuthMode::Signup,
            },
            Commands::Login { .. } | Commands::Logout => Route::Auth {
                mode: onestop_core::route::AuthMode::Login,
            },
            Commands::Profile { .. } => Route::DashboardProfile,
            Commands::Universities { .. } | Commands::Apply { .. } => Route::DashboardUniversities,
            Commands::Applications | Commands::SetStatus { .. } => Route::DashboardApplications,
            Commands::Documents { .. } => Route::DashboardDocuments,
            Commands::Deadlines => Route::DashboardDeadlines,
            Commands::Open { .. } => Route::Home,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let store = match &cli.data_dir {
        Some(dir) => JsonStore::new(dir.clone()),
        None => JsonStore::open_default()?,
    };

    let auth = AuthManager::new(Arc::new(JsonSessionRepository::new(store.clone())));
    auth.load_session().await?;
    let student = StudentManager::load(Arc::new(JsonStudentRepository::new(store))).await?;

    // Gate dashboard commands the way the router gates dashboard screens.
    let user = auth.current_user().await;
    match RouteGuard::evaluate(&cli.command.route(), user.as_ref(), auth.is_loading().await) {
        RouteOutcome::Allow => {}
        RouteOutcome::RedirectToAuth => {
            println!("Not signed in. Use `onestop login` or `onestop signup` first.");
            std::process::exit(1);
        }
        RouteOutcome::Loading => {
            println!("Session is still loading. Try again.");
            std::process::exit(1);
        }
    }

    match cli.command {
        Commands::Signup {
            email,
            password,
            name,
        } => commands::signup(&auth, &email, &password, &name).await,
        Commands::Login { email, password } => commands::login(&auth, &email, &password).await,
        Commands::Logout => commands::logout(&auth, &student).await,
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile_show(&student).await,
            ProfileAction::Set { field, value } => {
                commands::profile_set(&student, &field, &value).await
            }
        },
        Commands::Universities { search, exams } => {
            commands::universities(&student, &search, &exams).await
        }
        Commands::Apply { university_ids } => commands::apply(&student, &university_ids).await,
        Commands::Applications => commands::applications(&student).await,
        Commands::SetStatus { id, status } => commands::set_status(&student, &id, &status).await,
        Commands::Documents { action } => match action {
            DocumentsAction::List => commands::documents_list(&student).await,
            DocumentsAction::Upload { name, size } => {
                commands::documents_upload(&student, &name, size).await
            }
            DocumentsAction::Import => commands::documents_import(&student).await,
            DocumentsAction::Remove { id } => commands::documents_remove(&student, &id).await,
        },
        Commands::Deadlines => commands::deadlines(),
        Commands::Open { path } => commands::open(&auth, &path).await,
    }
}
