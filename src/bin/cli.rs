use clap::{Parser, Subcommand};
use dialoguer::Password;
use dotenvy::dotenv;
use parishdesk::cli::{collect_issues, mapping_lines, menu_lines};
use parishdesk::client::{BackendApi, HttpBackend};
use parishdesk::config::BackendConfig;
use parishdesk::config::navigation::default_navigation_items;
use parishdesk::session::{SessionContext, ensure_loaded};
use parishdesk_access::MenuModuleMapping;

#[derive(Parser)]
#[command(name = "parishdesk-cli")]
#[command(about = "Parishdesk CLI - Inspect the menu permission mapping", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compiled-in menu key to module mapping
    Mapping,
    /// Check the mapping and sidebar against the live permission catalog
    Validate {
        /// Bearer token (will be prompted securely if not provided)
        #[arg(short = 't', long)]
        token: Option<String>,
    },
    /// Print the sidebar entries visible to the token's user
    Menu {
        /// Bearer token (will be prompted securely if not provided)
        #[arg(short = 't', long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let mapping = MenuModuleMapping::builtin();

    match cli.command {
        Commands::Mapping => {
            for line in mapping_lines(mapping) {
                println!("{line}");
            }
        }
        Commands::Validate { token } => handle_validate(mapping, token).await,
        Commands::Menu { token } => handle_menu(mapping, token).await,
    }
}

fn read_token(token: Option<String>) -> String {
    token.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Bearer token")
            .interact()
            .unwrap_or_else(|e| {
                eprintln!("❌ Failed to read token: {e}");
                std::process::exit(1);
            })
    })
}

fn backend() -> HttpBackend {
    HttpBackend::new(BackendConfig::from_env()).unwrap_or_else(|e| {
        eprintln!("❌ {e}");
        std::process::exit(1);
    })
}

async fn handle_validate(mapping: &MenuModuleMapping, token: Option<String>) {
    let token = read_token(token);
    let backend = backend();

    let catalog = match backend.fetch_permissions(&token).await {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("❌ Failed to fetch permissions: {e}");
            std::process::exit(1);
        }
    };

    let issues = collect_issues(mapping, &catalog, &default_navigation_items());
    if issues.is_empty() {
        println!(
            "✅ {} menu keys checked against {} modules, no issues",
            mapping.len(),
            catalog.grouped.len()
        );
        return;
    }

    for issue in &issues {
        println!("⚠️  {issue}");
    }
    eprintln!("\n❌ {} issue(s) found", issues.len());
    std::process::exit(1);
}

async fn handle_menu(mapping: &MenuModuleMapping, token: Option<String>) {
    let token = read_token(token);
    let backend = backend();
    let session = SessionContext::new();

    let report = ensure_loaded(&backend, &session, mapping, &token, false).await;
    for notification in &report.notifications {
        eprintln!("⚠️  {}", notification.message);
    }

    for line in menu_lines(mapping, &default_navigation_items(), &report.snapshot) {
        println!("{line}");
    }
}
