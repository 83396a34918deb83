use std::sync::Arc;

use campusgate::cli::{decide, issue_token, simulated_auth};
use campusgate::providers::FeatureFlagState;
use campusgate_config::{FeatureFlagsConfig, JwtConfig, LocalizationConfig};
use campusgate_core::{Role, ViewAs};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "campusgate-cli")]
#[command(about = "Campusgate CLI - Development tools for the route gates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint a development session token
    IssueToken {
        /// Email address carried in the token
        #[arg(short = 'e', long)]
        email: String,

        /// Role of the user (student, instructor, moderator, admin)
        #[arg(short = 'r', long)]
        role: Role,

        /// View-as override (current or a role name)
        #[arg(long, default_value = "current")]
        view_as: ViewAs,

        /// User id; a random one is generated when omitted
        #[arg(long)]
        user_id: Option<Uuid>,
    },
    /// Print the gate decision for a page as JSON
    Decide {
        /// Request path, optionally prefixed with a language segment
        #[arg(short = 'p', long)]
        path: String,

        /// Role of the visitor; anonymous when omitted
        #[arg(short = 'r', long)]
        role: Option<Role>,

        /// View-as override (current or a role name)
        #[arg(long, default_value = "current")]
        view_as: ViewAs,

        /// Language segment to prefix the path with
        #[arg(short = 'l', long)]
        language: Option<String>,

        /// Comma separated enabled features; the configured list when omitted
        #[arg(short = 'f', long)]
        features: Option<String>,

        /// Simulate session restoration still in flight
        #[arg(long)]
        auth_loading: bool,

        /// Simulate feature flags still loading
        #[arg(long)]
        flags_loading: bool,
    },
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::IssueToken {
            email,
            role,
            view_as,
            user_id,
        } => handle_issue_token(&email, role, view_as, user_id),
        Commands::Decide {
            path,
            role,
            view_as,
            language,
            features,
            auth_loading,
            flags_loading,
        } => handle_decide(
            &path,
            role,
            view_as,
            language,
            features,
            auth_loading,
            flags_loading,
        ),
    }
}

fn handle_issue_token(email: &str, role: Role, view_as: ViewAs, user_id: Option<Uuid>) {
    match issue_token(email, role, view_as, user_id, &JwtConfig::from_env()) {
        Ok(token) => println!("{}", token),
        Err(e) => {
            eprintln!("❌ Error issuing token: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_decide(
    path: &str,
    role: Option<Role>,
    view_as: ViewAs,
    language: Option<String>,
    features: Option<String>,
    auth_loading: bool,
    flags_loading: bool,
) {
    let path = match language {
        Some(language) => format!("/{}/{}", language, path.trim_start_matches('/')),
        None => path.to_string(),
    };

    let flags = if flags_loading {
        FeatureFlagState::loading()
    } else {
        let config = match features.as_deref() {
            Some(raw) => FeatureFlagsConfig::from_values(Some(raw), None),
            None => FeatureFlagsConfig::from_env(),
        };
        FeatureFlagState::resolved(config.enabled)
    };

    let auth = simulated_auth(role, view_as, auth_loading);
    let localization = Arc::new(LocalizationConfig::from_env());

    let report = match decide(&path, &auth, &flags, localization) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Failed to render decision: {}", e);
            std::process::exit(1);
        }
    }
}
