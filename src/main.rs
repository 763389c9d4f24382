//! Portal CLI
//!
//! Command-line client for the school portal:
//! - Log in, register and log out
//! - Show the dashboard for the signed-in role
//! - Create courses (teachers) and approve users (admins)

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portal::config::{generate_default_config, Config, LoggingConfig};
use portal::render::{render_screen, screen_json};
use portal::{EntityId, FileTokenStore, PortalApi, PortalClient, Role, Shell, ShellState};

#[derive(Parser)]
#[command(name = "portal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "School portal client")]
#[command(long_about = "Sign in to the school portal and work with your student, teacher or admin dashboard.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Roles offered at registration
#[derive(Clone, Copy, ValueEnum)]
pub enum RegisterRole {
    Student,
    Teacher,
}

impl From<RegisterRole> for Role {
    fn from(role: RegisterRole) -> Self {
        match role {
            RegisterRole::Student => Role::Student,
            RegisterRole::Teacher => Role::Teacher,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and show your dashboard
    Login { email: String, password: String },

    /// Create an account and show your dashboard
    Register {
        name: String,
        email: String,
        password: String,
        #[arg(long, value_enum, default_value = "student")]
        role: RegisterRole,
    },

    /// Forget the saved session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Show the dashboard for your role
    Dashboard,

    /// Course management (teachers)
    Course {
        #[command(subcommand)]
        action: CourseCommand,
    },

    /// Approve or revoke a user (admins)
    Approve {
        /// User id as listed on the admin dashboard
        user_id: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CourseCommand {
    /// Create a course
    Create { title: String, subject: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.backend_url {
        config.backend.url = url.clone();
    }

    init_tracing(&config.logging);
    tracing::debug!(backend = %config.backend.url, "Portal CLI v{}", env!("CARGO_PKG_VERSION"));

    let api: Arc<dyn PortalApi> = Arc::new(
        PortalClient::new(config.backend.client_config()).context("creating HTTP client")?,
    );
    let store = FileTokenStore::new(config.session.dir_path());

    match cli.command {
        Commands::Login { email, password } => {
            let mut shell = Shell::new(api, store);
            if let Err(e) = shell.login(&email, &password).await {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            print_shell(&shell, cli.format)?;
        }

        Commands::Register {
            name,
            email,
            password,
            role,
        } => {
            let mut shell = Shell::new(api, store);
            if let Err(e) = shell.register(&name, &email, &password, role.into()).await {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            print_shell(&shell, cli.format)?;
        }

        Commands::Logout => {
            Shell::new(api, store).logout();
            println!("Logged out");
        }

        Commands::Whoami => {
            let shell = Shell::start(api, store).await;
            match (shell.state(), shell.session().profile()) {
                (ShellState::Authenticated(_), Some(profile)) => match cli.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(profile)?),
                    OutputFormat::Table => {
                        println!("{} <{}> ({})", profile.name, profile.email, profile.role);
                        if !profile.approved {
                            println!("Account not yet approved");
                        }
                    }
                },
                (ShellState::ProfileUnavailable, _) => {
                    println!("Signed in, but your profile could not be loaded");
                }
                _ => {
                    println!("Not logged in");
                    std::process::exit(1);
                }
            }
        }

        Commands::Dashboard => {
            let shell = Shell::start(api, store).await;
            print_shell(&shell, cli.format)?;
        }

        Commands::Course {
            action: CourseCommand::Create { title, subject },
        } => {
            let mut shell = Shell::start(api, store).await;
            match shell.create_course(&title, &subject).await {
                Ok(course) => {
                    println!("Created course {} ({}) [{}]", course.title, course.subject, course.id);
                }
                Err(e) => {
                    eprintln!("Failed to create course: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Approve { user_id } => {
            let user_id: EntityId = user_id.parse()?;
            let mut shell = Shell::start(api, store).await;
            match shell.toggle_approval(&user_id).await {
                Ok(user) => {
                    let verb = if user.approved { "Approved" } else { "Revoked" };
                    println!("{} {} <{}>", verb, user.name, user.email);
                }
                Err(e) => {
                    eprintln!("Failed to update approval: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { .. } => unreachable!("handled before config is loaded"),
    }

    Ok(())
}

fn print_shell<S: portal::TokenStore>(shell: &Shell<S>, format: OutputFormat) -> anyhow::Result<()> {
    let screen = shell.screen();
    match format {
        OutputFormat::Table => print!("{}", render_screen(&screen)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&screen_json(&screen))?),
    }
    Ok(())
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

/// Logs go to stderr so command output stays parseable
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("portal={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
