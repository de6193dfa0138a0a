use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use userhub_cli::admin::create_admin;
use userhub_cli::seeder::{self, SeedConfig};
use userhub_config::{PasswordConfig, ServerConfig};
use userhub_core::PasswordHasher;
use userhub_db::{PgPool, PgUserStore, init_db_pool};

#[derive(Parser)]
#[command(name = "userhub-cli")]
#[command(about = "userhub CLI - administrative tools for userhub", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an administrator account
    CreateAdmin {
        /// Display name of the admin
        #[arg(short = 'n', long)]
        full_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake user accounts
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "100")]
        users: usize,

        /// Share of users created INACTIVE (0.0 - 1.0)
        #[arg(long, default_value = "0.1")]
        inactive_ratio: f64,
    },
    /// Delete seeded user accounts
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("\nError: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pool = init_db_pool(&ServerConfig::from_env()).await?;

    match cli.command {
        Commands::CreateAdmin {
            full_name,
            email,
            password,
        } => handle_create_admin(pool, full_name, email, password).await,
        Commands::Seed {
            users,
            inactive_ratio,
        } => {
            let config = SeedConfig::new(users).with_inactive_ratio(inactive_ratio);
            seeder::seed_users(&pool, &config).await.map(|_| ())
        }
        Commands::ClearSeed => seeder::clear_seed(&pool).await.map(|_| ()),
    }
}

async fn handle_create_admin(
    pool: PgPool,
    full_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let full_name = match full_name {
        Some(name) => name,
        None => Input::new()
            .with_prompt("Full name")
            .interact_text()
            .context("Failed to read full name")?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let hasher = PasswordHasher::new(PasswordConfig::from_env().bcrypt_cost).map_err(|e| e.error)?;
    let store = PgUserStore::new(pool);

    let admin = create_admin(&store, &hasher, &full_name, &email, &password)
        .await
        .map_err(|e| e.error)?;

    println!("\nAdmin created successfully!");
    println!("   Id: {}", admin.id);
    println!("   Email: {}", admin.email);
    println!("   Name: {}", admin.full_name);

    Ok(())
}
