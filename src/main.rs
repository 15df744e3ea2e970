use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use globetrotter::cli::{
    handle_admin_command, handle_calendar_command, handle_community_command, handle_itinerary_command,
    handle_login_command, handle_profile_command, handle_register_command, handle_search_command,
    handle_trip_command,
};
use globetrotter::config::{GlobePaths, Settings};
use globetrotter::dataset::Dataset;
use globetrotter::services::MockAuthProvider;

#[derive(Parser)]
#[command(
    name = "globetrotter",
    version,
    about = "Plan trips from the terminal",
    long_about = "Globetrotter shows your trips on a month calendar, totals itinerary \
                  budgets day by day, and lets you browse cities, activities and \
                  community posts from a mock travel dataset."
)]
struct Cli {
    /// Dataset JSON file to use instead of the built-in data
    #[arg(long, global = true, env = "GLOBETROTTER_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the trip calendar for a month
    #[command(alias = "cal")]
    Calendar(globetrotter::cli::CalendarArgs),

    /// Trip listing and details
    #[command(subcommand)]
    Trips(globetrotter::cli::TripCommands),

    /// Itinerary totals and drafts
    #[command(subcommand)]
    Itinerary(globetrotter::cli::ItineraryCommands),

    /// Search cities and activities
    #[command(subcommand)]
    Search(globetrotter::cli::SearchCommands),

    /// Browse the community feed
    Community(globetrotter::cli::CommunityArgs),

    /// Sign in and show the account
    Login(globetrotter::cli::LoginArgs),

    /// Create an account
    Register(globetrotter::cli::RegisterArgs),

    /// Update your profile and list your trips
    Profile(globetrotter::cli::ProfileArgs),

    /// Admin dashboard (requires the admin account)
    Admin(globetrotter::cli::AdminArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GLOBETROTTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = GlobePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base = %paths.base_dir().display(), "loaded settings");

    let Some(command) = cli.command else {
        println!("Globetrotter - travel planning from the terminal");
        println!();
        println!("Run 'globetrotter --help' for usage information.");
        println!("Run 'globetrotter calendar' to see this month's trips.");
        return Ok(());
    };

    let load = || Dataset::resolve(cli.data.as_deref(), &settings, &paths);
    let provider_for = |data: &Dataset| {
        MockAuthProvider::from_settings(&settings).with_directory(data.users.clone())
    };

    match command {
        Commands::Calendar(args) => handle_calendar_command(&load()?, &settings, args)?,
        Commands::Trips(cmd) => handle_trip_command(&load()?, &settings, cmd)?,
        Commands::Itinerary(cmd) => handle_itinerary_command(&load()?, &settings, cmd)?,
        Commands::Search(cmd) => handle_search_command(&load()?, &settings, cmd)?,
        Commands::Community(args) => handle_community_command(&load()?, args)?,
        Commands::Login(args) => {
            let data = load()?;
            handle_login_command(&provider_for(&data), &settings, args).await?;
        }
        Commands::Register(args) => {
            let data = load()?;
            handle_register_command(&provider_for(&data), &settings, args).await?;
        }
        Commands::Profile(args) => {
            let data = load()?;
            handle_profile_command(&provider_for(&data), &data, &settings, args).await?;
        }
        Commands::Admin(args) => {
            let data = load()?;
            handle_admin_command(&provider_for(&data), &data, &settings, args).await?;
        }
        Commands::Config { init } => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            print_config(&paths, &settings, cli.data.as_deref());
        }
    }

    Ok(())
}

fn print_config(paths: &GlobePaths, settings: &Settings, data: Option<&std::path::Path>) {
    println!("Globetrotter Configuration");
    println!("==========================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());

    let dataset = data
        .map(|p| p.display().to_string())
        .or_else(|| settings.dataset_path.as_ref().map(|p| p.display().to_string()))
        .or_else(|| {
            let fallback = paths.dataset_file();
            fallback.exists().then(|| fallback.display().to_string())
        })
        .unwrap_or_else(|| "built-in".to_string());
    println!("Dataset:          {}", dataset);

    println!();
    println!("Settings:");
    println!("  Currency symbol:      {}", settings.currency_symbol);
    println!("  Date format:          {}", settings.date_format);
    println!(
        "  First day of week:    {}",
        if settings.first_day_of_week == 1 { "Monday" } else { "Sunday" }
    );
    println!("  Trips per day cell:   {}", settings.calendar_inline_trips);
    println!("  Admin e-mail:         {}", settings.admin_email);
}
