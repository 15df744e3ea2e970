//! Account and admin commands
//!
//! Sessions live for a single command: each handler signs in, does its work
//! and logs out again.

use clap::Args;

use crate::config::Settings;
use crate::dataset::Dataset;
use crate::display::{format_admin_stats, format_profile};
use crate::error::{GlobeError, GlobeResult};
use crate::models::{ProfileUpdate, Registration, Trip};
use crate::services::admin::{compute_stats, require_admin};
use crate::services::trips::{preplanned_trips, previous_trips};
use crate::services::{AuthProvider, Session};

/// Credentials for commands that sign in
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account e-mail address
    #[arg(short, long)]
    pub email: String,
    /// Password; prompted for when omitted
    #[arg(short, long, env = "GLOBETROTTER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Details for a new account
#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[command(flatten)]
    pub credentials: LoginArgs,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
}

/// Profile fields to change; omitted ones stay as they are
#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub credentials: LoginArgs,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    /// Free-text notes about yourself
    #[arg(long)]
    pub about: Option<String>,
    /// Trips per list
    #[arg(short, long, default_value = "3")]
    pub limit: usize,
}

/// Admin dashboard arguments
#[derive(Args, Debug)]
pub struct AdminArgs {
    #[command(flatten)]
    pub credentials: LoginArgs,
    /// Entries per ranking
    #[arg(short, long, default_value = "5")]
    pub limit: usize,
}

/// Handle the login command
pub async fn handle_login_command(
    provider: &dyn AuthProvider,
    settings: &Settings,
    args: LoginArgs,
) -> GlobeResult<()> {
    let session = sign_in(provider, args).await?;
    print_session(&session, settings);
    session.logout();
    Ok(())
}

/// Handle the register command
pub async fn handle_register_command(
    provider: &dyn AuthProvider,
    settings: &Settings,
    args: RegisterArgs,
) -> GlobeResult<()> {
    let password = password_for(&args.credentials)?;
    let registration = Registration {
        email: args.credentials.email,
        password,
        first_name: args.first_name,
        last_name: args.last_name,
        phone: args.phone,
        city: args.city,
        country: args.country,
        additional_info: None,
    };

    let session = provider.register(registration).await?;
    println!("Account created.");
    print_session(&session, settings);
    session.logout();
    Ok(())
}

/// Handle the profile command: apply the given changes, then show the
/// account with its preplanned and previous trips
pub async fn handle_profile_command(
    provider: &dyn AuthProvider,
    data: &Dataset,
    settings: &Settings,
    args: ProfileArgs,
) -> GlobeResult<()> {
    let session = sign_in(provider, args.credentials).await?;
    let update = ProfileUpdate {
        first_name: args.first_name,
        last_name: args.last_name,
        phone: args.phone,
        city: args.city,
        country: args.country,
        additional_info: args.about,
    };
    let session = provider.update_profile(session, update).await?;

    let owned: Vec<Trip> = data
        .trips
        .iter()
        .filter(|t| t.owner == session.user().id)
        .cloned()
        .collect();
    print!(
        "{}",
        format_profile(
            session.user(),
            &preplanned_trips(&owned, args.limit),
            &previous_trips(&owned, args.limit),
            &settings.date_format,
        )
    );
    session.logout();
    Ok(())
}

/// Handle the admin command
pub async fn handle_admin_command(
    provider: &dyn AuthProvider,
    data: &Dataset,
    settings: &Settings,
    args: AdminArgs,
) -> GlobeResult<()> {
    let session = sign_in(provider, args.credentials).await?;
    require_admin(&session, settings)?;

    print!("{}", format_admin_stats(&compute_stats(data, args.limit)));
    session.logout();
    Ok(())
}

async fn sign_in(provider: &dyn AuthProvider, args: LoginArgs) -> GlobeResult<Session> {
    let password = password_for(&args)?;
    provider.login(&args.email, &password).await
}

fn password_for(args: &LoginArgs) -> GlobeResult<String> {
    match &args.password {
        Some(password) => Ok(password.clone()),
        None => rpassword::prompt_password("Password: ")
            .map_err(|e| GlobeError::Io(format!("Failed to read password: {}", e))),
    }
}

fn print_session(session: &Session, settings: &Settings) {
    let user = session.user();
    let role = if session.is_admin(&settings.admin_email) {
        "admin"
    } else {
        "traveler"
    };
    println!("Signed in as {} <{}> ({})", user.full_name(), user.email, role);
    if let (Some(city), Some(country)) = (&user.city, &user.country) {
        println!("  {}, {}", city, country);
    }
}
