use std::{collections::HashSet, path::PathBuf, str::FromStr};

use anyhow::bail;
use clap::{Parser, Subcommand};

use wn_application::prelude as flows;
use wn_core::{
    entities::*,
    gateways::{notify::NotificationType, revalidate::RevalidationGateway},
    repositories::Pagination,
    usecases,
};
use wn_db_sqlite::Connections;
use wn_gateways::{
    email::{SendToJsonFile, Sendmail},
    notify::Notify,
    revalidate::{NoRevalidation, WebhookRevalidation},
};

use crate::cfg::Cfg;

const DEFAULT_EMAIL_FROM: &str = "noreply@worknook.app";

#[derive(Debug, Parser)]
#[command(
    name = "worknook",
    version,
    about = "Administrative tools for the WorkNook place directory"
)]
pub struct Args {
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new user account
    CreateUser {
        #[arg(long)]
        email: String,
        #[arg(long)]
        display_name: String,
        #[arg(long)]
        password: String,
    },
    /// Change the role of a user
    ChangeUserRole {
        /// E-mail of the acting account
        #[arg(long = "as", value_name = "EMAIL")]
        account: String,
        #[arg(long)]
        email: String,
        /// One of: guest, user, admin
        #[arg(long)]
        role: String,
    },
    /// List places with their current status
    ListPlaces {
        #[arg(long)]
        limit: Option<u64>,
    },
    /// List verification claims that await a decision
    PendingVerifications,
    /// Approve or reject a verification claim
    ModerateVerification {
        /// E-mail of the acting admin account
        #[arg(long = "as", value_name = "EMAIL")]
        account: String,
        #[arg(long)]
        id: String,
        #[arg(long, conflicts_with = "reject")]
        approve: bool,
        #[arg(long)]
        reject: bool,
        #[arg(long)]
        notes: Option<String>,
    },
}

fn parse_role(role: &str) -> anyhow::Result<Role> {
    Ok(match role.to_lowercase().as_str() {
        "guest" => Role::Guest,
        "user" => Role::User,
        "admin" => Role::Admin,
        _ => bail!("Unknown role: {role}"),
    })
}

fn notification_gateway(cfg: &Cfg) -> anyhow::Result<Notify> {
    let notify_on = HashSet::from([
        NotificationType::PlaceAdded,
        NotificationType::VerificationSubmitted,
        NotificationType::VerificationModerated,
        NotificationType::UserRegistered,
    ]);
    let moderation_inbox = cfg
        .moderation_inbox
        .as_deref()
        .map(EmailAddress::from_str)
        .transpose()?;
    let from = cfg
        .email_from
        .as_deref()
        .unwrap_or(DEFAULT_EMAIL_FROM)
        .parse::<EmailAddress>()?;
    Ok(match &cfg.email_json_dir {
        Some(dir) => Notify::new(SendToJsonFile::try_new(dir)?, notify_on, moderation_inbox),
        None => Notify::new(Sendmail::new(from), notify_on, moderation_inbox),
    })
}

fn revalidation_gateway(cfg: &Cfg) -> Box<dyn RevalidationGateway> {
    match &cfg.revalidation_webhook_url {
        Some(url) => Box::new(WebhookRevalidation::new(url.clone())),
        None => Box::new(NoRevalidation),
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = Cfg::load(args.config.as_deref())?;
    let db_url = args.db_url.unwrap_or_else(|| cfg.db_url.clone());

    let connections = Connections::init(&db_url, cfg.db_connection_pool_size)?;
    wn_db_sqlite::initialize_database(&connections.exclusive()?)?;
    wn_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    match args.command {
        Command::CreateUser {
            email,
            display_name,
            password,
        } => {
            let notify = notification_gateway(&cfg)?;
            let user = flows::register_user(
                &connections,
                &notify,
                usecases::NewUser {
                    email: email.parse::<EmailAddress>()?,
                    display_name,
                    password,
                },
            )?;
            println!("Created user {} ({})", user.email, user.id);
        }
        Command::ChangeUserRole {
            account,
            email,
            role,
        } => {
            let role = parse_role(&role)?;
            flows::change_user_role(
                &connections,
                &account.parse::<EmailAddress>()?,
                &email.parse::<EmailAddress>()?,
                role,
            )?;
            println!("Changed role of {email} to {role:?}");
        }
        Command::ListPlaces { limit } => {
            let db = connections.shared()?;
            let places = usecases::load_places(&db, &Pagination {
                offset: None,
                limit,
            })?;
            for (place, status) in places {
                println!("{}  {:?}  {}", place.id, status, place.title);
            }
        }
        Command::PendingVerifications => {
            let db = connections.shared()?;
            let entries = usecases::list_verifications(&db, None)?;
            for entry in entries
                .into_iter()
                .filter(|entry| entry.verification.status == PlaceStatus::Pending)
            {
                println!(
                    "{}  {}  {}  {}",
                    entry.verification.id,
                    entry.place_title,
                    entry.submitter_email,
                    entry.verification.proof_link
                );
            }
        }
        Command::ModerateVerification {
            account,
            id,
            approve,
            reject,
            notes,
        } => {
            let decision = match (approve, reject) {
                (true, false) => usecases::Decision::Approve,
                (false, true) => usecases::Decision::Reject,
                _ => bail!("Pass either --approve or --reject"),
            };
            let notify = notification_gateway(&cfg)?;
            let revalidate = revalidation_gateway(&cfg);
            let verification = flows::moderate_verification(
                &connections,
                &notify,
                &*revalidate,
                &account.parse::<EmailAddress>()?,
                &id,
                usecases::Moderation {
                    decision,
                    admin_notes: notes,
                },
            )?;
            println!(
                "Verification {} is now {:?}",
                verification.id, verification.status
            );
        }
    }
    Ok(())
}
