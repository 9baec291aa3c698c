//! frontdesk driver: collect a visitor name, fetch the upstream payload,
//! persist it, and notify the administrator. One pass, best effort.
//!
//! Components return typed errors; this binary owns the printing policy.
//! Every failure after the initial name check is reported on stdout and the
//! run continues, so the process always exits with status 0.

use fd_core::config::{DbConfig, SmtpConfig};
use fd_services::notify::{Email, Mailer, SmtpMailer};
use fd_services::{fetch, intake, persist};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Recipient of the per-run notification.
const ADMIN_RECIPIENT: &str = "admin@example.com";

/// Subject line of the per-run notification.
const NOTIFY_SUBJECT: &str = "User Input";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    run().await;
}

async fn run() {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    // A rejected (or unreadable) name ends the run; nothing downstream fires.
    let name = match intake::collect_name(&mut reader, &mut stdout) {
        Ok(name) => name,
        Err(intake::IntakeError::Invalid(_)) => {
            println!("Invalid input. Only letters and spaces (max 50 characters) are allowed.");
            return;
        }
        Err(intake::IntakeError::Io(e)) => {
            println!("Error reading input: {}", e);
            return;
        }
    };
    debug!(name = %name, "Collected visitor name");

    // A failed fetch is reported and replaced by an absent payload; the
    // persister rejects that internally and the run keeps going.
    let payload = match fetch::fetch_json(fetch::DATA_URL).await {
        Ok(value) => Some(value),
        Err(e) => {
            println!("Error fetching data: {}", e);
            None
        }
    };

    let db_config = DbConfig::from_env();
    match persist::save_record(&db_config, payload.as_ref()).await {
        Ok(()) => println!("Data successfully saved to the database."),
        Err(e) => println!("{}", e),
    }

    let mailer = SmtpMailer::new(SmtpConfig::from_env());
    notify_admin(&mailer, name).await;
}

/// Send the per-run notification. Fires regardless of the fetch and persist
/// outcomes; failure is reported, never propagated.
async fn notify_admin(mailer: &dyn Mailer, name: String) {
    let email = Email {
        to: ADMIN_RECIPIENT.to_string(),
        subject: NOTIFY_SUBJECT.to_string(),
        text: name,
    };
    match mailer.send(&email).await {
        Ok(()) => println!("Email sent successfully."),
        Err(e) => println!("Error sending email: {}", e),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
