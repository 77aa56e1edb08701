#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Composes a post notification email and delivers it over SMTP

use anyhow::Result;
use clap::Parser;
use post_notifier::{
    domain::{
        communication::{
            composer::{MessageComposer, MessageKind},
            email_addresses::EmailAddress,
            transport::DeliveryTransport,
        },
        posts::{FixtureProvider, PostFixtures},
    },
    infrastructure::email::smtp::{SmtpConfig, SmtpMailer},
};
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SmtpConfig,

    /// Name of the post fixture to notify about
    #[clap(long, env = "NOTIFY_FIXTURE", default_value = "one")]
    pub fixture: String,

    /// The recipient address
    #[clap(long, env = "NOTIFY_RECIPIENT")]
    pub recipient: String,

    /// Which notification to send: `create` or `update`
    #[clap(long, env = "NOTIFY_KIND", default_value = "create")]
    pub kind: String,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Failed to load environment: {}", e);

        return Err(e.into());
    }

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let kind = match args.kind.as_str() {
        "create" => MessageKind::Created,
        "update" => MessageKind::Updated,
        other => anyhow::bail!("unknown notification kind {other:?}"),
    };

    let sender = EmailAddress::new(&args.smtp.sender)?;
    let composer = MessageComposer::with_default_templates(sender);

    let fixtures = PostFixtures::with_defaults();
    let post = fixtures.fixture(&args.fixture)?;

    let message = composer.compose(kind, &post, &args.recipient)?;

    let mailer = SmtpMailer::new(args.smtp);
    mailer.deliver(&message).await?;

    info!(recipient = %args.recipient, "notification delivered");

    Ok(())
}
