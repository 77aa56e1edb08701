//! SMTP delivery transport implementation

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use lettre::{
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    Message, SmtpTransport, Transport,
};
use tracing::info;

use crate::domain::communication::{
    composer::ComposedMessage,
    transport::{DeliveryError, DeliveryTransport},
};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP host
    #[clap(long, env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long, env = "SMTP_PORT")]
    pub port: u16,

    /// The SMTP username
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long, env = "SMTP_PASSWORD")]
    pub password: String,

    /// The default sender email address
    #[clap(long, env = "SMTP_SENDER", default_value = "from@example.com")]
    pub sender: String,

    /// Verify the TLS certificate
    #[clap(long, env = "SMTP_VERIFY_TLS", default_value = "true")]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long, env = "SMTP_STARTTLS", default_value = "true")]
    pub starttls: bool,
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build the SMTP transport from the configuration
    pub fn transport(&self) -> Result<SmtpTransport> {
        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        let relay = if self.config.starttls {
            SmtpTransport::starttls_relay(&self.config.host)?
        } else {
            SmtpTransport::relay(&self.config.host)?
        };

        Ok(relay
            .credentials(creds)
            .port(self.config.port)
            .tls(Tls::Opportunistic(
                TlsParameters::builder(self.config.host.to_string())
                    .dangerous_accept_invalid_certs(!self.config.verify_tls)
                    .build()?,
            ))
            .build())
    }
}

#[async_trait]
impl DeliveryTransport for SmtpMailer {
    async fn deliver(&self, message: &ComposedMessage) -> Result<(), DeliveryError> {
        let mut builder = Message::builder().subject(message.subject.clone());

        for from in &message.from {
            builder = builder.from(from.to_string().parse()?);
        }

        for to in &message.to {
            builder = builder.to(to.to_string().parse()?);
        }

        let email = builder.body(message.body.clone())?;

        info!(subject = %message.subject, "delivering composed message over smtp");

        match self.transport()?.send(&email) {
            Ok(_) => Ok(()),
            Err(e) => Err(DeliveryError::UnknownError(e.into())),
        }
    }
}
