use chrono::{DateTime, Utc};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::models::ContactSubmissionCreate;

pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    notify_to: String,
}

impl Mailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP transport error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.user.clone(),
            notify_to: config.notify_to.clone(),
        })
    }

    /// Sends the operator notification for a new contact submission.
    /// Blocks the request until the SMTP round-trip completes or fails.
    pub async fn send_contact_notification(
        &self,
        contact: &ContactSubmissionCreate,
    ) -> Result<(), String> {
        let subject = format!("New Contact Form Submission - {}", contact.name);
        let body = notification_body(contact, Utc::now());
        self.send(&subject, &body).await
    }

    async fn send(&self, subject: &str, body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(self
                .notify_to
                .parse()
                .map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}

fn notification_body(contact: &ContactSubmissionCreate, sent_at: DateTime<Utc>) -> String {
    let company = if contact.company.is_empty() {
        "Not provided"
    } else {
        contact.company.as_str()
    };

    format!(
        "You have received a new contact form submission:\n\
         \n\
         Name: {}\n\
         Email: {}\n\
         Company: {}\n\
         Message:\n\
         {}\n\
         \n\
         Submitted at: {}\n",
        contact.name,
        contact.email,
        company,
        contact.message,
        sent_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
