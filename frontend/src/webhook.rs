use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;

const BOT_USERNAME: &str = "Portfolio Contact Bot";
const EMBED_TITLE: &str = "New Contact Form Submission";
const EMBED_COLOR: u32 = 3447003;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("The contact form is not configured yet. Please reach out directly.")]
    NotConfigured,
    #[error("Failed to send message. Please try again or contact directly. ({0})")]
    Network(#[from] gloo_net::Error),
    #[error("Failed to send message (status {0}). Please try again or contact directly.")]
    Status(u16),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Every field has to carry something other than whitespace and the
    /// email needs a `local@domain` shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (label, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(label));
            }
        }
        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct WebhookPayload {
    username: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<&'static str>,
    embeds: Vec<Embed>,
}

#[derive(Serialize, Debug)]
struct Embed {
    title: &'static str,
    color: u32,
    fields: Vec<EmbedField>,
    timestamp: String,
}

#[derive(Serialize, Debug)]
struct EmbedField {
    name: &'static str,
    value: String,
    inline: bool,
}

impl WebhookPayload {
    pub fn new(form: &ContactForm, sent_at: DateTime<Utc>) -> Self {
        Self {
            username: BOT_USERNAME,
            avatar_url: config::get_webhook_avatar_url(),
            embeds: vec![Embed {
                title: EMBED_TITLE,
                color: EMBED_COLOR,
                fields: vec![
                    EmbedField {
                        name: "👤 Name",
                        value: form.name.trim().to_string(),
                        inline: true,
                    },
                    EmbedField {
                        name: "📧 Email",
                        value: form.email.trim().to_string(),
                        inline: true,
                    },
                    EmbedField {
                        name: "💬 Message",
                        value: form.message.trim().to_string(),
                        inline: false,
                    },
                ],
                timestamp: sent_at.to_rfc3339(),
            }],
        }
    }

    pub fn with_avatar_url(mut self, avatar_url: Option<&'static str>) -> Self {
        self.avatar_url = avatar_url;
        self
    }
}

/// Validates and posts the form. Nothing goes over the wire unless
/// validation passes.
pub async fn submit(form: &ContactForm) -> Result<(), ContactError> {
    form.validate()?;
    let url = config::get_webhook_url().ok_or(ContactError::NotConfigured)?;
    let payload = WebhookPayload::new(form, Utc::now());

    let response = Request::post(url).json(&payload)?.send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn empty_fields_are_rejected_before_dispatch() {
        let cases = [
            (ContactForm { name: String::new(), ..filled() }, "name"),
            (ContactForm { email: "   ".to_string(), ..filled() }, "email"),
            (ContactForm { message: "\n\t".to_string(), ..filled() }, "message"),
        ];
        for (form, missing) in cases {
            match form.validate() {
                Err(ContactError::MissingField(field)) => assert_eq!(field, missing),
                other => panic!("expected missing {missing}, got {other:?}"),
            }
        }
        assert!(matches!(ContactForm::default().validate(), Err(ContactError::MissingField("name"))));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "@example.com", "ada@", "a@b@c"] {
            let form = ContactForm { email: email.to_string(), ..filled() };
            assert!(matches!(form.validate(), Err(ContactError::InvalidEmail)), "{email}");
        }
    }

    #[test]
    fn payload_has_webhook_shape() {
        let sent_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let form = ContactForm { name: "  Ada ".to_string(), ..filled() };
        let value = serde_json::to_value(WebhookPayload::new(&form, sent_at)).unwrap();

        assert_eq!(value["username"], "Portfolio Contact Bot");
        let embed = &value["embeds"][0];
        assert_eq!(embed["title"], "New Contact Form Submission");
        assert_eq!(embed["color"], 3447003);
        assert_eq!(embed["timestamp"], "2025-03-01T12:30:00+00:00");
        assert_eq!(
            embed["fields"],
            json!([
                { "name": "👤 Name", "value": "Ada", "inline": true },
                { "name": "📧 Email", "value": "ada@example.com", "inline": true },
                { "name": "💬 Message", "value": "Hello there", "inline": false },
            ])
        );
    }

    #[test]
    fn avatar_is_sent_only_when_configured() {
        let sent_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();

        let bare = WebhookPayload::new(&filled(), sent_at).with_avatar_url(None);
        let value = serde_json::to_value(bare).unwrap();
        assert!(value.get("avatar_url").is_none());

        let url = "https://cdn.example.com/bot.png";
        let with_avatar = WebhookPayload::new(&filled(), sent_at).with_avatar_url(Some(url));
        assert_eq!(serde_json::to_value(with_avatar).unwrap()["avatar_url"], url);
    }

    #[test]
    fn errors_read_as_user_notices() {
        assert_eq!(ContactError::MissingField("email").to_string(), "Please fill in your email.");
        assert!(ContactError::Status(500).to_string().contains("status 500"));
    }
}
