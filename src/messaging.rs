//! Email and SMS dispatch.
//!
//! The server delivers the messages through the organization's configured
//! email or SMS provider. A call succeeds once the server has accepted the
//! message.

use crate::client::{Client, PostBody, Query};
use crate::error::SdkResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct EmailForm<'a> {
    title: &'a str,
    content: &'a str,
    sender: &'a str,
    receivers: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct SmsForm<'a> {
    content: &'a str,
    receivers: &'a [&'a str],
}

impl Client {
    /// Send an email through the organization's default email provider.
    pub async fn send_email(
        &self,
        title: &str,
        content: &str,
        sender: &str,
        receivers: &[&str],
    ) -> SdkResult<()> {
        self.send_email_by_provider(title, content, sender, "", receivers)
            .await
    }

    /// Send an email through the named provider. An empty name selects the
    /// default provider.
    pub async fn send_email_by_provider(
        &self,
        title: &str,
        content: &str,
        sender: &str,
        provider: &str,
        receivers: &[&str],
    ) -> SdkResult<()> {
        let form = EmailForm {
            title,
            content,
            sender,
            receivers,
        };
        self.do_post("send-email", &provider_query(provider), PostBody::json(&form)?)
            .await?;
        Ok(())
    }

    /// Send a text message through the organization's default SMS provider.
    pub async fn send_sms(&self, content: &str, receivers: &[&str]) -> SdkResult<()> {
        self.send_sms_by_provider(content, "", receivers).await
    }

    /// Send a text message through the named provider.
    pub async fn send_sms_by_provider(
        &self,
        content: &str,
        provider: &str,
        receivers: &[&str],
    ) -> SdkResult<()> {
        let form = SmsForm { content, receivers };
        self.do_post("send-sms", &provider_query(provider), PostBody::json(&form)?)
            .await?;
        Ok(())
    }
}

fn provider_query(provider: &str) -> Query {
    if provider.is_empty() {
        Query::new()
    } else {
        Query::new().param("provider", provider)
    }
}
