//! SendGrid v3 mail client
//!
//! Builds the `/v3/mail/send` JSON request with the spreadsheet base64-encoded
//! as an attachment and reports the transport status code back to the caller.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::Serialize;

use crate::core::MailConfig;

const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// MIME type for XLSX attachments
pub const ATTACHMENT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Fallback attachment name when the path has no file name
const DEFAULT_ATTACHMENT_NAME: &str = "tracks.xlsx";

#[derive(Serialize)]
struct MailAddress<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<MailAddress<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct MailAttachment {
    /// Base64-encoded file bytes
    content: String,
    filename: String,
    #[serde(rename = "type")]
    mime_type: &'static str,
    disposition: &'static str,
}

#[derive(Serialize)]
struct MailRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: MailAddress<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
    attachments: Vec<MailAttachment>,
}

/// Mask an API key for logging: first five characters, the rest starred
pub fn mask_api_key(key: &str) -> String {
    let total = key.chars().count();
    let visible: String = key.chars().take(5).collect();
    if total <= 5 {
        "*".repeat(total)
    } else {
        format!("{}{}", visible, "*".repeat(total - 5))
    }
}

/// Client for the SendGrid v3 mail API
pub struct SendGridClient {
    client: Client,
    api_key: String,
}

impl SendGridClient {
    /// Build a client from the mail config
    ///
    /// Fails when no API key is configured; the caller reports this to the
    /// user and blocks the submission.
    pub fn new(config: &MailConfig) -> Result<Self, String> {
        if !config.has_api_key() {
            return Err(
                "SendGrid API key not found. Please check your mail configuration.".to_string(),
            );
        }

        Ok(Self {
            client: Client::new(),
            api_key: config.api_key.trim().to_string(),
        })
    }

    /// Send the mail described by `config` with the file at `attachment_path`
    /// attached
    ///
    /// Returns the HTTP status code on success (SendGrid answers 202 when the
    /// message is queued). A non-2xx response is an error carrying the
    /// response body.
    pub async fn send_with_attachment(
        &self,
        config: &MailConfig,
        body: &str,
        attachment_path: &Path,
    ) -> Result<u16, String> {
        let file_data = std::fs::read(attachment_path).map_err(|e| {
            format!(
                "Failed to read attachment {}: {}",
                attachment_path.display(),
                e
            )
        })?;

        let filename = attachment_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_ATTACHMENT_NAME.to_string());

        let request = build_mail_request(config, body, &file_data, filename);

        log::debug!("Sending mail with API key {}", mask_api_key(&self.api_key));

        let response = self
            .client
            .post(SENDGRID_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        let status = response.status();
        if status.is_success() {
            log::info!("Email sent with status code: {}", status.as_u16());
            Ok(status.as_u16())
        } else {
            let details = response.text().await.unwrap_or_default();
            Err(format!("SendGrid returned {}: {}", status.as_u16(), details))
        }
    }
}

fn build_mail_request<'a>(
    config: &'a MailConfig,
    body: &'a str,
    file_data: &[u8],
    filename: String,
) -> MailRequest<'a> {
    MailRequest {
        personalizations: vec![Personalization {
            to: vec![MailAddress {
                email: &config.to_address,
            }],
        }],
        from: MailAddress {
            email: &config.from_address,
        },
        subject: &config.subject,
        content: vec![Content {
            content_type: "text/plain",
            value: body,
        }],
        attachments: vec![MailAttachment {
            content: BASE64.encode(file_data),
            filename,
            mime_type: ATTACHMENT_MIME_TYPE,
            disposition: "attachment",
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key_long() {
        assert_eq!(mask_api_key("SG.abcdefgh"), "SG.ab******");
    }

    #[test]
    fn test_mask_api_key_short() {
        assert_eq!(mask_api_key("abc"), "***");
        assert_eq!(mask_api_key(""), "");
    }

    #[test]
    fn test_client_requires_api_key() {
        let config = MailConfig::default();
        let err = SendGridClient::new(&config).err().unwrap();
        assert!(err.contains("API key"));
    }

    #[test]
    fn test_client_trims_api_key() {
        let config = MailConfig {
            api_key: "  SG.key  ".to_string(),
            ..MailConfig::default()
        };
        let client = SendGridClient::new(&config).unwrap();
        assert_eq!(client.api_key, "SG.key");
    }

    #[test]
    fn test_mail_request_shape() {
        let config = MailConfig {
            api_key: "SG.key".to_string(),
            ..MailConfig::default()
        };
        let file_data = b"spreadsheet bytes";
        let request = build_mail_request(
            &config,
            "Body text",
            file_data,
            "tracks_test.xlsx".to_string(),
        );

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["personalizations"][0]["to"][0]["email"],
            "nicolas.techer@warnerchappellpm.com"
        );
        assert_eq!(value["from"]["email"], "sendtowcpm@gmail.com");
        assert_eq!(value["subject"], "WCPM Track Information");
        assert_eq!(value["content"][0]["type"], "text/plain");
        assert_eq!(value["content"][0]["value"], "Body text");

        let attachment = &value["attachments"][0];
        assert_eq!(attachment["filename"], "tracks_test.xlsx");
        assert_eq!(attachment["type"], ATTACHMENT_MIME_TYPE);
        assert_eq!(attachment["disposition"], "attachment");

        // The content must decode back to the original file bytes
        let decoded = BASE64
            .decode(attachment["content"].as_str().unwrap())
            .unwrap();
        assert_eq!(decoded, file_data);
    }
}
