//! Sharing module - share links for social platforms.
//!
//! Only a page URL and a message go in; each platform's public share
//! endpoint comes out. Nothing is sent anywhere.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default product name used in share messages.
pub const DEFAULT_APP_NAME: &str = "DecisionMate";

/// Platforms offered on the share panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Facebook,
    Twitter,
    LinkedIn,
    WhatsApp,
    Email,
}

impl SharePlatform {
    /// Returns all platforms in panel order.
    pub fn all() -> &'static [SharePlatform] {
        &[
            SharePlatform::Facebook,
            SharePlatform::Twitter,
            SharePlatform::LinkedIn,
            SharePlatform::WhatsApp,
            SharePlatform::Email,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SharePlatform::Facebook => "Facebook",
            SharePlatform::Twitter => "Twitter",
            SharePlatform::LinkedIn => "LinkedIn",
            SharePlatform::WhatsApp => "WhatsApp",
            SharePlatform::Email => "Email",
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A ready-to-open share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    pub platform: SharePlatform,
    pub href: String,
}

impl ShareLink {
    /// Builds the share endpoint for one platform.
    pub fn build(platform: SharePlatform, url: &str, message: &str) -> Self {
        let u = urlencoding::encode(url);
        let m = urlencoding::encode(message);
        let href = match platform {
            SharePlatform::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={}&quote={}", u, m)
            }
            SharePlatform::Twitter => {
                format!("https://twitter.com/intent/tweet?url={}&text={}", u, m)
            }
            SharePlatform::LinkedIn => {
                format!("https://linkedin.com/shareArticle?mini=true&url={}&title={}", u, m)
            }
            SharePlatform::WhatsApp => {
                let text = format!("{} {}", message, url);
                format!("https://api.whatsapp.com/send?text={}", urlencoding::encode(&text))
            }
            SharePlatform::Email => format!("mailto:?subject={}&body={}", m, u),
        };
        Self { platform, href }
    }

    /// Builds links for every platform.
    pub fn build_all(url: &str, message: &str) -> Vec<ShareLink> {
        SharePlatform::all()
            .iter()
            .map(|platform| Self::build(*platform, url, message))
            .collect()
    }
}

/// The message posted alongside the link.
pub fn share_message(app_name: &str, choice: &str) -> String {
    format!("I made my decision using {}: {}", app_name, choice)
}
