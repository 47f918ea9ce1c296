//! Handoff of the order message to an external messaging service.

use serde::Serialize;

use crate::CommerceError;

/// A messaging deep link carrying the order text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeepLink {
    pub url: String,
}

impl DeepLink {
    /// `https://wa.me/<number>?text=<percent-encoded text>`.
    pub fn whatsapp(number: &str, text: &str) -> Self {
        Self {
            url: format!("https://wa.me/{}?text={}", number, urlencoding::encode(text)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

/// Something that opens a deep link on the customer's behalf.
///
/// Success only means the link was handed over; nothing is read back.
pub trait OrderHandoff {
    fn deliver(&mut self, link: &DeepLink) -> Result<(), CommerceError>;
}

impl<F> OrderHandoff for F
where
    F: FnMut(&DeepLink) -> Result<(), CommerceError>,
{
    fn deliver(&mut self, link: &DeepLink) -> Result<(), CommerceError> {
        self(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_text() {
        let link = DeepLink::whatsapp("919182002644", "1. Mango x 2 = \u{20b9}300\nTotal");
        assert!(link.as_str().starts_with("https://wa.me/919182002644?text="));
        assert!(link.as_str().contains("1.%20Mango%20x%202"));
        assert!(link.as_str().contains("%0ATotal"));
        assert!(!link.as_str().contains(' '));
    }

    #[test]
    fn test_closure_handoff() {
        let mut opened = Vec::new();
        let mut handoff = |link: &DeepLink| -> Result<(), CommerceError> {
            opened.push(link.url.clone());
            Ok(())
        };
        handoff.deliver(&DeepLink::whatsapp("1", "hi")).unwrap();
        assert_eq!(opened, vec!["https://wa.me/1?text=hi"]);
    }
}
