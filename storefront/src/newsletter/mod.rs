//! Newsletter subscriber registry
//!
//! Session-only list of sign-ups; nothing here is persisted.

use crate::utils::csv;
use crate::utils::validation::validate_email;
use chrono::{SecondsFormat, Utc};
use shared::util::snowflake_id;
use shared::{AppError, ErrorCode, Subscriber};
use thiserror::Error;

/// CSV header of [`SubscriberRegistry::export_csv`]
pub const SUBSCRIBERS_CSV_HEADER: &str = "ID,Email,Date Subscribed";

/// Addresses registered in development builds
const SAMPLE_SUBSCRIBERS: [&str; 2] = ["sample1@example.com", "sample2@example.com"];

#[derive(Error, Debug)]
pub enum NewsletterError {
    #[error("This email is already subscribed to our newsletter.")]
    DuplicateSubscriber,

    #[error(transparent)]
    InvalidEmail(#[from] AppError),
}

impl NewsletterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            NewsletterError::DuplicateSubscriber => ErrorCode::DuplicateSubscriber,
            NewsletterError::InvalidEmail(e) => e.code,
        }
    }
}

#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    subscribers: Vec<Subscriber>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an address
    ///
    /// Surrounding whitespace is ignored; duplicates are compared
    /// case-insensitively.
    pub fn add_subscriber(&mut self, email: &str) -> Result<Subscriber, NewsletterError> {
        let email = email.trim();
        validate_email(email)?;

        if self
            .subscribers
            .iter()
            .any(|s| s.email.eq_ignore_ascii_case(email))
        {
            return Err(NewsletterError::DuplicateSubscriber);
        }

        let subscriber = Subscriber {
            id: snowflake_id().to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        tracing::info!(subscriber_id = %subscriber.id, "New subscriber added");
        self.subscribers.push(subscriber.clone());
        Ok(subscriber)
    }

    pub fn subscribers(&self) -> Vec<Subscriber> {
        self.subscribers.clone()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn export_csv(&self) -> String {
        csv::document(
            SUBSCRIBERS_CSV_HEADER,
            self.subscribers.iter().map(|s| {
                format!(
                    "{},{},{}",
                    s.id,
                    s.email,
                    s.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
                )
            }),
        )
    }

    /// Register the development sample addresses
    pub fn seed_samples(&mut self) {
        for email in SAMPLE_SUBSCRIBERS {
            if let Err(e) = self.add_subscriber(email) {
                tracing::debug!(email, error = %e, "Sample subscriber skipped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_list() {
        let mut registry = SubscriberRegistry::new();
        let sub = registry.add_subscriber("  ana@example.com ").unwrap();

        assert_eq!(sub.email, "ana@example.com");
        assert!(!sub.id.is_empty());
        assert_eq!(registry.subscribers(), vec![sub]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = SubscriberRegistry::new();
        registry.add_subscriber("ana@example.com").unwrap();

        let err = registry.add_subscriber("ANA@example.com").unwrap_err();
        assert!(matches!(err, NewsletterError::DuplicateSubscriber));
        assert_eq!(err.code(), ErrorCode::DuplicateSubscriber);
        assert_eq!(
            err.to_string(),
            "This email is already subscribed to our newsletter."
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut registry = SubscriberRegistry::new();
        let err = registry.add_subscriber("not-an-email").unwrap_err();
        match err {
            NewsletterError::InvalidEmail(e) => assert_eq!(e.code, ErrorCode::InvalidEmail),
            other => panic!("unexpected error: {other}"),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_seed_samples_is_repeatable() {
        let mut registry = SubscriberRegistry::new();
        registry.seed_samples();
        registry.seed_samples();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_export_csv() {
        let mut registry = SubscriberRegistry::new();
        assert_eq!(registry.export_csv(), SUBSCRIBERS_CSV_HEADER);

        let sub = registry.add_subscriber("ana@example.com").unwrap();
        let csv = registry.export_csv();
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();

        assert_eq!(fields[0], sub.id);
        assert_eq!(fields[1], "ana@example.com");
        assert!(fields[2].ends_with('Z'));
        let parsed = chrono::DateTime::parse_from_rfc3339(fields[2]).unwrap();
        assert_eq!(parsed.timestamp_millis(), sub.created_at.timestamp_millis());
    }
}
