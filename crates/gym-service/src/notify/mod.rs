//! Payment reminder rendering and delivery
//!
//! [`HttpMailer`] posts rendered emails to a JSON mail relay; without a relay
//! configured, [`LogDispatcher`] writes them to the log instead.

mod http;
mod log;
mod template;

use std::sync::Arc;

use gym_common::MailConfig;
use gym_core::ReminderDispatcher;

pub use http::HttpMailer;
pub use log::LogDispatcher;
pub use template::{render_payment_reminder, REMINDER_SUBJECT};

/// Pick the dispatcher for the configured mail settings
pub fn dispatcher_from_config(config: &MailConfig) -> Arc<dyn ReminderDispatcher> {
    match &config.relay_url {
        Some(url) => {
            tracing::info!(relay = %url, "Payment reminders go through the mail relay");
            Arc::new(HttpMailer::new(
                url.clone(),
                config.relay_token.clone(),
                config.from.clone(),
            ))
        }
        None => {
            tracing::warn!("MAIL_RELAY_URL not set, payment reminders will only be logged");
            Arc::new(LogDispatcher::default())
        }
    }
}
