//! Reminder email template

use gym_core::OutboundEmail;

pub const REMINDER_SUBJECT: &str = "Payment Reminder - Gym Fees Due";

/// Render the "fees due" email for `name`
pub fn render_payment_reminder(to: &str, name: &str, payment_link: &str) -> OutboundEmail {
    let name = escape_html(name);
    let link = escape_html(payment_link);

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: auto; padding: 20px; border: 1px solid #ddd; border-radius: 10px; border-top: 5px solid orange; background-color: #f9f9f9;">
  <h2 style="color: #333; text-align: center;">Hello {name},</h2>
  <p style="font-size: 16px; color: #555;">This is a reminder that your <strong>gym membership payment</strong> is due.</p>
  <p style="font-size: 16px; color: #555;">Please make your payment as soon as possible to continue enjoying our facilities.</p>
  <div style="text-align: center; margin-top: 20px;">
    <a href="{link}" style="background-color: #ff4500; color: #fff; padding: 10px 20px; text-decoration: none; border-radius: 5px; display: inline-block;">Pay Now</a>
  </div>
  <p style="font-size: 14px; color: #888; text-align: center; margin-top: 20px;">If you have already paid, please ignore this email.</p>
</div>"#
    );

    OutboundEmail {
        to: to.to_string(),
        subject: REMINDER_SUBJECT.to_string(),
        html,
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
