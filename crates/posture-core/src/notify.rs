use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Billing events
// ---------------------------------------------------------------------------

/// Money as integer cents plus an ISO currency code. Never stored as floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Money {
    pub cents: i64,
    pub currency: String,
}

impl Money {
    pub fn usd(cents: i64) -> Self {
        Self {
            cents,
            currency: "usd".to_string(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cents <= 0 {
            return f.write_str("$0.00");
        }
        let whole = self.cents / 100;
        let frac = self.cents % 100;
        if self.currency.eq_ignore_ascii_case("usd") {
            write!(f, "${whole}.{frac:02}")
        } else {
            write!(f, "{whole}.{frac:02} {}", self.currency.to_uppercase())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingInterval {
    Monthly,
    Yearly,
}

impl BillingInterval {
    pub fn as_str(self) -> &'static str {
        match self {
            BillingInterval::Monthly => "Monthly",
            BillingInterval::Yearly => "Yearly",
        }
    }
}

/// Subscription lifecycle events worth announcing to the sales channel.
/// A closed mapping of upstream webhook event shapes, not a state machine:
/// each event renders independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BillingEvent {
    TrialStarted {
        amount: Money,
        interval: BillingInterval,
        subscription_id: String,
    },
    SubscriptionStarted {
        amount: Money,
        interval: BillingInterval,
        subscription_id: String,
    },
    TrialConverted {
        amount: Money,
        interval: BillingInterval,
        subscription_id: String,
    },
    CancellationScheduled {
        trialing: bool,
        amount: Money,
        interval: BillingInterval,
        ends_on: NaiveDate,
        subscription_id: String,
    },
    SubscriptionEnded {
        reason: Option<String>,
        subscription_id: String,
    },
}

/// Who the event is about, resolved upstream from the billing customer id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerContext {
    pub organization_name: String,
    pub owner_email: String,
    /// Billing dashboard URL for the customer; linked from the email when set.
    #[serde(default)]
    pub dashboard_url: Option<String>,
}

impl CustomerContext {
    /// Email rendered as a Slack link to the billing dashboard when a URL is
    /// available, plain otherwise.
    fn linked_email(&self) -> String {
        match &self.dashboard_url {
            Some(url) => format!("<{url}|{}>", self.owner_email),
            None => self.owner_email.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationField {
    pub label: String,
    pub value: String,
}

/// A compact, renderer-agnostic notification: title, attachment color, and
/// label/value pairs. Delivery belongs to the webhook collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub color: String,
    pub fields: Vec<NotificationField>,
}

fn field(label: impl Into<String>, value: impl Into<String>) -> NotificationField {
    NotificationField {
        label: label.into(),
        value: value.into(),
    }
}

/// Map a billing event to its sales notification.
pub fn notification_for(event: &BillingEvent, customer: &CustomerContext) -> Notification {
    let org_field = field(&customer.organization_name, customer.linked_email());

    match event {
        BillingEvent::TrialStarted {
            amount,
            interval,
            subscription_id,
        } => Notification {
            title: "🎉 New Trial Started".to_string(),
            color: "#0084FF".to_string(),
            fields: vec![
                org_field,
                field(amount.to_string(), interval.as_str()),
                field("Subscription ID", subscription_id),
            ],
        },
        BillingEvent::SubscriptionStarted {
            amount,
            interval,
            subscription_id,
        } => Notification {
            title: "💰 New Subscription".to_string(),
            color: "#36C537".to_string(),
            fields: vec![
                org_field,
                field(amount.to_string(), interval.as_str()),
                field("Subscription ID", subscription_id),
            ],
        },
        BillingEvent::TrialConverted {
            amount,
            interval,
            subscription_id,
        } => Notification {
            title: "🚀 Trial Converted to Paid".to_string(),
            color: "#9F40E6".to_string(),
            fields: vec![
                org_field,
                field(amount.to_string(), interval.as_str()),
                field("Subscription ID", subscription_id),
            ],
        },
        BillingEvent::CancellationScheduled {
            trialing,
            amount,
            interval,
            ends_on,
            subscription_id,
        } => {
            let title = if *trialing {
                "❌ Trial Cancelled"
            } else {
                "❌ Subscription Cancelled"
            };
            Notification {
                title: title.to_string(),
                color: "#DC3545".to_string(),
                fields: vec![
                    org_field,
                    field(
                        format!("{amount} {}", interval.as_str()),
                        format!("Ends {}", ends_on.format("%-m/%-d/%Y")),
                    ),
                    field("Subscription ID", subscription_id),
                ],
            }
        }
        BillingEvent::SubscriptionEnded {
            reason,
            subscription_id,
        } => Notification {
            title: "🚫 Subscription Ended".to_string(),
            color: "#8B0000".to_string(),
            fields: vec![
                org_field,
                field("Reason", reason.as_deref().unwrap_or("Cancelled")),
                field("Subscription ID", subscription_id),
            ],
        },
    }
}

/// Render a notification as a Slack webhook payload: a single colored
/// attachment with one compact mrkdwn section.
pub fn slack_payload(notification: &Notification) -> serde_json::Value {
    let fields = notification
        .fields
        .iter()
        .map(|f| format!("*{}:* {}", f.label, f.value))
        .collect::<Vec<_>>()
        .join(" • ");
    let text = format!("{}\n{fields}", notification.title);

    serde_json::json!({
        "attachments": [{
            "color": notification.color,
            "blocks": [{
                "type": "section",
                "text": { "type": "mrkdwn", "text": text }
            }]
        }]
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerContext {
        CustomerContext {
            organization_name: "Acme Corp".to_string(),
            owner_email: "owner@acme.test".to_string(),
            dashboard_url: Some("https://billing.example/cus_123".to_string()),
        }
    }

    #[test]
    fn money_formats_usd_and_other_currencies() {
        assert_eq!(Money::usd(12900).to_string(), "$129.00");
        assert_eq!(Money::usd(505).to_string(), "$5.05");
        assert_eq!(
            Money {
                cents: 9900,
                currency: "eur".to_string()
            }
            .to_string(),
            "99.00 EUR"
        );
    }

    #[test]
    fn zero_or_missing_amount_renders_zero_dollars() {
        assert_eq!(Money::usd(0).to_string(), "$0.00");
        assert_eq!(Money::usd(-100).to_string(), "$0.00");
    }

    #[test]
    fn trial_started_notification() {
        let event = BillingEvent::TrialStarted {
            amount: Money::usd(9900),
            interval: BillingInterval::Monthly,
            subscription_id: "sub_1".to_string(),
        };
        let n = notification_for(&event, &customer());
        assert_eq!(n.title, "🎉 New Trial Started");
        assert_eq!(n.color, "#0084FF");
        assert_eq!(n.fields[0].label, "Acme Corp");
        assert_eq!(
            n.fields[0].value,
            "<https://billing.example/cus_123|owner@acme.test>"
        );
        assert_eq!(n.fields[1].label, "$99.00");
        assert_eq!(n.fields[1].value, "Monthly");
        assert_eq!(n.fields[2].value, "sub_1");
    }

    #[test]
    fn email_is_plain_without_dashboard_url() {
        let mut c = customer();
        c.dashboard_url = None;
        let event = BillingEvent::SubscriptionEnded {
            reason: None,
            subscription_id: "sub_2".to_string(),
        };
        let n = notification_for(&event, &c);
        assert_eq!(n.fields[0].value, "owner@acme.test");
    }

    #[test]
    fn cancellation_title_depends_on_trial_state() {
        let base = |trialing| BillingEvent::CancellationScheduled {
            trialing,
            amount: Money::usd(49900),
            interval: BillingInterval::Yearly,
            ends_on: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
            subscription_id: "sub_3".to_string(),
        };
        assert_eq!(
            notification_for(&base(true), &customer()).title,
            "❌ Trial Cancelled"
        );
        let n = notification_for(&base(false), &customer());
        assert_eq!(n.title, "❌ Subscription Cancelled");
        assert_eq!(n.fields[1].label, "$499.00 Yearly");
        assert_eq!(n.fields[1].value, "Ends 9/30/2026");
    }

    #[test]
    fn ended_notification_defaults_reason() {
        let event = BillingEvent::SubscriptionEnded {
            reason: None,
            subscription_id: "sub_4".to_string(),
        };
        let n = notification_for(&event, &customer());
        assert_eq!(n.fields[1].value, "Cancelled");

        let event = BillingEvent::SubscriptionEnded {
            reason: Some("payment_failed".to_string()),
            subscription_id: "sub_4".to_string(),
        };
        let n = notification_for(&event, &customer());
        assert_eq!(n.fields[1].value, "payment_failed");
    }

    #[test]
    fn slack_payload_is_single_colored_attachment() {
        let event = BillingEvent::SubscriptionStarted {
            amount: Money::usd(9900),
            interval: BillingInterval::Monthly,
            subscription_id: "sub_5".to_string(),
        };
        let payload = slack_payload(&notification_for(&event, &customer()));
        assert_eq!(payload["attachments"][0]["color"], "#36C537");
        let text = payload["attachments"][0]["blocks"][0]["text"]["text"]
            .as_str()
            .unwrap();
        assert!(text.starts_with("💰 New Subscription\n"));
        assert!(text.contains("*$99.00:* Monthly"));
        assert!(text.contains(" • "));
    }

    #[test]
    fn billing_event_wire_roundtrip() {
        let event = BillingEvent::TrialConverted {
            amount: Money::usd(12900),
            interval: BillingInterval::Yearly,
            subscription_id: "sub_6".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"trial_converted\""));
        let parsed: BillingEvent = serde_json::from_str(&json).unwrap();
        match parsed {
            BillingEvent::TrialConverted { interval, .. } => {
                assert_eq!(interval, BillingInterval::Yearly)
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
