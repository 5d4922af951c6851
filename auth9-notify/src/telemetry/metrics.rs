//! Notification metric definitions

use metrics::{counter, describe_counter};

pub const NOTIFICATIONS_BUILT_TOTAL: &str = "auth9_notifications_built_total";
pub const CLAIM_FETCH_FAILURES_TOTAL: &str = "auth9_notification_claim_fetch_failures_total";

/// Register metric descriptions and emit initial zero values so HELP/TYPE lines
/// appear before the first notification is built.
pub fn describe_metrics() {
    describe_counter!(
        NOTIFICATIONS_BUILT_TOTAL,
        "Notification assembly outcomes by result"
    );
    describe_counter!(
        CLAIM_FETCH_FAILURES_TOTAL,
        "User claim fetches that failed and degraded to an empty claim map"
    );

    counter!(NOTIFICATIONS_BUILT_TOTAL, "result" => "success").absolute(0);
    counter!(CLAIM_FETCH_FAILURES_TOTAL).absolute(0);
}

/// Record the outcome of one `NotificationService::build` call
pub fn record_build(result: &'static str) {
    counter!(NOTIFICATIONS_BUILT_TOTAL, "result" => result).increment(1);
}

pub fn record_claim_fetch_failure() {
    counter!(CLAIM_FETCH_FAILURES_TOTAL).increment(1);
}
