//! Feature flag names.
//!
//! Using these constants instead of string literals keeps the page table, the
//! configuration defaults and the tests in agreement.

/// Public course catalog
pub const COURSES: &str = "courses";
/// Enrollment flows
pub const ENROLLMENT: &str = "enrollment";
/// Instructor dashboard
pub const INSTRUCTOR_DASHBOARD: &str = "instructor_dashboard";
/// Admin dashboard
pub const ADMIN_DASHBOARD: &str = "admin_dashboard";
/// Moderation queue
pub const MODERATION: &str = "moderation";
/// Community forums
pub const COMMUNITY: &str = "community";
/// Certificates of completion
pub const CERTIFICATES: &str = "certificates";
/// Checkout and subscriptions
pub const PAYMENTS: &str = "payments";

/// Features enabled when no runtime source overrides the list.
///
/// `payments` stays off until a payment provider is configured.
pub const DEFAULT_ENABLED: &[&str] = &[
    COURSES,
    ENROLLMENT,
    INSTRUCTOR_DASHBOARD,
    ADMIN_DASHBOARD,
    MODERATION,
    COMMUNITY,
    CERTIFICATES,
];
