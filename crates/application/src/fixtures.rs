//! Fixture payloads sent by the catalog.
//!
//! Emails that must be unique per run take a time suffix (`HHMMSS`).
//! Everything else is literal test data.

use alumni_probe_domain::alumni::{
    Donation, EventRegistration, Feedback, LoginUser, ProfileUpdate, RegisterUser,
};

/// Number of events the seeded backend is expected to list.
pub const EXPECTED_EVENT_COUNT: usize = 10;

/// Term used by the directory search case.
pub const SEARCH_TERM: &str = "test";

/// Phone value the backend must reject (missing the `(XXX) XXX-XXXX` shape).
pub const MALFORMED_PHONE: &str = "555-123-4567";

/// User registered by the registration case; its token becomes the session credential.
#[must_use]
pub fn session_user(suffix: &str) -> RegisterUser {
    RegisterUser {
        full_name: "Test User Alumni".to_string(),
        email: format!("test_user_{suffix}@test.com"),
        password: "TestPass123!".to_string(),
        passout_year: 2020,
        current_location: "San Francisco, CA".to_string(),
        current_company: "Tech Corp".to_string(),
        domain: "Software Engineering".to_string(),
        phone: "(555) 123-4567".to_string(),
    }
}

/// Throwaway user registered and logged in by the login case.
#[must_use]
pub fn login_user(suffix: &str) -> RegisterUser {
    RegisterUser {
        full_name: "Login Test User".to_string(),
        email: format!("login_test_{suffix}@test.com"),
        password: "LoginTest123!".to_string(),
        passout_year: 2019,
        current_location: "New York, NY".to_string(),
        current_company: "Login Corp".to_string(),
        domain: "Testing".to_string(),
        phone: "(555) 987-6543".to_string(),
    }
}

/// Login body for a registered user.
#[must_use]
pub fn login_for(user: &RegisterUser) -> LoginUser {
    LoginUser {
        email: user.email.clone(),
        password: user.password.clone(),
    }
}

/// Registration the backend must reject with 422.
#[must_use]
pub fn invalid_phone_user(suffix: &str) -> RegisterUser {
    RegisterUser {
        full_name: "Invalid Phone User".to_string(),
        email: format!("invalid_phone_{suffix}@test.com"),
        password: "TestPass123!".to_string(),
        passout_year: 2021,
        current_location: "Test City".to_string(),
        current_company: "Test Company".to_string(),
        domain: "Testing".to_string(),
        phone: MALFORMED_PHONE.to_string(),
    }
}

/// Partial profile update.
#[must_use]
pub fn profile_update() -> ProfileUpdate {
    ProfileUpdate {
        full_name: "Updated Test User".to_string(),
        current_location: "Updated Location".to_string(),
        phone: "(555) 999-8888".to_string(),
    }
}

/// Event attendee. The email is fixed and unrelated to the session user.
#[must_use]
pub fn event_registration() -> EventRegistration {
    EventRegistration {
        name: "Test Registration User".to_string(),
        email: "test_reg@test.com".to_string(),
        phone: "(555) 111-2222".to_string(),
        attend_dinner: true,
    }
}

/// Fixed donation.
#[must_use]
pub fn donation() -> Donation {
    Donation {
        name: "Test Donor".to_string(),
        email: "donor@test.com".to_string(),
        phone: "(555) 333-4444".to_string(),
        amount: 100.0,
        purpose: "Test Donation".to_string(),
        message: "This is a test donation".to_string(),
    }
}

/// Fixed feedback message.
#[must_use]
pub fn feedback() -> Feedback {
    Feedback {
        message: "This is a test feedback message for the alumni network platform.".to_string(),
    }
}
