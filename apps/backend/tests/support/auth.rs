use std::time::{Duration, SystemTime};

use backend::auth::mint_access_token;
use backend::state::SecurityConfig;

pub const TEST_SECRET: &str = "taste_trackers_test_secret";

/// A token the test app accepts.
pub fn mint_test_token(email: &str) -> String {
    mint_access_token(email, SystemTime::now(), &SecurityConfig::new(TEST_SECRET))
        .expect("token should mint")
}

/// Signed with the right secret, but issued two hours ago.
pub fn mint_expired_token(email: &str) -> String {
    let issued = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
    mint_access_token(email, issued, &SecurityConfig::new(TEST_SECRET))
        .expect("token should mint")
}

/// Well-formed and unexpired, signed with some other secret.
pub fn mint_foreign_token(email: &str) -> String {
    mint_access_token(
        email,
        SystemTime::now(),
        &SecurityConfig::new("somebody_elses_secret"),
    )
    .expect("token should mint")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
