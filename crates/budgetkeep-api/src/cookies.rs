//! Cookie transport for the token pair.

use axum_extra::extract::cookie::{Cookie, CookieJar};

use budgetkeep_auth::token::TokenPair;
use budgetkeep_core::config::CookieConfig;

/// Reads the access token from the request cookies.
pub fn access_token<'a>(jar: &'a CookieJar, config: &CookieConfig) -> Option<&'a str> {
    jar.get(&config.access_name).map(Cookie::value)
}

/// Adds both tokens of `pair` to the jar.
pub fn with_token_pair(jar: CookieJar, pair: &TokenPair, config: &CookieConfig) -> CookieJar {
    jar.add(build(config, &config.access_name, &pair.access_token))
        .add(build(config, &config.refresh_name, &pair.refresh_token))
}

fn build(config: &CookieConfig, name: &str, value: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), value.to_string()))
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .max_age(time::Duration::seconds(config.max_age_seconds))
        .build()
}
