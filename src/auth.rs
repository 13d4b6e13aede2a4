use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration as StdDuration, Instant};

use chrono::{Duration, NaiveDateTime, Utc};
use dashmap::DashMap;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::request::{FromRequest, Outcome, Request};
use rocket::State;
use sha2::{Digest, Sha256};

const SESSION_COOKIE: &str = "etalase_session";

/// Inline error for a rejected login. The exact string is part of the
/// application's contract with its admin UI.
pub const LOGIN_FAILED: &str = "Login gagal";

// ── Password ────────────────────────────────────────────────────

pub fn hash_password(password: &str) -> Result<String, String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| e.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Check a submitted password against the configured hash. On mismatch the
/// caller gets the inline error message and nothing else changes.
pub fn verify_login(password: &str, stored_hash: &str) -> Result<(), &'static str> {
    if verify_password(password, stored_hash) {
        Ok(())
    } else {
        Err(LOGIN_FAILED)
    }
}

// ── Sessions ────────────────────────────────────────────────────

/// Process-wide session table: token → expiry. etalase keeps no local
/// database, so sessions live in memory and die with the process.
pub struct SessionStore {
    sessions: DashMap<String, NaiveDateTime>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            sessions: DashMap::new(),
        }
    }

    pub fn create(&self, expiry_hours: i64) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        let expires = Utc::now().naive_utc() + Duration::hours(expiry_hours.max(1));
        self.insert(&token, expires);
        token
    }

    pub fn insert(&self, token: &str, expires_at: NaiveDateTime) {
        self.sessions.insert(token.to_string(), expires_at);
    }

    pub fn validate(&self, token: &str) -> bool {
        match self.sessions.get(token) {
            Some(expires) => *expires > Utc::now().naive_utc(),
            None => false,
        }
    }

    pub fn destroy(&self, token: &str) {
        self.sessions.remove(token);
    }

    pub fn cleanup_expired(&self) -> usize {
        let now = Utc::now().naive_utc();
        let before = self.sessions.len();
        self.sessions.retain(|_, expires| *expires > now);
        before - self.sessions.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore::new()
    }
}

pub fn set_session_cookie(cookies: &CookieJar<'_>, token: &str) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_same_site(rocket::http::SameSite::Strict);
    cookie.set_path("/");
    cookies.add_private(cookie);
}

pub fn clear_session_cookie(cookies: &CookieJar<'_>) {
    cookies.remove_private(Cookie::from(SESSION_COOKIE));
}

pub fn session_token(cookies: &CookieJar<'_>) -> Option<String> {
    cookies
        .get_private(SESSION_COOKIE)
        .map(|c| c.value().to_string())
}

/// Guard that ensures the request carries a valid admin session.
/// Unauthenticated requests forward, where the login catch-all picks
/// them up and redirects.
pub struct AdminUser;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let sessions = match request.guard::<&State<Arc<SessionStore>>>().await {
            Outcome::Success(s) => s,
            _ => return Outcome::Forward(Status::Unauthorized),
        };

        let cookies = request.cookies();
        let token = match cookies.get_private(SESSION_COOKIE) {
            Some(c) => c.value().to_string(),
            None => return Outcome::Forward(Status::Unauthorized),
        };

        if sessions.validate(&token) {
            Outcome::Success(AdminUser)
        } else {
            cookies.remove_private(Cookie::from(SESSION_COOKIE));
            Outcome::Forward(Status::Unauthorized)
        }
    }
}

pub fn hash_ip(ip: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(ip.as_bytes());
    hex::encode(hasher.finalize())
}

// ── Login rate limiting ─────────────────────────────────────────

/// In-memory fixed-window rate limiter keyed by "login:<ip_hash>".
pub struct RateLimiter {
    entries: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        RateLimiter {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Record an attempt and return true if it is allowed (under the limit
    /// within `window`).
    pub fn check_and_record(&self, key: &str, max_attempts: u64, window: StdDuration) -> bool {
        let mut map = self.entries.lock().unwrap();
        let now = Instant::now();
        let cutoff = now - window;

        let attempts = map.entry(key.to_string()).or_default();
        attempts.retain(|t| *t > cutoff);

        if (attempts.len() as u64) < max_attempts {
            attempts.push(now);
            true
        } else {
            false
        }
    }

    /// Drop buckets with no attempts inside `max_age` (called by the sweeper).
    pub fn cleanup(&self, max_age: StdDuration) {
        let mut map = self.entries.lock().unwrap();
        let cutoff = Instant::now() - max_age;
        map.retain(|_, attempts| {
            attempts.retain(|t| *t > cutoff);
            !attempts.is_empty()
        });
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        RateLimiter::new()
    }
}
