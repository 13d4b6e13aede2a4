use rocket::fairing::{Fairing, Info, Kind};
use rocket::tokio;
use rocket::{Orbit, Rocket};
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{RateLimiter, SessionStore};

const SWEEP_INTERVAL_MINUTES: u64 = 30;

/// Prunes expired sessions and stale rate-limit buckets on a timer.
pub struct SessionSweeper;

#[rocket::async_trait]
impl Fairing for SessionSweeper {
    fn info(&self) -> Info {
        Info {
            name: "Session Sweeper",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let sessions = rocket
            .state::<Arc<SessionStore>>()
            .expect("SessionStore not found in managed state")
            .clone();
        let limiter = rocket
            .state::<Arc<RateLimiter>>()
            .expect("RateLimiter not found in managed state")
            .clone();

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(SWEEP_INTERVAL_MINUTES * 60)).await;
                let removed = sessions.cleanup_expired();
                if removed > 0 {
                    log::info!("[task] Removed {} expired sessions", removed);
                }
                limiter.cleanup(Duration::from_secs(60 * 60));
            }
        });

        log::info!("[task] Session sweeper started");
    }
}
