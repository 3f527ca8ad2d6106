use std::{
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;

/// Per-client fixed-window request counter. All leaderboard traffic is
/// read-only, so the limit only guards against hot polling loops.
#[derive(Clone)]
pub struct RateLimiter {
    windows: Arc<DashMap<String, RequestWindow>>,
    requests_per_window: u32,
    window_duration: Duration,
}

#[derive(Debug)]
struct RequestWindow {
    started_at: Instant,
    request_count: u32,
}

impl RateLimiter {
    pub fn new(requests_per_second: u32) -> Self {
        Self {
            windows: Arc::new(DashMap::new()),
            requests_per_window: requests_per_second * 60,
            window_duration: Duration::from_secs(60),
        }
    }

    pub fn get_client_key(&self, addr: &SocketAddr) -> String {
        addr.ip().to_string()
    }

    pub fn check_rate_limit(&self, client_key: &str) -> bool {
        let now = Instant::now();

        let mut window = self
            .windows
            .entry(client_key.to_string())
            .or_insert(RequestWindow {
                started_at: now,
                request_count: 0,
            });

        if now.duration_since(window.started_at) >= self.window_duration {
            window.started_at = now;
            window.request_count = 0;
        }

        if window.request_count >= self.requests_per_window {
            return false;
        }

        window.request_count += 1;
        true
    }
}
