// src/net.rs
// One shared blocking agent for all sheet fetches. Fire-once semantics:
// no retry, no backoff; a fixed global timeout keeps a dead endpoint from
// hanging a run forever.

use std::error::Error;
use std::sync::LazyLock;
use std::time::Duration;

use ureq::Agent;

const USER_AGENT: &str = "dz_scrape/0.3";

static AGENT: LazyLock<Agent> = LazyLock::new(|| {
    Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(15)))
        .user_agent(USER_AGENT)
        .build()
        .into()
});

/// HTTP GET, body as text. Non-2xx statuses surface as errors.
pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let mut res = AGENT.get(url).call()?;
    let body = res.body_mut().read_to_string()?;
    Ok(body)
}
