use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trailing slashes are dropped so endpoint paths can always start with `/`.
pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// First non-blank candidate wins, then the compiled-in default.
pub fn resolve_base_url<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|value| normalize_base_url(&value))
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

fn build_time_base_url() -> Option<String> {
    option_env!("HRMS_API_URL").map(str::to_string)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::Context;

    /// Reads `window.__HRMS_ENV = { API_URL: "..." }` when the host page provides it.
    pub fn from_window_env() -> Option<String> {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &"__HRMS_ENV".into()).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        ["API_URL", "api_url"].iter().find_map(|key| {
            js_sys::Reflect::get(&env, &(*key).into())
                .ok()
                .and_then(|value| value.as_string())
        })
    }

    pub async fn from_config_json() -> Option<String> {
        match fetch_config_json().await {
            Ok(cfg) => cfg.api_base_url,
            Err(err) => {
                log::debug!("config.json not used: {:#}", err);
                None
            }
        }
    }

    async fn fetch_config_json() -> anyhow::Result<RuntimeConfig> {
        let url = absolute_config_url().context("window location unavailable")?;
        let response = reqwest::get(&url)
            .await
            .with_context(|| format!("GET {}", url))?;
        if !response.status().is_success() {
            anyhow::bail!("GET {} returned {}", url, response.status());
        }
        response
            .json::<RuntimeConfig>()
            .await
            .context("invalid config.json")
    }

    fn absolute_config_url() -> Option<String> {
        let href = web_sys::window()?.location().href().ok()?;
        let base = href.rsplit_once('/').map(|(dir, _)| dir).unwrap_or(&href);
        Some(format!("{}/config.json", base))
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let from_window = browser::from_window_env();
    let from_file = if from_window.is_some() {
        None
    } else {
        browser::from_config_json().await
    };
    let resolved = resolve_base_url([from_window, from_file, build_time_base_url()]);
    log::info!("API base URL: {}", resolved);
    cache_base_url(resolved)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let from_env = std::env::var("HRMS_API_URL").ok();
    cache_base_url(resolve_base_url([from_env, build_time_base_url()]))
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
