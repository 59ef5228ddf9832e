#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const DEFAULT_DEVICE_ID: &str = "ESP32_REAL_01";
const DEFAULT_READING_INTERVAL_MS: u32 = 3_000;
const DEFAULT_HISTORY_INTERVAL_MS: u32 = 5_000;

/// Runtime settings, read from `window.ENV` of the host page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prepended to every API path; empty means same origin
    pub api_url: String,
    pub device_id: String,
    pub reading_interval_ms: u32,
    pub history_interval_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            device_id: DEFAULT_DEVICE_ID.to_string(),
            reading_interval_ms: DEFAULT_READING_INTERVAL_MS,
            history_interval_ms: DEFAULT_HISTORY_INTERVAL_MS,
        }
    }
}

impl DashboardConfig {
    /// Load from `window.ENV`, falling back to defaults for anything missing
    pub fn load() -> Self {
        Self::from_lookup(env_value)
    }

    /// Build a config from a key lookup. Blank values and unusable
    /// intervals fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            api_url: get("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            device_id: get("DEVICE_ID").unwrap_or(defaults.device_id),
            reading_interval_ms: get("READING_INTERVAL_MS")
                .and_then(|v| parse_interval(&v))
                .unwrap_or(defaults.reading_interval_ms),
            history_interval_ms: get("HISTORY_INTERVAL_MS")
                .and_then(|v| parse_interval(&v))
                .unwrap_or(defaults.history_interval_ms),
        }
    }
}

fn parse_interval(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|ms| *ms > 0)
}

/// Read `window.ENV[key]` as a string (numbers are stringified)
fn env_value(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
        if let Some(s) = value.as_string() {
            return Some(s);
        }
        return value.as_f64().map(|n| format!("{}", n as u64));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_lookup(lookup(&[]));

        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api_url, "");
        assert_eq!(config.device_id, "ESP32_REAL_01");
        assert_eq!(config.reading_interval_ms, 3000);
        assert_eq!(config.history_interval_ms, 5000);
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup(&[
            ("API_URL", "http://192.168.1.50:5000/"),
            ("DEVICE_ID", "ESP32_SIMULATOR"),
            ("READING_INTERVAL_MS", "1000"),
            ("HISTORY_INTERVAL_MS", "10000"),
        ]));

        assert_eq!(config.api_url, "http://192.168.1.50:5000");
        assert_eq!(config.device_id, "ESP32_SIMULATOR");
        assert_eq!(config.reading_interval_ms, 1000);
        assert_eq!(config.history_interval_ms, 10000);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = DashboardConfig::from_lookup(lookup(&[
            ("DEVICE_ID", "   "),
            ("READING_INTERVAL_MS", "0"),
            ("HISTORY_INTERVAL_MS", "soon"),
        ]));

        assert_eq!(config.device_id, "ESP32_REAL_01");
        assert_eq!(config.reading_interval_ms, 3000);
        assert_eq!(config.history_interval_ms, 5000);
    }
}
