use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    // AudD recognition API. A missing key is reported per-request rather
    // than failing startup, so the health endpoints stay reachable.
    pub audd_api_key: Option<String>,
    #[serde(default = "default_audd_api_url")]
    pub audd_api_url: String,

    // Browser origin allowed to call the API
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_audd_api_url() -> String {
    "https://api.audd.io/".to_string()
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
