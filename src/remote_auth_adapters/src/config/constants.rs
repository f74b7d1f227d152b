pub mod env {
    pub const ENV_PREFIX: &str = "REMOTE_AUTH";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_FILE: &str = "config/remote_auth";

pub mod defaults {
    pub const API_BASE_URL: &str = "http://localhost:5050/api";
    pub const LOGIN_PATH: &str = "/login";
    pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
}
