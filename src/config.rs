use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the hosted structured store. When unset, the service runs
    /// entirely against the local blob store.
    pub remote_store_url: Option<String>,
    pub remote_store_token: Option<String>,
    pub local_store_path: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            remote_store_url: env::var("REMOTE_STORE_URL").ok(),
            remote_store_token: env::var("REMOTE_STORE_TOKEN").ok(),
            local_store_path: env::var("LOCAL_STORE_PATH").unwrap_or_else(|_| "./guestlist.json".to_string()),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "jesusandia124".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "andia124".to_string()),
        }
    }
}
