use studyhall_client_sdk::client::{client::Client, config::ClientConfig};

use crate::env_var::EnvVar;

use super::error::CliError;

pub fn get_client() -> Result<Client, CliError> {
    let env = envy::from_env::<EnvVar>()?;
    let mut config = ClientConfig::new(&env.base_url);
    if let Some(name) = env.csrf_cookie_name {
        config.csrf_cookie_name = name;
    }
    if let Some(name) = env.csrf_header_name {
        config.csrf_header_name = name;
    }
    config.session_cookie = env.session_cookie;
    let client = Client::new(config)?;
    Ok(client)
}
