//! Command-line front end for the dashboard navigator.
//!
//! ```text
//! countyrisk-dashboard navigate <path>
//! countyrisk-dashboard login <username> <password> [redirect]
//! countyrisk-dashboard logout
//! countyrisk-dashboard whoami
//! ```

use anyhow::{Context, bail};
use serde_json::json;

use countyrisk_api::ApiConfig;
use countyrisk_auth::{Capability, FileSessionStore};
use countyrisk_dashboard::{Navigator, Router};

const USAGE: &str = "usage: countyrisk-dashboard <navigate <path> | login <username> <password> [redirect] | logout | whoami>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    countyrisk_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let config = ApiConfig::from_env().context("invalid API configuration")?;
    let store = FileSessionStore::open_default()?;
    tracing::debug!(session_file = %store.path().display(), api = %config.base_url, "starting");

    let mut navigator = Navigator::new(Router::with_default_routes()?, Box::new(store))?;

    let output = match args.as_slice() {
        ["navigate", path] => serde_json::to_value(navigator.navigate(path)?)?,
        ["login", username, password, rest @ ..] if rest.len() <= 1 => {
            let client = navigator.api_client(&config)?;
            let navigation = navigator
                .login(&client, username, password, rest.first().copied())
                .await?;
            serde_json::to_value(navigation)?
        }
        ["logout"] => {
            navigator.logout()?;
            json!({ "session": navigator.session() })
        }
        ["whoami"] => {
            let capabilities: Vec<&str> = Capability::ALL
                .iter()
                .filter(|cap| navigator.can(**cap))
                .map(|cap| cap.as_str())
                .collect();
            json!({ "session": navigator.session(), "capabilities": capabilities })
        }
        _ => bail!(USAGE),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
