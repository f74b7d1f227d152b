use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;
use remote_auth::{
    AccountModel, Authentication, AuthenticationError, AuthenticationParams, RemoteAuthSetting,
    Secret, init_tracing, make_remote_authentication,
};

/// Exit code reported when the server rejects the credentials
const INVALID_CREDENTIALS_EXIT_CODE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "auth-login")]
#[command(about = "Authenticate against a remote login endpoint and print the access token")]
struct Cli {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "AUTH_LOGIN_PASSWORD", hide_env_values = true)]
    password: String,
}

impl Cli {
    fn into_params(self) -> AuthenticationParams {
        AuthenticationParams::new(self.email, Secret::new(self.password))
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    // .env must be loaded before clap reads AUTH_LOGIN_PASSWORD
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();

    let settings = RemoteAuthSetting::load()?;
    let authentication = make_remote_authentication(&settings)?;

    tracing::info!(url = authentication.url(), "Authenticating");

    let exit_code = report(authentication.auth(cli.into_params()).await)?;
    Ok(exit_code)
}

/// Print the outcome of a login attempt and pick the process exit code.
///
/// Rejected credentials are an expected outcome and get their own exit
/// code; every other failure is handed back to `main`.
fn report<E>(
    result: Result<AccountModel, AuthenticationError<E>>,
) -> Result<ExitCode, AuthenticationError<E>> {
    match result {
        Ok(account) => {
            println!("{}", account.access_token);
            Ok(ExitCode::SUCCESS)
        }
        Err(AuthenticationError::InvalidCredentials(e)) => {
            eprintln!("error: {e}");
            Ok(ExitCode::from(INVALID_CREDENTIALS_EXIT_CODE))
        }
        Err(e) => Err(e),
    }
}
