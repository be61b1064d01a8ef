use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use streamdata::config::{
	ProviderConfig, DEFAULT_SESSION_COOKIE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use streamdata::provider::Provider;
use tokio::io::{stdin, stdout, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "streamdata")]
#[command(about = "Print the stream qualities of every translation of a film or series page")]
struct Cli {
	/// Page URL; read from stdin when omitted
	url: Option<String>,

	/// Request timeout in seconds
	#[arg(long, env = "STREAMDATA_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
	timeout: u64,

	#[arg(long, env = "STREAMDATA_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
	user_agent: String,

	/// Session cookie sent with the player-data request
	#[arg(long, env = "STREAMDATA_COOKIE", default_value = DEFAULT_SESSION_COOKIE)]
	cookie: String,
}

async fn read_url() -> std::io::Result<String> {
	let mut out = stdout();
	out.write_all(b"Enter url: ").await?;
	out.flush().await?;
	let mut input_url = String::new();
	BufReader::new(stdin()).read_line(&mut input_url).await?;
	Ok(input_url.trim().to_owned())
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
	let url = match cli.url {
		Some(url) => url,
		None => read_url().await?,
	};
	let config = ProviderConfig::default()
		.with_timeout(Duration::from_secs(cli.timeout))
		.with_user_agent(cli.user_agent)
		.with_session_cookie(cli.cookie);

	let provider = Provider::new(url, config)?;
	let data = provider.get_stream_data().await?;

	println!("\nType: {}", provider.category());
	println!("ID: {}", provider.stream_id());
	println!("{}", serde_json::to_string_pretty(&data)?);
	Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "info".into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	match run(Cli::parse()).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			println!("Error: {}", e);
			ExitCode::FAILURE
		}
	}
}
