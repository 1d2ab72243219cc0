use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::PathBuf,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod site;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	macro_rules! dotenv_parse{
		($key:expr, $default:expr, $type:ident) => {
			dotenv::var($key).ok()
				.and_then(|v| v.parse::<$type>().ok())
				.unwrap_or($default)
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
		.init();

	let backend_port = dotenv_parse!("BACKEND_PORT", 8080, u16);
	let bind_addr = dotenv_parse!("BIND_ADDR", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr);
	let static_dir = dotenv::var("STATIC_DIR")
		.ok()
		.filter(|d| !d.is_empty())
		.map_or_else(|| PathBuf::from("frontend/dist"), PathBuf::from);

	// everything except the calendar file comes out of here, so there's no point starting without it
	if !static_dir.join("index.html").is_file() {
		error!(
			"STATIC_DIR ({}) has no index.html in it. Build the frontend with `trunk build --release` \
			or point STATIC_DIR at an existing build, then retry.",
			static_dir.display()
		);
		return Ok(());
	}

	info!("Serving the frontend from {}", static_dir.display());

	let app = site::router(&static_dir);
	let addr = SocketAddr::new(bind_addr, backend_port);
	let listener = tokio::net::TcpListener::bind(addr).await?;

	info!(%addr, "Serving axum...");

	axum::serve(listener, app).await?;

	Ok(())
}
