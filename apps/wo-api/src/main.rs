use clap::Parser;
use color_eyre::eyre::WrapErr;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = wo_api::Args::parse();
	let config = args.config.display().to_string();

	wo_api::run(args).await.wrap_err_with(|| format!("wo-api stopped (config: {config})."))
}
