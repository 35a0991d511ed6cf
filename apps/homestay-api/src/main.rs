use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = homestay_api::Args::parse();
	homestay_api::run(args).await
}
