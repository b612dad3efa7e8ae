// ABOUTME: Main entry point for the cairn CLI application
// ABOUTME: Parses arguments and hands off to the application runner

use anyhow::Result;
use cairn::cli::App;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cairn::cli::Args::parse_args();
    let mut app = App::from_args(&args)?;

    app.run(args).await?;

    Ok(())
}
