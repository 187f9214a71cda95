use anyhow::Result;
use tabshell::config::Config;
use tabshell::logger::{self, Logger};
use tabshell::ui;
use tabshell::ui::core::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init_file_logging(&config.logging)?;

    let app_logger = Logger::new();
    app_logger.log("Starting tabshell".to_string());

    let context = AppContext::new(config, app_logger);
    ui::run_app(context).await
}
