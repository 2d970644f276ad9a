use std::time::Duration;

use tracing::{error, info};
use wordiff::app::App;
use wordiff::engine::config::Config;
use wordiff::input::{self, parse_source, Source};
use wordiff::logging;
use wordiff::ui::TuiManager;

const USAGE: &str = "usage: wordiff <original> <modified>\n\
                     \n\
                     Each side is a file path, `@path`, or `@@` for the clipboard.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    logging::init(&config.log)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (original_source, modified_source) = match parse_args(&args) {
        Some(sources) => sources,
        None => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let original = input::load(&original_source).map_err(|e| {
        error!(source = %original_source, "failed to load original: {}", e);
        e
    })?;
    let modified = input::load(&modified_source).map_err(|e| {
        error!(source = %modified_source, "failed to load modified: {}", e);
        e
    })?;
    info!(original = %original_source, modified = %modified_source, "starting viewer");

    let mut app = App::new(original, modified, config.view.clone())
        .with_labels(original_source.to_string(), modified_source.to_string());
    app.compare();

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app, Duration::from_millis(config.view.tick_rate_ms))?;

    Ok(())
}

fn parse_args(args: &[String]) -> Option<(Source, Source)> {
    match args {
        [original, modified] => Some((parse_source(original)?, parse_source(modified)?)),
        _ => None,
    }
}
