//! This module defines the main functionality of Photovault's shared platform services.

pub mod module;
use crate::module::define;
use crate::module::job::DetectionJobRequest;
use crate::module::util::init::resource::init;
use crate::module::web::route::AppRoute;
use std::str::FromStr;

// The main function of Photovault
pub fn main() {
    // Prepare the resources by initializing the property struct
    let property = init();

    // Initialize the logging system with the data directory and the system name
    init_log(
        property.path.dir.data.as_str(),
        define::system::NAME,
        property.conf.system.log_level.as_str(),
    );
    log::info!("Starting Photovault...");

    // Report whether an operator configured a login page banner
    match &property.login_message {
        Some(msg) => log::info!("Login page banner: {}", msg),
        None => log::info!("No login page banner configured."),
    }

    // Dump the route table for diagnostics
    for route in AppRoute::ALL {
        log::debug!("Route {:?} -> {}", route, route.path());
    }

    // When given a payload file, decode it as a detection job request.
    // Execution of the job belongs to the external worker.
    if let Some(payload) = std::env::args().nth(1) {
        match std::fs::read_to_string(&payload) {
            Ok(raw) => match DetectionJobRequest::from_json(&raw) {
                Ok(req) => log::info!(
                    "Detection job for asset {} (resized file: {})",
                    req.id,
                    req.resize_path
                ),
                Err(e) => log::error!("Invalid detection job payload {}: {}", payload, e),
            },
            Err(e) => log::error!("Can't read job payload {}: {}", payload, e),
        }
    }
}

/// This function initializes the logger system using the log4rs crate.
///
/// # Arguments
/// * `dir` - A string slice that holds the directory where the log file will be stored
/// * `name` - A string slice that holds the name of the logger and the log file
/// * `level` - A string slice that holds the root log level from the configuration
///
fn init_log(dir: &str, name: &str, level: &str) {
    use crate::module::util::path::join;
    use log::LevelFilter;
    use log4rs::append::file::FileAppender;
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    // Fall back to Info when the configured level doesn't parse
    let level = LevelFilter::from_str(level).unwrap_or(LevelFilter::Info);

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h({d} - {l}: {m}{n})}")))
        .build(join(&[
            dir,
            define::path::LOG_DIR,
            &format!("{}.log", name),
        ]))
        .unwrap();

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .unwrap();
    log4rs::init_config(config).unwrap();
}
