//! This module is responsible for preparing the resources needed by the application, such as directories, configurations and the login banner.
//!

pub mod resource {
    use super::PhotovaultProperty;

    /// Initialize the application resources and return a PhotovaultProperty
    /// instance containing paths, configuration and the login banner.
    ///
    pub fn init() -> PhotovaultProperty {
        // Prepare the app data directory tree
        let paths = crate::module::util::path::dir::create_app_sub_dir();

        // Load the app configuration file
        let conf = crate::module::util::conf::toml::load(&paths.dir.data);

        // Resolve the login page banner from the environment. Read once:
        // the snapshot is immutable for the rest of the run.
        let login_message = crate::module::web::login::message();

        PhotovaultProperty {
            path: paths,
            conf,
            login_message,
        }
    }
}

/// This struct represents the properties of the app, such as paths and configurations.
///
#[derive(Debug, Clone)]
pub struct PhotovaultProperty {
    pub path: crate::module::util::path::PhotovaultPath, // The paths of the app resources
    pub conf: crate::module::util::conf::Config,         // The configurations of the app
    pub login_message: Option<String>,                   // The login page banner, if configured
}
