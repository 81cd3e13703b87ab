//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Name of the folder (under the user's configuration directory) that holds the data files.
/// Feel free to override it when initing this library.
pub static DATA_DIR_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("zen-week".to_string())));
