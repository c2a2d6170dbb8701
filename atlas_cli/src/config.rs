use std::path::PathBuf;

use atlas_google::google_maps_client::{GoogleMapsClient, GoogleMapsClientParams};
use atlas_showcase::{key_store::FileKeyStore, notifier::TracingNotifier, showcase::Showcase};

const KEY_STORE_FOLDER_ENV_VAR: &str = "ATLAS_KEY_STORE_FOLDER";
const GOOGLE_MAPS_BASE_URL_ENV_VAR: &str = "GOOGLE_MAPS_BASE_URL";

pub type CliShowcase = Showcase<GoogleMapsClient, FileKeyStore, TracingNotifier>;

/// Folder given on the command line, then `ATLAS_KEY_STORE_FOLDER`, then the
/// current directory.
fn key_store_folder(folder: Option<PathBuf>) -> PathBuf {
    folder
        .or_else(|| std::env::var(KEY_STORE_FOLDER_ENV_VAR).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn google_maps_params() -> GoogleMapsClientParams {
    match std::env::var(GOOGLE_MAPS_BASE_URL_ENV_VAR) {
        Ok(base_url) => GoogleMapsClientParams { base_url },
        Err(_) => GoogleMapsClientParams::default(),
    }
}

pub fn build_showcase(key_store: Option<PathBuf>) -> anyhow::Result<CliShowcase> {
    let key_store = FileKeyStore::new(key_store_folder(key_store))?;

    let mut showcase = Showcase::new(
        GoogleMapsClient::new(google_maps_params()),
        key_store,
        TracingNotifier,
    );
    showcase.connect();

    Ok(showcase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_store_folder_prefers_argument() {
        assert_eq!(
            key_store_folder(Some(PathBuf::from("/tmp/atlas"))),
            PathBuf::from("/tmp/atlas")
        );
    }
}
