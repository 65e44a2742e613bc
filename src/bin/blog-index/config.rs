use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use spdlog::debug;

use blog_index::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let mut candidates = vec![];

    if let Some(exe_dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(|p| p.to_path_buf())) {
        candidates.push(exe_dir.join(CFG_FILE_NAME));
    }
    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir.join(CFG_FILE_NAME));
    }
    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir.join("blog-index").join(CFG_FILE_NAME));
    }

    candidates.into_iter().find(|path| path.exists())
}

/// An explicit path has to exist. Otherwise a missing configuration is fine
/// as long as the command gets what it needs from its arguments.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Option<Config>> {
    let config_path = match cfg_path.or_else(get_config_path) {
        Some(path) => path,
        None => return Ok(None),
    };

    debug!("Reading config from {}", config_path.display());
    let config = read_config(&config_path)
        .with_context(|| format!("Could not load configuration {}", config_path.display()))?;

    Ok(Some(config))
}
