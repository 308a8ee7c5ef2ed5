use anyhow::Result;
use log::error;
use std::{
    env,
    path::{Path, PathBuf},
};

pub struct Env {}

impl Env {
    pub const SYS_NAME: &'static str = "dbperf";
    pub const PLOTS_DIR_VAR: &'static str = "DBPERF_PLOTS_DIR";
    pub const VIEWER_VAR: &'static str = "DBPERF_VIEWER";

    /// Directory where rendered charts are written to. An explicit
    /// `out_dir` (from the command line) wins over `DBPERF_PLOTS_DIR`, which
    /// wins over `./plots`.
    pub fn plots_root(out_dir: Option<&Path>) -> Result<PathBuf> {
        let cwd = env::current_dir().map_err(|e| {
            let reason = format!("error getting current directory (error={e:?})");
            error!("{reason}");
            anyhow::anyhow!(reason)
        })?;

        Ok(Self::select_plots_root(
            out_dir,
            env::var(Self::PLOTS_DIR_VAR).ok().as_deref(),
            &cwd,
        ))
    }

    pub fn select_plots_root(out_dir: Option<&Path>, env_dir: Option<&str>, cwd: &Path) -> PathBuf {
        if let Some(dir) = out_dir {
            return dir.to_path_buf();
        }

        match env_dir {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => cwd.join("plots"),
        }
    }

    /// Program used to display a rendered chart.
    pub fn viewer() -> String {
        match env::var(Self::VIEWER_VAR) {
            Ok(viewer) if !viewer.is_empty() => viewer,
            _ => Self::default_viewer().to_string(),
        }
    }

    fn default_viewer() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_plots_root_priority() {
        let cwd = tempdir().unwrap();
        let from_cli = cwd.path().join("from-cli");

        assert_eq!(
            Env::select_plots_root(Some(&from_cli), Some("/from/env"), cwd.path()),
            from_cli
        );
        assert_eq!(
            Env::select_plots_root(None, Some("/from/env"), cwd.path()),
            PathBuf::from("/from/env")
        );
        assert_eq!(
            Env::select_plots_root(None, None, cwd.path()),
            cwd.path().join("plots")
        );
        // An empty variable counts as unset
        assert_eq!(
            Env::select_plots_root(None, Some(""), cwd.path()),
            cwd.path().join("plots")
        );
    }

    #[test]
    fn test_plots_root_prefers_out_dir() {
        let dir = tempdir().unwrap();
        assert_eq!(Env::plots_root(Some(dir.path())).unwrap(), dir.path());
    }
}
