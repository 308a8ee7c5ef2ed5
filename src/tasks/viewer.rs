use crate::env::Env;
use anyhow::Result;
use log::{debug, error};
use std::{
    path::Path,
    process::{Command, Stdio},
};

pub struct Viewer {}

impl Viewer {
    /// Hand a rendered chart to the system viewer. We do not wait for the
    /// viewer to exit.
    pub fn open(plot_path: &Path) -> Result<()> {
        Self::open_with(&Env::viewer(), plot_path)
    }

    pub fn open_with(viewer: &str, plot_path: &Path) -> Result<()> {
        if !plot_path.is_file() {
            let reason = format!("plot file does not exist (path={})", plot_path.display());
            error!("{reason}");
            anyhow::bail!(reason);
        }

        debug!("opening {} with {viewer}", plot_path.display());
        Command::new(viewer)
            .arg(plot_path)
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                let reason = format!("error spawning viewer (viewer={viewer}, error={e:?})");
                error!("{reason}");
                anyhow::anyhow!(reason)
            })?;

        Ok(())
    }
}
