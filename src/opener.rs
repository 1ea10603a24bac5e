use std::process;
use anyhow::Result;

pub trait UrlOpener {
    /// hand one URL to the platform's default handler
    fn open(&self, url: &str) -> Result<()>;
}

/// opens URLs through the platform launcher
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            process::Command::new("open").arg(url).spawn()?;
        }

        #[cfg(target_os = "linux")]
        {
            process::Command::new("xdg-open").arg(url).spawn()?;
        }

        #[cfg(target_os = "windows")]
        {
            process::Command::new("explorer").arg(url).spawn()?;
        }

        Ok(())
    }
}
