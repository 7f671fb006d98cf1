//! SPICE kernel import utilities.

use reqwest::blocking::Client;
use solar_ephem::kernels::KernelDescriptor;
use std::fs::{self, File};
use std::io::{Write, copy};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of attempting to download a kernel.
#[derive(Debug, PartialEq, Eq)]
pub enum KernelStatus {
    Downloaded(PathBuf),
    AlreadyPresent(PathBuf),
}

impl KernelStatus {
    /// Short marker printed before the path.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Downloaded(_) => "downloaded",
            Self::AlreadyPresent(_) => "skip",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Downloaded(path) | Self::AlreadyPresent(path) => path,
        }
    }
}

/// Download every kernel in `descriptors` into its catalog location.
pub fn download_kernels(
    descriptors: &[KernelDescriptor],
) -> Result<Vec<KernelStatus>, ImportError> {
    let client = Client::builder().build()?;
    let mut statuses = Vec::new();

    for descriptor in descriptors {
        let dest = descriptor.local_path();
        if let Some(status) = existing(&dest) {
            statuses.push(status);
            continue;
        }
        info!(kernel = descriptor.filename, url = descriptor.url, "downloading kernel");
        download_kernel(&client, descriptor, &dest)?;
        statuses.push(KernelStatus::Downloaded(dest));
    }

    Ok(statuses)
}

fn existing(dest: &Path) -> Option<KernelStatus> {
    dest.exists()
        .then(|| KernelStatus::AlreadyPresent(dest.to_path_buf()))
}

fn download_kernel(
    client: &Client,
    descriptor: &KernelDescriptor,
    dest: &Path,
) -> Result<(), ImportError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    // Partial downloads stay in a `.part` file until the copy finishes.
    let partial = dest.with_extension("part");
    let mut response = client.get(descriptor.url).send()?.error_for_status()?;
    let mut file = File::create(&partial)?;
    copy(&mut response, &mut file)?;
    file.flush()?;
    fs::rename(&partial, dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_files_are_not_downloaded_again() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("naif0012.tls");
        assert_eq!(existing(&path), None);
        std::fs::write(&path, b"KPL/LSK").unwrap();
        let status = existing(&path).expect("file was just written");
        assert_eq!(status, KernelStatus::AlreadyPresent(path.clone()));
        assert_eq!(status.tag(), "skip");
        assert_eq!(status.path(), path.as_path());
    }
}
