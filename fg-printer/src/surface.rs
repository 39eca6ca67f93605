//! Print surface acquisition
//!
//! A surface is acquired per print action and consumed by loading one
//! document into it; the document's embedded directive drives the actual
//! print/close sequence. Acquisition is the one step that can fail in a
//! way the operator must resolve, so it is an explicit two-step contract
//! instead of being buried inside dispatch.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PrintError, PrintResult};

/// Trait for print surface providers
///
/// One `acquire` call per print action; providers never reuse surfaces.
#[allow(async_fn_in_trait)]
pub trait SurfaceProvider {
    type Surface: PrintSurface;

    /// Acquire a fresh print-capable surface
    ///
    /// Fails with [`PrintError::Surface`] when the host environment
    /// refuses to hand one out.
    async fn acquire(&self) -> PrintResult<Self::Surface>;
}

/// Trait for print surfaces
#[allow(async_fn_in_trait)]
pub trait PrintSurface {
    /// Load a complete, self-contained document into the surface
    ///
    /// Returns once the document is handed over; the embedded print
    /// directive takes it from there. No completion signal exists.
    async fn render(&mut self, document: &str) -> PrintResult<()>;
}

/// File-backed surface provider
///
/// Acquires a temporary `.html` file per print action and leaves it on
/// disk for the host print pipeline (browser or OS handler) to pick up.
#[derive(Debug, Clone, Default)]
pub struct FileSurfaceProvider {
    dir: Option<PathBuf>,
}

impl FileSurfaceProvider {
    /// Create a provider using the system temp directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider writing surfaces into a specific directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }
}

impl SurfaceProvider for FileSurfaceProvider {
    type Surface = FileSurface;

    async fn acquire(&self) -> PrintResult<FileSurface> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("fg-label-").suffix(".html");

        let file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| PrintError::Surface(format!("cannot create surface file: {}", e)))?;

        // The document outlives this process; hand ownership to the
        // host print pipeline instead of deleting on drop.
        let path = file
            .into_temp_path()
            .keep()
            .map_err(|e| PrintError::Surface(format!("cannot persist surface file: {}", e)))?;

        info!(path = %path.display(), "acquired file print surface");
        Ok(FileSurface { path })
    }
}

/// A print surface backed by a file on disk
#[derive(Debug)]
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    /// Location of the surface file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintSurface for FileSurface {
    async fn render(&mut self, document: &str) -> PrintResult<()> {
        tokio::fs::write(&self.path, document).await?;
        info!(
            path = %self.path.display(),
            bytes = document.len(),
            "document handed to print surface"
        );
        Ok(())
    }
}
