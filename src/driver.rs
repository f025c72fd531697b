//! Favicon job table
//!
//! The set of files is fixed: four letter icons (three sizes plus the
//! canonical `favicon.png`) followed by three logo icons. Jobs run in order
//! and the first failure stops the run.

use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::font::FontSet;
use crate::icon::IconVariant;

/// Directory the favicons are written to
pub const OUTPUT_DIR: &str = "/var/www/editaliza/public";

/// One file to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconJob {
    pub variant: IconVariant,
    pub size: u32,
    pub file_name: &'static str,
}

impl IconJob {
    const fn new(variant: IconVariant, size: u32, file_name: &'static str) -> Self {
        Self {
            variant,
            size,
            file_name,
        }
    }
}

pub const JOBS: [IconJob; 7] = [
    IconJob::new(IconVariant::Letter, 16, "favicon-16x16.png"),
    IconJob::new(IconVariant::Letter, 32, "favicon-32x32.png"),
    IconJob::new(IconVariant::Letter, 48, "favicon-48x48.png"),
    IconJob::new(IconVariant::Letter, 32, "favicon.png"),
    IconJob::new(IconVariant::Logo, 16, "favicon-icon-16x16.png"),
    IconJob::new(IconVariant::Logo, 32, "favicon-icon-32x32.png"),
    IconJob::new(IconVariant::Logo, 48, "favicon-icon-48x48.png"),
];

/// Render every job into `out_dir`, returning the written paths in order
pub fn generate_all(out_dir: &Path, fonts: &FontSet) -> Result<Vec<PathBuf>, RenderError> {
    let mut written = Vec::with_capacity(JOBS.len());

    for job in &JOBS {
        let path = out_dir.join(job.file_name);
        tracing::debug!("Rendering {:?} icon at {}px", job.variant, job.size);
        job.variant.render_to_file(job.size, &path, fonts)?;
        written.push(path);
    }

    tracing::info!("Generated {} favicon files", written.len());
    Ok(written)
}

/// Closing report printed after a successful run
pub fn summary() -> String {
    [
        "",
        "Favicon files created successfully!",
        "Main favicon: favicon.png (32x32)",
        "Additional sizes: favicon-16x16.png, favicon-32x32.png, favicon-48x48.png",
        "Icon versions: favicon-icon-16x16.png, favicon-icon-32x32.png, favicon-icon-48x48.png",
    ]
    .join("\n")
}
