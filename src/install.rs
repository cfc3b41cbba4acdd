use crate::directory::{FamilyRecord, FontDirectory, GoogleFonts};
use crate::download::{install_asset, AssetFetcher, HttpFetcher, InstalledAsset};
use crate::error::{FontpackError, Result};
use crate::manifest::Manifest;
use crate::{reconcile, stylesheet};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Why a unit of work was skipped instead of installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    FamilyNotFound { family: String },
    VariantNotFound { family: String, variant: String },
    DownloadFailed { family: String, variant: String, reason: String },
}

/// Outcome of a single run
#[derive(Debug, Default)]
pub struct InstallReport {
    pub installed: Vec<InstalledAsset>,
    pub skipped: Vec<Skip>,
}

/// One requested variant against an already-resolved record
#[derive(Debug)]
enum VariantOutcome {
    Installed(InstalledAsset),
    Skipped(Skip),
}

fn install_variant(
    fetcher: &dyn AssetFetcher,
    record: &FamilyRecord,
    variant: &str,
    dir: &Path,
) -> VariantOutcome {
    let Some(url) = record.files.get(variant) else {
        return VariantOutcome::Skipped(Skip::VariantNotFound {
            family: record.family.clone(),
            variant: variant.to_string(),
        });
    };

    match install_asset(fetcher, &record.family, variant, url, dir) {
        Ok(asset) => VariantOutcome::Installed(asset),
        Err(e) => VariantOutcome::Skipped(Skip::DownloadFailed {
            family: record.family.clone(),
            variant: variant.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Run the install pipeline: resolve and download every requested
/// (family, variant) pair, reconcile the asset directory, then write the
/// stylesheet once.
///
/// Per-entry failures are logged and skipped; only setup and the final
/// stylesheet write are fatal.
pub fn run(
    manifest: &Manifest,
    directory: &dyn FontDirectory,
    fetcher: &dyn AssetFetcher,
) -> Result<InstallReport> {
    if manifest.fonts.is_empty() {
        return Err(FontpackError::NoFontsRequested);
    }

    let dir = Path::new(&manifest.dir);
    fs::create_dir_all(dir).map_err(|e| {
        FontpackError::Setup(format!("Failed to create directory {}: {e}", dir.display()))
    })?;

    let stylesheet_path = Path::new(&manifest.stylesheet);
    if let Some(parent) = stylesheet_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                FontpackError::Setup(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let mut report = InstallReport::default();
    let mut wanted: HashSet<String> = HashSet::new();
    let mut rules: Vec<String> = Vec::new();

    for request in &manifest.fonts {
        let record = match directory.resolve(&request.family) {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::warn!("No font found for {}", request.family);
                report.skipped.push(Skip::FamilyNotFound {
                    family: request.family.clone(),
                });
                continue;
            }
            Err(e) => {
                tracing::warn!("Failed to resolve {}: {e}", request.family);
                report.skipped.push(Skip::FamilyNotFound {
                    family: request.family.clone(),
                });
                continue;
            }
        };

        for variant in &request.variants {
            match install_variant(fetcher, &record, variant, dir) {
                VariantOutcome::Installed(asset) => {
                    wanted.insert(asset.file_name.clone());
                    rules.push(stylesheet::render_rule(
                        &asset.family,
                        &asset.variant,
                        &asset.file_name,
                    ));
                    report.installed.push(asset);
                }
                VariantOutcome::Skipped(skip) => {
                    match &skip {
                        Skip::VariantNotFound { family, variant } => {
                            tracing::warn!("Variant {variant} not found for {family}");
                        }
                        Skip::DownloadFailed { family, variant, reason } => {
                            tracing::warn!("Failed to download {family} ({variant}): {reason}");
                        }
                        Skip::FamilyNotFound { .. } => {}
                    }
                    report.skipped.push(skip);
                }
            }
        }
    }

    // Only successful installs protect a file from reconciliation
    reconcile::run(dir, &wanted);

    stylesheet::write_stylesheet(stylesheet_path, &rules)?;

    Ok(report)
}

/// Load the manifest at `path` and run the pipeline against the live
/// font directory
pub fn run_from_path(path: &Path) -> Result<InstallReport> {
    println!("Reading font configuration from {}...", path.display());
    let manifest = Manifest::load(path)?;

    println!("Installing fonts to directory: {}", manifest.dir);
    let directory = GoogleFonts::new()?;
    let fetcher = HttpFetcher::new()?;

    let report = run(&manifest, &directory, &fetcher)?;
    println!("\nInstall complete!");
    Ok(report)
}
