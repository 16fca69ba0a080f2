use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use water_quality::config::{DEFAULT_CLASSIFIER_PATH, DEFAULT_TRANSFORM_PATH};
use water_quality::data::demo::{demo_classifier, demo_transform};

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing artifact")?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

/// Write the demo transform and classifier into the directory given as the
/// first argument (default: current directory).
fn main() -> Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let transform_path = out_dir.join(DEFAULT_TRANSFORM_PATH);
    let classifier_path = out_dir.join(DEFAULT_CLASSIFIER_PATH);

    write_json(&transform_path, &demo_transform())?;
    write_json(&classifier_path, &demo_classifier())?;

    println!(
        "Wrote {} and {}",
        transform_path.display(),
        classifier_path.display()
    );
    Ok(())
}
