use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::output::{BACKGROUND_SUFFIX, FOREGROUND_SUFFIX, ROUND_SUFFIX};

/// Color resource the adaptive icon uses as its background layer
pub fn background_color_name(icon_name: &str) -> String {
    format!("{}{}", icon_name, BACKGROUND_SUFFIX)
}

pub fn foreground_name(icon_name: &str) -> String {
    format!("{}{}", icon_name, FOREGROUND_SUFFIX)
}

/// `<adaptive-icon>` document pointing at the background color and the
/// generated foreground mipmap
pub fn adaptive_icon_xml(icon_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/{}"/>
    <foreground android:drawable="@mipmap/{}"/>
</adaptive-icon>"#,
        background_color_name(icon_name),
        foreground_name(icon_name),
    )
}

/// Paths of the plain and round descriptors inside `output_dir`
pub fn descriptor_paths(output_dir: &Path, icon_name: &str) -> [PathBuf; 2] {
    [
        output_dir.join(format!("{}.xml", icon_name)),
        output_dir.join(format!("{}{}.xml", icon_name, ROUND_SUFFIX)),
    ]
}

/// Write both descriptor variants (same content) and return their paths
pub fn write_adaptive_icon_xml(output_dir: &Path, icon_name: &str) -> Result<Vec<PathBuf>> {
    let xml = adaptive_icon_xml(icon_name);
    let mut written = Vec::with_capacity(2);

    for path in descriptor_paths(output_dir, icon_name) {
        fs::write(&path, &xml)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ Created: {}", path.display());
        written.push(path);
    }

    Ok(written)
}
