use std::fs;
use std::path::Path;

use crate::error::{FixtureError, Result};

/// Renders the `"layer_config"` fragment for a network's dense data
/// directory.
///
/// Each subdirectory is named `<order>_<layer>`; they are listed by `order`
/// and depthwise layers (`dw` in the name) are skipped.
pub fn layer_config(data_dir: &Path) -> Result<String> {
    let io_err = |source| FixtureError::Io {
        path: data_dir.to_path_buf(),
        source,
    };

    let mut layers = Vec::new();
    for entry in fs::read_dir(data_dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if !entry.file_type().map_err(io_err)?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        layers.push((layer_order(&name)?, name));
    }
    layers.sort();
    tracing::debug!("found {} layer directories", layers.len());

    Ok(render(layers.iter().map(|(_, name)| name.as_str())))
}

fn layer_order(name: &str) -> Result<u64> {
    let prefix = name.split('_').next().unwrap_or(name);
    prefix.parse().map_err(|_| {
        FixtureError::InvalidParameters(format!(
            "layer directory {name:?} has no numeric order prefix"
        ))
    })
}

fn render<'a>(layers: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::from("\"layer_config\": [\n");
    for name in layers.filter(|name| !name.contains("dw")) {
        out.push_str("\t{\"sub_dir_name\": ");
        out.push_str(&serde_json::Value::from(name).to_string());
        out.push_str("},\n");
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_numerically_and_skips_depthwise() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["10_conv", "2_conv", "3_dw_conv", "1_conv"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("99_notes.txt"), "").unwrap();

        let fragment = layer_config(dir.path()).unwrap();
        assert_eq!(
            fragment,
            "\"layer_config\": [\n\
             \t{\"sub_dir_name\": \"1_conv\"},\n\
             \t{\"sub_dir_name\": \"2_conv\"},\n\
             \t{\"sub_dir_name\": \"10_conv\"},\n\
             ]"
        );
    }

    #[test]
    fn rejects_unordered_directory_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("conv")).unwrap();
        assert!(matches!(
            layer_config(dir.path()),
            Err(FixtureError::InvalidParameters(_))
        ));
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            layer_config(&dir.path().join("absent")),
            Err(FixtureError::Io { .. })
        ));
    }
}
