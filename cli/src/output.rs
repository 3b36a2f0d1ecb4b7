use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

/// File formats the CLI can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        assert_not_stdout(path)?;
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("csv") => Ok(Format::Csv),
            Some("json") => Ok(Format::Json),
            _ => bail!("Unsupported output extension for {} (expected .csv or .json)", path.display()),
        }
    }
}

pub fn assert_not_stdout(path: &Path) -> Result<()> {
    if path == Path::new("-") {
        bail!("stdout is not supported; omit --output to print to the terminal.");
    }
    Ok(())
}

/// Create the parent directory and refuse to clobber an existing file unless `force`.
pub fn prepare_output(target: &Path, force: bool) -> Result<()> {
    if let Some(parent) = target.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
    }
    if !force && target.exists() {
        bail!("Refusing to overwrite existing file: {} (use --force)", target.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("out/table.csv")).unwrap(), Format::Csv);
        assert_eq!(Format::from_path(Path::new("report.JSON")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("report.txt")).is_err());
        assert!(Format::from_path(Path::new("-")).is_err());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("table.csv");
        prepare_output(&target, false).unwrap();
        assert!(target.parent().unwrap().is_dir());

        fs::write(&target, "x").unwrap();
        assert!(prepare_output(&target, false).is_err());
        assert!(prepare_output(&target, true).is_ok());
    }
}
