//! Export orchestration: one combined document, or one document per face.

use crate::face::{Face2d, UserPrefs};
use crate::io::svg::{SvgBuilder, SvgOptions};
use crate::io::{IoError, write_file};
use crate::units::Units;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "export.svg";

/// Where and how to write an export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub destination: PathBuf,
    pub units: Units,
    /// Write `<stem>-<n>.<ext>` per face instead of a single document.
    pub use_multi_file: bool,
    pub overwrite: bool,
    pub svg: SvgOptions,
}

impl ExportOptions {
    pub fn new(destination: impl Into<PathBuf>, units: Units) -> Self {
        Self {
            destination: destination.into(),
            units,
            use_multi_file: false,
            overwrite: false,
            svg: SvgOptions::default(),
        }
    }

    /// Seed the options from saved preferences, falling back to
    /// [`default_export_path`] for the destination.
    pub fn from_prefs(prefs: &UserPrefs, units: Units) -> Self {
        Self {
            use_multi_file: prefs.use_multi_file(),
            overwrite: prefs.overwrite_files(),
            ..Self::new(default_export_path(prefs), units)
        }
    }
}

/// The last path the user exported to, or `export.svg` in the working directory.
pub fn default_export_path(prefs: &UserPrefs) -> PathBuf {
    prefs
        .last_export_path
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_FILE_NAME), PathBuf::from)
}

/// Path of the `n`th (1-based) file of a multi-file export: `dir/stem-n.ext`.
pub fn numbered_path(destination: &Path, n: usize) -> PathBuf {
    let stem = destination
        .file_stem()
        .map_or_else(|| "export".into(), |s| s.to_string_lossy().into_owned());
    let file_name = match destination.extension() {
        Some(ext) => format!("{stem}-{n}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{n}.svg"),
    };
    destination.with_file_name(file_name)
}

/// Render the given faces as one SVG document.
pub fn render_document(faces: &[Face2d], units: Units, options: &SvgOptions) -> Result<String, IoError> {
    let mut builder = SvgBuilder::with_options(units, options.clone());
    for face in faces {
        builder.add_face(face)?;
    }
    Ok(builder.to_xml())
}

/// Write `faces` according to `options` and return the written paths.
///
/// Every document is rendered before anything is written, so an invalid face
/// leaves the disk untouched. A write failure stops the export; files written
/// before it stay in place.
pub fn export_faces(faces: &[Face2d], options: &ExportOptions) -> Result<Vec<PathBuf>, IoError> {
    let documents: Vec<(PathBuf, String)> = if options.use_multi_file {
        faces
            .iter()
            .enumerate()
            .map(|(i, face)| {
                let xml = render_document(std::slice::from_ref(face), options.units, &options.svg)?;
                Ok::<_, IoError>((numbered_path(&options.destination, i + 1), xml))
            })
            .collect::<Result<_, _>>()?
    } else {
        vec![(
            options.destination.clone(),
            render_document(faces, options.units, &options.svg)?,
        )]
    };

    let mut written = Vec::with_capacity(documents.len());
    for (path, xml) in documents {
        write_file(&path, &xml, options.overwrite)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_paths_keep_directory_and_extension() {
        let p = numbered_path(Path::new("/tmp/parts/lid.svg"), 3);
        assert_eq!(p, PathBuf::from("/tmp/parts/lid-3.svg"));
        let p = numbered_path(Path::new("panel"), 1);
        assert_eq!(p, PathBuf::from("panel-1.svg"));
    }

    #[test]
    fn default_path_comes_from_prefs() {
        let mut prefs = UserPrefs::default();
        assert_eq!(default_export_path(&prefs), PathBuf::from("export.svg"));
        prefs.last_export_path = Some("   ".into());
        assert_eq!(default_export_path(&prefs), PathBuf::from("export.svg"));
        prefs.last_export_path = Some("/home/me/box.svg".into());
        assert_eq!(default_export_path(&prefs), PathBuf::from("/home/me/box.svg"));
    }

    #[test]
    fn options_follow_prefs() {
        let prefs = UserPrefs {
            last_export_path: None,
            use_multi_file: Some(true),
            overwrite_files: Some(true),
        };
        let options = ExportOptions::from_prefs(&prefs, Units::Meter);
        assert!(options.use_multi_file && options.overwrite);
        assert_eq!(options.units, Units::Meter);
    }
}
