use geo::Coord;
use laserface::export::{ExportOptions, export_faces, numbered_path};
use laserface::face::Face2d;
use laserface::io::{IoError, write_file};
use laserface::units::Units;
use std::fs;

fn triangle(size: f64) -> Face2d {
    Face2d::new(
        vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: size, y: 0.0 },
            Coord { x: 0.0, y: size },
        ],
        vec![],
    )
}

#[test]
fn existing_destination_needs_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("existing.svg");
    fs::write(&path, "old").unwrap();

    let err = write_file(&path, "<svg/>", false).unwrap_err();
    assert!(matches!(err, IoError::DestinationExists(_)));
    assert!(err.to_string().contains("already exists"));

    write_file(&path, "<svg/>", true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
}

#[test]
fn single_document_holds_every_face() {
    let dir = tempfile::tempdir().unwrap();
    let options = ExportOptions::new(dir.path().join("all.svg"), Units::Millimeter);
    let written = export_faces(&[triangle(1.0), triangle(2.0)], &options).unwrap();

    assert_eq!(written, vec![dir.path().join("all.svg")]);
    let xml = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(xml.matches("<g>").count(), 2);
    assert!(xml.contains(r#"width="50.80000000mm""#));
}

#[test]
fn multi_file_writes_one_document_per_face() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("part.svg");
    let mut options = ExportOptions::new(&destination, Units::Inch);
    options.use_multi_file = true;

    let written = export_faces(&[triangle(1.0), triangle(3.0)], &options).unwrap();
    assert_eq!(written, vec![numbered_path(&destination, 1), numbered_path(&destination, 2)]);
    assert!(!destination.exists());

    let second = fs::read_to_string(&written[1]).unwrap();
    assert!(second.contains(r#"width="3.00000000in""#));

    // a second run without overwrite is refused
    assert!(matches!(
        export_faces(&[triangle(1.0)], &options),
        Err(IoError::DestinationExists(_))
    ));
}

#[test]
fn invalid_face_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = ExportOptions::new(dir.path().join("bad.svg"), Units::Inch);
    options.use_multi_file = true;

    let result = export_faces(&[triangle(1.0), Face2d::default()], &options);
    assert!(matches!(result, Err(IoError::Validation(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
