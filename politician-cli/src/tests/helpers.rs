//! Test helpers for building request files and zip-code databases on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Zip rows for the plains capitals used throughout the CLI tests.
pub(super) const PLAINS_ZIP_CSV: &str = "\
ZipCode,City,State,Latitude,Longitude
73301,AUSTIN,TX,30.2747,-97.7404
73101,OKLAHOMA CITY,OK,35.4923,-97.5033
66601,TOPEKA,KS,39.0481,-95.6780
68501,LINCOLN,NE,40.8081,-96.6997
80201,DENVER,CO,39.7392,-104.9849
87501,SANTA FE,NM,35.6824,-105.9397
43201,COLUMBUS,OH,,
";

/// Shortest Texas to Nebraska tour through the other plains capitals.
pub(super) const PLAINS_ROUTE: [&str; 6] = [
    "Texas",
    "Oklahoma",
    "New Mexico",
    "Colorado",
    "Kansas",
    "Nebraska",
];

/// Geodesic length of [`PLAINS_ROUTE`] in miles.
pub(super) const PLAINS_MILES: f64 = 1_752.803_512_679;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding a zip database and a request file.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) zip_db: Utf8PathBuf,
    pub(super) request_path: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let zip_db = root.join("zips.csv");
        let request_path = root.join("request.json");
        write_utf8(&zip_db, PLAINS_ZIP_CSV.as_bytes());
        Self {
            _tmp: tmp,
            root,
            zip_db,
            request_path,
        }
    }

    pub(super) fn write_request(&self, payload: &str) {
        write_utf8(&self.request_path, payload.as_bytes());
    }

    pub(super) fn write_plains_request(&self) {
        self.write_request(
            r#"{"start": "Texas", "middle": "Kansas, Colorado,Oklahoma, New Mexico", "end": "Nebraska"}"#,
        );
    }
}
