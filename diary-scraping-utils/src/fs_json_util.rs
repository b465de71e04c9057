use std::{
    fmt::Debug,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use fs_err::File;
use serde::{Deserialize, Serialize};

pub fn read_json<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    (|| {
        let reader = BufReader::new(File::open(&path)?);
        anyhow::Ok(serde_json::from_reader::<_, T>(reader)?)
    })()
    .with_context(|| parse_context::<T>(&path))
}

fn parse_context<T>(path: &Path) -> String {
    format!("While trying to parse {path:?} as {}", std::any::type_name::<T>())
}

/// Writes `value` as indented JSON.
/// Non-ASCII characters (such as rating stars) are written as-is, not escaped.
pub fn write_json_pretty<P: Into<PathBuf> + Debug, T: Serialize>(
    path: P,
    value: &T,
) -> anyhow::Result<()> {
    let path = path.into();
    (|| {
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        anyhow::Ok(())
    })()
    .with_context(|| format!("While trying to write {path:?}"))
}

pub fn read_toml<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    (|| {
        let text = fs_err::read_to_string(&path)?;
        anyhow::Ok(toml::from_str::<T>(&text)?)
    })()
    .with_context(|| parse_context::<T>(&path))
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::{read_json, read_toml, write_json_pretty};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        value: f64,
    }

    #[test]
    fn pretty_json_keeps_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let entries = vec![Entry {
            name: "★★★½".to_owned(),
            value: 3.5,
        }];
        write_json_pretty(&path, &entries).unwrap();

        let text = fs_err::read_to_string(&path).unwrap();
        assert!(text.contains("★★★½"));
        assert!(text.contains("\n  {"));
        let back: Vec<Entry> = read_json(&path).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn read_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = read_json::<_, Vec<Entry>>(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }

    #[test]
    fn toml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "name = \"diary\"\nvalue = 2.0\n").unwrap();
        let entry: Entry = read_toml(&path).unwrap();
        assert_eq!(
            entry,
            Entry {
                name: "diary".to_owned(),
                value: 2.0
            }
        );
    }

    #[test]
    fn read_errors_name_path_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs_err::write(&path, "name = ").unwrap();
        let message = format!("{:#}", read_toml::<_, Entry>(&path).unwrap_err());
        assert!(message.contains("broken.toml"));
        assert!(message.contains("Entry"));

        let path = dir.path().join("broken.json");
        fs_err::write(&path, "[{").unwrap();
        let message = format!("{:#}", read_json::<_, Vec<Entry>>(&path).unwrap_err());
        assert!(message.contains("broken.json"));
        assert!(message.contains("Vec"));
    }
}
