//! Daily rolling log file
//!
//! Writes go to `<prefix>_<YYYY-MM-DD>.log` in the log directory. A new file
//! is opened when the local date changes, and only the newest `max_files`
//! files are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

pub struct RollingFile {
    dir: PathBuf,
    prefix: String,
    max_files: usize,
    date: NaiveDate,
    file: File,
}

impl RollingFile {
    pub fn open(dir: &Path, prefix: &str, max_files: usize) -> io::Result<Self> {
        Self::open_for(dir, prefix, max_files, Local::now().date_naive())
    }

    pub fn open_for(dir: &Path, prefix: &str, max_files: usize, date: NaiveDate) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let file = open_append(&dir.join(file_name(prefix, date)))?;
        let rolling = Self {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
            max_files: max_files.max(1),
            date,
            file,
        };
        rolling.prune()?;
        Ok(rolling)
    }

    /// Write `buf` into the file for `date`, rolling over if needed
    pub fn write_on(&mut self, date: NaiveDate, buf: &[u8]) -> io::Result<()> {
        if date != self.date {
            self.file.flush()?;
            self.file = open_append(&self.dir.join(file_name(&self.prefix, date)))?;
            self.date = date;
            self.prune()?;
        }
        self.file.write_all(buf)
    }

    /// Log files for this prefix, oldest first
    pub fn existing_files(&self) -> io::Result<Vec<PathBuf>> {
        let lead = format!("{}_", self.prefix);
        let mut files: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.starts_with(&lead) && n.ends_with(".log"))
                    .unwrap_or(false)
            })
            .collect();
        // Dates are zero-padded, so name order is date order
        files.sort();
        Ok(files)
    }

    fn prune(&self) -> io::Result<()> {
        let files = self.existing_files()?;
        if files.len() <= self.max_files {
            return Ok(());
        }
        let excess = files.len() - self.max_files;
        for path in &files[..excess] {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_on(Local::now().date_naive(), buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

pub fn file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.log", prefix, date.format("%Y-%m-%d"))
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("BasketScan", day(7)), "BasketScan_2024-03-07.log");
    }

    #[test]
    fn test_writes_append() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open_for(dir.path(), "app", 3, day(1)).unwrap();
        file.write_on(day(1), b"first\n").unwrap();
        file.write_on(day(1), b"second\n").unwrap();
        file.flush().unwrap();

        let content = fs::read_to_string(dir.path().join(file_name("app", day(1)))).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_rolls_over_on_new_date() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open_for(dir.path(), "app", 3, day(1)).unwrap();
        file.write_on(day(1), b"monday\n").unwrap();
        file.write_on(day(2), b"tuesday\n").unwrap();
        file.flush().unwrap();

        let first = fs::read_to_string(dir.path().join("app_2024-03-01.log")).unwrap();
        let second = fs::read_to_string(dir.path().join("app_2024-03-02.log")).unwrap();
        assert_eq!(first, "monday\n");
        assert_eq!(second, "tuesday\n");
    }

    #[test]
    fn test_prunes_oldest_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("other.txt"), "keep").unwrap();

        let mut file = RollingFile::open_for(dir.path(), "app", 2, day(1)).unwrap();
        for d in 2..=4 {
            file.write_on(day(d), b"line\n").unwrap();
        }

        let names: Vec<String> = file
            .existing_files()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["app_2024-03-03.log", "app_2024-03-04.log"]);
        assert!(dir.path().join("other.txt").exists());
    }
}
