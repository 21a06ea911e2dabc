use crate::error;
use crate::lang::{Error, Line};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Error>;

/// ## Program persistence
///
/// SAVE hands over the stored lines in ascending order. LOAD returns
/// the lines that replace the whole program.

pub trait Storage {
    fn save(&mut self, name: &str, lines: &[Line]) -> Result<()>;
    fn load(&mut self, name: &str) -> Result<Vec<Line>>;
}

/// Programs kept for the life of the machine.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    programs: HashMap<String, Vec<Line>>,
}

impl Storage for MemoryStorage {
    fn save(&mut self, name: &str, lines: &[Line]) -> Result<()> {
        self.programs.insert(name.to_string(), lines.to_vec());
        Ok(())
    }

    fn load(&mut self, name: &str) -> Result<Vec<Line>> {
        match self.programs.get(name) {
            Some(lines) => Ok(lines.clone()),
            None => Err(error!(FileNotFound; name)),
        }
    }
}

/// Programs kept as `<name>.txt` text files in one directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(dir: P) -> FileStorage {
        FileStorage { dir: dir.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", name))
    }
}

impl Default for FileStorage {
    fn default() -> FileStorage {
        FileStorage::new(".")
    }
}

impl Storage for FileStorage {
    fn save(&mut self, name: &str, lines: &[Line]) -> Result<()> {
        let mut file = match File::create(self.path(name)) {
            Ok(file) => file,
            Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
        };
        for line in lines {
            if let Err(error) = writeln!(file, "{}", line) {
                return Err(error!(InternalError; error.to_string().as_str()));
            }
        }
        Ok(())
    }

    fn load(&mut self, name: &str) -> Result<Vec<Line>> {
        let reader = match File::open(self.path(name)) {
            Ok(file) => BufReader::new(file),
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; name)),
                _ => return Err(error!(InternalError; error.to_string().as_str())),
            },
        };
        let mut lines = vec![];
        for line in reader.lines() {
            match line {
                Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
                Ok(text) => {
                    let line = Line::parse(&text);
                    if !line.is_direct() {
                        lines.push(line);
                    }
                }
            }
        }
        Ok(lines)
    }
}
