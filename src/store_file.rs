use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::IgnoredAny;

use crate::search_index::SearchIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    /// `var store = [...]`, what the site generator writes for the search widget
    Script,
    /// A bare JSON array
    Json,
}

pub struct StoreFile {
    pub file_path: PathBuf,
    pub format: StoreFormat,
    pub raw_content: String,
}

impl StoreFile {
    pub fn from_file(file_path: &Path) -> io::Result<StoreFile> {
        let raw_content = fs::read_to_string(file_path)?;
        let format = Self::guess_format(&raw_content);

        Ok(StoreFile {
            file_path: file_path.to_path_buf(),
            format,
            raw_content,
        })
    }

    /// The JSON array inside the file, without banner comments or assignment.
    pub fn payload(&self) -> &str {
        extract_payload(&self.raw_content)
    }

    /// Writes the index as the `var store = [...];` script the search widget loads.
    pub fn write_js(file_path: &Path, index: &SearchIndex) -> io::Result<()> {
        let json = index.to_json()?;
        fs::write(file_path, to_script(&json))
    }

    fn guess_format(content: &str) -> StoreFormat {
        if extract_payload(content).len() == content.trim().len() {
            StoreFormat::Json
        } else {
            StoreFormat::Script
        }
    }
}

/// Strips leading comments, a `var|let|const name =` assignment, the
/// trailing semicolon and any comments after it. Content without the
/// envelope is returned trimmed.
pub fn extract_payload(content: &str) -> &str {
    lazy_static! {
        static ref HEADER_REGEX: Regex = Regex::new(
            r"(?s)^\s*(?:(?:/\*.*?\*/|//[^\n]*)\s*)*(?:(?:var|let|const)\s+[A-Za-z_$][\w$]*\s*=)?"
        ).unwrap();
        static ref TRAILER_REGEX: Regex = Regex::new(
            r"(?s)^\s*(?:(?:/\*.*?\*/|//[^\n]*)\s*)*;?\s*(?:(?:/\*.*?\*/|//[^\n]*)\s*)*$"
        ).unwrap();
    }

    let header_end = HEADER_REGEX.find(content).map_or(0, |m| m.end());
    let body = &content[header_end..];

    // The end of the first JSON value tells the payload from the trailer,
    // even when a string inside it contains `//` or `;`
    let mut values = serde_json::Deserializer::from_str(body).into_iter::<IgnoredAny>();
    if let Some(Ok(_)) = values.next() {
        let end = values.byte_offset();
        if TRAILER_REGEX.is_match(&body[end..]) {
            return body[..end].trim();
        }
        return body.trim();
    }

    // Not valid JSON, leave it to the loader to report
    body.trim().trim_end_matches(';').trim_end()
}

pub fn to_script(json: &str) -> String {
    format!("var store = {};\n", json)
}
