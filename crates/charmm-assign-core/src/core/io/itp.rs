use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const COMMENT_MARKER: char = ';';
const DIRECTIVE_MARKER: char = '#';
const SECTION_MARKER: char = '[';

/// One data line of a parameter file, split into whitespace-separated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source file.
    pub line: usize,
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn fields(&self) -> Vec<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}

/// Tracks `#ifdef` / `#ifndef` / `#else` / `#endif` blocks with no macros defined.
///
/// `#ifdef NAME` and `#if ...` open an inactive branch, `#ifndef NAME` an active one,
/// and `#else` flips the innermost branch. Lines inside an inactive branch, or inside
/// any branch nested in one, carry no data. Other directives (`#define`, `#include`)
/// are skipped. A stray `#else` or `#endif` with no open block is ignored.
#[derive(Debug, Default)]
struct Preprocessor {
    /// One entry per open block: `(enclosing block active, this branch taken)`.
    blocks: Vec<(bool, bool)>,
}

impl Preprocessor {
    fn is_active(&self) -> bool {
        self.blocks
            .last()
            .is_none_or(|&(outer, taken)| outer && taken)
    }

    fn apply(&mut self, directive: &str) {
        let keyword = directive
            .trim_start_matches(DIRECTIVE_MARKER)
            .split_whitespace()
            .next()
            .unwrap_or_default();
        match keyword {
            "ifdef" | "if" => {
                let outer = self.is_active();
                self.blocks.push((outer, false));
            }
            "ifndef" => {
                let outer = self.is_active();
                self.blocks.push((outer, true));
            }
            "else" => {
                if let Some((_, taken)) = self.blocks.last_mut() {
                    *taken = !*taken;
                }
            }
            "endif" => {
                self.blocks.pop();
            }
            _ => {}
        }
    }

    /// Tokenizes a single line, returning `None` for lines that carry no data.
    ///
    /// Trailing `;` comments are removed. Blank lines, whole-line comments, `#`
    /// preprocessor directives, `[ section ]` headers and lines in an inactive
    /// conditional branch are skipped.
    fn tokenize_line(&mut self, line: &str) -> Option<Vec<String>> {
        let content = match line.find(COMMENT_MARKER) {
            Some(pos) => &line[..pos],
            None => line,
        };
        let content = content.trim();
        if content.starts_with(DIRECTIVE_MARKER) {
            self.apply(content);
            return None;
        }
        if content.is_empty() || content.starts_with(SECTION_MARKER) || !self.is_active() {
            return None;
        }
        Some(content.split_whitespace().map(str::to_string).collect())
    }
}

/// Reads every data record from a buffered reader, preserving file order.
pub fn read_records(reader: &mut impl BufRead) -> io::Result<Vec<RawRecord>> {
    let mut preprocessor = Preprocessor::default();
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(fields) = preprocessor.tokenize_line(&line) {
            records.push(RawRecord {
                line: index + 1,
                fields,
            });
        }
    }
    Ok(records)
}

/// Tokenizes parameter text that is already in memory.
pub fn parse_records(content: &str) -> Vec<RawRecord> {
    let mut preprocessor = Preprocessor::default();
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            preprocessor.tokenize_line(line).map(|fields| RawRecord {
                line: index + 1,
                fields,
            })
        })
        .collect()
}

pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> io::Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_records(&mut reader)
}
