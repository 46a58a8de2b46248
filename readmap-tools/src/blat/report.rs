//! Reader for BLAT's tabular (`-out=blast9`) alignment report
//!
//! The report is a run of blocks, one per query. Each block opens with
//! `#` comment lines (program banner, `# Query:`, `# Database:`,
//! `# Fields:`) followed by tab-separated data lines of twelve columns.

use crate::utils::{read_lines_lossy, LossyLines};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, space0},
    combinator::{map, rest},
    sequence::{pair, preceded},
    IResult,
};
use readmap_core::{ReadmapError, ReadmapResult};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

pub const COMMENT_MARKER: char = '#';
pub const FIELD_COUNT: usize = 12;

/// Column names in report order
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "query id",
    "subject id",
    "% identity",
    "alignment length",
    "mismatches",
    "gap openings",
    "q. start",
    "q. end",
    "s. start",
    "s. end",
    "e-value",
    "bit score",
];

/// One data line of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentRecord {
    pub query_id: String,
    pub subject_id: String,
    pub percent_identity: f64,
    pub alignment_length: usize,
    pub mismatches: usize,
    pub gap_openings: usize,
    pub query_start: usize,
    pub query_end: usize,
    pub subject_start: usize,
    pub subject_end: usize,
    pub e_value: f64,
    pub bit_score: f64,
}

impl AlignmentRecord {
    /// Parse one tab-separated data line; `line_number` is 1-based and only
    /// used for error reporting
    pub fn parse_line(line: &str, line_number: usize) -> ReadmapResult<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(ReadmapError::MalformedReport {
                line: line_number,
                field: None,
                reason: format!(
                    "expected {} tab-separated fields, found {}",
                    FIELD_COUNT,
                    fields.len()
                ),
                raw: line.to_string(),
            });
        }

        let row = Row {
            fields: &fields,
            line,
            line_number,
        };

        Ok(Self {
            query_id: fields[0].to_string(),
            subject_id: fields[1].to_string(),
            percent_identity: row.float(2)?,
            alignment_length: row.parse(3)?,
            mismatches: row.parse(4)?,
            gap_openings: row.parse(5)?,
            query_start: row.parse(6)?,
            query_end: row.parse(7)?,
            subject_start: row.parse(8)?,
            subject_end: row.parse(9)?,
            e_value: row.float(10)?,
            bit_score: row.float(11)?,
        })
    }
}

struct Row<'a> {
    fields: &'a [&'a str],
    line: &'a str,
    line_number: usize,
}

impl Row<'_> {
    fn parse<T>(&self, index: usize) -> ReadmapResult<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let value = self.fields[index];
        value
            .parse()
            .map_err(|e: T::Err| self.error(index, format!("cannot parse '{}': {}", value, e)))
    }

    fn float(&self, index: usize) -> ReadmapResult<f64> {
        let value: f64 = self.parse(index)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.error(index, format!("'{}' is not a finite number", self.fields[index])))
        }
    }

    fn error(&self, index: usize, reason: String) -> ReadmapError {
        ReadmapError::MalformedReport {
            line: self.line_number,
            field: Some(FIELD_NAMES[index]),
            reason,
            raw: self.line.to_string(),
        }
    }
}

/// C `%.1e` layout (`4.5e-234`, `0.0e+00`) used by BLAT for e-values
pub fn format_evalue(value: f64) -> String {
    let formatted = format!("{:.1e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

impl fmt::Display for AlignmentRecord {
    /// Renders the record in the aligner's own column layout
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{:.2}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.1}",
            self.query_id,
            self.subject_id,
            self.percent_identity,
            self.alignment_length,
            self.mismatches,
            self.gap_openings,
            self.query_start,
            self.query_end,
            self.subject_start,
            self.subject_end,
            format_evalue(self.e_value),
            self.bit_score
        )
    }
}

/// What to do when a data line is malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Yield the error and stop
    #[default]
    FailFast,
    /// Yield the error and carry on with the next line
    Lenient,
}

impl ParseMode {
    pub fn from_lenient(lenient: bool) -> Self {
        if lenient {
            ParseMode::Lenient
        } else {
            ParseMode::FailFast
        }
    }
}

/// Lazy sequence of records, in file order, skipping comment and blank lines
pub struct ReportRecords<R> {
    lines: LossyLines<R>,
    line_number: usize,
    mode: ParseMode,
    done: bool,
}

impl<R: BufRead> ReportRecords<R> {
    pub fn new(reader: R, mode: ParseMode) -> Self {
        Self {
            lines: read_lines_lossy(reader),
            line_number: 0,
            mode,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ReportRecords<R> {
    type Item = ReadmapResult<AlignmentRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            self.line_number += 1;

            if line.trim().is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            let parsed = AlignmentRecord::parse_line(&line, self.line_number);
            if let Err(e) = &parsed {
                match self.mode {
                    ParseMode::FailFast => self.done = true,
                    ParseMode::Lenient => tracing::warn!("Skipping report line: {}", e),
                }
            }
            return Some(parsed);
        }
        None
    }
}

/// Every line of the report verbatim, comments included
pub struct RawLines<R> {
    lines: LossyLines<R>,
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = ReadmapResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}

/// Open a report for raw reading
pub fn open_report(path: &Path) -> ReadmapResult<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Lazily parse the report at `path` into typed records
pub fn parse_report(path: &Path, mode: ParseMode) -> ReadmapResult<ReportRecords<BufReader<File>>> {
    Ok(ReportRecords::new(open_report(path)?, mode))
}

pub fn raw_lines(path: &Path) -> ReadmapResult<RawLines<BufReader<File>>> {
    Ok(RawLines {
        lines: read_lines_lossy(open_report(path)?),
    })
}

/// Parse the whole report, failing on the first malformed line
pub fn read_records(path: &Path) -> ReadmapResult<Vec<AlignmentRecord>> {
    parse_report(path, ParseMode::FailFast)?.collect()
}

/// Parse the whole report, setting malformed lines aside
///
/// IO errors still abort; only `MalformedReport` errors are collected.
pub fn read_records_lenient(
    path: &Path,
) -> ReadmapResult<(Vec<AlignmentRecord>, Vec<ReadmapError>)> {
    let mut records = Vec::new();
    let mut malformed = Vec::new();

    for item in parse_report(path, ParseMode::Lenient)? {
        match item {
            Ok(record) => records.push(record),
            Err(e @ ReadmapError::MalformedReport { .. }) => malformed.push(e),
            Err(e) => return Err(e),
        }
    }
    Ok((records, malformed))
}

/// Structured form of a `#` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentLine {
    Banner(String),
    Query(String),
    Database(String),
    Fields(Vec<String>),
}

fn labelled<'a>(label: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(pair(tag(label), space0), rest)
}

fn comment_line(input: &str) -> IResult<&str, CommentLine> {
    let (input, _) = pair(char(COMMENT_MARKER), space0)(input)?;
    alt((
        map(labelled("Query:"), |s: &str| CommentLine::Query(s.trim().to_string())),
        map(labelled("Database:"), |s: &str| {
            CommentLine::Database(s.trim().to_string())
        }),
        map(labelled("Fields:"), |s: &str| {
            CommentLine::Fields(
                s.split(',')
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect(),
            )
        }),
        map(rest, |s: &str| CommentLine::Banner(s.trim().to_string())),
    ))(input)
}

/// Parse a comment line; `None` for data lines
pub fn parse_comment(line: &str) -> Option<CommentLine> {
    comment_line(line).ok().map(|(_, comment)| comment)
}

/// Records of one query together with the comment header above them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportBlock {
    pub banner: Option<String>,
    pub query_id: Option<String>,
    pub database: Option<String>,
    pub fields: Vec<String>,
    pub records: Vec<AlignmentRecord>,
}

impl ReportBlock {
    pub fn is_empty(&self) -> bool {
        self.banner.is_none()
            && self.query_id.is_none()
            && self.database.is_none()
            && self.fields.is_empty()
            && self.records.is_empty()
    }

    /// A header line of this kind opens the next block
    fn closed_by(&self, comment: &CommentLine) -> bool {
        if !self.records.is_empty() {
            return true;
        }
        match comment {
            CommentLine::Banner(_) => self.banner.is_some() || self.query_id.is_some(),
            CommentLine::Query(_) => self.query_id.is_some(),
            CommentLine::Database(_) => self.database.is_some(),
            CommentLine::Fields(_) => !self.fields.is_empty(),
        }
    }

    fn apply(&mut self, comment: CommentLine) {
        match comment {
            CommentLine::Banner(text) => self.banner = Some(text),
            CommentLine::Query(id) => self.query_id = Some(id),
            CommentLine::Database(path) => self.database = Some(path),
            CommentLine::Fields(names) => self.fields = names,
        }
    }
}

/// Group a report into per-query blocks
///
/// Data lines that appear before any header form a block with no query id.
pub fn read_blocks<R: BufRead>(reader: R, mode: ParseMode) -> ReadmapResult<Vec<ReportBlock>> {
    let mut blocks = Vec::new();
    let mut current = ReportBlock::default();

    for (index, line) in read_lines_lossy(reader).enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if let Some(comment) = parse_comment(&line) {
            if current.closed_by(&comment) {
                blocks.push(std::mem::take(&mut current));
            }
            current.apply(comment);
            continue;
        }

        match AlignmentRecord::parse_line(&line, index + 1) {
            Ok(record) => current.records.push(record),
            Err(e) => match mode {
                ParseMode::FailFast => return Err(e),
                ParseMode::Lenient => tracing::warn!("Skipping report line: {}", e),
            },
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }
    Ok(blocks)
}

pub fn read_blocks_from_path(path: &Path, mode: ParseMode) -> ReadmapResult<Vec<ReportBlock>> {
    read_blocks(open_report(path)?, mode)
}
