//! Delimited-source ingestion.
//!
//! Sources are plain text: a header line (discarded), then one record per
//! line with four comma-separated fields — title, content, category, date.
//! There is no escaping; a field may be wrapped in a single pair of double
//! quotes, which is stripped. A line with embedded commas simply misaligns.
//!
//! Short lines are filled best-effort: missing trailing fields become empty
//! strings, and fields past the fourth are dropped.
//!
//! Every record is appended to both stores. When the array store hits its
//! capacity the record is dropped from the linked store as well, so the two
//! views stay identical; dropped records are counted in the report.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{NewsdeskError, Result};
use crate::model::Article;
use crate::store::array::ArrayStore;
use crate::store::linked::LinkedStore;
use crate::store::ArticleStore;

/// Outcome of loading a single source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceReport {
    /// Records appended to both stores.
    pub loaded: usize,
    /// Records dropped because the array store was full.
    pub dropped: usize,
}

/// Load one source into both stores.
///
/// An unopenable source is reported as [`NewsdeskError::SourceUnavailable`];
/// nothing else is fatal.
pub fn load_source(
    path: &Path,
    array: &mut ArrayStore,
    linked: &mut LinkedStore,
) -> Result<SourceReport> {
    let file = File::open(path).map_err(|source| NewsdeskError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut report = SourceReport::default();
    let mut lines = reader.lines();

    // Header line: discarded no matter what it contains.
    if lines.next().transpose()?.is_none() {
        return Ok(report);
    }

    for line in lines {
        let article = parse_record(&line?);
        match array.append(article.clone()) {
            Ok(()) => {
                linked.append(article)?;
                report.loaded += 1;
            }
            Err(NewsdeskError::CapacityExceeded { .. }) => report.dropped += 1,
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

fn parse_record(line: &str) -> Article {
    let mut fields = line.split(',');
    let mut next = || strip_quotes(fields.next().unwrap_or("")).to_string();

    let title = next();
    let content = next();
    let category = next();
    let date = next();
    Article::new(title, content, category, date)
}

fn strip_quotes(field: &str) -> &str {
    let bytes = field.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"' {
        &field[1..field.len() - 1]
    } else {
        field
    }
}
