use std::path::PathBuf;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NewsdeskError, Result};
use crate::loader;
use crate::store::array::ArrayStore;
use crate::store::linked::LinkedStore;
use crate::store::ArticleStore;

/// Load every source into both stores in sequence.
///
/// A source that cannot be opened is skipped with a warning; loading
/// continues with whatever the remaining sources provide.
pub fn run(
    array: &mut ArrayStore,
    linked: &mut LinkedStore,
    sources: &[PathBuf],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut dropped = 0;

    for path in sources {
        match loader::load_source(path, array, linked) {
            Ok(report) => {
                result.add_message(CmdMessage::info(format!(
                    "{}: {} articles loaded",
                    path.display(),
                    report.loaded
                )));
                dropped += report.dropped;
            }
            Err(err @ NewsdeskError::SourceUnavailable { .. }) => {
                result.add_message(CmdMessage::warning(format!("{err}, skipping")));
            }
            Err(e) => return Err(e),
        }
    }

    if dropped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{dropped} articles dropped: array store is full (capacity {})",
            array.capacity()
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Total articles: {}",
        array.len()
    )));
    Ok(result)
}
