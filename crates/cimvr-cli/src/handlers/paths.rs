//! Paths command handler.
//!
//! Displays the resolved executables and plugin search folders. This is the
//! first stop when a launch cannot find something.

use anyhow::Result;

use cimvr_core::paths::{PathReport, SearchContext};

/// Execute the paths command.
///
/// Prints the report in `key = value` format. Roles whose executables
/// cannot be found are shown as misses rather than failing the command.
pub fn execute(context: &SearchContext) -> Result<()> {
    let report = PathReport::gather(context);
    println!("{report}");
    Ok(())
}
