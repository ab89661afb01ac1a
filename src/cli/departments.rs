//! Departments command implementation

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::models::{HierarchyDisplay, SubordinateDisplay};
use crate::output::Formattable;

/// List the departments of the loaded hierarchy
pub fn run(opts: &GlobalOptions, subordinates: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.resolver.check()?;

    let departments = ctx.resolver.departments();
    if subordinates {
        SubordinateDisplay::flatten(departments).print(ctx.format)
    } else {
        let rows: Vec<HierarchyDisplay> = departments.iter().map(HierarchyDisplay::from).collect();
        rows.print(ctx.format)
    }
}
