//! Resolve command implementation

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::models::ResolutionView;
use crate::output::Formattable;

/// Show the department an organization name is attributed to
pub fn run(opts: &GlobalOptions, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.resolver.check()?;

    ResolutionView::resolve(&ctx.resolver, name).print(ctx.format)
}
