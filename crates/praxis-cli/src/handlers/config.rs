use anyhow::Result;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn show(ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_config(&ctx.paths, &ctx.config))
}
