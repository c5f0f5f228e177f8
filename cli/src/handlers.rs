//! One handler per subcommand. Each builds a fresh `SyncController`, runs a
//! single operation and renders the resulting state.
//!
//! Handlers return `Ok(false)` when the operation failed after reaching the
//! backend (the sink has already told the user why) and `Err` only for
//! problems on this side, such as a rejected draft.

use anyhow::{Context as _, Result};
use linkshelf_core::{ClientConfig, FilterState, Link, ResourceClient, SyncController};

use crate::sink::TerminalSink;
use crate::transport::UreqTransport;

pub struct Context {
    pub config: ClientConfig,
    pub json: bool,
}

type Controller<'a> = SyncController<UreqTransport, &'a TerminalSink>;

fn controller<'a>(ctx: &Context, sink: &'a TerminalSink) -> Controller<'a> {
    tracing::debug!(base_url = %ctx.config.base_url, "using backend");
    SyncController::new(ResourceClient::new(&ctx.config), UreqTransport::new(), sink)
}

pub fn handle_list(ctx: &Context, link_type: Option<String>, search: Option<String>) -> Result<bool> {
    let sink = TerminalSink::new();
    let filter = FilterState::new(search.unwrap_or_default(), link_type.unwrap_or_default());
    let mut controller = controller(ctx, &sink).with_filter(filter);

    if !controller.refresh_links() {
        return Ok(false);
    }
    print_links(ctx, controller.links())?;
    Ok(true)
}

pub fn handle_types(ctx: &Context) -> Result<bool> {
    let sink = TerminalSink::new();
    let mut controller = controller(ctx, &sink);

    if !controller.refresh_types() {
        return Ok(false);
    }
    let types = controller.types();
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(types)?);
    } else if types.is_empty() {
        println!("No types yet.");
    } else {
        for tag in types {
            println!("{tag}");
        }
    }
    Ok(true)
}

pub fn handle_add(
    ctx: &Context,
    title: String,
    overview: String,
    url: String,
    tags: Vec<String>,
) -> Result<bool> {
    let sink = TerminalSink::new();
    let mut controller = controller(ctx, &sink);

    let session = controller.draft_mut();
    session.open();
    let draft = session.draft_mut();
    draft.title = title;
    draft.overview = overview;
    draft.url = url;
    for tag in &tags {
        draft.toggle_type(tag);
    }

    let created = controller.submit_draft().context("cannot submit resource")?;
    if created && ctx.json {
        print_links(ctx, controller.links())?;
    }
    Ok(created)
}

pub fn handle_delete(ctx: &Context, id: i64) -> Result<bool> {
    let sink = TerminalSink::new();
    let mut controller = controller(ctx, &sink);

    let deleted = controller.delete_link(id);
    if deleted && ctx.json {
        print_links(ctx, controller.links())?;
    }
    Ok(deleted)
}

fn print_links(ctx: &Context, links: &[Link]) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(links)?);
        return Ok(());
    }

    if links.is_empty() {
        println!("No learning resources yet.");
        return Ok(());
    }
    for link in links {
        println!("#{} {} [{}]", link.id, link.title, link.types.join(", "));
        println!("    {}", link.overview);
        println!("    {}", link.url);
        println!("    added {}", link.created_at);
    }
    Ok(())
}
