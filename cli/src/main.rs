use clap::Parser;
use linkshelf::{handle_add, handle_delete, handle_list, handle_types, Cli, Commands, Context};
use linkshelf_core::ClientConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    // .env must be loaded before clap reads LINKSHELF_API_URL.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context {
        config: ClientConfig::from_optional(cli.api_url.as_deref()),
        json: cli.json,
    };

    let result = match cli.command {
        Commands::List { link_type, search } => handle_list(&ctx, link_type, search),
        Commands::Types => handle_types(&ctx),
        Commands::Add {
            title,
            overview,
            url,
            tags,
        } => handle_add(&ctx, title, overview, url, tags),
        Commands::Delete { id } => handle_delete(&ctx, id),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
