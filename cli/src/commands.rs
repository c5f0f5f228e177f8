use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "linkshelf")]
#[command(version, about = "Keep track of tagged learning resources")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = linkshelf_core::BASE_URL_ENV)]
    pub api_url: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log requests and refreshes to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List resources, optionally narrowed by type and search text
    List {
        /// Only resources carrying this type
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        link_type: Option<String>,

        /// Free-text search over title, overview and url
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// List every known type
    Types,

    /// Add a new resource
    Add {
        /// Resource title
        title: String,

        /// Short description
        #[arg(long, short = 'o')]
        overview: String,

        /// Absolute URL of the resource
        #[arg(long, short = 'u')]
        url: String,

        /// Types (can be specified multiple times; repeating one removes it)
        #[arg(long = "tag", short = 't')]
        tags: Vec<String>,
    },

    /// Delete a resource by id
    Delete {
        /// Resource id
        id: i64,
    },
}
