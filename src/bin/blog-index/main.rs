use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use spdlog::{info, warn};

use blog_index::config::Config;
use blog_index::logger::configure_logger;
use blog_index::server::server_run;
use blog_index::store_file::StoreFile;
use blog_index::view::list_renderer::render_text;
use blog_index::view::search_page::SearchPage;
use blog_index::{DetailsTag, SearchIndex, SearchQuery};

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "blog-index.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long, global = true)]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search posts by text, category and tag
    Query(QueryArgs),
    /// List tags and categories with their post count
    Facets(IndexArgs),
    /// Wrap the text read from stdin in a details block
    Details(DetailsArgs),
    /// Expand every details block of a file
    Expand(ExpandArgs),
    /// Validate an index and write it back in store format
    Normalize(NormalizeArgs),
    /// Serve the search endpoint
    Serve,
}

#[derive(ClapArgs, Debug)]
struct IndexArgs {
    /// Search store file. Defaults to index.path from the configuration
    #[arg(short, long)]
    index: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct QueryArgs {
    #[command(flatten)]
    index: IndexArgs,

    /// Only posts in one of these categories
    #[arg(long)]
    category: Vec<String>,

    /// Only posts with one of these tags
    #[arg(long)]
    tag: Vec<String>,

    /// Result page, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: u32,

    /// Print the result page as JSON
    #[arg(long)]
    json: bool,

    /// Free text query
    words: Vec<String>,
}

#[derive(ClapArgs, Debug)]
struct DetailsArgs {
    /// Summary line of the block
    #[arg(short, long)]
    label: Option<String>,

    /// Render the body as markdown
    #[arg(short, long)]
    markdown: bool,
}

#[derive(ClapArgs, Debug)]
struct ExpandArgs {
    /// Render block bodies as markdown
    #[arg(short, long)]
    markdown: bool,

    /// Where to write the result. Stdout if empty
    #[arg(short, long)]
    output: Option<PathBuf>,

    file: PathBuf,
}

#[derive(ClapArgs, Debug)]
struct NormalizeArgs {
    #[command(flatten)]
    index: IndexArgs,

    /// Destination file
    #[arg(short, long)]
    output: PathBuf,

    /// Write a bare JSON array instead of the `var store = ...` script
    #[arg(long)]
    json: bool,
}

fn load_index(config: Option<&Config>, args: &IndexArgs) -> Result<SearchIndex> {
    let path = match (&args.index, config) {
        (Some(path), _) => path.clone(),
        (None, Some(config)) => config.index.path.clone(),
        (None, None) => return Err(anyhow!("No index given. Use --index or add [index] to {}", CFG_FILE_NAME)),
    };

    SearchIndex::load_file(&path)
        .with_context(|| format!("Could not load search index {}", path.display()))
}

fn details_tag(config: Option<&Config>, markdown: bool) -> Result<DetailsTag<'static>> {
    let details = config.map(|c| &c.details);
    let render_markdown = markdown || details.is_some_and(|d| d.render_markdown);

    match details.and_then(|d| d.template.as_ref()) {
        Some(tpl_path) => {
            let tpl_src = fs::read_to_string(tpl_path)
                .with_context(|| format!("Could not read details template {}", tpl_path.display()))?;
            Ok(DetailsTag::from_source(tpl_src, render_markdown)?)
        }
        None => Ok(DetailsTag::with_default_template(render_markdown)?),
    }
}

fn query_cmd(config: Option<&Config>, args: QueryArgs) -> Result<()> {
    let index = load_index(config, &args.index)?;
    let query = SearchQuery {
        text: args.words.join(" "),
        categories: args.category,
        tags: args.tag,
    };
    let results = index.search(&query);

    let page_size = config.map(|c| c.search.page_size).unwrap_or(10);
    let page = SearchPage::new(&results, args.page, page_size);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", render_text(&page));
    }
    Ok(())
}

fn facets_cmd(config: Option<&Config>, args: IndexArgs) -> Result<()> {
    let index = load_index(config, &args)?;

    println!("Tags:");
    for (tag, count) in index.tag_counts() {
        println!("  {:<20} {}", tag, count);
    }
    println!("Categories:");
    for (category, count) in index.category_counts() {
        println!("  {:<20} {}", category, count);
    }
    Ok(())
}

fn details_cmd(config: Option<&Config>, args: DetailsArgs) -> Result<()> {
    let tag = details_tag(config, args.markdown)?;
    let mut body = String::new();
    std::io::stdin().read_to_string(&mut body)?;

    print!("{}", tag.render(args.label.as_deref(), &body));
    Ok(())
}

fn expand_cmd(config: Option<&Config>, args: ExpandArgs) -> Result<()> {
    let tag = details_tag(config, args.markdown)?;
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("Could not read {}", args.file.display()))?;
    let expanded = tag.expand(&source);

    match args.output {
        Some(output) => fs::write(&output, expanded)
            .with_context(|| format!("Could not write {}", output.display()))?,
        None => print!("{}", expanded),
    }
    Ok(())
}

fn normalize_cmd(config: Option<&Config>, args: NormalizeArgs) -> Result<()> {
    let index = load_index(config, &args.index)?;
    let written = if args.json {
        fs::write(&args.output, index.to_json()?)
    } else {
        StoreFile::write_js(&args.output, &index)
    };
    written.with_context(|| format!("Could not write {}", args.output.display()))?;

    info!("Wrote {} posts to {}", index.len(), args.output.display());
    Ok(())
}

async fn serve_cmd(config: Option<Config>) -> Result<()> {
    let Some(config) = config else {
        return Err(anyhow!("Could not find {}. Please run blog-index --help", CFG_FILE_NAME));
    };

    let index = load_index(Some(&config), &IndexArgs { index: None })?;
    info!("Starting blog-index =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    server_run(&config, index).await?;
    Ok(())
}

#[ntex::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = open_config(args.config_path)?;

    if let Err(err) = configure_logger(config.as_ref().and_then(|c| c.log.as_ref())) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match args.command {
        Command::Query(query_args) => query_cmd(config.as_ref(), query_args),
        Command::Facets(index_args) => facets_cmd(config.as_ref(), index_args),
        Command::Details(details_args) => details_cmd(config.as_ref(), details_args),
        Command::Expand(expand_args) => expand_cmd(config.as_ref(), expand_args),
        Command::Normalize(normalize_args) => normalize_cmd(config.as_ref(), normalize_args),
        Command::Serve => serve_cmd(config).await,
    }
}
