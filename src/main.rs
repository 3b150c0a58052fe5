//! tailframe demo renderer.
//!
//! Renders a sample page to stdout. Set `RUST_LOG=tailframe=debug` to see the
//! layout decisions.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tailframe::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tailframe", version, about = "Render a sample tailframe page as HTML")]
struct Args {
    /// Theme file (TOML) overriding the default style tokens.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Show a header band with this title.
    #[arg(long)]
    header: Option<String>,

    /// Leave the footer out.
    #[arg(long)]
    no_footer: bool,

    /// Author named in the footer.
    #[arg(long, default_value = "Author")]
    author: String,

    /// Number of cards in the sample grid.
    #[arg(long, default_value_t = 3)]
    cards: usize,

    /// Explicit grid column classes.
    #[arg(long)]
    columns: Option<String>,

    /// Copyright year instead of the system clock's.
    #[arg(long)]
    year: Option<i32>,

    /// Indent the output, one node per line.
    #[arg(long)]
    pretty: bool,

    /// Print the effective theme as TOML and exit.
    #[arg(long)]
    print_theme: bool,
}

fn sample_page(args: &Args) -> Page {
    let cards: Children = (1..=args.cards)
        .map(|i| Box::new(Text::plain(format!("Card {i}"))) as Node)
        .collect();
    let mut grid = Grid::new().with_children(cards);
    if let Some(columns) = &args.columns {
        grid = grid.with_columns(columns.clone());
    }

    let mut page = Page::new()
        .disable_footer(args.no_footer)
        .with_footer(Footer::new().with_author(Author::new(args.author.clone())))
        .with_child(Element::new().with_title("tailframe").with_child(grid));
    if let Some(title) = &args.header {
        page = page
            .enable_header(true)
            .with_header(Header::new().with_title(title.clone()));
    }
    page
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let theme = match &args.theme {
        Some(path) => Theme::load(path)
            .with_context(|| format!("loading theme from {}", path.display()))?,
        None => Theme::default(),
    };

    if args.print_theme {
        print!("{}", theme.to_toml_string()?);
        return Ok(());
    }

    let mut cx = RenderContext::new().with_theme(theme);
    if let Some(year) = args.year {
        cx = cx.with_clock(FixedClock(year));
    }

    let dom = render(&sample_page(&args), &cx);
    tracing::info!(nodes = dom.len(), "rendered sample page");

    let html = if args.pretty {
        to_pretty_html(&dom)
    } else {
        to_html(&dom)
    };
    println!("{html}");
    Ok(())
}
