use galleria::catalog::{load_catalog, MediaKind};
use galleria::query::criteria::{FilterCriteria, KindFilter, SortMode};
use galleria::query::pagination::PageToken;
use galleria::session::GallerySession;
use galleria::viewer::{HistoryPort, InMemoryHistory};
use galleria::{config, error};
use pico_args;

struct Args {
    catalog_url: Option<String>,
    search: Option<String>,
    kind: Option<String>,
    date: Option<String>,
    model: Option<String>,
    aspect: Option<String>,
    tag: Option<String>,
    sort: Option<String>,
    page: Option<usize>,
    view: Option<String>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Args {
        catalog_url: args.opt_value_from_str("--catalog")?,
        search: args.opt_value_from_str("--search")?,
        kind: args.opt_value_from_str("--type")?,
        date: args.opt_value_from_str("--date")?,
        model: args.opt_value_from_str("--model")?,
        aspect: args.opt_value_from_str("--aspect")?,
        tag: args.opt_value_from_str("--tag")?,
        sort: args.opt_value_from_str("--sort")?,
        page: args.opt_value_from_str("--page")?,
        view: args.opt_value_from_str("--view")?,
    })
}

fn criteria_from_args(args: &Args) -> FilterCriteria {
    FilterCriteria {
        search: args.search.clone().unwrap_or_default(),
        kind: match args.kind.as_deref() {
            Some("image") => KindFilter::Only(MediaKind::Image),
            Some("video") => KindFilter::Only(MediaKind::Video),
            Some("music") => KindFilter::Only(MediaKind::Music),
            _ => KindFilter::All,
        },
        date_prefix: args.date.clone(),
        model: args.model.clone(),
        aspect: args.aspect.clone(),
        active_tag: args.tag.clone(),
        sort: match args.sort.as_deref() {
            Some("oldest") => SortMode::Oldest,
            Some("name-asc") => SortMode::NameAsc,
            Some("name-desc") => SortMode::NameDesc,
            _ => SortMode::Newest,
        },
    }
}

#[tokio::main]
async fn main() -> error::Result<()> {
    let args = parse_args().map_err(|e| error::Error::Config(e.to_string()))?;

    let config = config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load settings, using defaults: {e}");
        config::Config::default()
    });

    let catalog = load_catalog(args.catalog_url.as_deref()).await;
    let mut session = GallerySession::new(catalog, &config, InMemoryHistory::new());
    session.on_filter_changed(criteria_from_args(&args));
    if let Some(page) = args.page {
        session.on_page_requested(page);
    }
    if let Some(id) = &args.view {
        session.history_mut().push(Some(id));
        session.restore_from_history();
    }

    let frame = session.render();
    if frame.empty {
        println!("No items match the current filters.");
        return Ok(());
    }

    println!(
        "Page {} of {} ({} items total)",
        session.current_page(),
        session.total_pages(),
        frame.total_filtered
    );
    for item in &frame.items {
        println!(
            "  [{}] {} - {} ({})",
            item.kind,
            item.name,
            item.created,
            item.id
        );
    }

    if let Some(controls) = &frame.pagination {
        let strip: Vec<String> = controls
            .tokens
            .iter()
            .map(|token| match token {
                PageToken::Page { number, active: true } => format!("[{number}]"),
                PageToken::Page { number, active: false } => number.to_string(),
                PageToken::Ellipsis => "...".to_string(),
            })
            .collect();
        println!("Pages: {}", strip.join(" "));
    }

    if frame.viewer.open {
        if let Some(item) = &frame.viewer.current_item {
            println!();
            println!("Viewing: {} ({})", item.name, item.id);
            println!("  Model: {}", item.display_model());
            println!("  Prompt: {}", item.display_prompt());
        }
    }

    Ok(())
}
