use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use artist_marketplace::{
    logging, ArtistCatalog, FilterSpec, Marketplace, OnboardingForm, QueryParams,
};

#[derive(Parser)]
#[command(name = "marketplace", version, about = "Browse the artist catalog from the terminal")]
struct Cli {
    /// JSON file with the artist catalog (built-in seed artists if omitted)
    #[arg(long, env = "MARKETPLACE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Base log level (RUST_LOG overrides)
    #[arg(long, env = "MARKETPLACE_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List artists matching the given filters
    List {
        /// Search text (name or description)
        #[arg(short, long)]
        query: Option<String>,
        /// Comma-separated categories, or "all"
        #[arg(short, long)]
        category: Option<String>,
        /// Location substring, e.g. a region code like "CA"
        #[arg(short, long)]
        location: Option<String>,
        /// Price band: all, low, medium, high
        #[arg(short, long)]
        price: Option<String>,
        /// Sort key: name, price, rating
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// Show the values offered by the category and location filters
    Options,
    /// Show dashboard statistics
    Stats,
    /// Submit a sample onboarding application and show the dashboard
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(Some(cli.log_level.as_str()));

    let catalog = match &cli.catalog {
        Some(path) => ArtistCatalog::from_file(path)?,
        None => ArtistCatalog::with_defaults(),
    };
    let mut market = Marketplace::new(catalog);

    match cli.command.unwrap_or(Command::List {
        query: None,
        category: None,
        location: None,
        price: None,
        sort: None,
    }) {
        Command::List {
            query,
            category,
            location,
            price,
            sort,
        } => {
            let params = QueryParams {
                q: query,
                category,
                location,
                price,
                sort,
            };
            run_list(&market, &params)?;
        }
        Command::Options => run_options(&market),
        Command::Stats => run_stats(&market),
        Command::Demo => run_demo(&mut market)?,
    }

    Ok(())
}

fn run_list(market: &Marketplace, params: &QueryParams) -> Result<()> {
    let spec = FilterSpec::from_params(params)?;
    let result = market.search(&spec);

    println!("🎤 Find Your Perfect Artist");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}\n", result.summary());

    if result.artists.is_empty() {
        println!("No artists found. Try adjusting your search criteria.");
        return Ok(());
    }

    for artist in &result.artists {
        let mut skills: Vec<String> = artist.skills.iter().take(3).cloned().collect();
        if artist.skills.len() > 3 {
            skills.push(format!("+{} more", artist.skills.len() - 3));
        }

        println!(
            "{:<18} {:<10} {:<18} ${:>6} ★ {:.1}",
            artist.name, artist.category, artist.location, artist.price, artist.rating
        );
        if !skills.is_empty() {
            println!("    {}", skills.join(" · "));
        }
    }

    Ok(())
}

fn run_options(market: &Marketplace) {
    let options = market.filter_options();

    println!("📂 Categories: {}", options.categories.join(", "));
    println!("📍 Locations:  {}", options.regions.join(", "));

    let prices: Vec<String> = options
        .price_bands
        .iter()
        .map(|option| format!("{} ({})", option.value, option.label))
        .collect();
    println!("💲 Prices:     {}", prices.join(", "));
}

fn run_stats(market: &Marketplace) {
    let stats = market.dashboard_stats(&chrono::Local::now());

    println!("📊 Manager Dashboard");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Total Artists:     {}", stats.total_artists);
    println!("New Applications:  {}", stats.total_submissions);
    println!("This Month:        {}", stats.submissions_this_month);
    println!("Avg. Rate:         ${}", stats.average_price);
}

fn run_demo(market: &mut Marketplace) -> Result<()> {
    let mut form = OnboardingForm {
        name: "Alex Rivera".to_string(),
        email: "alex@example.com".to_string(),
        location: "San Diego, CA".to_string(),
        price: Some(450.0),
        description: "Singer and salsa dancer for weddings and parties".to_string(),
        experience: "3-5 years".to_string(),
        ..OnboardingForm::default()
    };
    form.toggle_category("Singers");
    form.toggle_category("Dancers");
    form.toggle_language("English");
    form.toggle_language("Spanish");

    let submission = market.submit_onboarding(&form)?;
    println!(
        "✓ Application submitted: {} ({}) at {}",
        submission.name,
        submission.category,
        submission.submitted_at.format("%b %d, %Y %H:%M")
    );
    println!();

    run_stats(market);
    Ok(())
}
