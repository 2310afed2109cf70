use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use shared::{
    pick_problems, CatalogClient, Config, NotionRecorder, Schedule, SelectedProblem,
    SelectionCriteria, SlackNotifier,
};

#[derive(Parser)]
#[command(name = "send-problems")]
#[command(about = "Select today's practice problems and publish them to Slack and Notion")]
struct Args {
    /// Run as if today were this date (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Select and print problems without publishing to any sink
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    let schedule = Schedule::default();

    let today = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let context = schedule.day_context(today);
    let criteria = SelectionCriteria::for_context(&context);

    println!(
        "📅 {} is day {} of the rotation: {} {} problem(s) tagged \"{}\"",
        today,
        context.day_offset,
        criteria.count,
        criteria.difficulty.label(),
        context.rotation_tag
    );

    println!("\n📚 Fetching problem catalog...");
    let catalog_client = CatalogClient::new()?;
    let catalog = catalog_client
        .fetch_all()
        .await
        .context("Failed to fetch problem catalog")?;
    println!("✓ Loaded {} problems", catalog.len());

    let picked = pick_problems(&catalog, &criteria);
    if picked.len() < criteria.count {
        println!(
            "⚠ Only {} problem(s) available at {} difficulty",
            picked.len(),
            criteria.difficulty.label()
        );
    }

    let selected: Vec<SelectedProblem> = picked
        .iter()
        .map(|p| SelectedProblem::from_problem(p, &context.rotation_tag))
        .collect();

    println!("\n✓ Selected {} problem(s):", selected.len());
    for problem in &selected {
        println!(
            "  • {} ({}) {}",
            problem.title, problem.display_difficulty, problem.url
        );
    }

    if args.dry_run {
        println!("\n✅ Dry run complete, nothing published.");
        return Ok(());
    }

    println!("\n💬 Posting to Slack...");
    let slack = SlackNotifier::new(config.slack_webhook_url.clone())?;
    slack
        .publish(&selected)
        .await
        .context("Failed to post to Slack")?;
    println!("✓ Slack message sent");

    println!("\n🗃  Recording in Notion...");
    let notion = NotionRecorder::new(config.notion_token.clone(), config.notion_database_id.clone())?;
    notion
        .publish(&selected)
        .await
        .context("Failed to record in Notion")?;

    println!("\n✅ Done! Published {} problem(s).", selected.len());

    Ok(())
}
