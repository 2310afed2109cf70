use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use shared::{Schedule, SelectionCriteria};

#[derive(Parser)]
#[command(name = "preview-schedule")]
#[command(about = "Print the upcoming rotation schedule without publishing anything")]
struct Args {
    /// First date to preview (defaults to today)
    #[arg(short, long)]
    from: Option<NaiveDate>,

    /// Number of days to preview
    #[arg(short, long, default_value = "14")]
    days: i64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let schedule = Schedule::default();
    let start = args.from.unwrap_or_else(|| Utc::now().date_naive());

    println!(
        "Rotation schedule from {} (epoch {}):\n",
        start, schedule.epoch
    );

    for i in 0..args.days {
        let date = start + Duration::days(i);
        let context = schedule.day_context(date);
        let criteria = SelectionCriteria::for_context(&context);

        println!(
            "  {}  day {:>4}  {:<13} {} x{}",
            date,
            context.day_offset,
            context.rotation_tag,
            criteria.difficulty.label(),
            criteria.count
        );
    }

    Ok(())
}
