use std::{env, error::Error, path::PathBuf, process};

use chrono::Local;
use colored::Colorize;
use rust_decimal::Decimal;

use mycash_core::{
    config::{Config, ConfigManager},
    core::services::{DashboardSummary, SummaryService},
    derivations::MemberLabel,
    domain::Displayable,
    init,
    storage::{FinanceRepository, JsonRepository, MemoryRepository},
    utils::{
        build_info,
        format::{format_date, format_money, LocaleFormat},
    },
    FinanceManager, FinanceStore, LoadReport,
};

const CONFIG_DIR_ENV: &str = "MYCASH_CONFIG_DIR";

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

#[derive(Debug, Default)]
struct Options {
    data: Option<PathBuf>,
    sample: bool,
    month: Option<String>,
    version: bool,
    help: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let path = args.next().ok_or("--data expects a file path")?;
                options.data = Some(PathBuf::from(path));
            }
            "--month" => {
                options.month = Some(args.next().ok_or("--month expects YYYY-MM")?);
            }
            "--sample" => options.sample = true,
            "--version" | "-V" => options.version = true,
            "--help" | "-h" => options.help = true,
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(options)
}

fn run() -> Result<(), Box<dyn Error>> {
    let options = parse_args(env::args().skip(1))?;
    if options.help {
        print_usage();
        return Ok(());
    }
    if options.version {
        println!("{}", build_info::current().summary());
        return Ok(());
    }

    let config = load_config()?;
    let data_file = options.data.clone().or_else(|| config.data_file.clone());
    let repository: Box<dyn FinanceRepository> = match data_file {
        Some(path) => Box::new(JsonRepository::new(path)),
        None => Box::new(MemoryRepository::new()),
    };

    let mut manager = FinanceManager::new(repository);
    let report = manager.load(options.sample || config.seed_sample_data)?;
    let store = manager.store()?;

    let period = match options.month.as_deref() {
        Some(month) => SummaryService::month_period(month)?,
        None => store.active_period(Local::now().date_naive()),
    };
    let summary = SummaryService::dashboard(store, &config, period);
    print_report(store, &summary, &report, &config);
    Ok(())
}

fn load_config() -> Result<Config, Box<dyn Error>> {
    let manager = match env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => ConfigManager::with_base_dir(PathBuf::from(dir)),
        None => ConfigManager::new()?,
    };
    let config = manager.load()?;
    tracing::debug!(path = %manager.path().display(), "configuration loaded");
    Ok(config)
}

fn print_report(
    store: &FinanceStore,
    summary: &DashboardSummary<'_>,
    report: &LoadReport,
    config: &Config,
) {
    let locale = LocaleFormat::for_tag(&config.locale);
    let money = |amount: Decimal| format_money(amount, &config.currency, &locale);
    let period = summary.totals.period;

    println!(
        "{}",
        format!(
            "=== MyCash: {} to {} ===",
            format_date(period.start, &locale),
            format_date(period.end, &locale)
        )
        .bold()
    );
    println!("Source: {} ({} records)", report.source, report.records);

    section("Overview");
    println!("Total balance  {}", money(summary.totals.balance).bold());
    println!("Income         {}", money(summary.totals.income).bright_green());
    println!("Expenses       {}", money(summary.totals.expenses).bright_red());
    let net = money(summary.totals.net);
    if summary.totals.net.is_sign_negative() {
        println!("Net            {}", net.bright_red());
    } else {
        println!("Net            {}", net.bright_green());
    }

    section("Spending by category");
    if summary.categories.is_empty() {
        println!("{}", "No expenses in this period.".dimmed());
    }
    for slice in &summary.categories {
        println!(
            "{:<14} {:>16} {:>7}%",
            slice.name,
            money(slice.total),
            slice.share.round_dp(1)
        );
    }

    section("Upcoming expenses");
    if summary.upcoming.is_empty() {
        println!("{}", "Nothing pending.".dimmed());
    }
    for txn in &summary.upcoming {
        let who = match store.member_label(txn.member_id) {
            MemberLabel::Shared => "Shared".to_string(),
            MemberLabel::Named(name) => name.to_string(),
            MemberLabel::Unknown => "Unknown".to_string(),
        };
        println!(
            "{}  {:<24} {:>16}  {}",
            format_date(txn.date, &locale),
            txn.description,
            money(txn.amount).bright_yellow(),
            who.dimmed()
        );
    }

    section("Cards");
    if summary.cards.is_empty() {
        println!("{}", "No cards registered.".dimmed());
    }
    for card in summary.cards {
        let usage = card
            .usage_percent()
            .map(|pct| format!("{}%", pct.round_dp(1)))
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<24} bill {} of {} ({usage} used, due day {})",
            card.display_label(),
            money(card.current_bill),
            money(card.limit),
            card.due_day
        );
    }

    section("Goals");
    if summary.goals.is_empty() {
        println!("{}", "No goals yet.".dimmed());
    }
    for goal in summary.goals {
        let progress = goal
            .progress_percent()
            .map(|pct| format!("{}%", pct.round_dp(1)))
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<24} {} of {} ({progress}) by {}",
            goal.title,
            money(goal.current_amount),
            money(goal.target_amount),
            format_date(goal.deadline, &locale)
        );
    }
}

fn section(title: &str) {
    println!("\n{}", format!("--- {title} ---").bold());
}

fn print_usage() {
    println!("Usage: mycash [--data <file>] [--sample] [--month YYYY-MM] [--version]");
    println!();
    println!("  --data <file>     Read finance data from a JSON file");
    println!("  --sample          Start from the sample household when no data exists");
    println!("  --month YYYY-MM   Report on a whole calendar month");
    println!("  --version         Print build information");
}
