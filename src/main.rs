//! Stocklens CLI: analyze one symbol, compare a few, or scan a
//! portfolio for top buy/sell recommendations.

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use stocklens::config::Config;
use stocklens::models::Period;
use stocklens::services::analysis::{PortfolioEntry, PortfolioReport};
use stocklens::services::{AnalysisReport, AnalysisService, YahooFinanceProvider};

#[derive(Parser, Debug)]
#[command(
    name = "stocklens",
    about = "Stock technical analysis and recommendation system"
)]
struct Cli {
    /// Stock ticker symbol(s) to analyze (e.g. AAPL MSFT GOOGL)
    symbols: Vec<String>,

    /// Time period for analysis
    #[arg(short, long, default_value = "1y")]
    period: Period,

    /// Comma-separated list of symbols (e.g. AAPL,MSFT,GOOGL)
    #[arg(short, long)]
    watchlist: Option<String>,

    /// Analyze as a portfolio and show top buy/sell recommendations
    #[arg(long)]
    portfolio: bool,

    /// Read symbols from a file, one per line ('#' lines ignored)
    #[arg(short = 'f', long)]
    portfolio_file: Option<PathBuf>,

    /// Number of top recommendations to show in portfolio mode
    #[arg(short = 'n', long, default_value_t = 10)]
    top_n: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    stocklens::logging::init_logging();

    let cli = Cli::parse();
    let config = Config::from_env();

    let mut symbols: Vec<String> = match &cli.watchlist {
        Some(list) => list.split(',').map(|s| s.trim().to_uppercase()).collect(),
        None => cli.symbols.iter().map(|s| s.to_uppercase()).collect(),
    };

    if let Some(path) = &cli.portfolio_file {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read portfolio file {}: {e}", path.display()))?;
        symbols.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(str::to_uppercase),
        );
    }

    symbols.retain(|s| !s.is_empty());
    let mut seen = std::collections::HashSet::new();
    symbols.retain(|s| seen.insert(s.clone()));

    if symbols.is_empty() {
        eprintln!("No symbols provided. Pass ticker symbols, --watchlist or --portfolio-file.");
        std::process::exit(1);
    }

    let provider = Arc::new(YahooFinanceProvider::with_base_url(
        config.data_base_url.clone(),
    ));
    let service = AnalysisService::new(provider, config.min_bars);

    if cli.portfolio || symbols.len() > 5 {
        let report = service
            .analyze_portfolio(&symbols, cli.period, cli.top_n)
            .await;
        print_portfolio(&report);
    } else if symbols.len() == 1 {
        match service.analyze(&symbols[0], cli.period).await {
            Ok(report) => print_report(&report),
            Err(e) => {
                eprintln!("Failed to analyze {}: {e}", symbols[0]);
                std::process::exit(1);
            }
        }
    } else {
        let report = service
            .analyze_portfolio(&symbols, cli.period, symbols.len())
            .await;
        print_comparison(&report);
    }

    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "N/A".to_string())
}

fn print_report(report: &AnalysisReport) {
    let s = &report.snapshot;
    println!();
    println!("=== {} ({} bars) ===", report.symbol, report.bars);
    println!("  {:<22} {:>12}", "Current Price", fmt_opt(s.current_price));
    println!("  {:<22} {:>12}", "Change 1d %", fmt_opt(s.change_1d_pct));
    println!("  {:<22} {:>12}", "RSI (14)", fmt_opt(s.rsi));
    println!("  {:<22} {:>12}", "MACD", fmt_opt(s.macd));
    println!("  {:<22} {:>12}", "MACD Signal", fmt_opt(s.macd_signal));
    println!("  {:<22} {:>12}", "SMA (20)", fmt_opt(s.sma_20));
    println!("  {:<22} {:>12}", "SMA (50)", fmt_opt(s.sma_50));
    println!("  {:<22} {:>12}", "SMA (200)", fmt_opt(s.sma_200));
    println!("  {:<22} {:>12}", "BB Upper", fmt_opt(s.bb_upper));
    println!("  {:<22} {:>12}", "BB Lower", fmt_opt(s.bb_lower));
    println!("  {:<22} {:>12}", "ATR (14)", fmt_opt(s.atr));
    println!("  {:<22} {:>12}", "Stoch %K / %D", format!("{} / {}", fmt_opt(s.stoch_k), fmt_opt(s.stoch_d)));

    if let Some(f) = &report.fundamentals {
        println!();
        println!("  {:<22} {:>12}", "P/E", fmt_opt(f.pe_ratio));
        println!("  {:<22} {:>12}", "EPS", fmt_opt(f.eps));
        println!("  {:<22} {:>12}", "Dividend Yield %", fmt_opt(f.dividend_yield));
        println!(
            "  {:<22} {:>12}",
            "Market Cap",
            f.market_cap_display().unwrap_or_else(|| "N/A".to_string())
        );
    }

    let rec = &report.recommendation;
    println!();
    println!(
        "  RECOMMENDATION: {} (score {})",
        rec.classification, rec.score
    );
    println!("  Reasoning:");
    for (i, reason) in rec.reasoning.iter().enumerate() {
        println!("    {}. {}", i + 1, reason);
    }
    println!();
}

fn print_entry_row(index: usize, entry: &PortfolioEntry) {
    println!(
        "  {:>2}. {:<8} {:>10} {:>9}% {:>8} {:<12} {:>5}",
        index,
        entry.symbol,
        fmt_opt(entry.price),
        fmt_opt(entry.change_1d_pct),
        fmt_opt(entry.rsi),
        entry.classification.to_string(),
        entry.score
    );
}

fn print_comparison(report: &PortfolioReport) {
    println!();
    println!("=== COMPARISON RESULTS ===");
    println!(
        "  {:>2}  {:<8} {:>10} {:>10} {:>8} {:<12} {:>5}",
        "#", "Symbol", "Price", "Change %", "RSI", "Class", "Score"
    );
    let mut all: Vec<&PortfolioEntry> = report
        .buy
        .iter()
        .chain(report.hold.iter())
        .chain(report.sell.iter())
        .collect();
    all.sort_by(|a, b| b.score.cmp(&a.score));
    for (i, entry) in all.iter().enumerate() {
        print_entry_row(i + 1, entry);
    }
    print_failures(report);
    println!();
}

fn print_portfolio(report: &PortfolioReport) {
    println!();
    println!("=== TOP {} BUY RECOMMENDATIONS ===", report.buy.len());
    for (i, entry) in report.buy.iter().enumerate() {
        print_entry_row(i + 1, entry);
    }
    if report.buy.is_empty() {
        println!("  (none)");
    }

    println!();
    println!("=== TOP {} SELL RECOMMENDATIONS ===", report.sell.len());
    for (i, entry) in report.sell.iter().enumerate() {
        print_entry_row(i + 1, entry);
    }
    if report.sell.is_empty() {
        println!("  (none)");
    }

    let s = &report.summary;
    println!();
    println!("=== PORTFOLIO SUMMARY ===");
    println!("  Total analyzed: {}", s.total_analyzed);
    println!("  BUY: {}  SELL: {}  HOLD: {}", s.buy_count, s.sell_count, s.hold_count);
    println!("  Average score: {:.2}", s.avg_score);
    if let Some(highest) = &s.highest {
        println!("  Highest: {} ({})", highest.symbol, highest.score);
    }
    if let Some(lowest) = &s.lowest {
        println!("  Lowest: {} ({})", lowest.symbol, lowest.score);
    }

    if !report.buy.is_empty() {
        println!();
        println!("=== DETAILED ANALYSIS: TOP BUYS ===");
        for entry in report.buy.iter().take(3) {
            println!(
                "  {} - {} (score {})",
                entry.symbol, entry.classification, entry.score
            );
            for reason in entry.reasoning.iter().take(3) {
                println!("    - {reason}");
            }
        }
    }

    print_failures(report);
    println!();
}

fn print_failures(report: &PortfolioReport) {
    if !report.failed.is_empty() {
        println!();
        println!(
            "  Failed to analyze {} symbol(s): {}",
            report.failed.len(),
            report.failed.join(", ")
        );
    }
}
