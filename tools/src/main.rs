//! ftz-calc: headless front end for the FTZ savings calculator.
//!
//! Usage:
//!   ftz-calc --data-dir ./data --scenario data/scenarios/reference.json
//!   ftz-calc --csv summary.csv --report report.txt
//!   ftz-calc --ask "what is my roi"
//!   ftz-calc --chat

mod export;

use anyhow::Result;
use ftz_core::{
    config::ModelConfig,
    cost_model::{ComparisonRow, DerivedFigures},
    format::{accounting, usd},
    insights::Insights,
    params::InputParameters,
    session::Session,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    params: &'a InputParameters,
    figures: &'a DerivedFigures,
    rows: [ComparisonRow; 13],
    insights: Insights,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = arg_value(&args, "--data-dir").unwrap_or("./data");
    let scenario = arg_value(&args, "--scenario");
    let csv_path = arg_value(&args, "--csv");
    let report_path = arg_value(&args, "--report");
    let question = arg_value(&args, "--ask");
    let json = args.iter().any(|a| a == "--json");
    let chat = args.iter().any(|a| a == "--chat");

    let config = load_config(data_dir)?;
    let params = match scenario {
        Some(path) => InputParameters::load(path)?.clamped(),
        None => InputParameters::default(),
    };

    let mut session = Session::new(config, params);

    if json {
        let report = JsonReport {
            params: session.params(),
            figures: session.figures(),
            rows: session.figures().rows(),
            insights: session.insights(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if question.is_none() && !chat {
        print_summary(&session);
    }

    if let Some(path) = csv_path {
        export::save_comparison_csv(session.figures(), path)?;
        log::info!("comparison table written to {path}");
    }
    if let Some(path) = report_path {
        export::save_report(session.figures(), path)?;
        log::info!("summary report written to {path}");
    }

    if let Some(q) = question {
        match session.ask(q) {
            Some(answer) => println!("{answer}"),
            None => log::warn!("empty question ignored"),
        }
    }

    if chat {
        run_chat_loop(&mut session)?;
    }

    Ok(())
}

/// The data directory is optional; without a config file the built-in
/// regulatory defaults apply.
fn load_config(data_dir: &str) -> Result<ModelConfig> {
    let path = format!("{data_dir}/model_config.json");
    if Path::new(&path).exists() {
        Ok(ModelConfig::load(data_dir)?)
    } else {
        log::warn!("{path} not found, using built-in defaults");
        Ok(ModelConfig::default())
    }
}

fn run_chat_loop(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    writeln!(stdout, "FTZ Chatbot Assistant. Type 'reset' to clear, 'quit' to exit.")?;
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        match buffer.trim() {
            "quit" | "exit" => break,
            "reset" => {
                session.reset();
                writeln!(stdout, "(conversation cleared)")?;
            }
            line => {
                if let Some(answer) = session.ask(line) {
                    writeln!(stdout, "AI: {answer}")?;
                }
            }
        }
    }

    let turns = session.transcript().len();
    log::info!("chat ended after {turns} turns");
    Ok(())
}

fn print_summary(session: &Session) {
    let f = session.figures();
    let p = session.params();

    println!("FTZ Savings Calculator");
    println!("  shipments/week:     {}", p.shipments_per_week);
    println!("  avg value/entry:    {}", usd(p.avg_import_value));
    println!("  avg duty:           {:.2}%", p.avg_duty_pct);
    println!("  total imported:     {}", usd(f.total_import_value));
    println!();

    println!("=== FTZ COST COMPARISON ===");
    println!(
        "  {:<32} {:>16} {:>16} {:>16}",
        "Category", "Without FTZ", "With FTZ", "FTZ Savings"
    );
    for row in f.rows() {
        println!(
            "  {:<32} {:>16} {:>16} {:>16}",
            row.item.label(),
            accounting(row.without_ftz),
            accounting(row.with_ftz),
            accounting(row.savings)
        );
    }

    println!();
    println!("=== INSIGHTS ===");
    println!("{}", session.insights().render());
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
