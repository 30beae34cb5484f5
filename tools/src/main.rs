//! pricewatch: headless runner for the PriceWatch dashboard.
//!
//! Usage:
//!   pricewatch --file menu_prices.csv --region Karnataka
//!   pricewatch --config pricewatch.json --seed 42 --ipc-mode

use anyhow::Result;
use pricewatch_core::{
    command::DashboardCommand,
    config::DashboardConfig,
    dashboard::Dashboard,
    session::Session,
    snapshot::{DashboardState, RenderedNotice},
    view::derive_region,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetState,
    Command { command: DashboardCommand },
    Quit,
}

#[derive(serde::Serialize)]
struct IpcResponse {
    notices: Vec<RenderedNotice>,
    state:   DashboardState,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let seed = parse_arg(&args, "--seed", seed_from_time());

    let mut config = match flag_value(&args, "--config") {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(file) = flag_value(&args, "--file") {
        config.data_file = file.to_string();
    }
    config.validate()?;

    if !ipc_mode {
        println!("PriceWatch - restaurant price intelligence");
        println!("  file:  {}", config.data_file);
        println!("  seed:  {seed}");
        println!();
    }

    let mut dashboard = Dashboard::new(config, seed);

    if ipc_mode {
        let mut session = dashboard.open_session();
        run_ipc_loop(&mut dashboard, &mut session)?;
    } else {
        print_summary(&dashboard, flag_value(&args, "--region"))?;
    }

    Ok(())
}

fn run_ipc_loop(dashboard: &mut Dashboard, session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        let notices = match request {
            IpcRequest::Quit => break,
            IpcRequest::GetState => Vec::new(),
            IpcRequest::Command { command } => match dashboard.handle(session, command) {
                Ok(notices) => notices,
                Err(e) => {
                    log::error!("interaction failed: {e}");
                    write_error(&mut stdout, &e.to_string())?;
                    continue;
                }
            },
        };

        match dashboard.state(session) {
            Ok(state) => {
                let response = IpcResponse {
                    notices: notices.iter().map(RenderedNotice::from).collect(),
                    state,
                };
                writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            }
            Err(e) => write_error(&mut stdout, &e.to_string())?,
        }
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(out: &mut impl Write, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{err_json}")?;
    out.flush()?;
    Ok(())
}

fn print_summary(dashboard: &Dashboard, only_region: Option<&str>) -> Result<()> {
    let table = dashboard.store().load()?;
    if table.is_empty() {
        println!("  (no prices yet - run with --ipc-mode and send load_demo)");
        return Ok(());
    }

    let ratio = dashboard.config().suggested_ratio;
    for region in table.regions() {
        if only_region.is_some_and(|r| r != region) {
            continue;
        }
        let rows = derive_region(&table, region, ratio)?;
        println!("=== {region} ({} dishes) ===", rows.len());
        println!(
            "  {:<14} {:>9} {:>9} {:>9} {:>9} {:>10}  {}",
            "dish", "yours", "swiggy", "zomato", "avg", "suggested", "date"
        );
        for row in &rows {
            let r = &row.record;
            println!(
                "  {:<14} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>10.2}  {}",
                r.dish,
                r.own_price,
                r.competitor_a_price,
                r.competitor_b_price,
                row.market_average,
                row.suggested_price,
                r.recorded_date
            );
        }
        println!();
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    flag_value(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn seed_from_time() -> u64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}
