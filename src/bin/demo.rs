//! PowerBill Tracker - Demo CLI
//!
//! Scripted walkthrough of the ledger, reports, savings advice and bill
//! projection, using the reference appliance set.

use powerbill_tracker_lib::core::Session;
use powerbill_tracker_lib::i18n::I18n;
use powerbill_tracker_lib::shell::Shell;

const SCRIPT: &[&str] = &[
    "rates",
    "add Fan 6",
    "add Air Conditioner 5",
    "add Refrigerator 8",
    "add Washing Machine 2",
    "add TV 4",
    "add Heater 3",
    "list",
    "add Air Conditioner 10",
    "add Fan 25",
    "remove Toaster",
    "report",
    "top",
    "advice",
    "advice model",
    "predict 1200 1350 1425",
    "predict 1200 abc 1425",
    "remove Heater",
    "list",
];

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   PowerBill Tracker - Demo");
    println!("==============================================\n");

    let mut shell = Shell::new(Session::new(), I18n::new("auto"), "\u{20B9}");

    for line in SCRIPT {
        println!("> {}", line);
        let output = shell.execute(line);
        println!("{}\n", output.text());
    }

    let snapshot = shell.session().ledger().snapshot();
    match shell.session().report() {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("=== Report as JSON ===\n{}", json),
            Err(e) => eprintln!("Could not serialize report: {}", e),
        },
        Err(e) => eprintln!("No report: {}", e),
    }
    println!("\n{} appliances in the final ledger", snapshot.len());
}
