//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "PowerBill Tracker".into());
    t.insert("app.welcome".into(), "Type 'help' for a list of commands.".into());
    t.insert("app.goodbye".into(), "Goodbye.".into());
    t.insert("app.unknown_command".into(), "Unknown command: {command}".into());
    t.insert("app.usage".into(), "Usage: {usage}".into());

    // Help
    t.insert("help.title".into(), "Commands".into());
    t.insert("help.add".into(), "add <appliance> <hours>   record or update daily hours".into());
    t.insert("help.remove".into(), "remove <appliance>        delete an appliance".into());
    t.insert("help.list".into(), "list                      show recorded appliances".into());
    t.insert("help.report".into(), "report                    usage report with costs and tiers".into());
    t.insert("help.advice".into(), "advice [model]            savings from cutting usage".into());
    t.insert("help.top".into(), "top [n]                   most-used appliances".into());
    t.insert("help.predict".into(), "predict <b1> <b2> <b3>    project next month's bill".into());
    t.insert("help.rates".into(), "rates                     known appliances and rates".into());
    t.insert("help.quit".into(), "quit                      exit".into());

    // Ledger
    t.insert("ledger.saved".into(), "Saved {name}: {hours} hrs/day".into());
    t.insert("ledger.removed".into(), "Removed {name}".into());
    t.insert("ledger.empty".into(), "No appliances recorded yet.".into());
    t.insert("ledger.hours_per_day".into(), "hrs/day".into());

    // Report
    t.insert("report.title".into(), "Appliance Usage Report".into());
    t.insert("report.total_hours".into(), "Total Hours of Appliance Usage".into());
    t.insert("report.total_cost".into(), "Estimated Daily Cost".into());
    t.insert("report.share".into(), "share".into());
    t.insert("report.per_day".into(), "/day".into());

    // Tiers
    t.insert("tier.high".into(), "High usage".into());
    t.insert("tier.moderate".into(), "Moderate usage".into());
    t.insert("tier.efficient".into(), "Efficient".into());

    // Advice
    t.insert("advice.title".into(), "Feedback on Reducing Energy Usage ({basis})".into());
    t.insert("advice.line".into(), "Reduce {name} by {hours} hrs: save {amount} per day".into());

    // Top consumers
    t.insert("top.title".into(), "Top {count} Energy-Consuming Appliances".into());

    // Prediction
    t.insert("predict.result".into(), "Predicted Bill: {amount}".into());
    t.insert("predict.trend.rising".into(), "Bills are rising by {amount} per month".into());
    t.insert("predict.trend.falling".into(), "Bills are falling by {amount} per month".into());
    t.insert("predict.trend.stable".into(), "Bills are stable".into());

    // Rates
    t.insert("rates.title".into(), "Known appliances (cost per hour)".into());
    t.insert("rates.default".into(), "Any other appliance".into());

    // Errors
    t.insert("error.input".into(), "Input error".into());
    t.insert("error.not_found".into(), "Not found".into());
    t.insert("error.no_data".into(), "No data".into());
    t.insert("error.other".into(), "Error".into());

    t
}
