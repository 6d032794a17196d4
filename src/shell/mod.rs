//! Line-oriented text front end
//!
//! Parses one command per line, calls into the session and analytics, and
//! renders the structured results as localized text.

use crate::analytics::{self, project_bill, BillHistory};
use crate::core::{Config, Error, Result, Session, Trend};
use crate::i18n::I18n;
use crate::ledger::parse_hours;
use crate::pricing::{CostEstimator, CostModel};

const DEFAULT_TOP_COUNT: usize = 3;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { name: String, hours: String },
    Remove { name: String },
    List,
    Report,
    Advice { model: bool },
    Top { count: usize },
    Predict { bills: Vec<String> },
    Rates,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line; `Ok(None)` for a blank line
    ///
    /// Appliance names may contain spaces, so `add` takes the hours last.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match verb.to_lowercase().as_str() {
            "add" => match rest.split_last() {
                Some((hours, name)) if !name.is_empty() => Command::Add {
                    name: name.join(" "),
                    hours: hours.to_string(),
                },
                _ => return Err(ParseError::Usage("add <appliance> <hours>")),
            },
            "remove" | "rm" => {
                if rest.is_empty() {
                    return Err(ParseError::Usage("remove <appliance>"));
                }
                Command::Remove { name: rest.join(" ") }
            }
            "list" | "ls" => Command::List,
            "report" => Command::Report,
            "advice" => match rest.as_slice() {
                [] => Command::Advice { model: false },
                ["model"] => Command::Advice { model: true },
                _ => return Err(ParseError::Usage("advice [model]")),
            },
            "top" => match rest.as_slice() {
                [] => Command::Top { count: DEFAULT_TOP_COUNT },
                [n] => match n.parse() {
                    Ok(count) => Command::Top { count },
                    Err(_) => return Err(ParseError::Usage("top [n]")),
                },
                _ => return Err(ParseError::Usage("top [n]")),
            },
            "predict" => Command::Predict {
                bills: rest.iter().map(|s| s.to_string()).collect(),
            },
            "rates" => Command::Rates,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Why a command line could not be parsed
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Unknown(String),
    Usage(&'static str),
}

/// Text produced by one command
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Output {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Interactive session with its presentation settings
pub struct Shell {
    session: Session,
    i18n: I18n,
    currency_symbol: String,
}

impl Shell {
    pub fn new(session: Session, i18n: I18n, currency_symbol: &str) -> Self {
        Self {
            session,
            i18n,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Session::from_config(config)?,
            I18n::new(&config.general.language),
            &config.general.currency_symbol,
        ))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn welcome(&self) -> String {
        format!("{}\n{}", self.i18n.get("app.title"), self.i18n.get("app.welcome"))
    }

    /// Parse and run one line of input
    pub fn execute(&mut self, line: &str) -> Output {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Output::lines(Vec::new()),
            Err(ParseError::Unknown(verb)) => {
                return Output::lines(vec![self
                    .i18n
                    .format("app.unknown_command", &[("command", verb.as_str())])])
            }
            Err(ParseError::Usage(usage)) => {
                return Output::lines(vec![self.i18n.format("app.usage", &[("usage", usage)])])
            }
        };

        if command == Command::Quit {
            return Output {
                lines: vec![self.i18n.get("app.goodbye")],
                quit: true,
            };
        }

        match self.run(command) {
            Ok(lines) => Output::lines(lines),
            Err(e) => {
                log::debug!("Command failed: {}", e);
                Output::lines(vec![self.error_line(&e)])
            }
        }
    }

    fn run(&mut self, command: Command) -> Result<Vec<String>> {
        match command {
            Command::Add { name, hours } => {
                let hours = parse_hours(&hours)?;
                self.session.ledger_mut().add_or_update(&name, u32::from(hours))?;
                let saved = self.i18n.format(
                    "ledger.saved",
                    &[("name", name.trim()), ("hours", hours.to_string().as_str())],
                );
                Ok(vec![saved])
            }
            Command::Remove { name } => {
                self.session.ledger_mut().remove(&name)?;
                Ok(vec![self.i18n.format("ledger.removed", &[("name", name.as_str())])])
            }
            Command::List => Ok(self.list()),
            Command::Report => self.report(),
            Command::Advice { model } => self.advice(model),
            Command::Top { count } => Ok(self.top(count)),
            Command::Predict { bills } => self.predict(&bills),
            Command::Rates => Ok(self.rates()),
            Command::Help => Ok(self.help()),
            Command::Quit => Ok(Vec::new()),
        }
    }

    fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }

    fn list(&self) -> Vec<String> {
        let snapshot = self.session.ledger().snapshot();
        if snapshot.is_empty() {
            return vec![self.i18n.get("ledger.empty")];
        }
        let unit = self.i18n.get("ledger.hours_per_day");
        snapshot
            .iter()
            .map(|e| format!("{} - {} {}", e.name, e.hours_per_day, unit))
            .collect()
    }

    fn report(&self) -> Result<Vec<String>> {
        let report = self.session.report()?;
        let unit = self.i18n.get("ledger.hours_per_day");
        let per_day = self.i18n.get("report.per_day");

        let mut lines = vec![
            self.i18n.get("report.title"),
            format!("{}: {} {}", self.i18n.get("report.total_hours"), report.total_hours, unit),
            format!(
                "{}: {}{}",
                self.i18n.get("report.total_cost"),
                self.money(report.total_daily_cost),
                per_day
            ),
            String::new(),
        ];
        lines.extend(report.lines.iter().map(|line| {
            format!(
                "{}: {} {} ({:.1}% {}) - {}{} - {}",
                line.name,
                line.hours_per_day,
                unit,
                line.percentage,
                self.i18n.get("report.share"),
                self.money(line.daily_cost),
                per_day,
                self.i18n.tier_label(line.tier)
            )
        }));
        Ok(lines)
    }

    fn advice(&self, use_model: bool) -> Result<Vec<String>> {
        let snapshot = self.session.ledger().snapshot();
        let reduce_by = self.session.reduction_hours();

        let model;
        let pricing: &dyn CostEstimator = if use_model {
            model = CostModel::reference()?;
            &model
        } else {
            self.session.rates()
        };

        let tips = analytics::savings_advice(&snapshot, pricing, reduce_by)?;
        let mut lines = vec![self.i18n.format("advice.title", &[("basis", pricing.name())])];
        lines.extend(tips.iter().map(|tip| {
            self.i18n.format(
                "advice.line",
                &[
                    ("name", tip.name.as_str()),
                    ("hours", tip.reduce_by.to_string().as_str()),
                    ("amount", self.money(tip.savings).as_str()),
                ],
            )
        }));
        Ok(lines)
    }

    fn top(&self, count: usize) -> Vec<String> {
        if self.session.ledger().is_empty() {
            return vec![self.i18n.get("ledger.empty")];
        }
        let top = self.session.top_consumers(count);
        let unit = self.i18n.get("ledger.hours_per_day");
        let mut lines = vec![self.i18n.format("top.title", &[("count", top.len().to_string().as_str())])];
        lines.extend(
            top.iter()
                .enumerate()
                .map(|(i, e)| format!("{}. {} - {} {}", i + 1, e.name, e.hours_per_day, unit)),
        );
        lines
    }

    fn predict(&self, bills: &[String]) -> Result<Vec<String>> {
        let history = BillHistory::parse(bills)?;
        let projection = project_bill(&history)?;

        let trend = match projection.trend {
            Trend::Rising => self
                .i18n
                .format("predict.trend.rising", &[("amount", self.money(projection.slope).as_str())]),
            Trend::Falling => self.i18n.format(
                "predict.trend.falling",
                &[("amount", self.money(projection.slope.abs()).as_str())],
            ),
            Trend::Stable => self.i18n.get("predict.trend.stable"),
        };

        Ok(vec![
            self.i18n
                .format("predict.result", &[("amount", self.money(projection.projected).as_str())]),
            trend,
        ])
    }

    fn rates(&self) -> Vec<String> {
        let rates = self.session.rates();
        let mut lines = vec![self.i18n.get("rates.title")];
        lines.extend(
            rates
                .rates()
                .map(|(name, rate)| format!("  {}: {}", name, self.money(rate))),
        );
        lines.push(format!(
            "  {}: {}",
            self.i18n.get("rates.default"),
            self.money(rates.default_rate())
        ));
        lines
    }

    fn help(&self) -> Vec<String> {
        let keys = [
            "help.add",
            "help.remove",
            "help.list",
            "help.report",
            "help.advice",
            "help.top",
            "help.predict",
            "help.rates",
            "help.quit",
        ];
        let mut lines = vec![self.i18n.get("help.title")];
        lines.extend(keys.iter().map(|key| format!("  {}", self.i18n.get(key))));
        lines
    }

    fn error_line(&self, error: &Error) -> String {
        let label = match error {
            Error::Validation(_) => "error.input",
            Error::NotFound(_) => "error.not_found",
            Error::EmptyState(_) => "error.no_data",
            _ => "error.other",
        };
        format!("{}: {}", self.i18n.get(label), error)
    }
}
