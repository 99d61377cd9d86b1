//! Turns a [`CommandResult`] into a display-ready [`ResultView`].

use crate::app::format;
use crate::domain::models::{
    ActionOutcome, CommandResult, CostAnalysis, Message, ProjectStatus, ReportCreated,
    RiskAnalysis,
};
use serde_json::Value;

/// Commands the service understands, shown under the help result.
pub const EXAMPLE_COMMANDS: [(&str, &str); 5] = [
    ("estado del proyecto", "Current project status"),
    ("analizar riesgos", "Risk analysis"),
    ("resumen costos", "Financial summary"),
    ("crear reporte diario", "New daily report"),
    ("predecir costos", "AI cost prediction"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Danger,
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultLine {
    Field { label: String, value: String },
    Text(String),
    Heading(String),
    Item(String),
    Code(String),
}

impl ResultLine {
    fn field(label: &str, value: impl Into<String>) -> Self {
        ResultLine::Field {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub tone: Tone,
    pub title: String,
    pub lines: Vec<ResultLine>,
}

impl ResultView {
    fn new(tone: Tone, title: impl Into<String>) -> Self {
        Self {
            tone,
            title: title.into(),
            lines: Vec::new(),
        }
    }

    fn line(mut self, line: ResultLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Flattened text, one line per entry.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            out.push('\n');
            match line {
                ResultLine::Field { label, value } => {
                    out.push_str(label);
                    out.push_str(": ");
                    out.push_str(value);
                }
                ResultLine::Text(s) | ResultLine::Heading(s) | ResultLine::Code(s) => {
                    out.push_str(s);
                }
                ResultLine::Item(s) => {
                    out.push_str("- ");
                    out.push_str(s);
                }
            }
        }
        out
    }
}

#[must_use]
pub fn render(result: &CommandResult) -> ResultView {
    match result {
        CommandResult::ProjectStatus(status) => project_status(status),
        CommandResult::RiskAnalysis(risks) => risk_analysis(risks),
        CommandResult::CostAnalysis(costs) => cost_analysis(costs),
        CommandResult::DailyReportCreated(report) => report_created(report),
        CommandResult::Help(help) => help_view(help),
        CommandResult::Error(error) => error_view(error),
        CommandResult::Action(outcome) => action_view(outcome),
        CommandResult::Unknown(value) => generic(value),
    }
}

fn project_status(status: &ProjectStatus) -> ResultView {
    match &status.project {
        Some(project) => {
            let mut view = ResultView::new(Tone::Info, format!("Project status: {project}"))
                .line(ResultLine::field("Progress", format::percent(status.progress)))
                .line(ResultLine::field(
                    "Recent reports",
                    format::count(status.recent_reports),
                ));
            if let Some(last) = &status.last_report {
                view = view.line(ResultLine::field("Last report", last.as_str()));
            }
            view
        }
        None => ResultView::new(Tone::Info, "Overall summary")
            .line(ResultLine::field(
                "Total projects",
                format::count(status.total_projects),
            ))
            .line(ResultLine::field(
                "Active projects",
                format::count(status.active_projects),
            ))
            .line(ResultLine::field(
                "Average progress",
                format::percent(status.avg_progress),
            )),
    }
}

fn risk_analysis(risks: &RiskAnalysis) -> ResultView {
    let mut view = ResultView::new(Tone::Warning, "Risk analysis")
        .line(ResultLine::field("Total risks", format::count(risks.total_risks)))
        .line(ResultLine::field(
            "Critical risks",
            format::count(risks.critical_risks),
        ))
        .line(ResultLine::field("High risks", format::count(risks.high_risks)));

    if !risks.categories.is_empty() {
        view = view.line(ResultLine::Heading("By category:".to_string()));
        for (category, count) in &risks.categories {
            view = view.line(ResultLine::Item(format!("{category}: {count}")));
        }
    }
    view
}

fn cost_analysis(costs: &CostAnalysis) -> ResultView {
    if let Some(message) = costs.message.as_ref().filter(|m| !m.is_empty()) {
        return ResultView::new(Tone::Info, "Cost analysis").line(ResultLine::Text(message.clone()));
    }

    ResultView::new(Tone::Success, "Cost analysis")
        .line(ResultLine::field("Total budget", format::money(costs.total_budget)))
        .line(ResultLine::field("Actual cost", format::money(costs.total_cost)))
        .line(ResultLine::field(
            "Average variance",
            format::percent_fixed(costs.avg_variance),
        ))
        .line(ResultLine::field(
            "Projects analysed",
            format::count(costs.projects_count),
        ))
}

fn report_created(report: &ReportCreated) -> ResultView {
    ResultView::new(Tone::Success, "Report created")
        .line(ResultLine::Text(report.message.clone()))
        .line(ResultLine::field(
            "Report ID",
            report
                .report_id
                .as_ref()
                .map_or_else(|| format::NOT_AVAILABLE.to_string(), ToString::to_string),
        ))
}

fn help_view(help: &Message) -> ResultView {
    let mut view = ResultView::new(Tone::Info, "Help: available commands")
        .line(ResultLine::Text(help.message.clone()))
        .line(ResultLine::Heading("Examples:".to_string()));
    for (command, description) in EXAMPLE_COMMANDS {
        view = view.line(ResultLine::Item(format!("\"{command}\" - {description}")));
    }
    view
}

fn error_view(error: &Message) -> ResultView {
    ResultView::new(Tone::Danger, "Error").line(ResultLine::Text(error.message.clone()))
}

fn action_view(outcome: &ActionOutcome) -> ResultView {
    let mut view = ResultView::new(Tone::Success, "Done");
    if let Some(message) = &outcome.message {
        view = view.line(ResultLine::Text(message.clone()));
    }
    if !outcome.extra.is_empty() {
        let extra = Value::Object(outcome.extra.clone());
        view = pretty_lines(view, &extra);
    }
    view
}

fn generic(value: &Value) -> ResultView {
    pretty_lines(ResultView::new(Tone::Neutral, "Result"), value)
}

fn pretty_lines(mut view: ResultView, value: &Value) -> ResultView {
    let dump = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    for line in dump.lines() {
        view = view.line(ResultLine::Code(line.to_string()));
    }
    view
}
