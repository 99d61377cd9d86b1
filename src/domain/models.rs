use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    #[serde(default, deserialize_with = "odoo_text")]
    pub description: String,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Identity and scope sent alongside every executed command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandContext {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectStatus {
    #[serde(
        default,
        deserialize_with = "odoo_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_reports: Option<u64>,
    #[serde(
        default,
        deserialize_with = "odoo_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_report: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_projects: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_projects: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_progress: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_risks: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_risks: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_risks: Option<u64>,
    #[serde(default)]
    pub categories: IndexMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostAnalysis {
    #[serde(
        default,
        deserialize_with = "odoo_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_variance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportCreated {
    #[serde(default, deserialize_with = "odoo_text")]
    pub message: String,
    #[serde(
        default,
        deserialize_with = "odoo_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub report_id: Option<ReportId>,
}

/// Record ids are integers in practice, but some server versions send a
/// display reference instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportId::Number(id) => write!(f, "{id}"),
            ReportId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "odoo_text")]
    pub message: String,
}

/// A client-side action returned by the service. Only `message` is read,
/// the rest is kept so it can be shown and persisted untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionOutcome {
    #[serde(
        default,
        deserialize_with = "odoo_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of an executed command, tagged on the wire by its `type` field.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    ProjectStatus(ProjectStatus),
    RiskAnalysis(RiskAnalysis),
    CostAnalysis(CostAnalysis),
    DailyReportCreated(ReportCreated),
    Help(Message),
    Error(Message),
    Action(ActionOutcome),
    /// Anything with an unrecognized (or malformed) discriminant, verbatim.
    Unknown(Value),
}

impl CommandResult {
    pub const PROJECT_STATUS: &'static str = "project_status";
    pub const RISK_ANALYSIS: &'static str = "risk_analysis";
    pub const COST_ANALYSIS: &'static str = "cost_analysis";
    pub const DAILY_REPORT_CREATED: &'static str = "daily_report_created";
    pub const HELP: &'static str = "help";
    pub const ERROR: &'static str = "error";
    pub const ACTION: &'static str = "action";

    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return CommandResult::Unknown(value);
        };
        let Some(kind) = map.get("type").and_then(Value::as_str).map(str::to_owned) else {
            return CommandResult::Unknown(Value::Object(map));
        };

        let original = Value::Object(map.clone());
        map.remove("type");
        let payload = Value::Object(map);

        let decoded = match kind.as_str() {
            Self::PROJECT_STATUS => serde_json::from_value(payload).map(CommandResult::ProjectStatus),
            Self::RISK_ANALYSIS => serde_json::from_value(payload).map(CommandResult::RiskAnalysis),
            Self::COST_ANALYSIS => serde_json::from_value(payload).map(CommandResult::CostAnalysis),
            Self::DAILY_REPORT_CREATED => {
                serde_json::from_value(payload).map(CommandResult::DailyReportCreated)
            }
            Self::HELP => serde_json::from_value(payload).map(CommandResult::Help),
            Self::ERROR => serde_json::from_value(payload).map(CommandResult::Error),
            Self::ACTION => serde_json::from_value(payload).map(CommandResult::Action),
            _ => return CommandResult::Unknown(original),
        };

        decoded.unwrap_or_else(|e| {
            tracing::debug!(kind = %kind, error = %e, "result payload did not match its type");
            CommandResult::Unknown(original)
        })
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            CommandResult::ProjectStatus(p) => tagged(Self::PROJECT_STATUS, p),
            CommandResult::RiskAnalysis(p) => tagged(Self::RISK_ANALYSIS, p),
            CommandResult::CostAnalysis(p) => tagged(Self::COST_ANALYSIS, p),
            CommandResult::DailyReportCreated(p) => tagged(Self::DAILY_REPORT_CREATED, p),
            CommandResult::Help(p) => tagged(Self::HELP, p),
            CommandResult::Error(p) => tagged(Self::ERROR, p),
            CommandResult::Action(p) => tagged(Self::ACTION, p),
            CommandResult::Unknown(value) => Ok(value.clone()),
        }
    }

    /// The wire discriminant, if there is one.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        match self {
            CommandResult::ProjectStatus(_) => Some(Self::PROJECT_STATUS),
            CommandResult::RiskAnalysis(_) => Some(Self::RISK_ANALYSIS),
            CommandResult::CostAnalysis(_) => Some(Self::COST_ANALYSIS),
            CommandResult::DailyReportCreated(_) => Some(Self::DAILY_REPORT_CREATED),
            CommandResult::Help(_) => Some(Self::HELP),
            CommandResult::Error(_) => Some(Self::ERROR),
            CommandResult::Action(_) => Some(Self::ACTION),
            CommandResult::Unknown(value) => value.get("type").and_then(Value::as_str),
        }
    }

    /// Whether the palette should close itself shortly after showing this result.
    #[must_use]
    pub fn closes_palette(&self) -> bool {
        matches!(
            self.kind(),
            Some(Self::ACTION | Self::DAILY_REPORT_CREATED)
        )
    }
}

fn tagged<T: Serialize>(kind: &str, payload: &T) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(payload)?;
    if let Value::Object(map) = &mut value {
        map.insert("type".to_string(), Value::String(kind.to_string()));
    }
    Ok(value)
}

impl Serialize for CommandResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CommandResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(CommandResult::from_value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub command: String,
    pub result: CommandResult,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(command: impl Into<String>, result: CommandResult) -> Self {
        Self {
            command: command.into(),
            result,
            timestamp: Utc::now(),
        }
    }
}

// Odoo serializes empty char/text fields as `false`.
fn odoo_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(odoo_opt_text(deserializer)?.unwrap_or_default())
}

fn odoo_opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!("expected text, found {other}"))),
    }
}

fn odoo_opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ReportId>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(n) => Ok(Some(
            n.as_i64()
                .map_or_else(|| ReportId::Text(n.to_string()), ReportId::Number),
        )),
        Value::String(s) => Ok(Some(ReportId::Text(s))),
        other => Err(de::Error::custom(format!("expected record id, found {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_status_decodes() {
        let result = CommandResult::from_value(json!({
            "type": "project_status",
            "project": "Alpha",
            "progress": 42,
            "recent_reports": 3,
            "last_report": null,
        }));

        match result {
            CommandResult::ProjectStatus(status) => {
                assert_eq!(status.project.as_deref(), Some("Alpha"));
                assert_eq!(status.progress, Some(42.0));
                assert_eq!(status.recent_reports, Some(3));
                assert_eq!(status.last_report, None);
                assert_eq!(status.total_projects, None);
            }
            other => panic!("Expected ProjectStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_type_is_kept_verbatim() {
        let raw = json!({"type": "unknown", "message": "Comando no reconocido: foo"});
        let result = CommandResult::from_value(raw.clone());
        assert_eq!(result, CommandResult::Unknown(raw));
        assert_eq!(result.kind(), Some("unknown"));
    }

    #[test]
    fn test_malformed_known_payload_falls_back() {
        let raw = json!({"type": "risk_analysis", "total_risks": "many"});
        assert_eq!(
            CommandResult::from_value(raw.clone()),
            CommandResult::Unknown(raw)
        );
    }

    #[test]
    fn test_non_object_result() {
        let result = CommandResult::from_value(json!([1, 2, 3]));
        assert!(matches!(result, CommandResult::Unknown(_)));
        assert_eq!(result.kind(), None);
    }

    #[test]
    fn test_odoo_false_fields() {
        let suggestion: Suggestion = serde_json::from_value(json!({
            "id": 4,
            "name": "Resumen Costos",
            "description": false,
            "type": "query",
        }))
        .unwrap();
        assert_eq!(suggestion, Suggestion::new("Resumen Costos", ""));

        let result = CommandResult::from_value(json!({
            "type": "project_status",
            "project": "Beta",
            "last_report": false,
        }));
        let CommandResult::ProjectStatus(status) = result else {
            panic!("Expected ProjectStatus");
        };
        assert_eq!(status.last_report, None);
    }

    #[test]
    fn test_action_keeps_extra_fields() {
        let raw = json!({"type": "action", "message": "Opening", "res_model": "project.project"});
        let result = CommandResult::from_value(raw.clone());
        let CommandResult::Action(outcome) = &result else {
            panic!("Expected Action, got {result:?}");
        };
        assert_eq!(outcome.message.as_deref(), Some("Opening"));
        assert_eq!(outcome.extra.get("res_model"), Some(&json!("project.project")));
        assert_eq!(result.to_value().unwrap(), raw);
    }

    #[test]
    fn test_closes_palette() {
        assert!(CommandResult::DailyReportCreated(ReportCreated::default()).closes_palette());
        assert!(CommandResult::Action(ActionOutcome::default()).closes_palette());
        assert!(!CommandResult::Help(Message::default()).closes_palette());
        assert!(!CommandResult::Unknown(json!({"type": "action_window"})).closes_palette());
        assert!(CommandResult::Unknown(json!({"type": "action", "message": 3})).closes_palette());
    }

    #[test]
    fn test_report_id_accepts_references() {
        let result = CommandResult::from_value(json!({
            "type": "daily_report_created",
            "message": "Reporte diario creado",
            "report_id": "R-81",
        }));
        let CommandResult::DailyReportCreated(report) = &result else {
            panic!("Expected DailyReportCreated, got {result:?}");
        };
        assert_eq!(report.report_id, Some(ReportId::Text("R-81".to_string())));
        assert_eq!(result.to_value().unwrap()["report_id"], json!("R-81"));

        let result = CommandResult::from_value(json!({
            "type": "daily_report_created",
            "message": "ok",
            "report_id": false,
        }));
        let CommandResult::DailyReportCreated(report) = result else {
            panic!("Expected DailyReportCreated");
        };
        assert_eq!(report.report_id, None);
    }

    #[test]
    fn test_history_entry_reads_browser_timestamps() {
        let entry: HistoryEntry = serde_json::from_value(json!({
            "command": "ayuda",
            "result": {"type": "help", "message": "Comandos disponibles"},
            "timestamp": "2024-03-05T14:07:09.123Z",
        }))
        .unwrap();
        assert_eq!(entry.command, "ayuda");
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-03-05T14:07:09.123+00:00");
    }

    #[test]
    fn test_context_omits_missing_project() {
        let ctx = CommandContext {
            user_id: 2,
            project_id: None,
        };
        assert_eq!(serde_json::to_value(&ctx).unwrap(), json!({"user_id": 2}));
    }
}
