//! HTTP DTOs for workspace endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{
    Alternative, CalculationReport, ComparisonSeries, CrispRow, SawRow, WeightVector, WpRow,
};
use crate::domain::foundation::{Criterion, Direction};
use crate::domain::workspace::{SubmittedRow, TableSubmission, Workspace};

// ════════════════════════════════════════════════════════════════════════════════
// Shared DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Per-criterion weights as sent and received over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightsDto {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
}

impl From<WeightsDto> for WeightVector {
    fn from(dto: WeightsDto) -> Self {
        WeightVector::new(dto.c1, dto.c2, dto.c3, dto.c4, dto.c5)
    }
}

impl From<&WeightVector> for WeightsDto {
    fn from(weights: &WeightVector) -> Self {
        let [c1, c2, c3, c4, c5] = weights.as_array();
        Self { c1, c2, c3, c4, c5 }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a workspace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateWorkspaceRequest {
    #[serde(default)]
    pub weights: Option<WeightsDto>,
}

/// One row of an edited table. Every cell is optional so that gaps reach
/// validation instead of failing to decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlternativeRowRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub c1: Option<u64>,
    #[serde(default)]
    pub c2: Option<u64>,
    #[serde(default)]
    pub c3: Option<u64>,
    #[serde(default)]
    pub c4: Option<u64>,
    #[serde(default)]
    pub c5: Option<u64>,
}

impl From<AlternativeRowRequest> for SubmittedRow {
    fn from(row: AlternativeRowRequest) -> Self {
        SubmittedRow {
            name: row.name,
            mdr_fee: row.c1,
            monthly_fee: row.c2,
            channel_count: row.c3,
            settlement_speed: row.c4,
            integration_ease: row.c5,
        }
    }
}

/// Request to replace the alternatives table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitAlternativesRequest {
    pub alternatives: Vec<AlternativeRowRequest>,
}

impl From<SubmitAlternativesRequest> for TableSubmission {
    fn from(req: SubmitAlternativesRequest) -> Self {
        TableSubmission::new(req.alternatives.into_iter().map(Into::into).collect())
    }
}

/// Request to replace the weight vector.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWeightsRequest {
    pub weights: WeightsDto,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Criterion metadata for table headers.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionResponse {
    pub code: &'static str,
    pub name: &'static str,
    pub direction: &'static str,
}

impl From<Criterion> for CriterionResponse {
    fn from(criterion: Criterion) -> Self {
        Self {
            code: criterion.code(),
            name: criterion.display_name(),
            direction: match criterion.direction() {
                Direction::Cost => "cost",
                Direction::Benefit => "benefit",
            },
        }
    }
}

/// One row of the raw table.
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeRowResponse {
    pub name: String,
    pub c1: u64,
    pub c2: u64,
    pub c3: u64,
    pub c4: u64,
    pub c5: u64,
}

impl From<&Alternative> for AlternativeRowResponse {
    fn from(alt: &Alternative) -> Self {
        let [c1, c2, c3, c4, c5] = alt.attributes.as_array();
        Self {
            name: alt.name.clone(),
            c1,
            c2,
            c3,
            c4,
            c5,
        }
    }
}

/// Full workspace view.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceResponse {
    pub id: String,
    pub criteria: Vec<CriterionResponse>,
    pub alternatives: Vec<AlternativeRowResponse>,
    pub weights: WeightsDto,
    pub weight_sum: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Workspace> for WorkspaceResponse {
    fn from(ws: &Workspace) -> Self {
        Self {
            id: ws.id().to_string(),
            criteria: Criterion::all().iter().copied().map(Into::into).collect(),
            alternatives: ws.table().rows().iter().map(Into::into).collect(),
            weights: ws.weights().into(),
            weight_sum: ws.weights().sum(),
            created_at: ws.created_at().to_rfc3339(),
            updated_at: ws.updated_at().to_rfc3339(),
        }
    }
}

/// Crisp scores for one alternative.
#[derive(Debug, Clone, Serialize)]
pub struct CrispRowResponse {
    pub alternative: String,
    pub scores: [f64; 5],
}

impl From<&CrispRow> for CrispRowResponse {
    fn from(row: &CrispRow) -> Self {
        Self {
            alternative: row.alternative.clone(),
            scores: row.scores.map(f64::from),
        }
    }
}

/// SAW ranking row.
#[derive(Debug, Clone, Serialize)]
pub struct SawRowResponse {
    pub alternative: String,
    pub total: f64,
    pub rank: u32,
    pub is_best: bool,
}

impl From<&SawRow> for SawRowResponse {
    fn from(row: &SawRow) -> Self {
        Self {
            alternative: row.alternative.clone(),
            total: row.total,
            rank: row.rank,
            is_best: row.is_best,
        }
    }
}

/// WP ranking row.
#[derive(Debug, Clone, Serialize)]
pub struct WpRowResponse {
    pub alternative: String,
    pub vector_s: f64,
    pub vector_v: f64,
    pub rank: u32,
    pub is_best: bool,
}

impl From<&WpRow> for WpRowResponse {
    fn from(row: &WpRow) -> Self {
        Self {
            alternative: row.alternative.clone(),
            vector_s: row.vector_s,
            vector_v: row.vector_v,
            rank: row.rank,
            is_best: row.is_best,
        }
    }
}

/// Results of one calculation pass.
///
/// `saw` and `wp` are in display order (by rank, ties in input order);
/// `crisp_matrix` and `comparison` keep input order.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub crisp_matrix: Vec<CrispRowResponse>,
    pub saw: Vec<SawRowResponse>,
    pub wp: Vec<WpRowResponse>,
    pub comparison: ComparisonSeries,
    pub computed_at: String,
}

impl From<&CalculationReport> for CalculationResponse {
    fn from(report: &CalculationReport) -> Self {
        Self {
            crisp_matrix: report.crisp_matrix.rows.iter().map(Into::into).collect(),
            saw: report.saw.sorted_by_rank().into_iter().map(Into::into).collect(),
            wp: report.wp.sorted_by_rank().into_iter().map(Into::into).collect(),
            comparison: report.comparison.clone(),
            computed_at: report.computed_at.to_rfc3339(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{default_table, WeightVector};
    use crate::domain::foundation::WorkspaceId;

    #[test]
    fn submit_request_deserializes_with_gaps() {
        let json = r#"{"alternatives": [{"name": "A", "c1": 4000, "c2": 0, "c3": null}]}"#;
        let req: SubmitAlternativesRequest = serde_json::from_str(json).unwrap();
        let submission: TableSubmission = req.into();

        assert_eq!(submission.rows.len(), 1);
        assert_eq!(submission.rows[0].mdr_fee, Some(4000));
        assert_eq!(submission.rows[0].channel_count, None);
        assert!(submission.has_missing_cells());
    }

    #[test]
    fn create_request_defaults_to_no_weights() {
        let req: CreateWorkspaceRequest = serde_json::from_str("{}").unwrap();
        assert!(req.weights.is_none());
    }

    #[test]
    fn weights_convert_both_ways() {
        let dto = WeightsDto {
            c1: 0.25,
            c2: 0.15,
            c3: 0.2,
            c4: 0.2,
            c5: 0.2,
        };
        let weights: WeightVector = dto.into();
        assert_eq!(weights, WeightVector::default());
        assert_eq!(WeightsDto::from(&weights), dto);
    }

    #[test]
    fn workspace_response_lists_criteria_and_rows() {
        let ws = Workspace::new(WorkspaceId::new(), WeightVector::default());
        let response = WorkspaceResponse::from(&ws);

        assert_eq!(response.criteria.len(), 5);
        assert_eq!(response.criteria[0].code, "C1");
        assert_eq!(response.criteria[0].direction, "cost");
        assert_eq!(response.criteria[2].direction, "benefit");
        assert_eq!(response.alternatives.len(), default_table().len());
        assert_eq!(response.alternatives[0].name, "A1 (Midtrans)");
        assert!((response.weight_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn calculation_response_orders_rankings_for_display() {
        let ws = Workspace::new(WorkspaceId::new(), WeightVector::default());
        let report = ws.calculate().unwrap();
        let response = CalculationResponse::from(&report);

        let saw: Vec<&str> = response.saw.iter().map(|r| r.alternative.as_str()).collect();
        assert_eq!(
            saw,
            vec!["A5 (Tripay)", "A1 (Midtrans)", "A2 (Xendit)", "A3 (Doku)", "A4 (Faspay)"]
        );
        assert_eq!(response.comparison.rows[0].alternative, "A1 (Midtrans)");
        assert_eq!(response.crisp_matrix[1].scores, [0.25, 1.0, 1.0, 0.75, 1.0]);
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::new("X", "y")).unwrap();
        assert!(json.get("details").is_none());
    }
}
