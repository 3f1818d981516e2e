use axum::{
    extract::{Query, State},
    Extension, Json,
};
use sentiscope_core::SentimentLabel;
use sentiscope_sentiment::aggregate::word_frequencies;
use sentiscope_sentiment::{DailySentiment, Dashboard, KeyMetrics, LabelCount, WordFrequencies};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct WordsQuery {
    pub label: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(super) struct WordsData {
    pub label: SentimentLabel,
    #[serde(flatten)]
    pub words: WordFrequencies,
}

pub(super) async fn get_dashboard(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Dashboard>> {
    Json(ApiResponse {
        data: Dashboard::clone(&state.dashboard),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_trend(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<DailySentiment>>> {
    Json(ApiResponse {
        data: state.dashboard.trend.clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_distribution(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<LabelCount>>> {
    Json(ApiResponse {
        data: state.dashboard.distribution.clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_metrics(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<KeyMetrics>> {
    Json(ApiResponse {
        data: state.dashboard.metrics.clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_words(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<WordsQuery>,
) -> Result<Json<ApiResponse<WordsData>>, ApiError> {
    let Some(raw_label) = query.label.as_deref() else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "label is required (positive, negative, or neutral)",
        ));
    };
    let label: SentimentLabel = raw_label
        .parse()
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", format!("{e}")))?;

    let limit = normalize_limit(query.limit, state.word_limit, state.word_limit);
    let words = word_frequencies(&state.posts, label, limit);

    Ok(Json(ApiResponse {
        data: WordsData { label, words },
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::super::test_support::{get_json, post, sample_state};
    use super::super::AppState;

    #[tokio::test]
    async fn dashboard_bundles_every_view() {
        let (status, json) = get_json(sample_state(), "/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        let data = &json["data"];
        assert_eq!(data["metrics"]["total_posts"], 4);
        assert_eq!(data["trend"].as_array().map(Vec::len), Some(3));
        assert_eq!(data["distribution"].as_array().map(Vec::len), Some(3));
        assert_eq!(data["positive_words"]["status"], "words");
        assert_eq!(data["sample"].as_array().map(Vec::len), Some(4));
        assert_eq!(data["sample"][0]["date"], "2024-01-01 00:00:00");
    }

    #[tokio::test]
    async fn trend_is_daily_mean_in_date_order() {
        let (status, json) = get_json(sample_state(), "/api/v1/sentiment/trend").await;
        assert_eq!(status, StatusCode::OK);
        let trend = json["data"].as_array().expect("trend array");
        assert_eq!(trend[0]["day"], "2024-01-01");
        let mean = trend[0]["mean_score"].as_f64().expect("mean score");
        assert!((mean - 0.3).abs() < 1e-9);
        assert_eq!(trend[0]["post_count"], 2);
        assert_eq!(trend[2]["day"], "2024-01-03");
    }

    #[tokio::test]
    async fn distribution_lists_all_labels() {
        let (_, json) = get_json(sample_state(), "/api/v1/sentiment/distribution").await;
        let counts: Vec<(String, u64)> = json["data"]
            .as_array()
            .expect("distribution array")
            .iter()
            .map(|c| {
                (
                    c["label"].as_str().unwrap_or_default().to_string(),
                    c["count"].as_u64().unwrap_or_default(),
                )
            })
            .collect();
        assert_eq!(
            counts,
            vec![
                ("Positive".to_string(), 2),
                ("Negative".to_string(), 1),
                ("Neutral".to_string(), 1),
            ]
        );
    }

    #[tokio::test]
    async fn metrics_report_percentages() {
        let (_, json) = get_json(sample_state(), "/api/v1/sentiment/metrics").await;
        assert_eq!(json["data"]["positive_pct"].as_f64(), Some(50.0));
        assert_eq!(json["data"]["negative_pct"].as_f64(), Some(25.0));
    }

    #[tokio::test]
    async fn words_for_label_are_ranked() {
        let (status, json) =
            get_json(sample_state(), "/api/v1/sentiment/words?label=positive&limit=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["label"], "Positive");
        assert_eq!(json["data"]["status"], "words");
        let words = json["data"]["words"].as_array().expect("words array");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0]["word"], "great");
        assert_eq!(words[0]["count"], 2);
    }

    #[tokio::test]
    async fn empty_category_returns_placeholder() {
        let state = AppState::new(vec![post("2024-02-01", "love", 0.6)], 50, 10);
        let (status, json) = get_json(state, "/api/v1/sentiment/words?label=Negative").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "empty");
        assert_eq!(json["data"]["message"], "No negative text found.");
    }

    #[tokio::test]
    async fn unknown_label_is_validation_error() {
        let (status, json) = get_json(sample_state(), "/api/v1/sentiment/words?label=angry").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "validation_error");
    }

    #[tokio::test]
    async fn missing_label_is_validation_error() {
        let (status, json) = get_json(sample_state(), "/api/v1/sentiment/words").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "validation_error");
    }
}
