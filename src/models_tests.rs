//! Unit tests for data models
//!
//! Tests validation, serialization, and model behavior.

#[cfg(test)]
mod tests {
    use crate::models::*;
    use crate::TeamPulseError;

    // ====== Request Parsing Tests ======

    #[test]
    fn test_request_without_scenario() {
        let req: AnalyseRequest = serde_json::from_str(
            r#"{"messages":[{"user":"Alice","text":"Great job!"}]}"#,
        )
        .unwrap();
        assert_eq!(req.messages, vec![Message::new("Alice", "Great job!")]);
        assert!(req.scenario_name.is_none());
    }

    #[test]
    fn test_request_with_scenario_name() {
        let req: AnalyseRequest =
            serde_json::from_str(r#"{"messages":[],"scenarioName":"Positive Team"}"#).unwrap();
        assert!(req.messages.is_empty());
        assert_eq!(req.scenario_name.as_deref(), Some("Positive Team"));
    }

    #[test]
    fn test_request_missing_text_rejected() {
        let result: Result<AnalyseRequest, _> =
            serde_json::from_str(r#"{"messages":[{"user":"Alice"}]}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("text"));
    }

    #[test]
    fn test_request_missing_messages_rejected() {
        let result: Result<AnalyseRequest, _> = serde_json::from_str(r#"{"scenarioName":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_wrong_type_rejected() {
        let result: Result<AnalyseRequest, _> =
            serde_json::from_str(r#"{"messages":[{"user":42,"text":"hi"}]}"#);
        assert!(result.is_err());
    }

    // ====== Validation Tests ======

    #[test]
    fn test_validate_empty_batch_ok() {
        assert!(AnalyseRequest::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_user_rejected() {
        let req = AnalyseRequest {
            messages: vec![Message::new("Alice", "hi"), Message::new("", "who am I")],
            scenario_name: None,
        };
        match req.validate() {
            Err(TeamPulseError::InvalidRequest(msg)) => assert!(msg.contains("messages[1]")),
            other => panic!("Expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_text_ok() {
        let req = AnalyseRequest {
            messages: vec![Message::new("Alice", "")],
            scenario_name: None,
        };
        assert!(req.validate().is_ok());
    }

    // ====== Result Serialization Tests ======

    #[test]
    fn test_result_serializes_camel_case_in_order() {
        let mut counts = AuthorCounts::new();
        counts.insert("Zed".to_string(), 2);
        counts.insert("Alice".to_string(), 1);
        let result = AnalysisResult {
            counts,
            avg_sentiment: 0.5,
            nudges: vec![],
            notable_messages: vec![],
        };

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"counts":{"Zed":2,"Alice":1},"avgSentiment":0.5,"nudges":[],"notableMessages":[]}"#
        );
        assert_eq!(result.message_count(), 3);
    }
}
