use chrono::{TimeZone, Utc};
use wordscore::scoring::{ConfigError, RankConfig, Strategy};
use wordscore::types::{Leaderboard, ScoreReport, ScoredCandidate, VocabularyVersion};

#[test]
fn golden_report_serialization() {
    let report = ScoreReport {
        vocabulary_version: VocabularyVersion::from_content(b"hack 10\n"),
        vocabulary_tokens: 1,
        config: RankConfig::v0(),
        generated_at: Utc.timestamp_opt(0, 0).unwrap(),
        leaderboard: Leaderboard {
            highest_score: Some(10),
            candidates_considered: 3,
            winners: vec![ScoredCandidate {
                candidate: "hack".to_string(),
                score: 10,
            }],
        },
    };

    let json = serde_json::to_string_pretty(&report).unwrap();
    let version = report.vocabulary_version.as_str();

    let expected = format!(
        r#"{{
          "vocabulary_version": "{version}",
          "vocabulary_tokens": 1,
          "config": {{
            "lowercase_candidates": true,
            "parallel": false,
            "strategy": "greedy"
          }},
          "generated_at": "1970-01-01T00:00:00Z",
          "leaderboard": {{
            "highest_score": 10,
            "candidates_considered": 3,
            "winners": [
              {{
                "candidate": "hack",
                "score": 10
              }}
            ]
          }}
        }}"#
    );

    let normalized_actual: String = json.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = expected.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(
        normalized_actual, normalized_expected,
        "JSON structure mismatch against golden snapshot"
    );

    let roundtrip: ScoreReport = serde_json::from_str(&json).unwrap();
    assert_eq!(roundtrip.leaderboard, report.leaderboard);
    assert_eq!(roundtrip.config, report.config);
    assert_eq!(roundtrip.vocabulary_version, report.vocabulary_version);
}

#[test]
fn strategy_uses_kebab_case() {
    let json = serde_json::to_string(&Strategy::PrefixWalk).unwrap();
    assert_eq!(json, "\"prefix-walk\"");
    assert_eq!("prefix-walk".parse::<Strategy>(), Ok(Strategy::PrefixWalk));
    assert_eq!(
        "fastest".parse::<Strategy>(),
        Err(ConfigError::UnknownStrategy("fastest".to_string()))
    );
}

#[test]
fn empty_leaderboard_serializes_null_maximum() {
    let json = serde_json::to_string(&Leaderboard::default()).unwrap();
    assert_eq!(json, r#"{"highest_score":null,"candidates_considered":0,"winners":[]}"#);
}
