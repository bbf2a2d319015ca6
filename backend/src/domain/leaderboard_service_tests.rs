//! Tests for the leaderboard service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockScoreRepository;
use crate::domain::{ErrorCode, ScoreId};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

#[fixture]
fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
        .single()
        .expect("valid fixture timestamp")
}

fn clock_at(utc_now: DateTime<Utc>) -> Arc<dyn Clock> {
    Arc::new(FixtureClock { utc_now })
}

fn record(id: i64, name: &str, score: i64, at: DateTime<Utc>) -> ScoreRecord {
    ScoreRecord::new(ScoreId::new(id), PlayerName::normalise(name), score, at)
}

#[rstest]
#[tokio::test]
async fn top_scores_requests_leaderboard_size_and_projects_entries(
    fixture_timestamp: DateTime<Utc>,
) {
    let stored = vec![
        record(2, "Grace", 900, fixture_timestamp),
        record(1, "Ada", 750, fixture_timestamp),
    ];
    let mut repo = MockScoreRepository::new();
    repo.expect_list_top()
        .withf(|limit| *limit == LEADERBOARD_SIZE)
        .times(1)
        .return_once(move |_| Ok(stored));

    let service = LeaderboardService::new(Arc::new(repo), clock_at(fixture_timestamp));
    let entries = service.top_scores().await.expect("top scores succeed");

    let projected: Vec<(&str, i64)> = entries
        .iter()
        .map(|entry| (entry.name.as_ref(), entry.score))
        .collect();
    assert_eq!(projected, [("Grace", 900), ("Ada", 750)]);
}

#[rstest]
#[tokio::test]
async fn submit_normalises_name_and_stamps_clock_time(fixture_timestamp: DateTime<Utc>) {
    let mut repo = MockScoreRepository::new();
    repo.expect_insert()
        .withf(move |new_score| {
            new_score.name.as_ref() == "AAAAAAAAAAAAAAAAAAAA"
                && new_score.score == 5
                && new_score.created_at == fixture_timestamp
        })
        .times(1)
        .returning(|new_score| {
            Ok(ScoreRecord::new(
                ScoreId::new(1),
                new_score.name.clone(),
                new_score.score,
                new_score.created_at,
            ))
        });

    let service = LeaderboardService::new(Arc::new(repo), clock_at(fixture_timestamp));
    let stored = service
        .submit(SubmitScoreRequest {
            name: "A".repeat(30),
            score: 5,
        })
        .await
        .expect("submission succeeds");

    assert_eq!(stored.id(), ScoreId::new(1));
    assert_eq!(stored.created_at(), fixture_timestamp);
}

#[rstest]
#[tokio::test]
async fn submit_substitutes_anonymous_for_blank_names(fixture_timestamp: DateTime<Utc>) {
    let mut repo = MockScoreRepository::new();
    repo.expect_insert()
        .withf(|new_score| new_score.name.as_ref() == "Anónimo")
        .times(1)
        .returning(|new_score| {
            Ok(ScoreRecord::new(
                ScoreId::new(3),
                new_score.name.clone(),
                new_score.score,
                new_score.created_at,
            ))
        });

    let service = LeaderboardService::new(Arc::new(repo), clock_at(fixture_timestamp));
    let stored = service
        .submit(SubmitScoreRequest {
            name: "   ".to_owned(),
            score: 5,
        })
        .await
        .expect("submission succeeds");

    assert_eq!(stored.name().as_ref(), "Anónimo");
}

#[rstest]
#[case(ScoreRepositoryError::connection("pool timed out"), ErrorCode::ServiceUnavailable)]
#[case(ScoreRepositoryError::query("disk I/O error"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_failures_map_to_domain_errors(
    #[case] failure: ScoreRepositoryError,
    #[case] expected: ErrorCode,
    fixture_timestamp: DateTime<Utc>,
) {
    let list_failure = failure.clone();
    let mut repo = MockScoreRepository::new();
    repo.expect_list_top()
        .times(1)
        .return_once(move |_| Err(list_failure));
    repo.expect_insert()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = LeaderboardService::new(Arc::new(repo), clock_at(fixture_timestamp));

    let read_error = service.top_scores().await.expect_err("read fails");
    assert_eq!(read_error.code(), expected);

    let write_error = service
        .submit(SubmitScoreRequest {
            name: "Ada".to_owned(),
            score: 1,
        })
        .await
        .expect_err("write fails");
    assert_eq!(write_error.code(), expected);
}
