// ABOUTME: Integration tests for daily health data upsert and history
// ABOUTME: One record per user per day, last write wins, 7 newest days returned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use chrono::{Duration, NaiveDate, Utc};
use common::{create_test_database, create_test_user};
use sqlx::Row;
use wellness_data::models::{HealthDataInput, SleepQuality};

fn input(steps: i64, sleep_quality: SleepQuality) -> HealthDataInput {
    HealthDataInput {
        steps,
        water_intake: 1.5,
        sleep_hours: 7.25,
        sleep_quality,
    }
}

#[tokio::test]
async fn test_upsert_twice_same_day_keeps_one_record() {
    let db = create_test_database().await.unwrap();
    let user_id = create_test_user(&db, "walker@example.com").await.unwrap();

    let first = db
        .upsert_health_data(user_id, &input(3_000, SleepQuality::Poor))
        .await
        .unwrap();
    let second = db
        .upsert_health_data(
            user_id,
            &HealthDataInput {
                steps: 9_500,
                water_intake: 2.0,
                sleep_hours: 8.0,
                sleep_quality: SleepQuality::Good,
            },
        )
        .await
        .unwrap();

    // Upsert on the same (user, day) updates the existing row in place
    assert_eq!(first.id, second.id);
    assert_eq!(first.date, second.date);

    let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM health_data WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(db.pool())
        .await
        .unwrap()
        .get("n");
    assert_eq!(count, 1);

    let history = db.get_health_data(user_id).await.unwrap();
    assert_eq!(history.len(), 1);
    let record = &history[0];
    assert_eq!(record.steps, 9_500);
    assert!((record.water_intake - 2.0).abs() < f64::EPSILON);
    assert!((record.sleep_hours - 8.0).abs() < f64::EPSILON);
    assert_eq!(record.sleep_quality, SleepQuality::Good);
}

#[tokio::test]
async fn test_upsert_uses_current_day() {
    let db = create_test_database().await.unwrap();
    let user_id = create_test_user(&db, "today@example.com").await.unwrap();
    let before = Utc::now().date_naive();

    let record = db
        .upsert_health_data(user_id, &input(1_000, SleepQuality::Fair))
        .await
        .unwrap();

    let after = Utc::now().date_naive();
    assert!(record.date == before || record.date == after);
    assert_eq!(record.user_id, user_id);
}

#[tokio::test]
async fn test_history_limited_to_seven_newest() {
    let db = create_test_database().await.unwrap();
    let user_id = create_test_user(&db, "history@example.com").await.unwrap();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    // Insert ten days out of order
    for offset in [3, 9, 0, 7, 1, 5, 8, 2, 6, 4] {
        db.upsert_health_data_for_date(
            user_id,
            start + Duration::days(offset),
            &input(offset * 1_000, SleepQuality::Excellent),
        )
        .await
        .unwrap();
    }

    let history = db.get_health_data(user_id).await.unwrap();

    assert_eq!(history.len(), 7);
    let dates: Vec<NaiveDate> = history.iter().map(|h| h.date).collect();
    let expected: Vec<NaiveDate> = (3..=9).rev().map(|o| start + Duration::days(o)).collect();
    assert_eq!(dates, expected);
    assert_eq!(history[0].steps, 9_000);
}

#[tokio::test]
async fn test_history_is_per_user() {
    let db = create_test_database().await.unwrap();
    let alice = create_test_user(&db, "alice@example.com").await.unwrap();
    let bob = create_test_user(&db, "bob@example.com").await.unwrap();
    let day = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();

    db.upsert_health_data_for_date(alice, day, &input(4_000, SleepQuality::Good))
        .await
        .unwrap();
    db.upsert_health_data_for_date(bob, day, &input(12_000, SleepQuality::Poor))
        .await
        .unwrap();

    let alice_history = db.get_health_data(alice).await.unwrap();
    assert_eq!(alice_history.len(), 1);
    assert_eq!(alice_history[0].steps, 4_000);

    assert!(db.get_health_data(9_999).await.unwrap().is_empty());
}
