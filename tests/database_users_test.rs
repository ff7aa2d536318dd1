// ABOUTME: Integration tests for user registration, credential checks and lookup
// ABOUTME: Covers duplicate email rejection and the unified not-found outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use common::create_test_database;
use wellness_data::database::DatabaseError;
use wellness_data::errors::{AppError, ErrorCode};
use wellness_data::models::{NewUser, UserRole};

#[tokio::test]
async fn test_create_and_get_user() {
    let db = create_test_database().await.expect("Failed to create test database");

    let user_id = db
        .create_user(&NewUser::new("ada@example.com", "analytical-engine", "Ada"))
        .await
        .expect("Failed to create user");
    assert!(user_id > 0);

    let user = db
        .get_user_by_id(user_id)
        .await
        .expect("Failed to get user")
        .expect("User not found");
    assert_eq!(user.id, user_id);
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada");
    assert_eq!(user.role, UserRole::User);
}

#[tokio::test]
async fn test_create_user_with_explicit_role() {
    let db = create_test_database().await.unwrap();

    let new_user = NewUser {
        role: Some(UserRole::Admin),
        ..NewUser::new("admin@example.com", "admin-password", "Admin")
    };
    let user_id = db.create_user(&new_user).await.unwrap();

    let user = db.get_user_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(user.role, UserRole::Admin);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let db = create_test_database().await.unwrap();

    db.create_user(&NewUser::new("dup@example.com", "first-password", "First"))
        .await
        .unwrap();

    let err = db
        .create_user(&NewUser::new("dup@example.com", "second-password", "Second"))
        .await
        .expect_err("Duplicate email must fail");

    match &err {
        DatabaseError::DuplicateEmail { email } => assert_eq!(email, "dup@example.com"),
        other => panic!("Expected DuplicateEmail, got {other:?}"),
    }
    assert_eq!(AppError::from(err).code, ErrorCode::ResourceAlreadyExists);

    // A different email still works after the conflict
    let id = db
        .create_user(&NewUser::new("other@example.com", "third-password", "Third"))
        .await
        .unwrap();
    assert!(id > 0);
}

#[tokio::test]
async fn test_verify_user_with_correct_password() {
    let db = create_test_database().await.unwrap();
    let user_id = db
        .create_user(&NewUser::new("grace@example.com", "cobol-1959", "Grace"))
        .await
        .unwrap();

    let user = db
        .verify_user("grace@example.com", "cobol-1959")
        .await
        .unwrap()
        .expect("Valid credentials must authenticate");

    assert_eq!(user.id, user_id);
    assert_eq!(user.email, "grace@example.com");

    // The returned record carries no password at all
    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
}

#[tokio::test]
async fn test_verify_user_failures_are_indistinguishable() {
    let db = create_test_database().await.unwrap();
    db.create_user(&NewUser::new("linus@example.com", "right-password", "Linus"))
        .await
        .unwrap();

    let wrong_password = db
        .verify_user("linus@example.com", "wrong-password")
        .await
        .unwrap();
    let unknown_email = db
        .verify_user("nobody@example.com", "right-password")
        .await
        .unwrap();

    assert!(wrong_password.is_none());
    assert!(unknown_email.is_none());
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_get_user_by_id_missing() {
    let db = create_test_database().await.unwrap();

    assert!(db.get_user_by_id(4242).await.unwrap().is_none());
}
