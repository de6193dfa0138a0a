mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{TEST_PASSWORD, spawn_app};
use serde_json::json;
use userhub_models::{Role, UserStatus};
use uuid::Uuid;

#[tokio::test]
async fn test_list_users_requires_admin() {
    let app = spawn_app();
    let user = app.create_active_user().await;
    let token = app.token_for(&user);

    let (status, body) = app.send("GET", "/admin/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden");

    let (status, _) = app.send("GET", "/admin/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_defaults_and_order() {
    let app = spawn_app();
    let admin = app.create_admin().await;
    let token = app.token_for(&admin);

    let base = Utc::now() - Duration::days(30);
    app.store.set_created_at(admin.id, base).await;

    let mut created = Vec::new();
    for i in 0..12 {
        let user = app.create_active_user().await;
        app.store
            .set_created_at(user.id, base + Duration::hours(i + 1))
            .await;
        created.push(user);
    }

    let (status, body) = app.send("GET", "/admin/users", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let users = body["data"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 10);
    assert_eq!(users[0]["id"], created[11].id.to_string());
    assert_eq!(users[9]["id"], created[2].id.to_string());
    assert!(users[0].get("passwordHash").is_none());
    assert!(users[0].get("createdAt").is_some());
    assert_eq!(
        body["data"]["pagination"],
        json!({ "page": 1, "limit": 10, "totalUsers": 13, "totalPages": 2 })
    );

    let (_, body) = app
        .send("GET", "/admin/users?page=2", Some(&token), None)
        .await;
    let users = body["data"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2]["id"], admin.id.to_string());
}

#[tokio::test]
async fn test_list_users_page_beyond_last_is_empty() {
    let app = spawn_app();
    let admin = app.create_admin().await;
    let token = app.token_for(&admin);
    for _ in 0..4 {
        app.create_active_user().await;
    }

    let (status, body) = app
        .send("GET", "/admin/users?page=9&limit=2", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["users"].as_array().unwrap().is_empty());
    assert_eq!(
        body["data"]["pagination"],
        json!({ "page": 9, "limit": 2, "totalUsers": 5, "totalPages": 3 })
    );
}

#[tokio::test]
async fn test_list_users_clamps_limit() {
    let app = spawn_app();
    let admin = app.create_admin().await;
    let token = app.token_for(&admin);

    let (_, body) = app
        .send("GET", "/admin/users?limit=1000&page=0", Some(&token), None)
        .await;
    assert_eq!(body["data"]["pagination"]["limit"], 100);
    assert_eq!(body["data"]["pagination"]["page"], 1);

    let (_, body) = app
        .send("GET", "/admin/users?limit=0", Some(&token), None)
        .await;
    assert_eq!(body["data"]["pagination"]["limit"], 1);
}

#[tokio::test]
async fn test_list_users_rejects_non_numeric_query() {
    let app = spawn_app();
    let admin = app.create_admin().await;
    let token = app.token_for(&admin);

    let (status, body) = app
        .send("GET", "/admin/users?page=abc", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation error");
}

#[tokio::test]
async fn test_deactivate_then_activate() {
    let app = spawn_app();
    let admin = app.create_admin().await;
    let user = app.create_active_user().await;
    let token = app.token_for(&admin);

    let (status, body) = app
        .send(
            "PATCH",
            &format!("/admin/users/{}/deactivate", user.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deactivated successfully");

    let (status, body) = app
        .send(
            "POST",
            "/auth/login",
            None,
            Some(json!({ "email": user.email.as_str(), "password": TEST_PASSWORD })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "User is inactive");

    let (status, body) = app
        .send(
            "PATCH",
            &format!("/admin/users/{}/activate", user.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User activated successfully");

    app.login(user.email.as_str(), TEST_PASSWORD).await;
}

#[tokio::test]
async fn test_status_changes_are_idempotent() {
    let app = spawn_app();
    let admin = app.create_admin().await;
    let active = app.create_active_user().await;
    let inactive = app
        .create_user(
            &common::generate_unique_email(),
            TEST_PASSWORD,
            Role::User,
            UserStatus::Inactive,
        )
        .await;
    let token = app.token_for(&admin);

    let (status, _) = app
        .send(
            "PATCH",
            &format!("/admin/users/{}/activate", active.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .send(
            "PATCH",
            &format!("/admin/users/{}/deactivate", inactive.id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let stored = app.store.all().await;
    let by_id = |id| stored.iter().find(|u| u.id == id).unwrap().status;
    assert_eq!(by_id(active.id), UserStatus::Active);
    assert_eq!(by_id(inactive.id), UserStatus::Inactive);
}

#[tokio::test]
async fn test_admin_cannot_change_self_or_other_admins() {
    let app = spawn_app();
    let admin = app.create_admin().await;
    let other_admin = app.create_admin().await;
    let token = app.token_for(&admin);

    for target in [admin.id, other_admin.id] {
        for action in ["activate", "deactivate"] {
            let (status, body) = app
                .send(
                    "PATCH",
                    &format!("/admin/users/{}/{}", target, action),
                    Some(&token),
                    None,
                )
                .await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body["message"], "Action not allowed");
        }
    }

    assert!(app.store.all().await.iter().all(|u| u.is_active()));
}

#[tokio::test]
async fn test_status_change_unknown_or_malformed_id_is_not_found() {
    let app = spawn_app();
    let admin = app.create_admin().await;
    let token = app.token_for(&admin);

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let (status, body) = app
            .send(
                "PATCH",
                &format!("/admin/users/{}/deactivate", id),
                Some(&token),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "User not found");
    }
}

#[tokio::test]
async fn test_status_change_requires_admin() {
    let app = spawn_app();
    let user = app.create_active_user().await;
    let target = app.create_active_user().await;
    let token = app.token_for(&user);

    let (status, _) = app
        .send(
            "PATCH",
            &format!("/admin/users/{}/deactivate", target.id),
            Some(&token),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(app.store.all().await.iter().all(|u| u.is_active()));
}

#[tokio::test]
async fn test_user_token_forged_as_admin_is_rejected() {
    let app = spawn_app();
    let user = app.create_active_user().await;

    let other_secret = userhub_auth::TokenCodec::new(&userhub_config::JwtConfig {
        secret: "attacker-controlled-secret-32-characters".to_string(),
        expires_in_secs: 3600,
    });
    let forged = other_secret.issue(user.id, Role::Admin).unwrap();

    let (status, _) = app.send("GET", "/admin/users", Some(&forged), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
