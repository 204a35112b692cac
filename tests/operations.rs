//! Resource operation wiring: paths, methods, query-string defaulting,
//! and request/response body shapes.

use httpmock::prelude::*;
use mailinator_client::{
    ActionData, ActionRule, ActionType, Client, Condition, ConditionData, FetchInboxOptions,
    MatchType, MessageToPost, OperationType, RuleToCreate, Sort, Webhook,
};
use serde_json::json;

fn client_for(server: &MockServer, token: &str) -> Client {
    Client::builder()
        .api_token(token)
        .base_url(server.base_url())
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn fetch_inbox_sends_default_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains/test.com/inboxes/joe")
                .query_param("skip", "0")
                .query_param("limit", "50")
                .query_param("sort", "ascending")
                .query_param("decode_subject", "false");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "domain": "test.com",
                    "to": "joe",
                    "msgs": [{
                        "subject": "welcome",
                        "from": "noreply@example.com",
                        "to": "joe",
                        "id": "msg-1",
                        "time": 1.7e12,
                        "seconds_ago": 42.0,
                        "domain": "test.com"
                    }],
                    "cursor": "next-page"
                }));
        })
        .await;

    let client = client_for(&server, "tok123");
    let inbox = client
        .fetch_inbox("test.com", "joe", &FetchInboxOptions::default())
        .await
        .unwrap();

    assert_eq!(inbox.messages.len(), 1);
    assert_eq!(inbox.messages[0].subject, "welcome");
    assert_eq!(inbox.cursor, "next-page");
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_inbox_appends_optional_modifiers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains/test.com/inboxes/joe")
                .query_param("skip", "5")
                .query_param("limit", "10")
                .query_param("sort", "descending")
                .query_param("decode_subject", "true")
                .query_param("cursor", "abc")
                .query_param("full", "true")
                .query_param("delete", "10s")
                .query_param("wait", "30s");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"domain": "test.com", "to": "joe", "msgs": []}));
        })
        .await;

    let options = FetchInboxOptions {
        skip: Some(5),
        limit: Some(10),
        sort: Some(Sort::Descending),
        decode_subject: true,
        cursor: Some("abc".to_string()),
        full: true,
        delete: Some("10s".to_string()),
        wait: Some("30s".to_string()),
    };

    let client = client_for(&server, "tok123");
    client.fetch_inbox("test.com", "joe", &options).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_message_appends_delete_modifier_only_when_set() {
    let server = MockServer::start_async().await;
    let with_delete = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains/test.com/messages/msg-1")
                .query_param("delete", "10s");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"id": "msg-1", "subject": "hi"}));
        })
        .await;

    let client = client_for(&server, "tok123");
    let message = client
        .fetch_message("test.com", "msg-1", Some("10s"))
        .await
        .unwrap();

    assert_eq!(message.id, "msg-1");
    with_delete.assert_async().await;
}

#[tokio::test]
async fn create_rule_posts_exact_wire_shape() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/domains/dom-1/rules")
                .header("Content-Type", "application/json; charset=utf-8")
                .json_body(json!({
                    "description": "Description",
                    "enabled": true,
                    "match": "ANY",
                    "name": "RuleName",
                    "priority": 15,
                    "conditions": [{
                        "operation": "PREFIX",
                        "condition_data": {"field": "to", "value": "raul"}
                    }],
                    "actions": [{
                        "action": "WEBHOOK",
                        "action_data": {"url": "https://google.com"}
                    }]
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "_id": "rule-1",
                    "name": "RuleName",
                    "enabled": true,
                    "match_type": "ANY",
                    "priority": 15,
                    "conditions": [],
                    "actions": []
                }));
        })
        .await;

    let rule = RuleToCreate {
        description: "Description".to_string(),
        enabled: true,
        match_type: MatchType::Any,
        name: "RuleName".to_string(),
        priority: 15,
        conditions: vec![Condition {
            operation: OperationType::Prefix,
            condition_data: ConditionData {
                field: "to".to_string(),
                value: "raul".to_string(),
            },
        }],
        actions: vec![ActionRule {
            action: ActionType::Webhook,
            action_data: ActionData {
                url: "https://google.com".to_string(),
            },
        }],
    };

    let client = client_for(&server, "tok123");
    let created = client.create_rule("dom-1", &rule).await.unwrap();

    assert_eq!(created.id, "rule-1");
    assert_eq!(created.match_type, MatchType::Any);
    mock.assert_async().await;
}

#[tokio::test]
async fn enable_rule_puts_to_enable_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/domains/dom-1/rules/rule-1/enable");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"status": "ok"}));
        })
        .await;

    let client = client_for(&server, "tok123");
    let status = client.enable_rule("dom-1", "rule-1").await.unwrap();

    assert_eq!(status.status, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_message_reports_count() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/domains/test.com/inboxes/joe/messages/msg-1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"status": "ok", "count": 1}));
        })
        .await;

    let client = client_for(&server, "tok123");
    let deleted = client
        .delete_message("test.com", "joe", "msg-1")
        .await
        .unwrap();

    assert_eq!(deleted.count, 1);
}

#[tokio::test]
async fn post_message_injects_json_payload() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/domains/test.com/inboxes/joe/messages")
                .json_body(json!({
                    "subject": "hello",
                    "from": "noreply@example.com",
                    "text": "injected"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"status": "ok", "id": "msg-9", "rules_fired": []}));
        })
        .await;

    let message = MessageToPost {
        subject: "hello".to_string(),
        from: "noreply@example.com".to_string(),
        text: "injected".to_string(),
    };

    let client = client_for(&server, "tok123");
    let posted = client.post_message("test.com", "joe", &message).await.unwrap();

    assert_eq!(posted.id, "msg-9");
    assert!(posted.rules_fired.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn latest_messages_uses_star_inbox_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/domains/test.com/messages/*");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"domain": "test.com", "to": "*", "msgs": []}));
        })
        .await;

    let client = client_for(&server, "tok123");
    client.fetch_latest_messages("test.com").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn private_webhook_authenticates_with_whtoken_only() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/domains/private/webhook")
                .query_param("whtoken", "wh-secret")
                .json_body(json!({
                    "from": "sender@example.com",
                    "subject": "ping",
                    "text": "hello",
                    "to": "joe"
                }))
                .matches(|req| {
                    req.headers.as_ref().map_or(true, |headers| {
                        !headers
                            .iter()
                            .any(|(name, _)| name.eq_ignore_ascii_case("authorization"))
                    })
                });
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"id": "wh-1", "status": "ok"}));
        })
        .await;

    // Public webhook ingestion works without any API token.
    let client = client_for(&server, "");
    let webhook = Webhook {
        from: "sender@example.com".to_string(),
        subject: "ping".to_string(),
        text: "hello".to_string(),
        to: "joe".to_string(),
    };
    let ack = client.private_webhook("wh-secret", &webhook).await.unwrap();

    assert_eq!(ack.id, "wh-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn custom_service_webhook_discards_response_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/domains/private/twilio/joe")
                .query_param("whtoken", "wh-secret");
            then.status(200).body("accepted");
        })
        .await;

    let client = client_for(&server, "");
    let webhook = Webhook {
        from: "+15551234567".to_string(),
        subject: "sms".to_string(),
        text: "code 123456".to_string(),
        to: "joe".to_string(),
    };
    client
        .private_custom_service_inbox_webhook("wh-secret", "twilio", "joe", &webhook)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn team_stats_decode_nested_counters() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/team/stats");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "stats": [{
                        "date": "2026-08-28",
                        "retrieved": {"web_public": 3, "api_email": 7},
                        "sent": {"sms": 1, "email": 2}
                    }]
                }));
        })
        .await;

    let client = client_for(&server, "tok123");
    let stats = client.get_team_stats().await.unwrap();

    assert_eq!(stats.stats.len(), 1);
    assert_eq!(stats.stats[0].retrieved.api_email, 7);
    assert_eq!(stats.stats[0].sent.email, 2);
}

#[tokio::test]
async fn totp_code_decodes_renamed_fields() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/totp/JBSWY3DPEHPK3PXP");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "time_step": 30,
                    "futurecodes": ["111111", "222222"],
                    "next_reset_secs": 12,
                    "passcode": "654321"
                }));
        })
        .await;

    let client = client_for(&server, "tok123");
    let code = client.instant_totp_code("JBSWY3DPEHPK3PXP").await.unwrap();

    assert_eq!(code.passcode, "654321");
    assert_eq!(code.future_codes, vec!["111111", "222222"]);
    assert_eq!(code.next_reset_seconds, 12);
}
