//! Mock-server tests for the psn-api library.
//!
//! These tests use wiremock to simulate the PSN web service and exercise the
//! library end to end without network access or real credentials.

use futures_util::{StreamExt, future::join_all};
use psn_api::{Endpoints, Error, GroupSelector, PlatformType, Psn, UserSelector};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUTHORIZE_PATH: &str = "/api/authz/v3/oauth/authorize";
const TOKEN_PATH: &str = "/api/authz/v3/oauth/token";
const REDIRECT: &str = "com.scee.psxandroid.scecompcall://redirect";

/// Helper to build a handle pointed at a mock server.
fn psn_for(server: &MockServer) -> Psn {
    Psn::builder("test-npsso-cookie")
        .endpoints(Endpoints::with_base(server.uri()))
        .build()
        .unwrap()
}

fn token_body(access: &str, refresh: &str, expires_in: i64) -> serde_json::Value {
    json!({
        "access_token": access,
        "token_type": "bearer",
        "refresh_token": refresh,
        "expires_in": expires_in,
        "scope": "psn:mobile.v2.core psn:clientapp",
        "refresh_token_expires_in": 5_184_000,
    })
}

/// Mount a happy-path cookie → code → token exchange. The issued access
/// token is `access-1` with the given lifetime.
async fn mount_auth(server: &MockServer, expires_in: i64) {
    Mock::given(method("GET"))
        .and(path(AUTHORIZE_PATH))
        .and(header("Cookie", "npsso=test-npsso-cookie"))
        .and(query_param("response_type", "code"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("{REDIRECT}?code=v3.TESTCODE").as_str()),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1", expires_in)),
        )
        .mount(server)
        .await;
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_first_call_performs_one_code_and_one_token_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTHORIZE_PATH))
        .and(header("Cookie", "npsso=test-npsso-cookie"))
        .and(query_param("client_id", "09515159-7237-4370-9b40-3806e67c0891"))
        .and(query_param("access_type", "offline"))
        .and(query_param("response_type", "code"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("{REDIRECT}?code=v3.TESTCODE").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header(
            "Authorization",
            "Basic MDk1MTUxNTktNzIzNy00MzcwLTliNDAtMzgwNmU2N2MwODkxOnVjUGprYTV0bnRCMktxc1A=",
        ))
        .and(body_string_contains("code=v3.TESTCODE"))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1", 3600)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dms/api/v1/devices/accounts/me"))
        .and(header("Authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accountId": "1234567890" })))
        .expect(1)
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let me = psn.me();
    assert_eq!(me.account_id().await.unwrap(), "1234567890");
}

#[tokio::test]
async fn test_cached_token_reused_within_lifetime() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    // Token endpoints must be hit exactly once across three API calls.
    Mock::given(method("GET"))
        .and(path("/api/userProfile/v1/internal/users/me/friends"))
        .and(header("Authorization", "Bearer access-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "friends": ["111", "222"], "totalItemCount": 2 })),
        )
        .expect(3)
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let me = psn.me();
    for _ in 0..3 {
        let friends = me.friends_list(100).await.unwrap();
        assert_eq!(friends, vec!["111".to_string(), "222".to_string()]);
    }

    // One authorize, one exchange, zero refreshes.
    let requests = server.received_requests().await.unwrap();
    let auth_calls = requests
        .iter()
        .filter(|r| r.url.path().starts_with("/api/authz"))
        .count();
    assert_eq!(auth_calls, 2);
}

#[tokio::test]
async fn test_expired_token_triggers_exactly_one_refresh() {
    let server = MockServer::start().await;
    // The initial exchange hands out an already-stale token.
    mount_auth(&server, 0).await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=refresh-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(token_body("access-2", "refresh-2", 3600)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/userProfile/v1/internal/users/me/friends"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "friends": [], "totalItemCount": 0 })),
        )
        .expect(3)
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let me = psn.me();

    // First call: full auth. Second call: stale token, one refresh.
    // Third call: refreshed token still fresh, no further auth traffic.
    me.friends_list(10).await.unwrap();
    me.friends_list(10).await.unwrap();
    me.friends_list(10).await.unwrap();
}

#[tokio::test]
async fn test_expired_cookie_reported_distinctly() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTHORIZE_PATH))
        .respond_with(ResponseTemplate::new(302).insert_header(
            "Location",
            format!("{REDIRECT}?error=invalid_request&error_code=4165").as_str(),
        ))
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let err = psn.me().friends_list(10).await.unwrap_err();
    match err {
        Error::Authentication(message) => {
            assert!(message.contains("expired or is incorrect"), "{message}");
        }
        other => panic!("expected Authentication, got {other}"),
    }
}

#[tokio::test]
async fn test_unknown_authorize_error_is_generic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTHORIZE_PATH))
        .respond_with(ResponseTemplate::new(302).insert_header(
            "Location",
            format!("{REDIRECT}?error=access_denied&error_code=4171").as_str(),
        ))
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let err = psn.me().friends_list(10).await.unwrap_err();
    match err {
        Error::Authentication(message) => {
            assert!(!message.contains("expired"), "{message}");
        }
        other => panic!("expected Authentication, got {other}"),
    }
}

#[tokio::test]
async fn test_rejected_refresh_falls_back_to_full_authentication() {
    let server = MockServer::start().await;
    // Stale token on every exchange, so the second call must refresh.
    mount_auth(&server, 0).await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("refresh token revoked"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/userProfile/v1/internal/users/me/friends"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "friends": [], "totalItemCount": 0 })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let me = psn.me();
    me.friends_list(10).await.unwrap();
    // Refresh is rejected; the authenticator re-runs the cookie flow and the
    // call still succeeds.
    me.friends_list(10).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let authorize_calls = requests
        .iter()
        .filter(|r| r.url.path() == AUTHORIZE_PATH)
        .count();
    assert_eq!(authorize_calls, 2);
}

#[tokio::test]
async fn test_concurrent_first_calls_coalesce_on_one_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AUTHORIZE_PATH))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("{REDIRECT}?code=v3.TESTCODE").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1", 3600)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/userProfile/v1/internal/users/me/friends"))
        .and(header("Authorization", "Bearer access-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "friends": [], "totalItemCount": 0 })),
        )
        .expect(8)
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let me = psn.me();
    let results = join_all((0..8).map(|_| me.friends_list(10))).await;
    assert!(results.into_iter().all(|r| r.is_ok()));
}

// ============================================================================
// Error Mapping Tests
// ============================================================================

#[tokio::test]
async fn test_not_found_preserves_response_body_verbatim() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    let body = r#"{"error":{"referenceId":"c3a6","code":2105356,"message":"Not Found"}}"#;
    Mock::given(method("GET"))
        .and(path("/api/userProfile/v1/internal/users/9999/profiles"))
        .respond_with(ResponseTemplate::new(404).set_body_string(body))
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let err = psn
        .user(UserSelector::account_id("9999"))
        .await
        .unwrap_err();
    match &err {
        Error::NotFound(message) => assert_eq!(message, body),
        other => panic!("expected NotFound, got {other}"),
    }
    assert_eq!(err.response_body(), Some(body));
}

#[tokio::test]
async fn test_forbidden_presence_surfaces_as_typed_error() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/api/userProfile/v1/internal/users/4242/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "onlineId": "Private_User" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/userProfile/v1/internal/users/4242/basicPresences"))
        .respond_with(ResponseTemplate::new(403).set_body_string("presence restricted"))
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let user = psn.user(UserSelector::account_id("4242")).await.unwrap();
    let err = user.get_presence().await.unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));
    assert_eq!(err.response_body(), Some("presence restricted"));
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_user_lookup_by_online_id_follows_rename() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/userProfile/v1/users/OldName/profile2"))
        .and(query_param("fields", "npId,onlineId,accountId,currentOnlineId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profile": {
                "onlineId": "OldName",
                "accountId": "1802043923080044300",
                "currentOnlineId": "NewName"
            }
        })))
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let user = psn
        .user(UserSelector::online_id("OldName"))
        .await
        .unwrap();
    assert_eq!(user.online_id(), "NewName");
    assert_eq!(user.prev_online_id(), Some("OldName"));
    assert_eq!(user.account_id(), "1802043923080044300");
}

#[tokio::test]
async fn test_is_blocked_checks_block_list_membership() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/api/userProfile/v1/internal/users/777/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "onlineId": "Blocked_One" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/userProfile/v1/internal/users/me/blocks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "blockList": ["777", "888"], "totalItemCount": 2 })),
        )
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let user = psn.user(UserSelector::account_id("777")).await.unwrap();
    assert!(user.is_blocked().await.unwrap());
}

// ============================================================================
// Group Tests
// ============================================================================

#[tokio::test]
async fn test_group_lifecycle() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    let group_id = "38335156987791a6750a33ae452ec8666177b65e-103";

    Mock::given(method("POST"))
        .and(path("/api/gamingLoungeGroups/v1/groups"))
        .and(body_string_contains("\"accountId\":\"111\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "groupId": group_id })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/api/gamingLoungeGroups/v1/groups/{group_id}/messages"
        )))
        .and(body_string_contains("Hello World"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messageUid": "1#425961448584099",
            "createdTimestamp": "1663911908531"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/api/gamingLoungeGroups/v1/members/me/groups/{group_id}/messages"
        )))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [{
                "messageUid": "1#425961448584099",
                "messageType": 1,
                "body": "Hello World",
                "createdTimestamp": "1663911908531",
                "sender": { "accountId": "111", "onlineId": "VaultTec_Trading" }
            }],
            "reachedEndOfPage": true,
            "messageCount": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(format!(
            "/api/gamingLoungeGroups/v1/groups/{group_id}/groupName"
        )))
        .and(body_string_contains("API Testing"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!(
            "/api/gamingLoungeGroups/v1/groups/{group_id}/members/me"
        )))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let group = psn
        .group(GroupSelector::invitees(["111", "222"]))
        .await
        .unwrap();
    assert_eq!(group.group_id(), group_id);

    let receipt = group.send_message("Hello World").await.unwrap();
    assert_eq!(receipt.message_uid, "1#425961448584099");

    let conversation = group.get_conversation(20).await.unwrap();
    assert_eq!(conversation.message_count, 1);
    assert_eq!(
        conversation.messages[0].body.as_deref(),
        Some("Hello World")
    );

    group.change_name("API Testing").await.unwrap();
    group.leave_group().await.unwrap();
}

#[tokio::test]
async fn test_unknown_group_id_is_not_found() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/api/gamingLoungeGroups/v1/members/me/groups/bogus-id"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let err = psn
        .group(GroupSelector::group_id("bogus-id"))
        .await
        .unwrap_err();
    match err {
        Error::NotFound(message) => assert!(message.contains("bogus-id")),
        other => panic!("expected NotFound, got {other}"),
    }
}

// ============================================================================
// Trophy Tests
// ============================================================================

#[tokio::test]
async fn test_trophy_summary() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path("/api/trophy/v1/users/me/trophySummary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accountId": "1234567890",
            "trophyLevel": 403,
            "progress": 61,
            "tier": 5,
            "earnedTrophies": { "bronze": 2729, "silver": 525, "gold": 159, "platinum": 25 }
        })))
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let summary = psn.me().trophy_summary().await.unwrap();
    assert_eq!(summary.trophy_level, 403);
    assert_eq!(summary.earned_trophies.total(), 2729 + 525 + 159 + 25);
}

#[tokio::test]
async fn test_trophies_metadata_merge() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path(
            "/api/trophy/v1/users/me/npCommunicationIds/NPWR21647_00/trophyGroups/all/trophies",
        ))
        .and(query_param("npServiceName", "trophy2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "trophies": [{
                "trophyId": 1,
                "trophyHidden": false,
                "trophyType": "platinum",
                "trophyGroupId": "default",
                "earned": true,
                "earnedDateTime": "2023-01-04T20:31:28Z",
                "trophyRare": 0,
                "trophyEarnedRate": "1.2"
            }],
            "totalItemCount": 1
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/api/trophy/v1/npCommunicationIds/NPWR21647_00/trophyGroups/all/trophies",
        ))
        .and(query_param("npServiceName", "trophy2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "trophies": [{
                "trophyId": 1,
                "trophyHidden": false,
                "trophyType": "platinum",
                "trophyGroupId": "default",
                "trophyName": "One and Done",
                "trophyDetail": "Earn every other trophy",
                "trophyIconUrl": "https://image.example/platinum.png"
            }],
            "totalItemCount": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let page = psn
        .me()
        .trophies("NPWR21647_00", PlatformType::PS5, "all", None, 0, true)
        .await
        .unwrap();

    let trophy = &page.trophies[0];
    assert_eq!(trophy.earned, Some(true));
    assert_eq!(trophy.trophy_name.as_deref(), Some("One and Done"));
    assert_eq!(
        trophy.trophy_icon_url.as_deref(),
        Some("https://image.example/platinum.png")
    );
}

#[tokio::test]
async fn test_trophy_titles_stream_walks_all_pages() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    let title = |name: &str| {
        json!({
            "npServiceName": "trophy",
            "npCommunicationId": "NPWR00001_00",
            "trophySetVersion": "01.00",
            "trophyTitleName": name,
            "trophyTitleIconUrl": "https://image.example/icon.png",
            "trophyTitlePlatform": "PS4",
            "definedTrophies": { "bronze": 1, "silver": 0, "gold": 0, "platinum": 0 },
            "progress": 100,
            "earnedTrophies": { "bronze": 1, "silver": 0, "gold": 0, "platinum": 0 },
            "lastUpdatedDateTime": "2023-01-04T20:31:28Z"
        })
    };

    Mock::given(method("GET"))
        .and(path("/api/trophy/v1/users/me/trophyTitles"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "trophyTitles": [title("First"), title("Second")],
            "totalItemCount": 3,
            "nextOffset": 200
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/trophy/v1/users/me/trophyTitles"))
        .and(query_param("offset", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "trophyTitles": [title("Third")],
            "totalItemCount": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let me = psn.me();
    let titles: Vec<_> = me
        .trophy_titles_all()
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(titles.len(), 3);
    assert_eq!(titles[2].trophy_title_name, "Third");
}

// ============================================================================
// Title and Search Tests
// ============================================================================

#[tokio::test]
async fn test_game_title_resolves_np_communication_id() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path(
            "/api/trophy/v1/users/6515971742264256071/titles/trophyTitles",
        ))
        .and(query_param("npTitleIds", "PPSA03420_00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "titles": [{
                "npTitleId": "PPSA03420_00",
                "trophyTitles": [{
                    "npServiceName": "trophy2",
                    "npCommunicationId": "NPWR21647_00",
                    "trophySetVersion": "01.03",
                    "trophyTitleName": "Grand Theft Auto V (PlayStation®5)",
                    "trophyTitleIconUrl": "https://image.example/icon.png",
                    "trophyTitlePlatform": "PS5",
                    "definedTrophies": { "bronze": 40, "silver": 5, "gold": 5, "platinum": 1 },
                    "progress": 13,
                    "earnedTrophies": { "bronze": 10, "silver": 0, "gold": 0, "platinum": 0 },
                    "lastUpdatedDateTime": "2023-01-04T20:31:28Z"
                }]
            }]
        })))
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let title = psn.game_title("PPSA03420_00").await.unwrap();
    assert_eq!(title.np_communication_id(), "NPWR21647_00");
}

#[tokio::test]
async fn test_game_title_without_trophy_data_is_not_found() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    Mock::given(method("GET"))
        .and(path(
            "/api/trophy/v1/users/6515971742264256071/titles/trophyTitles",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "titles": [{ "npTitleId": "SSSA01325_00", "trophyTitles": [] }]
        })))
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let err = psn.game_title("SSSA01325_00").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_title_search_sends_payload_as_named_json_part() {
    let server = MockServer::start().await;
    mount_auth(&server, 3600).await;

    Mock::given(method("POST"))
        .and(path("/api/search/v1/universalSearch"))
        .and(body_string_contains("name=\"requestBody\""))
        .and(body_string_contains("application/json; charset=utf-8"))
        .and(body_string_contains("GTA 5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "domainResponses": [{
                "domain": "MobileUniversalSearchGame",
                "totalResultCount": 1,
                "results": [{
                    "score": 173.71782,
                    "defaultProduct": {
                        "id": "PPSA03420_00",
                        "name": "Grand Theft Auto V (PlayStation®5)"
                    }
                }]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let psn = psn_for(&server);
    let title_id = psn.search().get_title_id("GTA 5").await.unwrap();
    assert_eq!(title_id.as_deref(), Some("PPSA03420_00"));
}
