// tests/facade_tests.rs
//
// Exercises the crate through its public surface only: facade
// construction, host-prefix rewriting, and a full resource lifecycle
// against a mock server.

use httptest::{
    Expectation, Server,
    matchers::request,
    responders::{cycle, json_encoded, status_code},
};
use itwin_access_control_client::{
    AccessControlClient, AccessControlConfig, GroupsApi, RolesApi,
};
use itwin_access_control_client::types::NewGroup;
use reqwest::{Client as ReqwestClient, Url};
use serde_json::json;
use uuid::Uuid;

#[test]
fn default_config_targets_production_host() {
    let client = AccessControlClient::new(AccessControlConfig::default()).unwrap();
    assert_eq!(
        client.base_url().as_str(),
        "https://api.bentley.com/accesscontrol/itwins"
    );
}

#[test]
fn host_prefix_rewrites_hostname() {
    let config = AccessControlConfig {
        host_prefix: Some("qa-".to_string()),
    };
    let client = AccessControlClient::new(config).unwrap();
    assert_eq!(
        client.base_url().as_str(),
        "https://qa-api.bentley.com/accesscontrol/itwins"
    );
}

#[tokio::test]
async fn group_lifecycle_create_get_delete_then_not_found() {
    let server = Server::run();
    let base_url = Url::parse(&server.url_str("")).unwrap();
    let client = AccessControlClient::with_base_url(ReqwestClient::new(), base_url);

    let token = "Bearer lifecycle-token";
    let itwin_id = Uuid::new_v4();
    let group_id = Uuid::new_v4();
    let group_body = json!({
        "group": {
            "id": group_id,
            "name": "Surveyors",
            "description": "Field survey team",
            "members": [],
            "imsGroups": []
        }
    });
    let not_found = json!({
        "error": {
            "code": "GroupNotFound",
            "message": "Requested group is not available."
        }
    });

    server.expect(
        Expectation::matching(request::method_path("POST", format!("/{itwin_id}/groups")))
            .respond_with(status_code(201).body(group_body.to_string())),
    );
    // First fetch sees the group, the post-delete fetch sees the 404.
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            format!("/{itwin_id}/groups/{group_id}"),
        ))
        .times(2)
        .respond_with(cycle![
            json_encoded(group_body.clone()),
            status_code(404).body(not_found.to_string()),
        ]),
    );
    server.expect(
        Expectation::matching(request::method_path(
            "DELETE",
            format!("/{itwin_id}/groups/{group_id}"),
        ))
        .respond_with(status_code(204)),
    );

    let created = client
        .groups
        .create_itwin_group(
            token,
            itwin_id,
            &NewGroup {
                name: "Surveyors".to_string(),
                description: "Field survey team".to_string(),
            },
        )
        .await;
    assert_eq!(created.status, 201);
    let created_group = created.data.expect("group should be created");
    assert_eq!(created_group.id, group_id);

    let fetched = client.groups.get_itwin_group(token, itwin_id, group_id).await;
    assert_eq!(fetched.status, 200);
    let fetched_group = fetched.data.expect("group should be fetched");
    assert_eq!(fetched_group.name, created_group.name);
    assert_eq!(fetched_group.description, created_group.description);

    let deleted = client.groups.delete_itwin_group(token, itwin_id, group_id).await;
    assert_eq!(deleted.status, 204);
    assert!(deleted.data.is_none());
    assert!(deleted.error.is_none());

    let gone = client.groups.get_itwin_group(token, itwin_id, group_id).await;
    assert_eq!(gone.status, 404);
    assert!(gone.data.is_none());
    assert_eq!(gone.error.expect("error should be present").code, "GroupNotFound");
}

#[tokio::test]
async fn pagination_is_forwarded_on_the_wire() {
    use httptest::matchers::{all_of, contains, url_decoded};
    use itwin_access_control_client::QueryOptions;

    let server = Server::run();
    let base_url = Url::parse(&server.url_str("")).unwrap();
    let client = AccessControlClient::with_base_url(ReqwestClient::new(), base_url);
    let itwin_id = Uuid::new_v4();

    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", format!("/{itwin_id}/roles")),
            request::query(url_decoded(contains(("$top", "1")))),
        ])
        .respond_with(json_encoded(json!({
            "roles": [
                {"id": Uuid::new_v4(), "displayName": "Only", "description": "", "permissions": []}
            ]
        }))),
    );

    let response = client
        .roles
        .get_itwin_roles(
            "Bearer t",
            itwin_id,
            Some(QueryOptions {
                top: Some(1),
                skip: None,
            }),
        )
        .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.data.expect("roles should be present").len(), 1);
}
