// src/client/client_tests.rs
#![cfg(test)]

use httptest::{
    Expectation, ServerHandle, ServerPool,
    matchers::{all_of, contains, eq, json_decoded, request, url_decoded},
    responders::{json_encoded, status_code},
};
use reqwest::{Client as ReqwestClient, Url};
use serde_json::json;
use uuid::Uuid;

use super::AccessControlClient;
use super::dispatch::QueryOptions;
use super::interface::{
    GroupsApi, JobsApi, MemberInvitationsApi, OwnerMembersApi, PermissionsApi, RolesApi,
    SharesApi, UserMembersApi,
};
use crate::types::{JobResultMode, JobStatus, NewOwnerMember, NewRole, NewShare, NewUserMember};

const TOKEN: &str = "Bearer test-token";

// Capture client tracing in test output; repeated init attempts are fine.
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// Shared setup for tests needing a mock server
fn setup_test_server() -> (ServerHandle<'static>, AccessControlClient) {
    init_tracing();
    let server_pool = Box::leak(Box::new(ServerPool::new(1)));
    let server = server_pool.get_server();
    let base_url = Url::parse(&server.url_str("")).unwrap();
    let client = AccessControlClient::with_base_url(ReqwestClient::new(), base_url);
    (server, client)
}

#[tokio::test]
async fn test_get_itwin_roles_with_pagination() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let roles = json!({
        "roles": [
            {"id": Uuid::new_v4(), "displayName": "Admin", "description": "Full access", "permissions": ["administration_manage_roles"]},
            {"id": Uuid::new_v4(), "displayName": "Reader", "description": "Read only", "permissions": []}
        ]
    });

    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", format!("/{itwin_id}/roles")),
            request::query(url_decoded(contains(("$top", "2")))),
            request::query(url_decoded(contains(("$skip", "4")))),
            request::headers(contains(("authorization", TOKEN))),
        ])
        .respond_with(json_encoded(roles)),
    );

    let query = QueryOptions {
        top: Some(2),
        skip: Some(4),
    };
    let response = client.roles.get_itwin_roles(TOKEN, itwin_id, Some(query)).await;

    assert_eq!(response.status, 200);
    assert!(response.error.is_none());
    let roles = response.data.expect("roles should be present");
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0].display_name, "Admin");
    assert_eq!(roles[0].permissions, vec!["administration_manage_roles"]);
}

#[tokio::test]
async fn test_get_itwin_role_not_found() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let role_id = Uuid::new_v4();
    let error_body = json!({
        "error": {
            "code": "RoleNotFound",
            "message": "Requested role is not available."
        }
    });

    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            format!("/{itwin_id}/roles/{role_id}"),
        ))
        .respond_with(status_code(404).body(error_body.to_string())),
    );

    let response = client.roles.get_itwin_role(TOKEN, itwin_id, role_id).await;

    assert_eq!(response.status, 404);
    assert!(response.data.is_none());
    let error = response.error.expect("error should be present");
    assert_eq!(error.code, "RoleNotFound");
    assert_eq!(error.message, "Requested role is not available.");
}

#[tokio::test]
async fn test_create_then_delete_itwin_role() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let role_id = Uuid::new_v4();
    let created = json!({
        "role": {
            "id": role_id,
            "displayName": "Reviewer",
            "description": "Read-only reviewer",
            "permissions": []
        }
    });

    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", format!("/{itwin_id}/roles")),
            request::headers(contains(("content-type", "application/json"))),
            request::body(json_decoded(eq(json!({
                "displayName": "Reviewer",
                "description": "Read-only reviewer"
            })))),
        ])
        .respond_with(status_code(201).body(created.to_string())),
    );
    server.expect(
        Expectation::matching(request::method_path(
            "DELETE",
            format!("/{itwin_id}/roles/{role_id}"),
        ))
        .respond_with(status_code(204)),
    );

    let new_role = NewRole {
        display_name: "Reviewer".to_string(),
        description: "Read-only reviewer".to_string(),
    };
    let create_response = client.roles.create_itwin_role(TOKEN, itwin_id, &new_role).await;
    assert_eq!(create_response.status, 201);
    assert!(create_response.error.is_none());
    let role = create_response.data.expect("created role should be present");
    assert_eq!(role.id, role_id);
    assert_eq!(role.display_name, "Reviewer");

    let delete_response = client.roles.delete_itwin_role(TOKEN, itwin_id, role.id).await;
    assert_eq!(delete_response.status, 204);
    assert!(delete_response.data.is_none());
    assert!(delete_response.error.is_none());
}

#[tokio::test]
async fn test_get_itwin_group_not_found() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let group_id = Uuid::new_v4();
    let error_body = json!({
        "error": {
            "code": "GroupNotFound",
            "message": "Requested group is not available.",
            "target": "groupId"
        }
    });

    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            format!("/{itwin_id}/groups/{group_id}"),
        ))
        .respond_with(status_code(404).body(error_body.to_string())),
    );

    let response = client.groups.get_itwin_group(TOKEN, itwin_id, group_id).await;

    assert_eq!(response.status, 404);
    assert!(response.data.is_none());
    let error = response.error.expect("error should be present");
    assert_eq!(error.code, "GroupNotFound");
    assert_eq!(error.target.as_deref(), Some("groupId"));
}

#[tokio::test]
async fn test_get_itwin_permissions_unwraps_list() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let body = json!({
        "permissions": ["administration_invite_member", "administration_manage_roles"]
    });

    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            format!("/{itwin_id}/permissions"),
        ))
        .respond_with(json_encoded(body)),
    );

    let response = client.permissions.get_itwin_permissions(TOKEN, itwin_id).await;

    assert_eq!(response.status, 200);
    assert_eq!(
        response.data.expect("permissions should be present"),
        vec![
            "administration_invite_member".to_string(),
            "administration_manage_roles".to_string()
        ]
    );
}

#[tokio::test]
async fn test_add_itwin_user_members_partitions_members_and_invitations() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let role_id = Uuid::new_v4();
    let body = json!({
        "members": [
            {"id": Uuid::new_v4(), "email": "internal@example.com", "givenName": "Ina", "surname": "Ternal", "roles": []}
        ],
        "invitations": [
            {"id": Uuid::new_v4(), "email": "external@example.com", "status": "Pending", "roles": []}
        ]
    });

    server.expect(
        Expectation::matching(request::method_path(
            "POST",
            format!("/{itwin_id}/members/users"),
        ))
        .respond_with(status_code(201).body(body.to_string())),
    );

    let new_members = vec![
        NewUserMember {
            email: "internal@example.com".to_string(),
            role_ids: vec![role_id],
        },
        NewUserMember {
            email: "external@example.com".to_string(),
            role_ids: vec![role_id],
        },
    ];
    let response = client
        .user_members
        .add_itwin_user_members(TOKEN, itwin_id, &new_members)
        .await;

    assert_eq!(response.status, 201);
    let added = response.data.expect("partition should be present");
    assert_eq!(added.members.len(), 1);
    assert_eq!(added.members[0].email.as_deref(), Some("internal@example.com"));
    assert_eq!(added.invitations.len(), 1);
    assert_eq!(added.invitations[0].email, "external@example.com");
}

#[tokio::test]
async fn test_user_member_list_passes_missing_users_through() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    // A membership row whose identity was deleted upstream: null identity
    // fields must survive deserialization unfiltered.
    let body = json!({
        "members": [
            {"id": Uuid::new_v4(), "email": null, "givenName": null, "surname": null, "organization": null, "roles": []},
            {"id": Uuid::new_v4(), "email": "alive@example.com", "givenName": "Al", "surname": "Ive", "roles": []}
        ]
    });

    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            format!("/{itwin_id}/members/users"),
        ))
        .respond_with(json_encoded(body)),
    );

    let response = client
        .user_members
        .query_itwin_user_members(TOKEN, itwin_id, None)
        .await;

    let members = response.data.expect("members should be present");
    assert_eq!(members.len(), 2);
    assert!(members[0].email.is_none());
    assert!(members[0].given_name.is_none());
    assert_eq!(members[1].email.as_deref(), Some("alive@example.com"));
}

#[tokio::test]
async fn test_add_itwin_owner_member_returns_invitation_for_external_user() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let body = json!({
        "invitation": {
            "id": Uuid::new_v4(),
            "email": "outside@example.com",
            "status": "Pending",
            "roles": []
        }
    });

    server.expect(
        Expectation::matching(request::method_path(
            "POST",
            format!("/{itwin_id}/members/owners"),
        ))
        .respond_with(status_code(201).body(body.to_string())),
    );

    let owner = NewOwnerMember {
        email: "outside@example.com".to_string(),
    };
    let response = client
        .owner_members
        .add_itwin_owner_member(TOKEN, itwin_id, &owner)
        .await;

    assert_eq!(response.status, 201);
    let added = response.data.expect("result should be present");
    assert!(added.member.is_none());
    let invitation = added.invitation.expect("invitation should be present");
    assert_eq!(invitation.email, "outside@example.com");
}

#[tokio::test]
async fn test_get_itwin_job_representation_includes_errors() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let job_id = Uuid::new_v4();
    let body = json!({
        "job": {
            "id": job_id,
            "status": "PartialCompleted",
            "error": [
                {"code": "TeamMemberNotFound", "message": "Member could not be updated.", "target": "memberId"}
            ]
        }
    });

    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", format!("/{itwin_id}/jobs/{job_id}")),
            request::headers(contains(("prefer", "return=representation"))),
        ])
        .respond_with(json_encoded(body)),
    );

    let response = client
        .jobs
        .get_itwin_job(TOKEN, itwin_id, job_id, JobResultMode::Representation)
        .await;

    let job = response.data.expect("job should be present");
    assert_eq!(job.status, JobStatus::PartialCompleted);
    let errors = job.error.expect("representation mode surfaces job errors");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "TeamMemberNotFound");
}

#[tokio::test]
async fn test_get_itwin_job_minimal_omits_errors() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let job_id = Uuid::new_v4();
    let body = json!({
        "job": {
            "id": job_id,
            "status": "Completed"
        }
    });

    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", format!("/{itwin_id}/jobs/{job_id}")),
            request::headers(contains(("prefer", "return=minimal"))),
        ])
        .respond_with(json_encoded(body)),
    );

    let response = client
        .jobs
        .get_itwin_job(TOKEN, itwin_id, job_id, JobResultMode::default())
        .await;

    let job = response.data.expect("job should be present");
    assert_eq!(job.status, JobStatus::Completed);
    assert!(job.error.is_none());
}

#[tokio::test]
async fn test_create_itwin_share_past_expiration_rejected() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let error_body = json!({
        "error": {
            "code": "InvalidAccessControlRequest",
            "message": "Cannot create share.",
            "details": [
                {"code": "InvalidValue", "message": "Expiration must be in the future.", "target": "expiration"}
            ]
        }
    });

    server.expect(
        Expectation::matching(request::method_path(
            "POST",
            format!("/{itwin_id}/shares"),
        ))
        .respond_with(status_code(422).body(error_body.to_string())),
    );

    let share = NewShare {
        share_contract: None,
        expiration: Some("2020-01-01T00:00:00Z".parse().unwrap()),
    };
    let response = client.shares.create_itwin_share(TOKEN, itwin_id, &share).await;

    assert_eq!(response.status, 422);
    assert!(response.data.is_none());
    let error = response.error.expect("error should be present");
    assert_eq!(error.code, "InvalidAccessControlRequest");
    let details = error.details.expect("details should be present");
    assert_eq!(details[0].target.as_deref(), Some("expiration"));
}

#[tokio::test]
async fn test_create_itwin_share_with_empty_body_gets_server_defaults() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let body = json!({
        "share": {
            "id": Uuid::new_v4(),
            "shareContract": "Default",
            "expiration": "2027-06-01T00:00:00Z"
        }
    });

    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", format!("/{itwin_id}/shares")),
            request::body(json_decoded(eq(json!({})))),
        ])
        .respond_with(status_code(201).body(body.to_string())),
    );

    let response = client
        .shares
        .create_itwin_share(TOKEN, itwin_id, &NewShare::default())
        .await;

    assert_eq!(response.status, 201);
    let share = response.data.expect("share should be present");
    assert_eq!(share.share_contract, "Default");
}

#[tokio::test]
async fn test_delete_itwin_member_invitation_no_content() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let invitation_id = Uuid::new_v4();

    server.expect(
        Expectation::matching(request::method_path(
            "DELETE",
            format!("/{itwin_id}/members/invitations/{invitation_id}"),
        ))
        .respond_with(status_code(204)),
    );

    let response = client
        .member_invitations
        .delete_itwin_member_invitation(TOKEN, itwin_id, invitation_id)
        .await;

    assert_eq!(response.status, 204);
    assert!(response.data.is_none());
    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_malformed_success_body_collapses_to_internal_server_error() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    // 200 with a body that does not match the wire shape: the
    // deserialization failure must collapse to the synthetic envelope.
    let body = json!({"roles": "not-an-array"});

    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            format!("/{itwin_id}/roles"),
        ))
        .respond_with(json_encoded(body)),
    );

    let response = client.roles.get_itwin_roles(TOKEN, itwin_id, None).await;

    assert_eq!(response.status, 500);
    assert!(response.data.is_none());
    assert_eq!(
        response.error.expect("error should be present").code,
        "InternalServerError"
    );
}

#[tokio::test]
async fn test_update_itwin_user_member_sends_role_ids_body() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();
    let member_id = Uuid::new_v4();
    let role_id = Uuid::new_v4();
    let body = json!({
        "member": {
            "id": member_id,
            "email": "member@example.com",
            "roles": [
                {"id": role_id, "displayName": "Editor", "description": "Edit access", "permissions": []}
            ]
        }
    });

    server.expect(
        Expectation::matching(all_of![
            request::method_path("PATCH", format!("/{itwin_id}/members/users/{member_id}")),
            request::body(json_decoded(eq(json!({"roleIds": [role_id]})))),
        ])
        .respond_with(json_encoded(body)),
    );

    let response = client
        .user_members
        .update_itwin_user_member(TOKEN, itwin_id, member_id, vec![role_id])
        .await;

    assert_eq!(response.status, 200);
    let member = response.data.expect("member should be present");
    assert_eq!(member.id, member_id);
    assert_eq!(member.roles.len(), 1);
    assert_eq!(member.roles[0].display_name, "Editor");
}

#[tokio::test]
async fn test_transport_failure_yields_internal_server_error() {
    init_tracing();
    // Nothing is listening on the discard port; the connection failure must
    // collapse to the single synthetic envelope.
    let base_url = Url::parse("http://127.0.0.1:9/").unwrap();
    let client = AccessControlClient::with_base_url(ReqwestClient::new(), base_url);

    let response = client
        .roles
        .get_itwin_roles(TOKEN, Uuid::new_v4(), None)
        .await;

    assert_eq!(response.status, 500);
    assert!(response.data.is_none());
    let error = response.error.expect("error should be present");
    assert_eq!(error.code, "InternalServerError");
    assert_eq!(
        error.message,
        "An internal exception happened while calling the service"
    );
}

#[tokio::test]
async fn test_server_fault_collapses_to_internal_server_error() {
    let (server, client) = setup_test_server();
    let itwin_id = Uuid::new_v4();

    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            format!("/{itwin_id}/shares"),
        ))
        .respond_with(status_code(503)),
    );

    let response = client.shares.query_itwin_shares(TOKEN, itwin_id, None).await;

    assert_eq!(response.status, 500);
    assert!(response.data.is_none());
    assert_eq!(
        response.error.expect("error should be present").code,
        "InternalServerError"
    );
}
