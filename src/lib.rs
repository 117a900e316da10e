// src/lib.rs

//! Client library for the iTwin access-control REST API.
//!
//! Wraps the service's CRUD endpoints for permissions, roles, groups,
//! members (users, groups, owners), invitations, member jobs, and shares.
//! Every call takes a caller-supplied bearer token, builds one HTTP
//! request, and normalizes the outcome into the uniform
//! [`ApiResponse`](response::ApiResponse) envelope:
//!
//! - Domain errors (4xx) resolve normally with the service's error schema
//!   passed through verbatim in `error`; they are never raised as `Err`.
//! - Transport failures, 5xx faults, and deserialization failures collapse
//!   into a single synthetic `{status: 500, error: InternalServerError}`
//!   envelope.
//!
//! The client holds no state besides the configured base URL; there is no
//! caching, retrying, or token management.
//!
//! ```rust,no_run
//! use itwin_access_control_client::{AccessControlClient, AccessControlConfig, RolesApi};
//! use uuid::Uuid;
//!
//! # async fn example(token: &str, itwin_id: Uuid) -> anyhow::Result<()> {
//! let client = AccessControlClient::new(AccessControlConfig::default())?;
//! let response = client.roles.get_itwin_roles(token, itwin_id, None).await;
//! if let Some(roles) = response.data {
//!     for role in roles {
//!         println!("{} ({})", role.display_name, role.id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod response;
pub mod types;

pub use client::{
    AccessControlClient, AccessControlConfig, GroupMemberInvitationsApi, GroupMembersApi,
    GroupsApi, JobsApi, MemberInvitationsApi, OwnerMembersApi, PermissionsApi, QueryOptions,
    RolesApi, SharesApi, UserMembersApi,
};
pub use error::ClientError;
pub use response::{ApiError, ApiErrorDetail, ApiResponse};
