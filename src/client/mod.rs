// src/client/mod.rs

use reqwest::{Client as ReqwestClient, Url};

use crate::error::ClientError;

pub mod dispatch;
pub mod groups;
pub mod group_members;
pub mod interface;
pub mod invitations;
pub mod jobs;
pub mod owner_members;
pub mod permissions;
pub mod roles;
pub mod shares;
pub mod user_members;

#[cfg(test)]
mod client_tests;

// Re-export the public client surface.
pub use self::dispatch::QueryOptions;
pub use self::groups::GroupsClient;
pub use self::group_members::GroupMembersClient;
pub use self::interface::{
    GroupMemberInvitationsApi, GroupMembersApi, GroupsApi, JobsApi, MemberInvitationsApi,
    OwnerMembersApi, PermissionsApi, RolesApi, SharesApi, UserMembersApi,
};
pub use self::invitations::{GroupMemberInvitationsClient, MemberInvitationsClient};
pub use self::jobs::JobsClient;
pub use self::owner_members::OwnerMembersClient;
pub use self::permissions::PermissionsClient;
pub use self::roles::RolesClient;
pub use self::shares::SharesClient;
pub use self::user_members::UserMembersClient;

use self::dispatch::ClientCore;

const DEFAULT_HOST: &str = "api.bentley.com";
const BASE_PATH: &str = "accesscontrol/itwins";

/// Construction options for [`AccessControlClient`].
///
/// `host_prefix` is an explicit parameter rather than an environment read;
/// reading the environment belongs in the calling application's composition
/// root, not here.
#[derive(Debug, Clone, Default)]
pub struct AccessControlConfig {
    /// Optional hostname prefix, e.g. `"dev-"` or `"qa-"`. `None` targets
    /// the production host unchanged.
    pub host_prefix: Option<String>,
}

/// Facade aggregating one sub-client per access-control resource.
///
/// Every call is stateless and independent; the only state held is the
/// immutable base URL and the shared HTTP client handle. Tokens are
/// supplied by the caller per call and passed through as opaque bearer
/// strings.
pub struct AccessControlClient {
    core: ClientCore,
    pub permissions: PermissionsClient,
    pub roles: RolesClient,
    pub groups: GroupsClient,
    pub user_members: UserMembersClient,
    pub group_members: GroupMembersClient,
    pub owner_members: OwnerMembersClient,
    pub member_invitations: MemberInvitationsClient,
    pub group_member_invitations: GroupMemberInvitationsClient,
    pub jobs: JobsClient,
    pub shares: SharesClient,
}

impl AccessControlClient {
    /// Build a client against the service's well-known base URL, applying
    /// the configured hostname prefix when present.
    pub fn new(config: AccessControlConfig) -> Result<Self, ClientError> {
        let prefix = config.host_prefix.as_deref().unwrap_or("");
        let base_url = Url::parse(&format!("https://{prefix}{DEFAULT_HOST}/{BASE_PATH}"))?;
        let http = ReqwestClient::builder().build()?;
        Ok(Self::with_base_url(http, base_url))
    }

    /// Build a client against an arbitrary base URL, e.g. a local test
    /// server or a private deployment.
    pub fn with_base_url(http: ReqwestClient, base_url: Url) -> Self {
        let core = ClientCore::new(http, base_url);
        Self {
            permissions: PermissionsClient::new(core.clone()),
            roles: RolesClient::new(core.clone()),
            groups: GroupsClient::new(core.clone()),
            user_members: UserMembersClient::new(core.clone()),
            group_members: GroupMembersClient::new(core.clone()),
            owner_members: OwnerMembersClient::new(core.clone()),
            member_invitations: MemberInvitationsClient::new(core.clone()),
            group_member_invitations: GroupMemberInvitationsClient::new(core.clone()),
            jobs: JobsClient::new(core.clone()),
            shares: SharesClient::new(core.clone()),
            core,
        }
    }

    /// The base URL every sub-client dispatches against.
    pub fn base_url(&self) -> &Url {
        self.core.base_url()
    }
}
