// src/types/mod.rs

// Pass-through DTOs mirroring the access-control service's JSON shapes.
// The client neither validates nor mutates them.

pub mod groups;
pub mod invitations;
pub mod jobs;
pub mod members;
pub mod permissions;
pub mod roles;
pub mod shares;

pub use groups::{Group, GroupUpdate, GroupUserInfo, NewGroup};
pub use invitations::{GroupMemberInvitation, GroupRef, MemberInvitation};
pub use jobs::{Job, JobError, JobResultMode, JobStatus, MemberRoleAssignment, NewJob};
pub use members::{
    AddedMembersAndInvitations, AddedOwnerResult, GroupMember, NewGroupMember, NewOwnerMember,
    NewUserMember, OwnerMember, UserMember,
};
pub use roles::{NewRole, Role, RoleUpdate};
pub use shares::{NewShare, Share};
