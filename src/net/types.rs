//! Wire DTOs for the identity service and the clan data API.
//!
//! DESIGN
//! ======
//! The identity service omits or nulls optional fields freely, so every list
//! and flag tolerates both absence and `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Discord identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Discord snowflake.
    pub id: String,
    pub username: String,
    /// Discord global display name.
    #[serde(rename = "global_name", default)]
    pub display_name: Option<String>,
    /// Discord avatar hash.
    #[serde(rename = "avatar", default)]
    pub avatar_ref: Option<String>,
}

/// Site role granted to a user by the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: i64,
}

/// `GET /auth/me` response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<Role>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_super_admin: bool,
}

/// Clan roster entry linking a Discord account to a RuneScape name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClanMember {
    #[serde(default, deserialize_with = "null_as_default")]
    pub discord_id: String,
    /// RuneScape name.
    pub rsn: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub join_date: Option<String>,
}

/// `GET /clan/member/{id}` response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct MemberEnvelope {
    #[serde(default)]
    pub member: Option<ClanMember>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
