//! Messaging groups (group and direct messages).

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::RequestSpec;
use crate::psn::Shared;

/// A messaging group.
///
/// Obtained via [`crate::Psn::group`] (by id or by creating one from
/// invitees) or [`super::Client::get_groups`].
pub struct Group {
    shared: Arc<Shared>,
    group_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateGroupResponse {
    group_id: String,
}

/// Receipt for a sent message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReceipt {
    pub message_uid: String,
    pub created_timestamp: String,
}

/// A page of a group's message history.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub messages: Vec<GroupMessage>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    pub reached_end_of_page: bool,
    pub message_count: u32,
}

/// One message in a conversation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessage {
    pub message_uid: String,
    pub message_type: u32,
    #[serde(default)]
    pub body: Option<String>,
    pub created_timestamp: String,
    pub sender: MessageSender,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSender {
    pub account_id: String,
    #[serde(default)]
    pub online_id: Option<String>,
}

impl Group {
    /// Wrap a known-good group id without validation (listing endpoints
    /// already proved it exists).
    pub(crate) fn attach(shared: Arc<Shared>, group_id: String) -> Self {
        Self { shared, group_id }
    }

    /// Open an existing group, validating the id.
    pub(crate) async fn from_group_id(shared: Arc<Shared>, group_id: String) -> Result<Self, Error> {
        let group = Self { shared, group_id };
        // Surfaces NotFound for bogus ids before the caller holds a handle.
        group.get_group_information().await?;
        Ok(group)
    }

    /// Create a new group by inviting the given account ids.
    #[instrument(skip(shared, invitees), fields(invitees = invitees.len()))]
    pub(crate) async fn create(
        shared: Arc<Shared>,
        invitees: Vec<String>,
    ) -> Result<Self, Error> {
        debug!("creating messaging group");
        let body = json!({
            "invitees": invitees
                .iter()
                .map(|account_id| json!({ "accountId": account_id }))
                .collect::<Vec<_>>(),
        });
        let spec = RequestSpec::post(shared.endpoints.create_group()).json(body);
        let response: CreateGroupResponse = shared
            .request_builder
            .request_json(spec)
            .await
            .map_err(|err| match err {
                Error::Forbidden(_) => Error::Forbidden(
                    "the group cannot be created because the user has either set messages \
                     to private or has blocked you"
                        .to_string(),
                ),
                other => other,
            })?;
        Ok(Self {
            shared,
            group_id: response.group_id,
        })
    }

    /// The group id.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Group chat information: name, icon, members, main thread, and so on.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the group id does not exist.
    pub async fn get_group_information(&self) -> Result<serde_json::Value, Error> {
        let spec = RequestSpec::get(self.shared.endpoints.group_members(&self.group_id)).query(
            "includeFields",
            "groupName,groupIcon,members,mainThread,joinedTimestamp,\
             modifiedTimestamp,isFavorite,existsNewArrival,partySessions,\
             notificationSetting",
        );
        self.shared
            .request_builder
            .request_json(spec)
            .await
            .map_err(|err| match err {
                Error::NotFound(_) => {
                    Error::NotFound(format!("group id {} does not exist", self.group_id))
                }
                other => other,
            })
    }

    /// Send a text message to the group.
    #[instrument(skip(self, message))]
    pub async fn send_message(&self, message: &str) -> Result<MessageReceipt, Error> {
        let body = json!({ "messageType": 1, "body": message });
        let spec =
            RequestSpec::post(self.shared.endpoints.send_group_message(&self.group_id)).json(body);
        self.shared.request_builder.request_json(spec).await
    }

    /// The most recent messages in the group, newest first.
    pub async fn get_conversation(&self, limit: u32) -> Result<Conversation, Error> {
        let spec = RequestSpec::get(self.shared.endpoints.conversation(&self.group_id))
            .query("limit", limit);
        self.shared.request_builder.request_json(spec).await
    }

    /// Rename the group. Direct-message groups cannot be renamed.
    ///
    /// # Errors
    ///
    /// [`Error::BadRequest`] when the group is a DM or the caller is not a
    /// member.
    pub async fn change_name(&self, group_name: &str) -> Result<(), Error> {
        let body = json!({ "groupName": { "value": group_name } });
        let spec =
            RequestSpec::patch(self.shared.endpoints.group_settings(&self.group_id)).json(body);
        self.shared
            .request_builder
            .request(spec)
            .await
            .map_err(|err| match err {
                Error::BadRequest(_) => Error::BadRequest(format!(
                    "the name of group id {} cannot be changed; it is either a DM or does \
                     not exist",
                    self.group_id
                )),
                other => other,
            })?;
        Ok(())
    }

    /// Leave the group.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the caller is not a member.
    pub async fn leave_group(&self) -> Result<(), Error> {
        self.shared
            .request_builder
            .request(RequestSpec::delete(
                self.shared.endpoints.leave_group(&self.group_id),
            ))
            .await?;
        Ok(())
    }
}

impl std::fmt::Debug for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group")
            .field("group_id", &self.group_id)
            .finish()
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group ID: {}", self.group_id)
    }
}
