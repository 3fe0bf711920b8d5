use serde::{Deserialize, Serialize};

/// Forum tag as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiForumTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub moderated: bool,
    pub emoji_id: Option<String>,
    pub emoji_name: Option<String>,
}

/// Forum tag in the client's own shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub moderated: bool,
    pub emoji: Option<ForumTagEmoji>,
}

/// Either a custom emoji id or a built-in emoji name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTagEmoji {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDefaultReaction {
    pub emoji_id: Option<String>,
    pub emoji_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultReaction {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// The first non-null of id/name decides presence; an empty string does not
/// count as an emoji.
fn has_tag_emoji(emoji_id: Option<&str>, emoji_name: Option<&str>) -> bool {
    emoji_id.or(emoji_name).is_some_and(|value| !value.is_empty())
}

pub fn transform_api_forum_tag(tag: &ApiForumTag) -> ForumTag {
    let emoji = if has_tag_emoji(tag.emoji_id.as_deref(), tag.emoji_name.as_deref()) {
        Some(ForumTagEmoji {
            id: tag.emoji_id.clone(),
            name: tag.emoji_name.clone(),
        })
    } else {
        None
    };

    ForumTag {
        id: tag.id.clone(),
        name: tag.name.clone(),
        moderated: tag.moderated,
        emoji,
    }
}

pub fn transform_forum_tag(tag: &ForumTag) -> ApiForumTag {
    ApiForumTag {
        id: tag.id.clone(),
        name: tag.name.clone(),
        moderated: tag.moderated,
        emoji_id: tag.emoji.as_ref().and_then(|emoji| emoji.id.clone()),
        emoji_name: tag.emoji.as_ref().and_then(|emoji| emoji.name.clone()),
    }
}

pub fn transform_api_default_reaction(reaction: &ApiDefaultReaction) -> DefaultReaction {
    DefaultReaction {
        id: reaction.emoji_id.clone(),
        name: reaction.emoji_name.clone(),
    }
}

pub fn transform_default_reaction(reaction: &DefaultReaction) -> ApiDefaultReaction {
    ApiDefaultReaction {
        emoji_id: reaction.id.clone(),
        emoji_name: reaction.name.clone(),
    }
}

impl From<&ApiForumTag> for ForumTag {
    fn from(tag: &ApiForumTag) -> Self {
        transform_api_forum_tag(tag)
    }
}

impl From<&ForumTag> for ApiForumTag {
    fn from(tag: &ForumTag) -> Self {
        transform_forum_tag(tag)
    }
}

impl From<&ApiDefaultReaction> for DefaultReaction {
    fn from(reaction: &ApiDefaultReaction) -> Self {
        transform_api_default_reaction(reaction)
    }
}

impl From<&DefaultReaction> for ApiDefaultReaction {
    fn from(reaction: &DefaultReaction) -> Self {
        transform_default_reaction(reaction)
    }
}
