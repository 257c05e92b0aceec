use crate::domain::messages::message::MessageWithAuthor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    User(i32),
    Anonymous,
}

impl Actor {
    pub fn user_id(&self) -> Option<i32> {
        match self {
            Actor::User(id) => Some(*id),
            Actor::Anonymous => None,
        }
    }
}

/// What an actor may do with a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    None,
    /// Read and like/unlike; authors never like their own messages.
    Like,
    /// Read and delete.
    Own,
}

// Presentation builds the Actor from the session; this module stays free of HTTP types.

pub fn resolve_message(actor: &Actor, message: &MessageWithAuthor) -> Capability {
    match actor {
        Actor::Anonymous => Capability::None,
        Actor::User(uid) if *uid == message.user_id => Capability::Own,
        Actor::User(_) => Capability::Like,
    }
}

pub fn require_owner(actor: &Actor, message: &MessageWithAuthor) -> anyhow::Result<()> {
    if resolve_message(actor, message) == Capability::Own {
        Ok(())
    } else {
        anyhow::bail!("forbidden")
    }
}

pub fn can_follow(actor: &Actor, target_id: i32) -> bool {
    matches!(actor, Actor::User(uid) if *uid != target_id)
}
