//! The Discord account behind a login session.

use serenity::all::User as DiscordUser;

use crate::model::user::UserDto;

/// Converts a Discord user into the DTO returned by the auth endpoints.
pub fn user_dto(user: &DiscordUser) -> UserDto {
    UserDto {
        id: user.id.get(),
        name: user.name.clone(),
        global_name: user.global_name.clone(),
        avatar_url: user.avatar_url(),
    }
}
