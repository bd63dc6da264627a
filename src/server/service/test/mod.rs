mod ban;
mod guild;
mod message_format;
mod prune;
mod role_menu;
