use crate::{
    data::sticky_message::StickyMessageRepository,
    error::AppError,
    model::sticky_message::CreateStickyMessageParam,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update_message_id;
