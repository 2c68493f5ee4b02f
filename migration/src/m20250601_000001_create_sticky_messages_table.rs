use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StickyMessages::Table)
                    .if_not_exists()
                    .col(pk_auto(StickyMessages::Id))
                    .col(string(StickyMessages::MessageId))
                    .col(string(StickyMessages::ChannelId))
                    .col(string(StickyMessages::GuildId))
                    .col(text(StickyMessages::Content))
                    .to_owned(),
            )
            .await?;

        // Not unique: a channel may carry more than one sticky
        manager
            .create_index(
                Index::create()
                    .name("idx_sticky_messages_channel_id")
                    .table(StickyMessages::Table)
                    .col(StickyMessages::ChannelId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_sticky_messages_channel_id")
                    .table(StickyMessages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StickyMessages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StickyMessages {
    Table,
    Id,
    MessageId,
    ChannelId,
    GuildId,
    Content,
}
