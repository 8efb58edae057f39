//! Migration: mentorship requests and connections.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MentorshipRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MentorshipRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MentorshipRequests::MenteeId).uuid().not_null())
                    .col(ColumnDef::new(MentorshipRequests::MentorId).uuid().not_null())
                    .col(ColumnDef::new(MentorshipRequests::HelpType).string().not_null())
                    .col(ColumnDef::new(MentorshipRequests::Context).text().not_null())
                    .col(
                        ColumnDef::new(MentorshipRequests::KeyQuestions)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(MentorshipRequests::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(MentorshipRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MentorshipRequests::RespondedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mentorship_requests_mentor_status")
                    .table(MentorshipRequests::Table)
                    .col(MentorshipRequests::MentorId)
                    .col(MentorshipRequests::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mentorship_requests_mentee")
                    .table(MentorshipRequests::Table)
                    .col(MentorshipRequests::MenteeId)
                    .to_owned(),
            )
            .await?;

        // At most one pending request per (mentee, mentor) pair
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS uq_mentorship_requests_pending_pair \
                 ON mentorship_requests (mentee_id, mentor_id) WHERE status = 'pending'",
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Connections::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Connections::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Connections::MentorId).uuid().not_null())
                    .col(ColumnDef::new(Connections::MenteeId).uuid().not_null())
                    .col(ColumnDef::new(Connections::RequestId).uuid().null())
                    .col(
                        ColumnDef::new(Connections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_connections_request")
                            .from(Connections::Table, Connections::RequestId)
                            .to(MentorshipRequests::Table, MentorshipRequests::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_connections_pair")
                    .table(Connections::Table)
                    .col(Connections::MentorId)
                    .col(Connections::MenteeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_connections_mentee")
                    .table(Connections::Table)
                    .col(Connections::MenteeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Connections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MentorshipRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MentorshipRequests {
    Table,
    Id,
    MenteeId,
    MentorId,
    HelpType,
    Context,
    KeyQuestions,
    Status,
    CreatedAt,
    RespondedAt,
}

#[derive(Iden)]
enum Connections {
    Table,
    Id,
    MentorId,
    MenteeId,
    RequestId,
    CreatedAt,
}
