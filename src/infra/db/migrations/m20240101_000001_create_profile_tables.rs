//! Migration: profile tables, interest catalog and interest link tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserProfiles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(UserProfiles::FullName).string().null())
                    .col(ColumnDef::new(UserProfiles::Role).string().not_null())
                    .col(timestamp(UserProfiles::CreatedAt))
                    .col(timestamp(UserProfiles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Interests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Interests::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Interests::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Interests::Category).string().null())
                    .col(timestamp(Interests::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MentorProfiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MentorProfiles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(MentorProfiles::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(MentorProfiles::Industry).string().null())
                    .col(ColumnDef::new(MentorProfiles::JobTitle).string().null())
                    .col(text_array(MentorProfiles::HelpTypesOffered))
                    .col(
                        ColumnDef::new(MentorProfiles::MaxRequestsPerWeek)
                            .integer()
                            .not_null()
                            .check(Expr::col(MentorProfiles::MaxRequestsPerWeek).gt(0)),
                    )
                    .col(
                        ColumnDef::new(MentorProfiles::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(timestamp(MentorProfiles::CreatedAt))
                    .col(timestamp(MentorProfiles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mentor_profiles_active_created")
                    .table(MentorProfiles::Table)
                    .col(MentorProfiles::IsActive)
                    .col(MentorProfiles::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MenteeProfiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MenteeProfiles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(MenteeProfiles::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(MenteeProfiles::Industry).string().null())
                    .col(ColumnDef::new(MenteeProfiles::Goals).text().null())
                    .col(text_array(MenteeProfiles::HelpNeeded))
                    .col(ColumnDef::new(MenteeProfiles::Background).text().null())
                    .col(timestamp(MenteeProfiles::CreatedAt))
                    .col(timestamp(MenteeProfiles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MentorInterests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MentorInterests::MentorProfileId).uuid().not_null())
                    .col(ColumnDef::new(MentorInterests::InterestId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(MentorInterests::MentorProfileId)
                            .col(MentorInterests::InterestId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentor_interests_profile")
                            .from(MentorInterests::Table, MentorInterests::MentorProfileId)
                            .to(MentorProfiles::Table, MentorProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentor_interests_interest")
                            .from(MentorInterests::Table, MentorInterests::InterestId)
                            .to(Interests::Table, Interests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MenteeInterests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MenteeInterests::MenteeProfileId).uuid().not_null())
                    .col(ColumnDef::new(MenteeInterests::InterestId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(MenteeInterests::MenteeProfileId)
                            .col(MenteeInterests::InterestId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentee_interests_profile")
                            .from(MenteeInterests::Table, MenteeInterests::MenteeProfileId)
                            .to(MenteeProfiles::Table, MenteeProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentee_interests_interest")
                            .from(MenteeInterests::Table, MenteeInterests::InterestId)
                            .to(Interests::Table, Interests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenteeInterests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MentorInterests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MenteeProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MentorProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Interests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}

fn timestamp<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn text_array<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .array(ColumnType::Text)
        .not_null()
        .default(Expr::cust("'{}'"))
        .to_owned()
}

#[derive(Iden)]
enum UserProfiles {
    Table,
    Id,
    FullName,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Interests {
    Table,
    Id,
    Name,
    Category,
    CreatedAt,
}

#[derive(Iden)]
enum MentorProfiles {
    Table,
    Id,
    UserId,
    Industry,
    JobTitle,
    HelpTypesOffered,
    MaxRequestsPerWeek,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum MenteeProfiles {
    Table,
    Id,
    UserId,
    Industry,
    Goals,
    HelpNeeded,
    Background,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum MentorInterests {
    Table,
    MentorProfileId,
    InterestId,
}

#[derive(Iden)]
enum MenteeInterests {
    Table,
    MenteeProfileId,
    InterestId,
}
