use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsersNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsersNotes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UsersNotes::Title)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UsersNotes::Content).text().not_null())
                    .col(ColumnDef::new(UsersNotes::CreationDate).date().not_null())
                    .col(ColumnDef::new(UsersNotes::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_notes_user_id")
                            .from(UsersNotes::Table, UsersNotes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_notes_user_id")
                    .table(UsersNotes::Table)
                    .col(UsersNotes::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsersNotes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UsersNotes {
    Table,
    Id,
    Title,
    Content,
    CreationDate,
    UserId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
