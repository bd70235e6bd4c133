use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsersDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsersDetails::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UsersDetails::PhoneNumber)
                            .string_len(12)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UsersDetails::BirthDate).date().null())
                    .col(ColumnDef::new(UsersDetails::Address).string_len(120).null())
                    .col(
                        ColumnDef::new(UsersDetails::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_details_user_id")
                            .from(UsersDetails::Table, UsersDetails::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsersDetails::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UsersDetails {
    Table,
    Id,
    PhoneNumber,
    BirthDate,
    Address,
    UserId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
