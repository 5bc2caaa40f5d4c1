use sea_orm_migration::prelude::*;

/// User Spins (用户转盘记录)
#[derive(DeriveIden)]
enum UserSpins {
    Table,
    Id,
    Phone,
    Name,
    Prize,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 一个手机号只允许一条记录:
/// - phone 建唯一索引，应用层先查后插，索引兜底并发场景
/// - prize 冗余存储奖品文案快照 (后续转盘配置调整不影响历史记录)
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 转盘记录表
        manager
            .create_table(
                Table::create()
                    .table(UserSpins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserSpins::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserSpins::Phone)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserSpins::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserSpins::Prize)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserSpins::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // phone 唯一索引（一个手机号只能抽一次）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_spins_phone_unique")
                    .table(UserSpins::Table)
                    .col(UserSpins::Phone)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(UserSpins::Table).to_owned())
            .await?;

        Ok(())
    }
}
