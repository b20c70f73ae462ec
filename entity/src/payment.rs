use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_email: String,
    pub amount: i64,
    pub currency: String,
    pub transaction_id: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payment_item::Entity")]
    PaymentItem,
}

impl Related<super::payment_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
