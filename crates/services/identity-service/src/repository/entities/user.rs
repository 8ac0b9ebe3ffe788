//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainResult, Role, User, UserProfile};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub identity_number: Option<String>,
    pub phone_number: Option<String>,
    pub birth_date: Date,
    pub address: String,
    pub role_id: i32,
    pub base_salary: Decimal,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Rebuild the domain user from this row and its already-resolved role.
    pub fn into_domain(self, role: Role) -> DomainResult<User> {
        let profile = UserProfile {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            identity_number: self.identity_number,
            phone_number: self.phone_number,
            birth_date: self.birth_date,
            address: self.address,
            base_salary: self.base_salary,
        };

        Ok(User::new(profile, self.password_hash, role)?.with_id(self.id))
    }
}
