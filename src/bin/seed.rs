use chrono::Utc;
use reelbuy_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{categories, countries, marketplaces, profiles, reputations, statuses, users},
    middleware::auth::{ADMIN_ROLE, USER_ROLE},
    services::auth_service::hash_password,
};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.db_max_connections).await?;
    run_migrations(&orm).await?;

    seed_lookups(&orm).await?;
    let admin_id = ensure_user(&orm, "admin@example.com", "admin123", ADMIN_ROLE).await?;
    let user_id = ensure_user(&orm, "user@example.com", "user123", USER_ROLE).await?;

    println!("Seed completed. Admin ID: {admin_id}, User ID: {user_id}");
    Ok(())
}

macro_rules! seed_names {
    ($orm:expr, $module:ident, [$($name:literal),* $(,)?]) => {{
        for name in [$($name),*] {
            $module::Entity::insert($module::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
            })
            .on_conflict(
                OnConflict::column($module::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning($orm)
            .await?;
        }
        println!("Seeded {}", stringify!($module));
    }};
}

async fn seed_lookups(orm: &DatabaseConnection) -> anyhow::Result<()> {
    seed_names!(orm, countries, ["Colombia", "Mexico", "Peru"]);
    seed_names!(orm, categories, ["Clothing", "Electronics", "Home", "Toys"]);
    seed_names!(orm, marketplaces, ["Online", "Local pickup"]);
    seed_names!(orm, statuses, ["Draft", "Active", "Sold out"]);
    seed_names!(orm, reputations, ["New", "Trusted", "Top seller"]);
    seed_names!(orm, profiles, ["Buyer", "Seller"]);
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<Uuid> {
    let existing = users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(orm)
        .await?;

    let user_id = match existing {
        Some(user) => {
            users::Entity::update_many()
                .col_expr(users::Column::Role, Expr::value(role))
                .filter(users::Column::Id.eq(user.id))
                .exec(orm)
                .await?;
            user.id
        }
        None => {
            let id = Uuid::new_v4();
            users::Entity::insert(users::ActiveModel {
                id: Set(id),
                email: Set(email.to_string()),
                password_hash: Set(hash_password(password)?),
                first_name: Set(role.to_string()),
                last_name: Set("ReelBuy".to_string()),
                phone_number: Set(None),
                photo: Set(None),
                role: Set(role.to_string()),
                country_id: Set(None),
                profile_id: Set(None),
                reputation_id: Set(None),
                created_at: Set(Utc::now()),
            })
            .exec_without_returning(orm)
            .await?;
            id
        }
    };

    println!("Ensured user {email} (role={role})");
    Ok(user_id)
}
