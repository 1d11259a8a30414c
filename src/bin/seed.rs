use chrono::Utc;
use mogofy_api::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{
        colors, product_colors, product_sizes, products, sizes, users, Colors, ProductColors,
        ProductSizes, Products, Sizes, Users,
    },
    services::auth_service::hash_password,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "demo", "demo123", "user").await?;
    let color_ids = ensure_colors(&orm, &["red", "black", "white"]).await?;
    let size_ids = ensure_sizes(&orm, &["S", "M", "L", "XL"]).await?;
    seed_products(&orm, &color_ids, &size_ids).await?;

    println!("Seed completed. Demo user ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    orm: &OrmConn,
    username: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<i32> {
    if let Some(existing) = Users::find()
        .filter(users::Column::Username.eq(username))
        .one(orm)
        .await?
    {
        println!("User {username} already present");
        return Ok(existing.id);
    }

    let now = Utc::now();
    let user = users::ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        password_hash: Set(hash_password(password)?),
        role: Set(role.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(orm)
    .await?;

    println!("Ensured user {username} (role={role})");
    Ok(user.id)
}

async fn ensure_colors(orm: &OrmConn, titles: &[&str]) -> anyhow::Result<Vec<i32>> {
    let mut ids = Vec::with_capacity(titles.len());
    for title in titles {
        let found = Colors::find()
            .filter(colors::Column::Title.eq(*title))
            .one(orm)
            .await?;
        let id = match found {
            Some(color) => color.id,
            None => {
                colors::ActiveModel {
                    id: NotSet,
                    title: Set(title.to_string()),
                }
                .insert(orm)
                .await?
                .id
            }
        };
        ids.push(id);
    }
    println!("Seeded colors");
    Ok(ids)
}

async fn ensure_sizes(orm: &OrmConn, titles: &[&str]) -> anyhow::Result<Vec<i32>> {
    let mut ids = Vec::with_capacity(titles.len());
    for title in titles {
        let found = Sizes::find()
            .filter(sizes::Column::Title.eq(*title))
            .one(orm)
            .await?;
        let id = match found {
            Some(size) => size.id,
            None => {
                sizes::ActiveModel {
                    id: NotSet,
                    title: Set(title.to_string()),
                }
                .insert(orm)
                .await?
                .id
            }
        };
        ids.push(id);
    }
    println!("Seeded sizes");
    Ok(ids)
}

async fn seed_products(orm: &OrmConn, color_ids: &[i32], size_ids: &[i32]) -> anyhow::Result<()> {
    let catalog = vec![
        ("Basic Tee", "Cotton crew-neck t-shirt", 12.5),
        ("Hoodie", "Fleece-lined pullover hoodie", 39.0),
        ("Canvas Cap", "Adjustable six-panel cap", 15.0),
    ];

    for (title, description, price) in catalog {
        let existing = Products::find()
            .filter(products::Column::Title.eq(title))
            .one(orm)
            .await?;
        if existing.is_some() {
            continue;
        }

        let now = Utc::now();
        let product = products::ActiveModel {
            id: NotSet,
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            price: Set(Some(price)),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        }
        .insert(orm)
        .await?;

        for color_id in color_ids {
            ProductColors::insert(product_colors::ActiveModel {
                product_id: Set(product.id),
                color_id: Set(*color_id),
            })
            .on_conflict(
                OnConflict::columns([
                    product_colors::Column::ProductId,
                    product_colors::Column::ColorId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(orm)
            .await?;
        }

        for size_id in size_ids {
            ProductSizes::insert(product_sizes::ActiveModel {
                product_id: Set(product.id),
                size_id: Set(*size_id),
            })
            .on_conflict(
                OnConflict::columns([
                    product_sizes::Column::ProductId,
                    product_sizes::Column::SizeId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(orm)
            .await?;
        }
    }

    println!("Seeded products");
    Ok(())
}
