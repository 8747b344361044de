//! Cafe Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Cafe, CafeCreate};
use crate::utils::text::title_case;

/// Find all cafes ordered by id
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price \
         FROM cafe ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(cafes)
}

/// Find cafes at a location, comparing against the title-cased query
///
/// An empty result is not an error.
pub async fn find_by_location(pool: &SqlitePool, location: &str) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price \
         FROM cafe WHERE location = ? ORDER BY id",
    )
    .bind(title_case(location))
    .fetch_all(pool)
    .await?;
    Ok(cafes)
}

/// Find cafe by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price \
         FROM cafe WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

/// Find cafe by name
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price \
         FROM cafe WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

/// Create a new cafe with an auto-assigned id
pub async fn create(pool: &SqlitePool, data: CafeCreate) -> RepoResult<Cafe> {
    // Check duplicate name (the UNIQUE constraint backstops concurrent inserts)
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Cafe '{}' already exists",
            data.name
        )));
    }

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO cafe (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.name)
    .bind(data.map_url)
    .bind(data.img_url)
    .bind(data.location)
    .bind(data.seats)
    .bind(data.has_toilet)
    .bind(data.has_wifi)
    .bind(data.has_sockets)
    .bind(data.can_take_calls)
    .bind(data.coffee_price)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create cafe".into()))
}

/// Set coffee_price on the cafe with the given id
///
/// Any string is an acceptable price, including empty.
pub async fn update_coffee_price(pool: &SqlitePool, id: i64, new_price: &str) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
        .bind(new_price)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }
    Ok(())
}

/// Hard delete the cafe with the given id
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> (SqlitePool, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cafes.db");
        let db = DbService::new(path.to_str().unwrap()).await.unwrap();
        (db.pool, tmp)
    }

    fn sample(name: &str, location: &str) -> CafeCreate {
        CafeCreate {
            name: name.to_string(),
            map_url: format!("https://maps.example.com/{name}"),
            img_url: format!("https://img.example.com/{name}.jpg"),
            location: location.to_string(),
            seats: "20-30".to_string(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: Some("£2.80".to_string()),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let (pool, _tmp) = test_pool().await;
        let first = create(&pool, sample("Science Gallery", "Borough")).await.unwrap();
        let second = create(&pool, sample("Old Spike", "Peckham")).await.unwrap();
        assert!(second.id > first.id);

        let all = find_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[0].name, "Science Gallery");
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let (pool, _tmp) = test_pool().await;
        create(&pool, sample("Old Spike", "Peckham")).await.unwrap();
        let err = create(&pool, sample("Old Spike", "Soho")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        // The first row survives the failed insert
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_by_location_title_cases_the_query() {
        let (pool, _tmp) = test_pool().await;
        create(&pool, sample("Old Spike", "Peckham")).await.unwrap();
        create(&pool, sample("Watch House", "Bermondsey")).await.unwrap();

        let lower = find_by_location(&pool, "peckham").await.unwrap();
        let exact = find_by_location(&pool, "Peckham").await.unwrap();
        assert_eq!(lower.len(), 1);
        assert_eq!(exact.len(), 1);
        assert_eq!(lower[0].id, exact[0].id);

        assert!(find_by_location(&pool, "Nowhere").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_coffee_price_touches_only_the_price() {
        let (pool, _tmp) = test_pool().await;
        let cafe = create(&pool, sample("Old Spike", "Peckham")).await.unwrap();

        update_coffee_price(&pool, cafe.id, "£3.50").await.unwrap();
        let updated = find_by_id(&pool, cafe.id).await.unwrap().unwrap();
        assert_eq!(updated.coffee_price.as_deref(), Some("£3.50"));
        assert_eq!(updated.name, cafe.name);
        assert_eq!(updated.location, cafe.location);
        assert_eq!(updated.has_wifi, cafe.has_wifi);

        // Empty string is an acceptable price
        update_coffee_price(&pool, cafe.id, "").await.unwrap();
        let cleared = find_by_id(&pool, cafe.id).await.unwrap().unwrap();
        assert_eq!(cleared.coffee_price.as_deref(), Some(""));

        let err = update_coffee_price(&pool, 9999, "£1.00").await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let (pool, _tmp) = test_pool().await;
        let cafe = create(&pool, sample("Old Spike", "Peckham")).await.unwrap();

        delete(&pool, cafe.id).await.unwrap();
        assert!(find_by_id(&pool, cafe.id).await.unwrap().is_none());

        let err = delete(&pool, cafe.id).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
