//! Cafe queries and mutations
//!
//! The store functions in `db::cafes` are raw row operations; this layer adds
//! the rules the API relies on: the empty-store guard on the random pick, the
//! truthy-string flag coercion on add, duplicate-name mapping, and the
//! key-then-existence check on delete.

use rand::Rng;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db::cafes::{self, Cafe, NewCafe};
use crate::error::{ApiError, NOT_FOUND_ID};

/// Form payload for creating a cafe.
///
/// Deliberately permissive: absent text fields are stored as empty strings
/// (`coffee_price` stays NULL), and the four flag fields follow a
/// truthy-string contract — any non-empty value counts as true, absence or
/// the empty string as false. A strict boolean parse would break clients of
/// the original surface.
#[derive(Debug, Deserialize)]
pub struct AddCafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub sockets: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub calls: Option<String>,
    pub coffee_price: Option<String>,
}

fn truthy(field: Option<&str>) -> bool {
    field.is_some_and(|v| !v.is_empty())
}

impl AddCafeForm {
    fn into_new_cafe(self) -> NewCafe {
        NewCafe {
            has_sockets: truthy(self.sockets.as_deref()),
            has_toilet: truthy(self.toilet.as_deref()),
            has_wifi: truthy(self.wifi.as_deref()),
            can_take_calls: truthy(self.calls.as_deref()),
            name: self.name.unwrap_or_default(),
            map_url: self.map_url.unwrap_or_default(),
            img_url: self.img_url.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            seats: self.seats.unwrap_or_default(),
            coffee_price: self.coffee_price,
        }
    }
}

/// All cafes, ordered by ascending id
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Cafe>, ApiError> {
    Ok(cafes::list_all(pool).await?)
}

/// Uniform random pick over the whole table
pub async fn random_one(pool: &SqlitePool) -> Result<Cafe, ApiError> {
    let mut all = cafes::list_all(pool).await?;
    if all.is_empty() {
        return Err(ApiError::EmptyCollection);
    }
    let idx = rand::thread_rng().gen_range(0..all.len());
    Ok(all.swap_remove(idx))
}

pub async fn find_by_location(pool: &SqlitePool, location: &str) -> Result<Vec<Cafe>, ApiError> {
    Ok(cafes::find_by_location(pool, location).await?)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Cafe>, ApiError> {
    Ok(cafes::find_by_id(pool, id).await?)
}

/// Insert a new cafe; a unique-constraint hit on `name` becomes `DuplicateName`
pub async fn add(pool: &SqlitePool, form: AddCafeForm) -> Result<i64, ApiError> {
    let new_cafe = form.into_new_cafe();
    match cafes::insert(pool, &new_cafe).await {
        Ok(id) => Ok(id),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(ApiError::DuplicateName)
        }
        Err(e) => Err(e.into()),
    }
}

/// Overwrite `coffee_price` on an existing cafe. No format validation.
pub async fn update_price(
    pool: &SqlitePool,
    id: i64,
    new_price: Option<&str>,
) -> Result<(), ApiError> {
    if cafes::update_price(pool, id, new_price).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound(NOT_FOUND_ID))
    }
}

/// Delete a cafe. The key check runs first: a wrong key is `Forbidden` even
/// when the id does not exist. Keys compare by value.
pub async fn delete(
    pool: &SqlitePool,
    id: i64,
    supplied_key: Option<&str>,
    configured_key: &str,
) -> Result<(), ApiError> {
    if supplied_key != Some(configured_key) {
        return Err(ApiError::Forbidden);
    }
    if cafes::delete_by_id(pool, id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound(NOT_FOUND_ID))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(fields: &[(&str, &str)]) -> AddCafeForm {
        let get = |k: &str| {
            fields
                .iter()
                .find(|(name, _)| *name == k)
                .map(|(_, v)| v.to_string())
        };
        AddCafeForm {
            name: get("name"),
            map_url: get("map_url"),
            img_url: get("img_url"),
            location: get("location"),
            seats: get("seats"),
            sockets: get("sockets"),
            toilet: get("toilet"),
            wifi: get("wifi"),
            calls: get("calls"),
            coffee_price: get("coffee_price"),
        }
    }

    #[test]
    fn truthy_requires_non_empty() {
        assert!(truthy(Some("yes")));
        assert!(truthy(Some("0"))); // any non-empty string counts
        assert!(!truthy(Some("")));
        assert!(!truthy(None));
    }

    #[test]
    fn flags_coerce_from_presence() {
        let new_cafe = form(&[
            ("name", "Brew"),
            ("map_url", "m"),
            ("img_url", "i"),
            ("location", "Town"),
            ("seats", "10-20"),
            ("sockets", "yes"),
            ("toilet", ""),
            ("wifi", "yes"),
            ("coffee_price", "£2.00"),
        ])
        .into_new_cafe();

        assert!(new_cafe.has_sockets);
        assert!(!new_cafe.has_toilet);
        assert!(new_cafe.has_wifi);
        assert!(!new_cafe.can_take_calls);
        assert_eq!(new_cafe.coffee_price.as_deref(), Some("£2.00"));
    }

    #[test]
    fn absent_text_fields_default_to_empty() {
        let new_cafe = form(&[("name", "Bare")]).into_new_cafe();
        assert_eq!(new_cafe.map_url, "");
        assert_eq!(new_cafe.seats, "");
        assert_eq!(new_cafe.coffee_price, None);
    }
}
