use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::db::entities::favorite::Favorite;
use crate::http::{ApiContext, ApiError, FieldError, Result};

pub fn router() -> Router {
    Router::new()
        .route(
            "/api/favorites",
            post(create_favorite)
                .put(update_favorite)
                .delete(delete_favorite),
        )
        .route("/api/favorites/:id", get(get_favorites_by_user))
}

const DUPLICATE_FAVORITE: &str =
    "Can not create the Favorite because one already exists with the same user id and art id";

async fn create_favorite(
    ctx: Extension<ApiContext>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<String>)> {
    let favorite = parse_favorite(&body)?;
    if !favorite.insert(&ctx.db).await? {
        return Err(ApiError::conflict(DUPLICATE_FAVORITE));
    }
    Ok((
        StatusCode::CREATED,
        Json("Favorite added successfully".to_string()),
    ))
}

async fn update_favorite(
    ctx: Extension<ApiContext>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<String>)> {
    let favorite = parse_favorite(&body)?;
    if !favorite.update(&ctx.db).await? {
        return Err(ApiError::not_found("Favorite could not be updated"));
    }
    Ok((
        StatusCode::CREATED,
        Json("Favorite updated successfully".to_string()),
    ))
}

async fn delete_favorite(
    ctx: Extension<ApiContext>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<String>)> {
    let key = parse_favorite_key(&body)?;
    if !Favorite::delete(key.art_id, key.user_id, &ctx.db).await? {
        return Err(ApiError::not_found("Favorite was not found"));
    }
    Ok((
        StatusCode::CREATED,
        Json("Favorite deleted successfully".to_string()),
    ))
}

async fn get_favorites_by_user(
    ctx: Extension<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Favorite>>> {
    let user_id: i64 = id
        .parse()
        .map_err(|_| ApiError::bad_request("id must be an Integer"))?;
    let favorites = Favorite::get_by_user(user_id, &ctx.db).await?;
    Ok(Json(favorites))
}

struct FavoriteKey {
    art_id: i64,
    user_id: i64,
}

/// Validates the full create/update body, collecting an error for every
/// invalid field before rejecting the request.
fn parse_favorite(body: &Value) -> Result<Favorite> {
    let mut errors = Vec::new();
    let art_id = int_field(body, "art_id", &mut errors);
    let user_id = int_field(body, "user_id", &mut errors);
    let state = string_field(body, "state", &mut errors);
    let rating = int_field(body, "rating", &mut errors);
    if !errors.is_empty() {
        return Err(ApiError::Validation { errors });
    }
    Ok(Favorite {
        art_id: art_id.unwrap(),
        user_id: user_id.unwrap(),
        state: state.unwrap(),
        rating: rating.unwrap(),
    })
}

/// Delete only identifies the pair; state and rating are not required.
fn parse_favorite_key(body: &Value) -> Result<FavoriteKey> {
    let mut errors = Vec::new();
    let art_id = int_field(body, "art_id", &mut errors);
    let user_id = int_field(body, "user_id", &mut errors);
    if !errors.is_empty() {
        return Err(ApiError::Validation { errors });
    }
    Ok(FavoriteKey {
        art_id: art_id.unwrap(),
        user_id: user_id.unwrap(),
    })
}

fn int_field(body: &Value, field: &'static str, errors: &mut Vec<FieldError>) -> Option<i64> {
    match body.get(field).and_then(Value::as_i64) {
        Some(value) => Some(value),
        None => {
            errors.push(FieldError {
                field,
                message: format!("{field} must be an integer"),
            });
            None
        }
    }
}

fn string_field(body: &Value, field: &'static str, errors: &mut Vec<FieldError>) -> Option<String> {
    match body.get(field).and_then(Value::as_str) {
        Some(value) => Some(value.to_string()),
        None => {
            errors.push(FieldError {
                field,
                message: format!("{field} must be a string"),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_favorite_accepts_valid_body() {
        let body = json!({"art_id": 1, "user_id": 2, "state": "to-watch", "rating": 5});
        let favorite = parse_favorite(&body).unwrap();
        assert_eq!(favorite.art_id, 1);
        assert_eq!(favorite.user_id, 2);
        assert_eq!(favorite.state, "to-watch");
        assert_eq!(favorite.rating, 5);
    }

    #[test]
    fn parse_favorite_collects_every_invalid_field() {
        let body = json!({"art_id": "one", "state": 7});
        let err = parse_favorite(&body).unwrap_err();
        let ApiError::Validation { errors } = err else {
            panic!("expected a validation error");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["art_id", "user_id", "state", "rating"]);
    }

    #[test]
    fn parse_favorite_key_ignores_state_and_rating() {
        let body = json!({"art_id": 3, "user_id": 4});
        let key = parse_favorite_key(&body).unwrap();
        assert_eq!(key.art_id, 3);
        assert_eq!(key.user_id, 4);
    }

    #[test]
    fn parse_favorite_rejects_float_ids() {
        let body = json!({"art_id": 1.5, "user_id": 2, "state": "seen", "rating": 9});
        let err = parse_favorite(&body).unwrap_err();
        let ApiError::Validation { errors } = err else {
            panic!("expected a validation error");
        };
        assert_eq!(errors[0].field, "art_id");
        assert_eq!(errors[0].message, "art_id must be an integer");
    }
}
