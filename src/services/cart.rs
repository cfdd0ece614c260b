// src/services/cart.rs
//
// Cart logic, independent of the HTTP layer. Callers pass an
// already-authenticated user id; no authentication happens here.
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::cart::CartItemRow;

/// Adds `quantity` units of a product to the user's cart. An existing row is
/// merged by incrementing in place; the insert and the increment happen in
/// one statement, so concurrent adds for the same (user, product) pair
/// serialize inside the row update and none of them is lost.
///
/// Returns the resulting quantity.
pub async fn add_item(
    pool: &PgPool,
    user_id: i64,
    product_id: i64,
    quantity: i32,
) -> Result<i32, AppError> {
    let known = sqlx::query_scalar::<_, i64>(
        "SELECT sr_number FROM medicines WHERE sr_number = $1",
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?;

    if known.is_none() {
        return Err(AppError::ProductNotFound);
    }

    let quantity = sqlx::query_scalar::<_, i32>(
        "INSERT INTO cart_items (user_id, product_id, quantity)
         VALUES ($1, $2, $3)
         ON CONFLICT (user_id, product_id)
         DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
         RETURNING quantity",
    )
    .bind(user_id)
    .bind(product_id)
    .bind(quantity)
    .fetch_one(pool)
    .await?;

    Ok(quantity)
}

/// Overwrites the quantity of an existing entry. Never merges: "set to N" is
/// this function, "add N more" is `add_item`. Does not touch the catalog;
/// the entry's product was validated when it was added.
pub async fn update_quantity(
    pool: &PgPool,
    user_id: i64,
    product_id: i64,
    quantity: i32,
) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE cart_items SET quantity = $1 WHERE user_id = $2 AND product_id = $3",
    )
    .bind(quantity)
    .bind(user_id)
    .bind(product_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Item not found in cart"));
    }

    Ok(())
}

/// Removes the entry for (user, product). A remove that matches no row
/// reports the missing entry; callers treat that as non-fatal.
pub async fn remove_item(pool: &PgPool, user_id: i64, product_id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
        .bind(user_id)
        .bind(product_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Item not found in cart"));
    }

    Ok(())
}

/// All of the user's entries joined with their catalog records, in insertion
/// order. Prices come from the live catalog at read time; totals derived
/// from this view track catalog changes, they are never stored.
pub async fn list_items(pool: &PgPool, user_id: i64) -> Result<Vec<CartItemRow>, AppError> {
    let items = sqlx::query_as::<_, CartItemRow>(
        "SELECT c.product_id, c.quantity, c.added_at,
                m.sr_number, m.product_name, m.generic_name, m.composition,
                m.packet_size, m.uses, m.transfer_price, m.storage_condition
         FROM cart_items c
         JOIN medicines m ON c.product_id = m.sr_number
         WHERE c.user_id = $1
         ORDER BY c.added_at, c.product_id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(items)
}
