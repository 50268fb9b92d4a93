use uuid::Uuid;

use crate::{
    describe::{DescribeProduct, FALLBACK_DESCRIPTION},
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::{AppError, AppResult},
    models::Product,
    state::Storefront,
    store::KeyValueStore,
};

/// Image a product gets when the admin supplies none.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/id/1/600/600";

pub const DEFAULT_CATEGORY: &str = "General";

/// Appends a new product to the catalog. When no description is supplied the
/// provider is awaited here; its failure is absorbed into
/// [`FALLBACK_DESCRIPTION`] and never reaches the caller.
pub async fn create_product<S: KeyValueStore>(
    app: &mut Storefront<S>,
    describer: &impl DescribeProduct,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    if payload.price < 0.0 {
        return Err(AppError::BadRequest("price must be non-negative".to_string()));
    }
    if payload.weight < 0.0 {
        return Err(AppError::BadRequest(
            "weight must be non-negative".to_string(),
        ));
    }

    let description = match payload.description {
        Some(text) => text,
        None => match describer
            .describe(&payload.name, payload.price, payload.weight)
            .await
        {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, name = %payload.name, "description provider failed, using fallback");
                FALLBACK_DESCRIPTION.to_string()
            }
        },
    };

    let product = Product {
        id: Uuid::new_v4(),
        name: payload.name,
        price: payload.price,
        weight: payload.weight,
        description,
        images: payload
            .images
            .filter(|images| !images.is_empty())
            .unwrap_or_else(|| vec![PLACEHOLDER_IMAGE.to_string()]),
        attributes: payload.attributes.unwrap_or_default(),
        reviews: Vec::new(),
        category: DEFAULT_CATEGORY.to_string(),
    };
    app.products.push(product.clone());
    app.persist_products();
    tracing::debug!(product_id = %product.id, name = %product.name, "product created");
    Ok(product)
}

/// Merges `Some` fields onto the product matching `id`. An unknown id is a
/// no-op, reported as `Ok(None)`.
pub fn edit_product<S: KeyValueStore>(
    app: &mut Storefront<S>,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<Option<Product>> {
    if payload.price.is_some_and(|price| price < 0.0) {
        return Err(AppError::BadRequest("price must be non-negative".to_string()));
    }
    if payload.weight.is_some_and(|weight| weight < 0.0) {
        return Err(AppError::BadRequest(
            "weight must be non-negative".to_string(),
        ));
    }

    let Some(product) = app.products.iter_mut().find(|p| p.id == id) else {
        return Ok(None);
    };

    if let Some(name) = payload.name {
        product.name = name;
    }
    if let Some(price) = payload.price {
        product.price = price;
    }
    if let Some(weight) = payload.weight {
        product.weight = weight;
    }
    if let Some(description) = payload.description {
        product.description = description;
    }
    if let Some(images) = payload.images {
        product.images = images;
    }
    if let Some(attributes) = payload.attributes {
        product.attributes = attributes;
    }
    if let Some(category) = payload.category {
        product.category = category;
    }

    let updated = product.clone();
    app.persist_products();
    tracing::debug!(product_id = %id, "product updated");
    Ok(Some(updated))
}

/// Removes the product and every cart line pointing at it; the cart must not
/// keep referencing a deleted product. Returns `false` for an unknown id.
pub fn delete_product<S: KeyValueStore>(app: &mut Storefront<S>, id: Uuid) -> bool {
    let before = app.products.len();
    app.products.retain(|p| p.id != id);
    if app.products.len() == before {
        return false;
    }

    app.cart.retain(|cart_id| *cart_id != id);
    app.persist_products();
    app.persist_cart();
    tracing::debug!(product_id = %id, "product deleted");
    true
}
