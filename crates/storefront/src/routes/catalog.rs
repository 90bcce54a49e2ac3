//! Catalog route handlers.
//!
//! The category tabs fetch the product grid fragment over HTMX; the "all"
//! tab (and an absent parameter) is simply the unfiltered catalog.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use equippro_core::{Category, Product};

use crate::error::{AppError, Result};
use crate::filters::format_rub;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub category_label: &'static str,
    pub price: String,
    pub image: String,
    pub description: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            category_label: product.category.label(),
            price: format_rub(product.price),
            image: product.image.clone(),
            description: product.description.clone(),
        }
    }
}

/// Category filter query parameters.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// Product grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
}

/// Display the product grid, optionally filtered to one category.
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<ProductGridTemplate> {
    let products = match query.category.as_deref() {
        None | Some("all") => state.catalog().all().iter().map(ProductCardView::from).collect(),
        Some(slug) => {
            let category = Category::from_slug(slug)
                .ok_or_else(|| AppError::BadRequest(format!("unknown category: {slug}")))?;
            state
                .catalog()
                .in_category(category)
                .map(ProductCardView::from)
                .collect()
        }
    };

    Ok(ProductGridTemplate { products })
}
