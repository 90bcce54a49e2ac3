//! Home page route handler.
//!
//! The whole site is one page: hero, catalog with category tabs, services,
//! about, and contacts. The cart panel and badge load themselves over HTMX.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use equippro_core::Category;

use crate::filters;
use crate::state::AppState;

pub use super::catalog::ProductCardView;

/// A category filter tab.
#[derive(Clone, Copy)]
pub struct CategoryTab {
    pub slug: &'static str,
    pub label: &'static str,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub tabs: Vec<CategoryTab>,
    pub products: Vec<ProductCardView>,
}

/// Display the home page with the full catalog.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    let tabs = Category::ALL
        .into_iter()
        .map(|category| CategoryTab {
            slug: category.slug(),
            label: category.label(),
        })
        .collect();

    let products = state.catalog().all().iter().map(ProductCardView::from).collect();

    HomeTemplate { tabs, products }
}
