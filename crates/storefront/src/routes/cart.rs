//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session; every mutation loads it, applies
//! one operation, and saves it back before rendering the panel fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use equippro_core::ProductId;

use crate::error::{AppError, Result};
use crate::filters::format_rub;
use crate::models::session::keys;
use crate::models::toast::Toast;
use crate::services::cart::{Cart, CartLine, SetQuantityOutcome};
use crate::services::delivery::DeliveryPolicy;
use crate::services::order;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub product_id: i32,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    /// Quantity values for the −/+ buttons; may be ≤ 0, which removes.
    pub decrement: i64,
    pub increment: i64,
    pub price: String,
    pub line_total: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.as_i32(),
            name: line.name.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            decrement: i64::from(line.quantity) - 1,
            increment: i64::from(line.quantity) + 1,
            price: format_rub(line.price),
            line_total: format_rub(line.line_total()),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub is_empty: bool,
    pub line_count: usize,
    pub destination_city: String,
    pub subtotal: String,
    /// «—» without a destination, «Бесплатно» at zero, the amount otherwise.
    pub delivery_label: String,
    pub total: String,
    pub free_shipping: bool,
}

impl CartView {
    /// Render a cart against the delivery policy.
    ///
    /// The fee is always part of the total (an unknown destination gets the
    /// flat default fee); only the delivery *row* shows «—» until a city is
    /// entered.
    #[must_use]
    pub fn build(cart: &Cart, policy: &DeliveryPolicy) -> Self {
        let subtotal = cart.subtotal();
        let fee = policy.fee(subtotal, cart.destination_city());

        let delivery_label = if cart.destination_city().is_empty() {
            "—".to_string()
        } else if fee.is_zero() {
            "Бесплатно".to_string()
        } else {
            format_rub(fee)
        };

        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            is_empty: cart.is_empty(),
            line_count: cart.line_count(),
            destination_city: cart.destination_city().to_string(),
            subtotal: format_rub(subtotal),
            delivery_label,
            total: format_rub(subtotal + fee),
            free_shipping: subtotal > policy.free_shipping_threshold(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the session's cart, defaulting to an empty one.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Save the cart back to the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

/// Destination city form data.
#[derive(Debug, Deserialize)]
pub struct CityForm {
    pub city: String,
}

/// Cart panel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate {
    pub cart: CartView,
    pub toast: Option<Toast>,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Render the panel plus a `cart-updated` trigger for the badge.
fn panel_response(state: &AppState, cart: &Cart, toast: Option<Toast>) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartPanelTemplate {
            cart: CartView::build(cart, state.delivery()),
            toast,
        },
    )
        .into_response()
}

/// Display the cart panel.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let cart = load_cart(&session).await?;
    Ok(CartPanelTemplate {
        cart: CartView::build(&cart, state.delivery()),
        toast: None,
    }
    .into_response())
}

/// Add one unit of a product to the cart (HTMX).
///
/// The product must exist in the catalog; its attributes are copied into the
/// cart line at this moment.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let mut cart = load_cart(&session).await?;
    let quantity = cart.add(product);
    save_cart(&session, &cart).await?;

    tracing::info!(product_id = %id, quantity, "Added to cart");
    let toast = Toast::success(format!("{} добавлен в корзину", product.name));
    Ok(panel_response(&state, &cart, Some(toast)))
}

/// Set a cart line's quantity (HTMX).
///
/// A quantity ≤ 0 removes the line, with the same info toast as an explicit
/// remove, even when the id is no longer in the cart. A positive quantity
/// for an unknown id changes nothing.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let id = ProductId::new(form.product_id);
    let mut cart = load_cart(&session).await?;
    let outcome = cart.set_quantity(id, form.quantity);
    save_cart(&session, &cart).await?;

    let toast = match outcome {
        SetQuantityOutcome::Removed => Some(Toast::info("Товар удален из корзины")),
        SetQuantityOutcome::Updated | SetQuantityOutcome::NotInCart => None,
    };
    Ok(panel_response(&state, &cart, toast))
}

/// Remove a line from the cart (HTMX).
///
/// The info toast shows even when the id is no longer in the cart, so a
/// double-click on the remove button reads the same as a single one.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let id = ProductId::new(form.product_id);
    let mut cart = load_cart(&session).await?;
    cart.remove(id);
    save_cart(&session, &cart).await?;

    let toast = Toast::info("Товар удален из корзины");
    Ok(panel_response(&state, &cart, Some(toast)))
}

/// Set the destination city and re-quote delivery (HTMX).
#[instrument(skip(state, session))]
pub async fn city(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CityForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    cart.set_destination_city(form.city.trim());
    save_cart(&session, &cart).await?;

    Ok(CartPanelTemplate {
        cart: CartView::build(&cart, state.delivery()),
        toast: None,
    }
    .into_response())
}

/// Validate and "submit" the order (HTMX).
///
/// There is no backend: success is a toast plus a cart reset. Validation
/// failures surface one error at a time as error toasts and leave the cart
/// untouched.
#[instrument(skip(state, session))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response> {
    let mut cart = load_cart(&session).await?;

    let toast = match order::submit(&mut cart, state.delivery()) {
        Ok(summary) => {
            tracing::info!(
                lines = summary.line_count,
                destination = %summary.destination_city,
                total = %summary.total,
                "Order submitted"
            );
            Toast::success("Заказ оформлен! Наш менеджер свяжется с вами в ближайшее время.")
        }
        Err(e) => Toast::error(e.to_string()),
    };

    save_cart(&session, &cart).await?;
    Ok(panel_response(&state, &cart, Some(toast)))
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.line_count(),
    })
}
