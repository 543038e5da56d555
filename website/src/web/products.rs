use askama::Template;
use axum::{
    Extension,
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use snafu::{OptionExt, ResultExt};

use crate::{
    Result,
    error::{NotFoundSnafu, TemplateSnafu},
    models::{ProductView, SlugParams, TemplateData},
    run::AppState,
    web::html_response,
};
use sala::locale::Locale;
use sala::security::CspNonce;

#[derive(Template)]
#[template(path = "pages/products.html")]
struct ProductsTemplate {
    t: TemplateData,
    products: Vec<ProductView>,
}

#[derive(Template)]
#[template(path = "pages/product.html")]
struct ProductPageTemplate {
    t: TemplateData,
    product: ProductView,
}

pub async fn products_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let mut t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    t.title = t.msg("products.title");

    let products = state
        .catalog
        .products()
        .iter()
        .map(|p| ProductView::build(p, locale))
        .collect();

    let tpl = ProductsTemplate { t, products };

    html_response(StatusCode::OK, tpl.render().context(TemplateSnafu)?)
}

pub async fn product_page_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    Path(params): Path<SlugParams>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let product = state
        .catalog
        .find_product(&params.slug)
        .context(NotFoundSnafu {
            msg: format!("Product not found: {}", params.slug),
        })?;

    let mut t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    let product = ProductView::build(product, locale);
    t.title = product.name.clone();

    let tpl = ProductPageTemplate { t, product };

    html_response(StatusCode::OK, tpl.render().context(TemplateSnafu)?)
}
