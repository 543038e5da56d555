use askama::Template;
use axum::{
    Extension,
    body::Body,
    extract::State,
    http::StatusCode,
    response::Response,
};
use snafu::ResultExt;

use crate::{
    Result,
    error::TemplateSnafu,
    models::{PackageView, TemplateData, TierView},
    run::AppState,
    web::html_response,
};
use sala::locale::Locale;
use sala::security::CspNonce;

#[derive(Template)]
#[template(path = "pages/pricing.html")]
struct PricingTemplate {
    t: TemplateData,
    tiers: Vec<TierView>,
    packages: Vec<PackageView>,
}

pub async fn pricing_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let mut t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    t.title = t.msg("pricing.title");

    let tiers = state
        .catalog
        .tiers()
        .iter()
        .map(|tier| TierView::build(tier, locale))
        .collect();
    let packages = state
        .catalog
        .packages()
        .iter()
        .map(|p| PackageView::build(p, locale))
        .collect();

    let tpl = PricingTemplate { t, tiers, packages };

    html_response(StatusCode::OK, tpl.render().context(TemplateSnafu)?)
}
