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
    models::{CaseView, PostView, TemplateData},
    run::AppState,
    web::html_response,
};
use sala::locale::Locale;
use sala::security::CspNonce;

#[derive(Template)]
#[template(path = "pages/index.html")]
struct IndexTemplate {
    t: TemplateData,
    cases: Vec<CaseView>,
    posts: Vec<PostView>,
}

pub async fn index_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let mut t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    t.title = t.msg("home.hero_title");

    let cases = state
        .catalog
        .cases()
        .iter()
        .take(3)
        .map(|c| CaseView::build(c, locale))
        .collect();
    let posts = state
        .catalog
        .posts()
        .iter()
        .take(2)
        .map(|p| PostView::build(p, locale))
        .collect();

    let tpl = IndexTemplate { t, cases, posts };

    html_response(StatusCode::OK, tpl.render().context(TemplateSnafu)?)
}
