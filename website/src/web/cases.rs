use askama::Template;
use axum::{
    Extension,
    body::Body,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use snafu::{OptionExt, ResultExt};

use crate::{
    Result,
    error::{NotFoundSnafu, TemplateSnafu},
    models::{CaseView, CasesQuery, SlugParams, TemplateData},
    run::AppState,
    web::html_response,
};
use sala::locale::Locale;
use sala::security::CspNonce;

#[derive(Template)]
#[template(path = "pages/cases.html")]
struct CasesTemplate {
    t: TemplateData,
    cases: Vec<CaseView>,
    tags: Vec<String>,
    active_tag: Option<String>,
}

#[derive(Template)]
#[template(path = "pages/case.html")]
struct CasePageTemplate {
    t: TemplateData,
    case_study: CaseView,
}

pub async fn cases_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    Query(query): Query<CasesQuery>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let mut t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    t.title = t.msg("cases.title");

    let cases: Vec<CaseView> = match &query.tag {
        Some(tag) => state
            .catalog
            .cases_with_tag(tag)
            .into_iter()
            .map(|c| CaseView::build(c, locale))
            .collect(),
        None => state
            .catalog
            .cases()
            .iter()
            .map(|c| CaseView::build(c, locale))
            .collect(),
    };

    let tags = state
        .catalog
        .case_tags()
        .into_iter()
        .map(|tag| tag.to_string())
        .collect();

    let tpl = CasesTemplate {
        t,
        cases,
        tags,
        active_tag: query.tag,
    };

    html_response(StatusCode::OK, tpl.render().context(TemplateSnafu)?)
}

pub async fn case_page_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    Path(params): Path<SlugParams>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let case = state
        .catalog
        .find_case(&params.slug)
        .context(NotFoundSnafu {
            msg: format!("Case study not found: {}", params.slug),
        })?;

    let mut t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    let case_study = CaseView::build(case, locale);
    t.title = case_study.title.clone();

    let tpl = CasePageTemplate { t, case_study };

    html_response(StatusCode::OK, tpl.render().context(TemplateSnafu)?)
}
