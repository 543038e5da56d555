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
    models::{PostView, SlugParams, TemplateData},
    run::AppState,
    web::html_response,
};
use sala::locale::Locale;
use sala::security::CspNonce;

#[derive(Template)]
#[template(path = "pages/blog.html")]
struct BlogTemplate {
    t: TemplateData,
    posts: Vec<PostView>,
}

#[derive(Template)]
#[template(path = "pages/post.html")]
struct PostPageTemplate {
    t: TemplateData,
    post: PostView,
}

pub async fn blog_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let mut t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    t.title = t.msg("blog.title");

    let posts = state
        .catalog
        .posts()
        .iter()
        .map(|p| PostView::build(p, locale))
        .collect();

    let tpl = BlogTemplate { t, posts };

    html_response(StatusCode::OK, tpl.render().context(TemplateSnafu)?)
}

pub async fn post_page_handler(
    Extension(locale): Extension<Locale>,
    nonce: Option<Extension<CspNonce>>,
    Path(params): Path<SlugParams>,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let post = state
        .catalog
        .find_post(&params.slug)
        .context(NotFoundSnafu {
            msg: format!("Blog post not found: {}", params.slug),
        })?;

    let mut t = TemplateData::new(&state, locale, nonce.map(|Extension(n)| n));
    let post = PostView::build(post, locale);
    t.title = post.title.clone();

    let tpl = PostPageTemplate { t, post };

    html_response(StatusCode::OK, tpl.render().context(TemplateSnafu)?)
}
