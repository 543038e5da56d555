use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SlugParams {
    pub locale: String,
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CasesQuery {
    pub tag: Option<String>,
}
