use chrono::NaiveDate;
use serde::Deserialize;
use snafu::ResultExt;

use crate::Result;
use crate::error::SiteCatalogParseSnafu;
use crate::locale::Locale;

const CATALOG_DATA: &str = include_str!("../data/catalog.json");

/// A string published in both site languages.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    pub th: String,
    pub en: String,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Th => &self.th,
            Locale::En => &self.en,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseStudy {
    pub slug: String,
    pub title: LocalizedText,
    pub summary: LocalizedText,
    pub industry: LocalizedText,
    pub tags: Vec<String>,
    pub published_on: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingTier {
    pub slug: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub price_thb: u32,
    pub unit: LocalizedText,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    pub slug: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub price_thb: u32,
    pub deliverables: Vec<LocalizedText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub slug: String,
    pub name: LocalizedText,
    pub tagline: LocalizedText,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: LocalizedText,
    pub excerpt: LocalizedText,
    pub body: LocalizedText,
    pub published_on: NaiveDate,
}

/// Static site content, embedded at compile time and immutable afterwards.
///
/// Listings are pre-sorted at load: cases and posts newest first, tiers and
/// packages cheapest first.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteCatalog {
    cases: Vec<CaseStudy>,
    tiers: Vec<PricingTier>,
    packages: Vec<Package>,
    products: Vec<Product>,
    posts: Vec<BlogPost>,
}

impl SiteCatalog {
    pub fn load() -> Result<Self> {
        let mut catalog: SiteCatalog =
            serde_json::from_str(CATALOG_DATA).context(SiteCatalogParseSnafu)?;

        catalog
            .cases
            .sort_by(|a, b| b.published_on.cmp(&a.published_on));
        catalog
            .posts
            .sort_by(|a, b| b.published_on.cmp(&a.published_on));
        catalog.tiers.sort_by_key(|t| t.price_thb);
        catalog.packages.sort_by_key(|p| p.price_thb);

        Ok(catalog)
    }

    pub fn cases(&self) -> &[CaseStudy] {
        &self.cases
    }

    pub fn cases_with_tag(&self, tag: &str) -> Vec<&CaseStudy> {
        self.cases
            .iter()
            .filter(|c| c.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Distinct tags across all case studies, sorted
    pub fn case_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .cases
            .iter()
            .flat_map(|c| c.tags.iter().map(|t| t.as_str()))
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }

    pub fn find_case(&self, slug: &str) -> Option<&CaseStudy> {
        self.cases.iter().find(|c| c.slug == slug)
    }

    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn find_package(&self, slug: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.slug == slug)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn find_post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }
}
