use sala::catalog::{BlogPost, CaseStudy, Package, PricingTier, Product};
use sala::locale::Locale;

/// Flattens a case study into locale-resolved display strings.
#[derive(Clone)]
pub struct CaseView {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub industry: String,
    pub tags: Vec<String>,
    pub published_on: String,
}

impl CaseView {
    pub fn build(case: &CaseStudy, locale: Locale) -> Self {
        CaseView {
            slug: case.slug.clone(),
            title: case.title.get(locale).to_string(),
            summary: case.summary.get(locale).to_string(),
            industry: case.industry.get(locale).to_string(),
            tags: case.tags.clone(),
            published_on: case.published_on.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Clone)]
pub struct TierView {
    pub name: String,
    pub description: String,
    pub price: String,
    pub unit: String,
}

impl TierView {
    pub fn build(tier: &PricingTier, locale: Locale) -> Self {
        TierView {
            name: tier.name.get(locale).to_string(),
            description: tier.description.get(locale).to_string(),
            price: format_thb(tier.price_thb),
            unit: tier.unit.get(locale).to_string(),
        }
    }
}

#[derive(Clone)]
pub struct PackageView {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub deliverables: Vec<String>,
}

impl PackageView {
    pub fn build(package: &Package, locale: Locale) -> Self {
        PackageView {
            slug: package.slug.clone(),
            name: package.name.get(locale).to_string(),
            description: package.description.get(locale).to_string(),
            price: format_thb(package.price_thb),
            deliverables: package
                .deliverables
                .iter()
                .map(|d| d.get(locale).to_string())
                .collect(),
        }
    }
}

#[derive(Clone)]
pub struct ProductView {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
}

impl ProductView {
    pub fn build(product: &Product, locale: Locale) -> Self {
        ProductView {
            slug: product.slug.clone(),
            name: product.name.get(locale).to_string(),
            tagline: product.tagline.get(locale).to_string(),
            description: product.description.get(locale).to_string(),
        }
    }
}

#[derive(Clone)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub published_on: String,
}

impl PostView {
    pub fn build(post: &BlogPost, locale: Locale) -> Self {
        PostView {
            slug: post.slug.clone(),
            title: post.title.get(locale).to_string(),
            excerpt: post.excerpt.get(locale).to_string(),
            body: post.body.get(locale).to_string(),
            published_on: post.published_on.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Thousands-separated THB amount
pub fn format_thb(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thb() {
        assert_eq!(format_thb(0), "0");
        assert_eq!(format_thb(999), "999");
        assert_eq!(format_thb(1000), "1,000");
        assert_eq!(format_thb(90000), "90,000");
        assert_eq!(format_thb(450000), "450,000");
        assert_eq!(format_thb(1234567), "1,234,567");
    }
}
