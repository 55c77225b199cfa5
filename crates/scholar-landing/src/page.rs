use askama::Template;
use scholar_core::BrandConfig;

use crate::content::LandingContent;
use crate::error::LandingError;

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingPage<'a> {
    brand: &'a BrandConfig,
    content: &'a LandingContent,
    copyright: String,
}

/// Renders the complete landing page.
///
/// # Errors
///
/// Returns [`LandingError::Render`] if the template fails to render.
pub fn render_landing(
    brand: &BrandConfig,
    content: &LandingContent,
    year: i32,
) -> Result<String, LandingError> {
    let page = LandingPage {
        brand,
        content,
        copyright: brand.copyright_notice(year),
    };
    Ok(page.render()?)
}
