use scholar_core::BrandConfig;

/// Print the resolved brand, either as JSON or as a key/value table.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_brand_show(brand: &BrandConfig, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(brand)?);
        return Ok(());
    }

    for (key, value) in brand_rows(brand) {
        println!("{key:<18}{}", if value.is_empty() { "\u{2014}" } else { value });
    }
    Ok(())
}

fn brand_rows(brand: &BrandConfig) -> [(&'static str, &str); 8] {
    [
        ("NAME", &brand.name),
        ("LOGO TEXT", &brand.logo_text),
        ("HERO TITLE", &brand.hero_title),
        ("COPYRIGHT HOLDER", &brand.copyright_holder),
        ("SUPPORT EMAIL", &brand.support_email),
        ("SUPPORT PHONE", &brand.support_phone),
        ("ADDRESS", &brand.address),
        ("META DESCRIPTION", &brand.meta_description),
    ]
}
