#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod motion;
pub mod navigator;
pub mod skills;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (e.g. after a hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    const VIEW_SOURCES: [(&str, &str); 8] = [
        ("app.rs", include_str!("app.rs")),
        ("app/decorations.rs", include_str!("app/decorations.rs")),
        ("app/footer.rs", include_str!("app/footer.rs")),
        ("app/hero.rs", include_str!("app/hero.rs")),
        ("app/nav_dots.rs", include_str!("app/nav_dots.rs")),
        ("app/navigation.rs", include_str!("app/navigation.rs")),
        ("app/skill_cards.rs", include_str!("app/skill_cards.rs")),
        ("app/stats.rs", include_str!("app/stats.rs")),
    ];

    /// Site-absolute `href`/`src` paths, minus the build output under `/pkg`.
    fn local_assets(source: &str) -> Vec<&str> {
        let mut assets = Vec::new();
        for attr in ["href=\"/", "src=\"/"] {
            for (start, _) in source.match_indices(attr) {
                let rest = &source[start + attr.len() - 1..];
                let Some(end) = rest.find('"') else {
                    continue;
                };
                let path = &rest[..end];
                if path.len() > 1 && !path.starts_with("/pkg/") {
                    assets.push(path);
                }
            }
        }
        assets
    }

    #[test]
    fn test_local_assets() {
        let src = r#"<link href="/pkg/site.css" /><img src="/a.svg" /><a href="/">"#;
        assert_eq!(local_assets(src), vec!["/a.svg"]);
    }

    #[test]
    fn test_linked_assets_are_shipped() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let mut checked = 0;
        for (file, source) in VIEW_SOURCES {
            for asset in local_assets(source) {
                let path = public.join(asset.trim_start_matches('/'));
                assert!(path.is_file(), "{file} links {asset}, missing from public/");
                checked += 1;
            }
        }
        // the profile placeholder at least
        assert!(checked >= 1);
    }
}
