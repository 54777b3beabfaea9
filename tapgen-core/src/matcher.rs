use regex::Regex;
use tapgen_common::error::{Result, TapError};
use tapgen_common::model::Asset;

/// Converts a glob-style pattern into an anchored regex. `*` matches zero
/// or more characters; everything else matches literally.
fn pattern_to_regex(pattern: &str) -> Result<Regex> {
    let escaped: Vec<String> = pattern.split('*').map(regex::escape).collect();
    let anchored = format!("^{}$", escaped.join(".*"));
    Regex::new(&anchored).map_err(|e| {
        TapError::ValidationError(format!("Invalid asset pattern '{pattern}': {e}"))
    })
}

/// Finds the single asset whose filename fully matches `pattern`.
///
/// Zero matches fail with `AssetNotFound`. More than one match fails with
/// `AmbiguousAsset` rather than silently picking one, since a pattern that
/// matches several assets almost certainly selects the wrong binary.
pub fn find_asset<'a>(pattern: &str, tag: &str, assets: &'a [Asset]) -> Result<&'a Asset> {
    let regex = pattern_to_regex(pattern)?;
    let matches: Vec<&Asset> = assets
        .iter()
        .filter(|asset| regex.is_match(&asset.name))
        .collect();

    match matches.as_slice() {
        [] => Err(TapError::AssetNotFound(
            pattern.to_string(),
            tag.to_string(),
        )),
        [single] => Ok(*single),
        many => Err(TapError::AmbiguousAsset(
            pattern.to_string(),
            many.iter()
                .map(|asset| asset.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets(names: &[&str]) -> Vec<Asset> {
        names
            .iter()
            .map(|name| Asset {
                name: (*name).to_string(),
                browser_download_url: format!("https://example.com/{name}"),
            })
            .collect()
    }

    #[test]
    fn wildcard_matches_exactly_one_asset() {
        let assets = assets(&["eep-macos-10.11-x64", "eep-linux-x64"]);
        let found = find_asset("eep-macos-*-x64", "v1.4.45", &assets).unwrap();
        assert_eq!(found.name, "eep-macos-10.11-x64");
    }

    #[test]
    fn literal_pattern_matches_the_exact_name() {
        let assets = assets(&["eep-macos-10.11-x64", "eep-linux-x64"]);
        let found = find_asset("eep-linux-x64", "v1.4.45", &assets).unwrap();
        assert_eq!(found.name, "eep-linux-x64");
    }

    #[test]
    fn match_is_anchored_at_both_ends() {
        let assets = assets(&["eep-linux-x64-musl"]);
        assert!(matches!(
            find_asset("eep-linux-x64", "v1.4.45", &assets),
            Err(TapError::AssetNotFound(_, _))
        ));
    }

    #[test]
    fn zero_matches_is_asset_not_found() {
        let assets = assets(&["eep-macos-10.11-x64", "eep-linux-x64"]);
        assert!(matches!(
            find_asset("eep-windows-*", "v1.4.45", &assets),
            Err(TapError::AssetNotFound(_, _))
        ));
    }

    #[test]
    fn multiple_matches_are_ambiguous() {
        let assets = assets(&["eep-macos-10.11-x64", "eep-macos-11.0-x64"]);
        match find_asset("eep-macos-*-x64", "v1.4.45", &assets) {
            Err(TapError::AmbiguousAsset(pattern, names)) => {
                assert_eq!(pattern, "eep-macos-*-x64");
                assert!(names.contains("eep-macos-10.11-x64"));
                assert!(names.contains("eep-macos-11.0-x64"));
            }
            other => panic!("expected AmbiguousAsset, got {other:?}"),
        }
    }

    #[test]
    fn regex_metacharacters_in_patterns_are_literal() {
        let assets = assets(&["eep-1.4.45-x64", "eep-1x4x45-x64"]);
        let found = find_asset("eep-1.4.45-x64", "v1.4.45", &assets).unwrap();
        assert_eq!(found.name, "eep-1.4.45-x64");
    }
}
