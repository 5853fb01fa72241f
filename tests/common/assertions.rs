//! Test assertion helpers
//!
//! Provides utilities for checking where things landed in a spliced bundle.

use bundle_banner::bundle::inspect;

/// Assert that every marker occurs, in the given order
///
/// # Arguments
/// * `text` - The bundle text
/// * `parts` - `(name, marker)` pairs in expected order
#[allow(dead_code)]
pub fn assert_parts_in_order(text: &str, parts: &[(&str, &str)]) {
    let mut previous: Option<(&str, usize)> = None;
    for (name, marker) in parts {
        let index = text
            .find(marker)
            .unwrap_or_else(|| panic!("Bundle is missing the {}:\n{}", name, text));
        if let Some((prev_name, prev_index)) = previous {
            assert!(
                index > prev_index,
                "Expected {} (at {}) after {} (at {})",
                name,
                index,
                prev_name,
                prev_index
            );
        }
        previous = Some((name, index));
    }
}

/// Assert the bundle starts with `banner`, keeps `original` intact after it, and ends
/// with its source map
#[allow(dead_code)]
pub fn assert_banner_spliced(text: &str, banner: &str, original: &str) {
    assert_eq!(
        text.len(),
        banner.len() + original.len(),
        "Splicing must only add the banner"
    );
    assert!(
        text.starts_with(banner),
        "Bundle does not start with the banner:\n{}",
        text
    );
    assert_eq!(&text[banner.len()..], original, "Original bundle was altered");

    let layout = inspect(text);
    assert_eq!(layout.banner, Some(banner));
    assert!(layout.source_map.is_some(), "Source map is no longer last");
}
