//! Small display-formatting helpers.
//!
//! Currency formatting lives on `Money` in the core crate; this module
//! covers the rest of what card markup needs.

/// Count-prefixed plural label: `pluralize("Color", 3)` is `"3 Colors"`.
///
/// Zero takes the plural form (`"0 Colors"`).
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("1 {}", word)
    } else {
        format!("{} {}s", count, word)
    }
}
