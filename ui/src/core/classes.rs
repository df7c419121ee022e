//! Class-token composition for conditional styling.
//!
//! ```ignore
//! let class = class_names([
//!     Some("main-nav__link"),
//!     when(active, "main-nav__link--active"),
//!     when(item.disabled, "main-nav__link--disabled"),
//! ]);
//! ```

/// Merge optional whitespace-separated token groups into one class string.
///
/// Absent groups and empty tokens are dropped; repeated tokens keep their
/// first position.
pub fn class_names<'a, I>(groups: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut tokens: Vec<&'a str> = Vec::new();
    for group in groups.into_iter().flatten() {
        for token in group.split_whitespace() {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
    }
    tokens.join(" ")
}

/// `Some(tokens)` iff `cond`.
pub fn when(cond: bool, tokens: &str) -> Option<&str> {
    cond.then_some(tokens)
}
