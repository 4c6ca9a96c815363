use nutype::nutype;

/// Longest name a category may carry, counted in characters.
pub const MAX_NAME_LEN: usize = 255;

/// A category name: trimmed, never blank, at most [`MAX_NAME_LEN`]
/// characters.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_NAME_LEN),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct CategoryName(String);
