/// Turn a slug such as `post-one` into a display title such as `Post One`.
///
/// Hyphens become spaces. A letter is upper-cased when the character before
/// it is not a letter and lower-cased otherwise, so words restart after
/// digits and punctuation too (`_index` -> `_Index`, `2nd` -> `2Nd`).
pub fn humanize(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_letter = false;

    for ch in spaced.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }

    out
}
