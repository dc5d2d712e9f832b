use chrono::NaiveDate;

pub const FALLBACK_TITLE: &str = "AI Research Update";

/// Longest slug we emit. Leaves room for the date prefix, `.md` and the
/// publisher's staging suffix within a 255-byte file name.
pub const MAX_SLUG_LEN: usize = 80;

fn unquote(value: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|&q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)))
        .unwrap_or(value)
}

/// Title from the first line starting with `title:`, one pair of surrounding quotes removed.
pub fn extract_title(markdown: &str) -> String {
    let Some(value) = markdown
        .lines()
        .find_map(|line| line.trim_start().strip_prefix("title:"))
    else {
        return FALLBACK_TITLE.to_string();
    };
    let title = unquote(value.trim()).trim();

    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title.to_string()
    }
}

/// Lowercase, keep `[a-z0-9]`, join words with single hyphens.
///
/// Whitespace and hyphens both separate words, so a slug maps to itself.
/// Slugs longer than [`MAX_SLUG_LEN`] are cut back to the last whole word that fits.
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | '0'..='9' => Some(c),
            '-' => Some(' '),
            c if c.is_whitespace() => Some(' '),
            _ => None,
        })
        .collect();

    let mut slug = String::new();
    for word in cleaned.split_whitespace() {
        let extra = if slug.is_empty() { word.len() } else { word.len() + 1 };
        if slug.len() + extra > MAX_SLUG_LEN {
            if slug.is_empty() {
                slug.push_str(&word[..MAX_SLUG_LEN]);
            }
            break;
        }
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(word);
    }
    slug
}

pub fn compose_filename(slug: &str, date: NaiveDate) -> String {
    let slug = if slug.is_empty() { slugify(FALLBACK_TITLE) } else { slug.to_string() };
    format!("{}-{}.md", date.format("%Y-%m-%d"), slug)
}
