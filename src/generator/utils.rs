use chrono::NaiveDate;

pub(super) const POST_EXTENSION: &str = "md";

pub(super) fn render_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

pub(crate) fn derive_path(title: &str, date: NaiveDate, sanitize_slashes: bool) -> String {
    let mut stem = format!("{}-{}", date.format("%Y-%m-%d"), title).replace(' ', "_");
    if sanitize_slashes {
        stem = stem.replace('/', "_");
    }

    format!("{}.{POST_EXTENSION}", stem.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn derives_example_path() {
        assert_eq!(
            derive_path("My New Post", date(), true),
            "2024-01-15-my_new_post.md"
        );
        assert_eq!(
            derive_path("My New Post", date(), false),
            "2024-01-15-my_new_post.md"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let title = "Generator expression and Next() in Python";
        assert_eq!(derive_path(title, date(), true), derive_path(title, date(), true));
    }

    #[test]
    fn replaces_spaces_and_lowercases() {
        let path = derive_path("A B  C", date(), false);
        assert!(!path.contains(' '));
        assert_eq!(path, path.to_lowercase());
        assert_eq!(path, "2024-01-15-a_b__c.md");
    }

    #[test]
    fn slash_policy() {
        let sanitized = derive_path("A/B", date(), true);
        assert!(!sanitized.contains('/'));
        assert_eq!(sanitized, "2024-01-15-a_b.md");

        assert_eq!(derive_path("A/B", date(), false), "2024-01-15-a/b.md");
    }

    #[test]
    fn non_ascii_titles_are_lowercased() {
        assert_eq!(derive_path("Ünïcode Títle", date(), true), "2024-01-15-ünïcode_títle.md");
    }

    #[test]
    fn renders_lists() {
        assert_eq!(render_list(&[]), "[]");
        assert_eq!(
            render_list(&["category1".to_string(), "category2".to_string()]),
            "[category1, category2]"
        );
    }
}
