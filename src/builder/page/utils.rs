/// Turn a title into the slug used in page filenames: lowercase, spaces to hyphens
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Upper-case the first letter of every whitespace-separated word
pub fn title_case(words: &[String]) -> String {
    words
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Zombies Are Real"), "zombies-are-real");
        assert_eq!(slugify("one  two"), "one--two");
    }

    #[test]
    fn test_title_case() {
        let words = vec!["how".to_string(), "to write RUST".to_string()];

        assert_eq!(title_case(&words), "How To Write RUST");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(&[]), "");
        assert_eq!(title_case(&["  ".to_string()]), "");
    }
}
