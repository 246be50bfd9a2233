/// `cut_and_cover` -> `Cut And Cover`.
pub fn snake_case_to_title_case(text: &str) -> String {
    text.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human label for a route phase code such as `phase2a`.
pub fn format_phase(phase: &str) -> String {
    match phase {
        "phase1" => "Phase 1".to_string(),
        "phase2a" => "Phase 2a".to_string(),
        "phase2b" => "Phase 2b".to_string(),
        other => other.to_string(),
    }
}
