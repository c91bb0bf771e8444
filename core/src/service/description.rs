// Several descriptions get quoted so their commas survive CSV. Inner quotes are not escaped.
pub fn merge_descriptions(descriptions: &[String]) -> String {
    match descriptions {
        [] => String::new(),
        [only] => only.clone(),
        many => format!("\"{}\"", many.join(", ")),
    }
}
