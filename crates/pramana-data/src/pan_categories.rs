//! PAN holder categories (fourth character of a PAN).

/// Description of a PAN holder category, `None` for unassigned letters.
pub fn category_description(category: char) -> Option<&'static str> {
    let desc = match category {
        'C' => "Company",
        'P' => "Person",
        'H' => "Hindu Undivided Family",
        'F' => "Firm",
        'A' => "Association of Persons",
        'T' => "Trust",
        'B' => "Body of Individuals",
        'L' => "Local Authority",
        'J' => "Artificial Juridical Person",
        'G' => "Government",
        _ => return None,
    };
    Some(desc)
}
