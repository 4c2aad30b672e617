use featreg::Feature;

/// Suggest the closest feature name for a typo (edit distance of at most 2,
/// ignoring ASCII case).
pub fn suggest_feature(input: &str) -> Option<&'static str> {
    let input_lower = input.to_ascii_lowercase();
    Feature::all()
        .map(|feature| {
            let distance = levenshtein(&feature.name().to_ascii_lowercase(), &input_lower);
            (feature.name(), distance)
        })
        .filter(|&(_, distance)| distance <= 2)
        .min_by_key(|&(_, distance)| distance)
        .map(|(name, _)| name)
}

pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + usize::from(ca != cb));
            diag = above;
        }
    }

    row[b.len()]
}
