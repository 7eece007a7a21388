use serde::Deserialize;

/// One element of a user's progression list, wrapping
/// the per-title counters.
#[derive(Clone, Debug, Deserialize)]
pub struct AnimeEntry {
    pub progression: Progression,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct Progression {
    /// Amount of episodes the user progressed through
    pub progression: u32,
    /// How often the title was rewatched; the api omits
    /// the field when it never was.
    #[serde(default)]
    pub rewatch: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_without_rewatch() {
        let entries: Vec<AnimeEntry> = serde_json::from_str(
            r#"[{"progression":{"progression":5,"rewatch":2}},{"progression":{"progression":3}}]"#,
        )
        .unwrap();

        assert_eq!(entries[0].progression.rewatch, 2);
        assert_eq!(entries[1].progression.progression, 3);
        assert_eq!(entries[1].progression.rewatch, 0);
    }
}
