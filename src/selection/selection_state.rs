use crate::api::Character;

/// The characters the user has marked as chosen
///
/// Insertion-ordered and unique by id: toggling a character on while it is
/// already present is a no-op, so the list can never hold two entries with
/// the same id.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Vec<Character>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[Character] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn first(&self) -> Option<&Character> {
        self.selected.first()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.selected.iter().any(|c| c.id == id)
    }

    /// Add or remove a character, checkbox-style
    ///
    /// `included = true` appends unless an entry with the same id already
    /// exists; `included = false` removes by id.
    pub fn toggle(&mut self, character: &Character, included: bool) {
        if included {
            if !self.contains(character.id) {
                self.selected.push(character.clone());
            }
        } else {
            self.remove(character.id);
        }
    }

    /// Flip a character's membership, returning whether it is now selected
    pub fn flip(&mut self, character: &Character) -> bool {
        let included = !self.contains(character.id);
        self.toggle(character, included);
        included
    }

    /// Remove by id unconditionally; absent ids are a no-op
    pub fn remove(&mut self, id: u64) {
        self.selected.retain(|c| c.id != id);
    }

    /// Replace the entire selection with a single character
    pub fn replace_with(&mut self, character: Character) {
        self.selected.clear();
        self.selected.push(character);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Remove and return the most recently selected character
    pub fn pop_last(&mut self) -> Option<Character> {
        self.selected.pop()
    }

    /// Selected names, newline-joined (stdout output and clipboard payload)
    pub fn joined_names(&self) -> String {
        self.selected
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
