use indexmap::IndexMap;

use crate::error::ErrorKind;

/// First memory address handed out to symbols that were never defined
/// as labels.
pub const VAR_BASE: u16 = 16;

/// Symbol table built during a single scan. `None` marks a symbol that
/// has been referenced but not yet resolved; `finalize` turns every
/// remaining `None` into a memory address. Insertion order is kept
/// (IndexMap), so variables are numbered in first-reference order.
#[derive(Debug, Default)]
pub struct Symbols {
    table: IndexMap<String, Option<u16>>,
}

impl Symbols {
    pub fn new() -> Self {
        Symbols {
            table: IndexMap::new(),
        }
    }

    /// Bind a label to an instruction index. Overwrites the unresolved
    /// marker when the symbol was forward-referenced as a variable.
    pub fn define_label(&mut self, name: &str, addr: u16) {
        self.table.insert(name.to_string(), Some(addr));
    }

    /// Record a reference. Unknown symbols enter the table unresolved;
    /// known ones are left alone.
    pub fn reference(&mut self, name: &str) {
        self.table.entry(name.to_string()).or_insert(None);
    }

    /// Assign memory addresses, starting at [`VAR_BASE`], to every
    /// symbol still unresolved, in the order they were first seen.
    /// Fails once a variable would land outside the 15-bit address
    /// space.
    pub fn finalize(&mut self) -> Result<(), ErrorKind> {
        let mut next = VAR_BASE;
        for (name, value) in self.table.iter_mut() {
            if value.is_none() {
                if next > 0x7FFF {
                    return Err(ErrorKind::OutOfAddresses(name.clone()));
                }
                *value = Some(next);
                next += 1;
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.table.get(name).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<u16>)> {
        self.table.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_numbered_in_first_reference_order() {
        let mut symbols = Symbols::new();
        symbols.reference("a");
        symbols.reference("b");
        symbols.reference("a");
        symbols.reference("c");
        symbols.finalize().unwrap();
        assert_eq!(symbols.get("a"), Some(16));
        assert_eq!(symbols.get("b"), Some(17));
        assert_eq!(symbols.get("c"), Some(18));
    }

    #[test]
    fn label_definition_overrides_forward_reference() {
        let mut symbols = Symbols::new();
        symbols.reference("LOOP");
        symbols.reference("x");
        symbols.define_label("LOOP", 7);
        symbols.finalize().unwrap();
        assert_eq!(symbols.get("LOOP"), Some(7));
        assert_eq!(symbols.get("x"), Some(16));
    }

    #[test]
    fn labels_are_untouched_by_finalize() {
        let mut symbols = Symbols::new();
        symbols.define_label("END", 3);
        symbols.finalize().unwrap();
        assert_eq!(symbols.get("END"), Some(3));
    }

    #[test]
    fn variable_past_the_address_space_is_an_error() {
        // 16..=0x7FFF leaves room for exactly 32752 variables.
        let mut symbols = Symbols::new();
        for i in 0..32753u32 {
            symbols.reference(&format!("v{i}"));
        }
        let err = symbols.finalize().unwrap_err();
        assert_eq!(err, ErrorKind::OutOfAddresses("v32752".to_string()));
    }

    #[test]
    fn last_address_is_still_assignable() {
        let mut symbols = Symbols::new();
        for i in 0..32752u32 {
            symbols.reference(&format!("v{i}"));
        }
        symbols.finalize().unwrap();
        assert_eq!(symbols.get("v32751"), Some(0x7FFF));
    }
}
