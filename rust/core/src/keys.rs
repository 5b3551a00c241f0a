// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element key type for arena-based document storage.
//!
//! Keys are created by `slotmap::SlotMap` and stay valid (and distinct) even
//! after other elements are removed, because they carry a generation.

use slotmap::new_key_type;

new_key_type! {
    /// Key of any element stored in a document (level, catalog type, wall,
    /// opening, reference plane, roof).
    pub struct ElementId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn keys_are_generational() {
        let mut map: SlotMap<ElementId, &str> = SlotMap::with_key();
        let a = map.insert("a");
        map.remove(a);
        let b = map.insert("b");

        assert_ne!(a, b);
        assert!(map.get(a).is_none());
        assert_eq!(map.get(b), Some(&"b"));
    }
}
