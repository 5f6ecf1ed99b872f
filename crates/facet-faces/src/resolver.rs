use crate::codec::{
    decode_reference_list, decode_single_reference, encode_reference_list, encode_single_reference,
};
use crate::error::DecodeError;
use crate::reference::{FaceStack, SelectionAction, TextureRef};
use crate::store::ValueStore;

/// Store slot holding the reference currently selected in the texture picker.
pub const SELECTED_TEXTURE_SLOT: &str = "SelectedTextureFrame";

/// Reads and mutates face stacks persisted in a [`ValueStore`].
///
/// Each face id names a string slot holding an encoded [`FaceStack`]. A
/// missing or empty slot is an empty stack; a malformed one is a
/// [`DecodeError`].
#[derive(Debug)]
pub struct FaceResolver<S> {
    store: S,
}

impl<S: ValueStore> FaceResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn resolve(&self, face_id: &str) -> Result<FaceStack, DecodeError> {
        match self.slot(face_id) {
            None => Ok(FaceStack::new()),
            Some(encoded) => decode_reference_list(&encoded)
                .map(FaceStack::from)
                .map_err(|e| DecodeError::new(format!("face {face_id:?}: {}", e.message))),
        }
    }

    /// The picker's current selection; `None` if nothing is selected.
    pub fn picker_selection(&self) -> Result<Option<TextureRef>, DecodeError> {
        match self.slot(SELECTED_TEXTURE_SLOT) {
            None => Ok(None),
            Some(encoded) => decode_single_reference(&encoded),
        }
    }

    /// Slot contents, with `""` read as nothing stored.
    fn slot(&self, key: &str) -> Option<String> {
        self.store.string_value(key).filter(|s| !s.is_empty())
    }

    /// Puts `reference` into the picker slot.
    pub fn select(&mut self, reference: &TextureRef) {
        self.store
            .set_string_value(SELECTED_TEXTURE_SLOT, encode_single_reference(reference));
    }

    /// Applies the picker selection to `face_id`.
    ///
    /// Returns the action taken, or `None` (no write) when the picker is empty.
    pub fn on_select(&mut self, face_id: &str) -> Result<Option<SelectionAction>, DecodeError> {
        let Some(selection) = self.picker_selection()? else {
            log::debug!("face {face_id:?}: click ignored, no texture selected");
            return Ok(None);
        };

        let action = SelectionAction::from(selection);
        self.apply(face_id, action.clone())?;
        Ok(Some(action))
    }

    /// One read, one transform, one write. Returns the persisted stack.
    pub fn apply(&mut self, face_id: &str, action: SelectionAction) -> Result<FaceStack, DecodeError> {
        let mut stack = self.resolve(face_id)?;
        match &action {
            SelectionAction::Append(_) => log::debug!("face {face_id:?}: append layer {}", stack.len()),
            SelectionAction::RemoveLast => log::debug!("face {face_id:?}: remove last of {}", stack.len()),
        }
        stack.apply(action);

        self.store
            .set_string_value(face_id, encode_reference_list(stack.layers()));
        Ok(stack)
    }
}

#[cfg(test)]
mod tests {
    use facet_engine::coords::Rect;

    use super::*;
    use crate::reference::{Frame, SelectedTexture};
    use crate::store::Model;

    fn layer(id: &str) -> TextureRef {
        TextureRef::new(SelectedTexture::new(id, Frame::new(Rect::new(0.0, 0.0, 16.0, 16.0))))
    }

    fn resolver() -> FaceResolver<Model> {
        FaceResolver::new(Model::new())
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn missing_slot_is_empty() {
        assert!(resolver().resolve("top").unwrap().is_empty());
    }

    #[test]
    fn malformed_slot_is_error() {
        let mut r = resolver();
        r.store_mut().set_string_value("top", "{oops".to_string());
        let err = r.resolve("top").unwrap_err();
        assert!(err.message.contains("\"top\""));
    }

    #[test]
    fn empty_string_slot_is_empty() {
        let mut r = resolver();
        r.store_mut().set_string_value("top", String::new());
        assert!(r.resolve("top").unwrap().is_empty());

        r.select(&layer("grass"));
        r.on_select("top").unwrap();
        assert_eq!(r.resolve("top").unwrap().len(), 1);
    }

    // ── on_select ─────────────────────────────────────────────────────────

    #[test]
    fn empty_picker_is_noop() {
        let mut r = resolver();
        assert_eq!(r.on_select("top").unwrap(), None);
        assert_eq!(r.store().string_value("top"), None);
    }

    #[test]
    fn empty_string_picker_is_noop() {
        let mut r = resolver();
        r.store_mut().set_string_value(SELECTED_TEXTURE_SLOT, String::new());
        assert_eq!(r.on_select("top").unwrap(), None);
        assert_eq!(r.store().string_value("top"), None);
    }

    #[test]
    fn null_picker_is_noop() {
        let mut r = resolver();
        r.store_mut().set_string_value(SELECTED_TEXTURE_SLOT, "null".to_string());
        assert_eq!(r.on_select("top").unwrap(), None);
    }

    #[test]
    fn selection_appends_in_order() {
        let mut r = resolver();
        r.select(&layer("a"));
        r.on_select("top").unwrap();
        r.select(&layer("b"));
        r.on_select("top").unwrap();

        let stack = r.resolve("top").unwrap();
        let ids: Vec<_> = stack.iter().map(|l| l.selected.as_ref().unwrap().texture_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn removal_on_empty_stays_empty() {
        let mut r = resolver();
        r.select(&TextureRef::removal_marker());
        assert_eq!(r.on_select("top").unwrap(), Some(SelectionAction::RemoveLast));
        assert!(r.resolve("top").unwrap().is_empty());
        assert_eq!(r.store().string_value("top").as_deref(), Some("[]"));
    }

    #[test]
    fn append_then_remove_round_trip() {
        let mut r = resolver();
        r.apply("side", SelectionAction::Append(layer("base"))).unwrap();
        let before = r.resolve("side").unwrap();

        r.select(&layer("overlay"));
        r.on_select("side").unwrap();
        r.select(&TextureRef::removal_marker());
        r.on_select("side").unwrap();

        assert_eq!(r.resolve("side").unwrap(), before);
    }

    #[test]
    fn faces_are_independent() {
        let mut r = resolver();
        r.select(&layer("a"));
        r.on_select("top").unwrap();
        assert!(r.resolve("bottom").unwrap().is_empty());
    }

    #[test]
    fn corrupt_picker_propagates() {
        let mut r = resolver();
        r.store_mut().set_string_value(SELECTED_TEXTURE_SLOT, "[[".to_string());
        r.on_select("top").unwrap_err();
    }

    #[test]
    fn corrupt_face_is_not_overwritten() {
        let mut r = resolver();
        r.store_mut().set_string_value("top", "garbage".to_string());
        r.select(&layer("a"));
        r.on_select("top").unwrap_err();
        assert_eq!(r.store().string_value("top").as_deref(), Some("garbage"));
    }

    #[test]
    fn works_through_borrowed_store() {
        let mut model = Model::new();
        {
            let mut r = FaceResolver::new(&mut model);
            r.apply("top", SelectionAction::Append(layer("a"))).unwrap();
        }
        assert!(model.string_value("top").is_some());
    }
}
